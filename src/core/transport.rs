//! Transport-Topologie: Stationen, Wegpunkte und Gleissegmente je Netzwerk.
//!
//! Ein Netzwerk ist ein Graph aus Punkten (Stationen und Wegpunkte) und
//! Segmenten. Alle Referenzen laufen über stabile IDs; Validierung meldet
//! Inkonsistenzen, korrigiert aber nie automatisch.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::constraint::PolylineConstraint;
use super::geometry::{project_onto_segment, Rect};
use super::ids::IdAllocator;
use super::spatial::{SpatialIndex, SpatialMatch};
use super::validation::{IssueKind, ValidationIssue};
use crate::shared::network_color;


// ── Punkte & Segmente ───────────────────────────────────────────────

/// Funktion einer Station im Materialfluss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StationKind {
    #[default]
    Pickup,
    Dropoff,
    Home,
    Buffer,
    Crossing,
    Waypoint,
    Charging,
    Maintenance,
}

/// Station: Rechteck mit Typ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: u64,
    pub name: String,
    pub kind: StationKind,
    pub bounds: Rect,
}

impl Station {
    pub fn new(id: u64, name: impl Into<String>, kind: StationKind, bounds: Rect) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            bounds,
        }
    }

    /// Anschlusspunkt der Station im Gleisgraph.
    pub fn center(&self) -> Vec2 {
        self.bounds.center()
    }
}

/// Reiner Routing-Punkt im Gleisgraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: u64,
    pub position: Vec2,
    /// Kreuzungs-/Weichenpunkt
    pub is_junction: bool,
    /// Besitzendes Netzwerk
    pub network_id: u64,
}

/// Gleissegment zwischen zwei Punkten (Station oder Wegpunkt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: u64,
    pub from: u64,
    pub to: u64,
    /// Länge aus den Endpunkt-Koordinaten
    pub distance: f32,
    pub bidirectional: bool,
    /// Geschwindigkeitsbegrenzung (m/s)
    pub speed_limit: f32,
    pub lanes: u32,
    pub blocked: bool,
}

impl Segment {
    pub fn touches(&self, point_id: u64) -> bool {
        self.from == point_id || self.to == point_id
    }

    /// Gegenüberliegender Endpunkt (falls `point_id` ein Endpunkt ist).
    pub fn other_end(&self, point_id: u64) -> Option<u64> {
        if self.from == point_id {
            Some(self.to)
        } else if self.to == point_id {
            Some(self.from)
        } else {
            None
        }
    }

    fn unordered_key(&self) -> (u64, u64) {
        (self.from.min(self.to), self.from.max(self.to))
    }
}

/// Fahrzeug mit Home-Station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transporter {
    pub id: u64,
    pub name: String,
    pub home_station: Option<u64>,
}

/// Eigenschaften neu gezeichneter Segmente.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentDefaults {
    pub bidirectional: bool,
    pub speed_limit: f32,
    pub lanes: u32,
}

impl Default for SegmentDefaults {
    fn default() -> Self {
        Self {
            bidirectional: true,
            speed_limit: crate::shared::options::DEFAULT_SEGMENT_SPEED,
            lanes: crate::shared::options::DEFAULT_SEGMENT_LANES,
        }
    }
}

/// Grund, warum zwei Punkte nicht verbunden werden können.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectError {
    /// Start und Ziel sind identisch
    SelfConnection,
    /// Es existiert bereits ein Segment (egal welche Richtung)
    AlreadyConnected,
    /// Punkt existiert nicht im Netzwerk
    UnknownPoint(u64),
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectError::SelfConnection => {
                write!(f, "Punkt kann nicht mit sich selbst verbunden werden")
            }
            ConnectError::AlreadyConnected => write!(f, "Diese Punkte sind bereits verbunden"),
            ConnectError::UnknownPoint(id) => write!(f, "Unbekannter Punkt {}", id),
        }
    }
}

/// Ergebnis eines Segment-Splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitResult {
    pub waypoint_id: u64,
    /// Segment `from → neuer Wegpunkt`
    pub first_segment: u64,
    /// Segment `neuer Wegpunkt → to`
    pub second_segment: u64,
}

/// Treffer auf einem Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub segment_id: u64,
    /// Fußpunkt auf dem Segment
    pub foot: Vec2,
    pub distance: f32,
}

// ── Netzwerk ────────────────────────────────────────────────────────

/// Ein Transport-Netzwerk (eigener Graph, eigene Farbe).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportNetwork {
    pub id: u64,
    pub name: String,
    /// Index in die feste Netzwerk-Palette
    pub color_index: usize,
    pub stations: IndexMap<u64, Station>,
    pub waypoints: IndexMap<u64, Waypoint>,
    pub segments: IndexMap<u64, Segment>,
    pub transporters: IndexMap<u64, Transporter>,
    #[serde(skip)]
    spatial_index: SpatialIndex,
}

impl TransportNetwork {
    pub fn new(id: u64, name: impl Into<String>, color_index: usize) -> Self {
        Self {
            id,
            name: name.into(),
            color_index,
            stations: IndexMap::new(),
            waypoints: IndexMap::new(),
            segments: IndexMap::new(),
            transporters: IndexMap::new(),
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Darstellungsfarbe (RGBA) aus der festen Palette.
    pub fn color(&self) -> [f32; 4] {
        network_color(self.color_index)
    }

    // ── Punkte ──────────────────────────────────────────────────

    /// Position eines Punkts (Stations-Mittelpunkt oder Wegpunkt).
    pub fn point_position(&self, point_id: u64) -> Option<Vec2> {
        self.stations
            .get(&point_id)
            .map(Station::center)
            .or_else(|| self.waypoints.get(&point_id).map(|w| w.position))
    }

    pub fn contains_point(&self, point_id: u64) -> bool {
        self.stations.contains_key(&point_id) || self.waypoints.contains_key(&point_id)
    }

    /// Alle Punkt-IDs (erst Stationen, dann Wegpunkte).
    pub fn point_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.stations.keys().chain(self.waypoints.keys()).copied()
    }

    pub fn add_station(&mut self, station: Station) {
        self.stations.insert(station.id, station);
        self.rebuild_spatial_index();
    }

    /// Fügt einen Wegpunkt hinzu und setzt dessen Netzwerk-Referenz.
    pub fn add_waypoint(&mut self, mut waypoint: Waypoint) {
        waypoint.network_id = self.id;
        self.waypoints.insert(waypoint.id, waypoint);
        self.rebuild_spatial_index();
    }

    /// Erstellt einen neuen Wegpunkt an `position`.
    pub fn create_waypoint(&mut self, position: Vec2, ids: &mut IdAllocator) -> u64 {
        let id = ids.allocate();
        self.add_waypoint(Waypoint {
            id,
            position,
            is_junction: false,
            network_id: self.id,
        });
        id
    }

    /// Entfernt einen Punkt samt aller Segmente, die ihn referenzieren.
    ///
    /// Gibt die IDs der entfernten Segmente zurück (`None`, wenn der Punkt
    /// nicht existiert).
    pub fn remove_point(&mut self, point_id: u64) -> Option<Vec<u64>> {
        let removed = self.stations.shift_remove(&point_id).is_some()
            || self.waypoints.shift_remove(&point_id).is_some();
        if !removed {
            return None;
        }

        let dropped: Vec<u64> = self
            .segments
            .values()
            .filter(|s| s.touches(point_id))
            .map(|s| s.id)
            .collect();
        self.segments.retain(|_, s| !s.touches(point_id));
        self.rebuild_spatial_index();
        Some(dropped)
    }

    /// Verschiebt einen Punkt und berechnet die Längen angrenzender Segmente neu.
    ///
    /// Bei Stationen wird der Mittelpunkt auf `position` gesetzt.
    pub fn move_point(&mut self, point_id: u64, position: Vec2) -> bool {
        if let Some(station) = self.stations.get_mut(&point_id) {
            station.bounds.position = position - station.bounds.size * 0.5;
        } else if let Some(waypoint) = self.waypoints.get_mut(&point_id) {
            waypoint.position = position;
        } else {
            return false;
        }

        let touching: Vec<u64> = self
            .segments
            .values()
            .filter(|s| s.touches(point_id))
            .map(|s| s.id)
            .collect();
        for segment_id in touching {
            self.refresh_segment_distance(segment_id);
        }
        self.rebuild_spatial_index();
        true
    }

    // ── Segmente ────────────────────────────────────────────────

    fn refresh_segment_distance(&mut self, segment_id: u64) {
        let Some(segment) = self.segments.get(&segment_id) else {
            return;
        };
        if let (Some(a), Some(b)) = (
            self.point_position(segment.from),
            self.point_position(segment.to),
        ) {
            if let Some(segment) = self.segments.get_mut(&segment_id) {
                segment.distance = a.distance(b);
            }
        }
    }

    /// Endpunkt-Positionen eines Segments (`None` bei hängender Referenz).
    pub fn segment_endpoints(&self, segment: &Segment) -> Option<(Vec2, Vec2)> {
        Some((
            self.point_position(segment.from)?,
            self.point_position(segment.to)?,
        ))
    }

    /// Verbindet zwei Punkte mit einem neuen Segment.
    pub fn connect(
        &mut self,
        from: u64,
        to: u64,
        defaults: SegmentDefaults,
        ids: &mut IdAllocator,
    ) -> Result<u64, ConnectError> {
        if from == to {
            return Err(ConnectError::SelfConnection);
        }
        let a = self
            .point_position(from)
            .ok_or(ConnectError::UnknownPoint(from))?;
        let b = self
            .point_position(to)
            .ok_or(ConnectError::UnknownPoint(to))?;
        if self.are_points_connected(from, to) {
            return Err(ConnectError::AlreadyConnected);
        }

        let id = ids.allocate();
        self.segments.insert(
            id,
            Segment {
                id,
                from,
                to,
                distance: a.distance(b),
                bidirectional: defaults.bidirectional,
                speed_limit: defaults.speed_limit,
                lanes: defaults.lanes,
                blocked: false,
            },
        );
        Ok(id)
    }

    pub fn remove_segment(&mut self, segment_id: u64) -> Option<Segment> {
        self.segments.shift_remove(&segment_id)
    }

    /// `true`, wenn ein direktes Segment zwischen `a` und `b` existiert
    /// (Richtung egal).
    pub fn are_points_connected(&self, a: u64, b: u64) -> bool {
        self.segment_between(a, b).is_some()
    }

    /// Direktes Segment zwischen zwei Punkten (Richtung egal).
    pub fn segment_between(&self, a: u64, b: u64) -> Option<&Segment> {
        self.segments
            .values()
            .find(|s| (s.from == a && s.to == b) || (s.from == b && s.to == a))
    }

    /// Alle Segmente, die einen Punkt berühren.
    pub fn segments_touching(&self, point_id: u64) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.values().filter(move |s| s.touches(point_id))
    }

    /// Direkte Nachbarn eines Punkts (ohne Duplikate, ohne sich selbst).
    pub fn neighbors(&self, point_id: u64) -> Vec<u64> {
        let mut seen = HashSet::new();
        self.segments_touching(point_id)
            .filter_map(|s| s.other_end(point_id))
            .filter(|id| *id != point_id && seen.insert(*id))
            .collect()
    }

    /// Punkte ohne jedes Segment.
    pub fn orphaned_points(&self) -> Vec<u64> {
        let connected: HashSet<u64> = self
            .segments
            .values()
            .flat_map(|s| [s.from, s.to])
            .collect();
        self.point_ids()
            .filter(|id| !connected.contains(id))
            .collect()
    }

    /// Teilt ein Segment an `point` durch einen neuen Wegpunkt.
    ///
    /// Das Original wird entfernt; die beiden neuen Segmente übernehmen
    /// Richtung, Geschwindigkeit und Spuren, ihre Längen werden aus den
    /// echten Endpunkten neu berechnet.
    pub fn insert_waypoint(
        &mut self,
        segment_id: u64,
        point: Vec2,
        ids: &mut IdAllocator,
    ) -> Option<SplitResult> {
        let original = self.segments.get(&segment_id)?.clone();
        let (from_pos, to_pos) = self.segment_endpoints(&original)?;
        self.segments.shift_remove(&segment_id);

        let waypoint_id = self.create_waypoint(point, ids);

        let first_segment = ids.allocate();
        self.segments.insert(
            first_segment,
            Segment {
                id: first_segment,
                from: original.from,
                to: waypoint_id,
                distance: from_pos.distance(point),
                ..original.clone()
            },
        );

        let second_segment = ids.allocate();
        self.segments.insert(
            second_segment,
            Segment {
                id: second_segment,
                from: waypoint_id,
                to: original.to,
                distance: point.distance(to_pos),
                ..original
            },
        );

        Some(SplitResult {
            waypoint_id,
            first_segment,
            second_segment,
        })
    }

    /// Nächstes Segment innerhalb von `max_distance`.
    pub fn nearest_segment(&self, pos: Vec2, max_distance: f32) -> Option<SegmentHit> {
        self.segments
            .values()
            .filter_map(|segment| {
                let (a, b) = self.segment_endpoints(segment)?;
                let (foot, _) = project_onto_segment(pos, a, b);
                let distance = pos.distance(foot);
                (distance <= max_distance).then_some(SegmentHit {
                    segment_id: segment.id,
                    foot,
                    distance,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Bewegungs-Constraint eines Wegpunkts: Fächer zu allen Nachbarn.
    ///
    /// `None` für unverbundene Wegpunkte (frei beweglich).
    pub fn waypoint_constraint(&self, waypoint_id: u64) -> Option<PolylineConstraint> {
        let center = self.waypoints.get(&waypoint_id)?.position;
        let neighbors: Vec<Vec2> = self
            .neighbors(waypoint_id)
            .into_iter()
            .filter_map(|id| self.point_position(id))
            .collect();
        (!neighbors.is_empty()).then(|| PolylineConstraint::fan(center, &neighbors))
    }

    // ── Spatial-Index ───────────────────────────────────────────

    /// Baut den Punkt-Index neu auf (nach Laden oder direkter Mutation der Maps).
    pub fn rebuild_spatial_index(&mut self) {
        let points: Vec<(u64, Vec2)> = self
            .point_ids()
            .filter_map(|id| self.point_position(id).map(|p| (id, p)))
            .collect();
        self.spatial_index = SpatialIndex::from_points(points);
    }

    /// Nächster Punkt innerhalb von `max_distance`.
    pub fn nearest_point(&self, pos: Vec2, max_distance: f32) -> Option<SpatialMatch> {
        self.spatial_index
            .nearest(pos)
            .filter(|hit| hit.distance <= max_distance)
    }

    /// Alle Punkte innerhalb eines Rechtecks.
    pub fn points_in_rect(&self, min: Vec2, max: Vec2) -> Vec<u64> {
        self.spatial_index.within_rect(min, max)
    }

    // ── Validierung ─────────────────────────────────────────────

    /// Prüft das Netzwerk und liefert alle Befunde.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for orphan in self.orphaned_points() {
            issues.push(ValidationIssue::warning(
                IssueKind::OrphanedPoint,
                format!("'{}' ist mit keinem Segment verbunden", self.point_label(orphan)),
                Some(orphan),
            ));
        }

        let mut seen_pairs: HashMap<(u64, u64), u64> = HashMap::new();
        for segment in self.segments.values() {
            if !self.contains_point(segment.from) {
                issues.push(ValidationIssue::error(
                    IssueKind::InvalidReference,
                    format!(
                        "Segment {} verweist auf unbekannten Startpunkt {}",
                        segment.id, segment.from
                    ),
                    Some(segment.id),
                ));
            }
            if !self.contains_point(segment.to) {
                issues.push(ValidationIssue::error(
                    IssueKind::InvalidReference,
                    format!(
                        "Segment {} verweist auf unbekannten Endpunkt {}",
                        segment.id, segment.to
                    ),
                    Some(segment.id),
                ));
            }
            if segment.from == segment.to {
                issues.push(ValidationIssue::error(
                    IssueKind::SelfReference,
                    format!(
                        "Segment {} verbindet Punkt {} mit sich selbst",
                        segment.id, segment.from
                    ),
                    Some(segment.id),
                ));
            }
            if let Some(first) = seen_pairs.insert(segment.unordered_key(), segment.id) {
                issues.push(ValidationIssue::warning(
                    IssueKind::DuplicateSegment,
                    format!("Segment {} dupliziert Segment {}", segment.id, first),
                    Some(segment.id),
                ));
            }
        }

        if !self.transporters.is_empty()
            && !self.stations.values().any(|s| s.kind == StationKind::Home)
        {
            issues.push(ValidationIssue::warning(
                IssueKind::MissingHomeStation,
                format!("Netzwerk '{}' hat keine Home-Station", self.name),
                Some(self.id),
            ));
        }

        for transporter in self.transporters.values() {
            let valid = transporter
                .home_station
                .is_some_and(|id| self.stations.contains_key(&id));
            if !valid {
                issues.push(ValidationIssue::warning(
                    IssueKind::InvalidHomeStation,
                    format!("Fahrzeug '{}' hat keine gültige Home-Station", transporter.name),
                    Some(transporter.id),
                ));
            }
        }

        let unreachable = self.unreachable_points();
        if !unreachable.is_empty() {
            issues.push(ValidationIssue::warning(
                IssueKind::DisconnectedSubgraph,
                format!(
                    "{} Punkt(e) sind vom Hauptnetz nicht erreichbar",
                    unreachable.len()
                ),
                None,
            ));
        }

        issues
    }

    /// Verbundene Punkte, die per Breitensuche (ungerichtet) vom ersten
    /// verbundenen Punkt aus nicht erreichbar sind.
    fn unreachable_points(&self) -> Vec<u64> {
        let mut adjacency: HashMap<u64, Vec<u64>> = HashMap::new();
        for segment in self.segments.values() {
            if segment.from == segment.to
                || !self.contains_point(segment.from)
                || !self.contains_point(segment.to)
            {
                continue;
            }
            adjacency.entry(segment.from).or_default().push(segment.to);
            adjacency.entry(segment.to).or_default().push(segment.from);
        }

        let connected: Vec<u64> = self
            .point_ids()
            .filter(|id| adjacency.contains_key(id))
            .collect();
        let Some(&root) = connected.first() else {
            return Vec::new();
        };

        let mut visited = HashSet::from([root]);
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            for next in adjacency.get(&current).into_iter().flatten() {
                if visited.insert(*next) {
                    queue.push_back(*next);
                }
            }
        }

        connected
            .into_iter()
            .filter(|id| !visited.contains(id))
            .collect()
    }

    fn point_label(&self, point_id: u64) -> String {
        match self.stations.get(&point_id) {
            Some(station) if !station.name.is_empty() => station.name.clone(),
            _ => format!("Punkt {}", point_id),
        }
    }
}

// ── Legacy-Import ───────────────────────────────────────────────────

/// Flache Transport-Sammlungen aus Altbeständen (vor Netzwerk-Einführung).
///
/// Wird einmalig per [`LegacyTransport::into_network`] übernommen und
/// existiert danach nicht parallel weiter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyTransport {
    #[serde(default)]
    pub stations: Vec<Station>,
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl LegacyTransport {
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty() && self.waypoints.is_empty() && self.segments.is_empty()
    }

    /// Größte verwendete ID (für den ID-Zähler).
    pub fn max_id(&self) -> u64 {
        self.stations
            .iter()
            .map(|s| s.id)
            .chain(self.waypoints.iter().map(|w| w.id))
            .chain(self.segments.iter().map(|s| s.id))
            .max()
            .unwrap_or(0)
    }

    /// Vergibt neue IDs an alle Punkte und Segmente, für die `taken` gilt.
    ///
    /// Segment-Endpunkte folgen den umbenannten Punkten. Liefert die Anzahl
    /// der neu vergebenen IDs.
    pub fn remap_ids(&mut self, taken: impl Fn(u64) -> bool, ids: &mut IdAllocator) -> usize {
        let mut points = HashMap::new();
        for id in self
            .stations
            .iter()
            .map(|s| s.id)
            .chain(self.waypoints.iter().map(|w| w.id))
        {
            if taken(id) && !points.contains_key(&id) {
                points.insert(id, ids.allocate());
            }
        }
        let mut remapped = points.len();

        for station in &mut self.stations {
            if let Some(&new_id) = points.get(&station.id) {
                station.id = new_id;
            }
        }
        for waypoint in &mut self.waypoints {
            if let Some(&new_id) = points.get(&waypoint.id) {
                waypoint.id = new_id;
            }
        }
        for segment in &mut self.segments {
            if taken(segment.id) {
                segment.id = ids.allocate();
                remapped += 1;
            }
            if let Some(&new_id) = points.get(&segment.from) {
                segment.from = new_id;
            }
            if let Some(&new_id) = points.get(&segment.to) {
                segment.to = new_id;
            }
        }
        remapped
    }

    /// Überführt die flachen Sammlungen in ein Netzwerk.
    pub fn into_network(
        self,
        id: u64,
        name: impl Into<String>,
        color_index: usize,
    ) -> TransportNetwork {
        let mut network = TransportNetwork::new(id, name, color_index);
        for station in self.stations {
            network.stations.insert(station.id, station);
        }
        for mut waypoint in self.waypoints {
            waypoint.network_id = id;
            network.waypoints.insert(waypoint.id, waypoint);
        }
        for segment in self.segments {
            network.segments.insert(segment.id, segment);
        }
        network.rebuild_spatial_index();
        network
    }
}
