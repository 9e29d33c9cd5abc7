//! Das Fabrik-Layout: Container für alle Entities mit kaskadierenden Löschungen.

use std::fmt;

use glam::Vec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::crane::{
    find_overlap, HandoffKind, HandoffPoint, HandoffRule, JibCrane, OverheadCrane, Runway,
};
use super::geometry::Rect;
use super::group::NodeGroup;
use super::ids::IdAllocator;
use super::layer::{LayerKind, Layers};
use super::node::{LayoutNode, NodeKind, PathEdge};
use super::transport::{LegacyTransport, TransportNetwork};
use super::validation::{IssueKind, ValidationIssue};
use super::wall::Wall;
use super::zone::Zone;


/// Grund, warum kein Übergabepunkt erstellt werden kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffError {
    UnknownCrane(u64),
    SameCrane,
    DifferentRunways,
    UnknownRunway(u64),
    NoOverlap,
}

impl fmt::Display for HandoffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandoffError::UnknownCrane(id) => write!(f, "Kran {} existiert nicht", id),
            HandoffError::SameCrane => write!(f, "Übergabe braucht zwei verschiedene Krane"),
            HandoffError::DifferentRunways => {
                write!(f, "Krane liegen auf verschiedenen Kranbahnen")
            }
            HandoffError::UnknownRunway(id) => write!(f, "Kranbahn {} existiert nicht", id),
            HandoffError::NoOverlap => write!(f, "Die Einsatzzonen der Krane überlappen nicht"),
        }
    }
}

/// Gesamtes Layout einer Halle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilityLayout {
    #[serde(default)]
    pub nodes: IndexMap<u64, LayoutNode>,
    #[serde(default)]
    pub edges: IndexMap<u64, PathEdge>,
    #[serde(default)]
    pub groups: IndexMap<u64, NodeGroup>,
    #[serde(default)]
    pub walls: IndexMap<u64, Wall>,
    #[serde(default)]
    pub zones: IndexMap<u64, Zone>,
    #[serde(default)]
    pub runways: IndexMap<u64, Runway>,
    #[serde(default)]
    pub cranes: IndexMap<u64, OverheadCrane>,
    #[serde(default)]
    pub jib_cranes: IndexMap<u64, JibCrane>,
    #[serde(default)]
    pub handoffs: IndexMap<u64, HandoffPoint>,
    #[serde(default)]
    pub networks: IndexMap<u64, TransportNetwork>,
    #[serde(default)]
    pub layers: Layers,
    #[serde(default)]
    pub ids: IdAllocator,
    /// Zähler für Netzwerk-Farben
    #[serde(default)]
    next_color_index: usize,
    /// Ungespeicherte Änderungen vorhanden
    #[serde(skip)]
    dirty: bool,
}

impl FacilityLayout {
    /// Erstellt ein leeres Layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_id(&mut self) -> u64 {
        self.ids.allocate()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Baut abgeleitete Indizes nach dem Laden neu auf und zieht den
    /// ID-Zähler über alle vorhandenen IDs.
    pub fn rebuild_indices(&mut self) {
        let max_id = self
            .nodes
            .keys()
            .chain(self.edges.keys())
            .chain(self.groups.keys())
            .chain(self.walls.keys())
            .chain(self.zones.keys())
            .chain(self.runways.keys())
            .chain(self.cranes.keys())
            .chain(self.jib_cranes.keys())
            .chain(self.handoffs.keys())
            .chain(self.networks.keys())
            .copied()
            .chain(self.networks.values().flat_map(|n| {
                n.point_ids()
                    .chain(n.segments.keys().copied())
                    .chain(n.transporters.keys().copied())
                    .collect::<Vec<_>>()
            }))
            .max()
            .unwrap_or(0);
        self.ids.reserve_above(max_id);
        let next_color = self
            .networks
            .values()
            .map(|n| n.color_index + 1)
            .max()
            .unwrap_or(0);
        self.next_color_index = self.next_color_index.max(next_color);

        for network in self.networks.values_mut() {
            network.rebuild_spatial_index();
        }
    }

    // ── Nodes & Kanten ──────────────────────────────────────────

    /// Erstellt einen Node und gibt seine ID zurück.
    pub fn create_node(&mut self, name: impl Into<String>, kind: NodeKind, bounds: Rect) -> u64 {
        let id = self.allocate_id();
        self.nodes.insert(id, LayoutNode::new(id, name, kind, bounds));
        self.mark_dirty();
        id
    }

    /// Fügt einen vollständig konfigurierten Node ein (ID muss vergeben sein).
    pub fn insert_node(&mut self, node: LayoutNode) {
        self.ids.reserve_above(node.id);
        self.nodes.insert(node.id, node);
        self.mark_dirty();
    }

    /// Entfernt einen Node, alle berührenden Kanten und seine Gruppen-Mitgliedschaften.
    pub fn remove_node(&mut self, node_id: u64) -> Option<LayoutNode> {
        let removed = self.nodes.shift_remove(&node_id)?;
        self.edges.retain(|_, e| !e.touches(node_id));
        for group in self.groups.values_mut() {
            group.remove_member(node_id);
        }
        self.mark_dirty();
        Some(removed)
    }

    /// Verschiebt einen Node um `delta`.
    pub fn translate_node(&mut self, node_id: u64, delta: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };
        node.bounds = node.bounds.translated(delta);
        self.mark_dirty();
        true
    }

    /// Setzt die linke obere Ecke eines Nodes.
    pub fn set_node_position(&mut self, node_id: u64, position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(&node_id) else {
            return false;
        };
        node.bounds.position = position;
        self.mark_dirty();
        true
    }

    /// Legt eine Kante an (beide Nodes müssen existieren).
    ///
    /// Manuelle Duplikate sind erlaubt; nur die Auto-Verknüpfung prüft
    /// auf bestehende Kanten.
    pub fn add_edge(&mut self, from: u64, to: u64) -> Option<u64> {
        if !self.nodes.contains_key(&from) || !self.nodes.contains_key(&to) {
            return None;
        }
        let id = self.allocate_id();
        self.edges.insert(id, PathEdge::new(id, from, to));
        self.mark_dirty();
        Some(id)
    }

    /// Prüft ob eine Kante exakt in Richtung `from → to` existiert.
    pub fn has_edge(&self, from: u64, to: u64) -> bool {
        self.edges.values().any(|e| e.from == from && e.to == to)
    }

    pub fn remove_edge(&mut self, edge_id: u64) -> Option<PathEdge> {
        let removed = self.edges.shift_remove(&edge_id)?;
        self.mark_dirty();
        Some(removed)
    }

    /// Verwirft die gecachten Routen aller Kanten am Node.
    /// Gibt die Anzahl geleerter Routen zurück.
    pub fn clear_routes_touching(&mut self, node_id: u64) -> usize {
        let mut cleared = 0;
        for edge in self.edges.values_mut().filter(|e| e.touches(node_id)) {
            if edge.route.take().is_some() {
                cleared += 1;
            }
        }
        cleared
    }

    /// Ankerpunkte einer Kante für den externen Router
    /// (Ausgang des Start-Nodes, Eingang des Ziel-Nodes).
    pub fn edge_anchor_points(&self, edge_id: u64, stick_out: f32) -> Option<(Vec2, Vec2)> {
        let edge = self.edges.get(&edge_id)?;
        let from = self.nodes.get(&edge.from)?;
        let to = self.nodes.get(&edge.to)?;
        Some((
            from.output_terminal(stick_out).unwrap_or_else(|| from.center()),
            to.input_terminal(stick_out).unwrap_or_else(|| to.center()),
        ))
    }

    /// Übernimmt eine vom Router gelieferte Route ohne inhaltliche Prüfung.
    pub fn set_edge_route(&mut self, edge_id: u64, route: Vec<Vec2>) -> bool {
        let Some(edge) = self.edges.get_mut(&edge_id) else {
            return false;
        };
        edge.route = Some(route);
        true
    }

    /// Polyline einer Kante: gecachte Route oder direkte Verbindung der Anker.
    pub fn edge_polyline(&self, edge_id: u64, stick_out: f32) -> Option<Vec<Vec2>> {
        let edge = self.edges.get(&edge_id)?;
        match &edge.route {
            Some(route) if route.len() >= 2 => Some(route.clone()),
            _ => self
                .edge_anchor_points(edge_id, stick_out)
                .map(|(a, b)| vec![a, b]),
        }
    }

    // ── Gruppen, Wände, Zonen ───────────────────────────────────

    pub fn create_group(
        &mut self,
        name: impl Into<String>,
        members: impl IntoIterator<Item = u64>,
        is_cell: bool,
    ) -> u64 {
        let id = self.allocate_id();
        let mut group = NodeGroup::new(id, name, members);
        group.is_cell = is_cell;
        self.groups.insert(id, group);
        self.mark_dirty();
        id
    }

    pub fn create_wall(&mut self, start: Vec2, end: Vec2, thickness: f32) -> u64 {
        let id = self.allocate_id();
        self.walls.insert(id, Wall::new(id, start, end, thickness));
        self.mark_dirty();
        id
    }

    /// Legt eine Zone an; weniger als drei Punkte werden verworfen.
    pub fn create_zone(&mut self, name: impl Into<String>, vertices: Vec<Vec2>) -> Option<u64> {
        if vertices.len() < 3 {
            return None;
        }
        let id = self.allocate_id();
        self.zones.insert(id, Zone::new(id, name, vertices));
        self.mark_dirty();
        Some(id)
    }

    /// Zonen, die den Punkt enthalten.
    pub fn zones_containing(&self, p: Vec2) -> Vec<u64> {
        self.zones
            .values()
            .filter(|z| z.contains(p))
            .map(|z| z.id)
            .collect()
    }

    pub fn remove_group(&mut self, group_id: u64) -> Option<NodeGroup> {
        let removed = self.groups.shift_remove(&group_id)?;
        self.mark_dirty();
        Some(removed)
    }

    pub fn remove_wall(&mut self, wall_id: u64) -> Option<Wall> {
        let removed = self.walls.shift_remove(&wall_id)?;
        self.mark_dirty();
        Some(removed)
    }

    pub fn remove_zone(&mut self, zone_id: u64) -> Option<Zone> {
        let removed = self.zones.shift_remove(&zone_id)?;
        self.mark_dirty();
        Some(removed)
    }

    // ── Krane ───────────────────────────────────────────────────

    pub fn create_runway(&mut self, name: impl Into<String>, start: Vec2, end: Vec2) -> u64 {
        let id = self.allocate_id();
        self.runways.insert(id, Runway::new(id, name, start, end));
        self.mark_dirty();
        id
    }

    /// Legt einen Brückenkran auf einer existierenden Bahn an.
    pub fn create_crane(
        &mut self,
        name: impl Into<String>,
        runway_id: u64,
        zone_min: f32,
        zone_max: f32,
    ) -> Option<u64> {
        if !self.runways.contains_key(&runway_id) {
            return None;
        }
        let id = self.allocate_id();
        self.cranes
            .insert(id, OverheadCrane::new(id, name, runway_id, zone_min, zone_max));
        self.mark_dirty();
        Some(id)
    }

    /// Entfernt einen Kran samt seiner Übergabepunkte.
    pub fn remove_crane(&mut self, crane_id: u64) -> Option<OverheadCrane> {
        let removed = self.cranes.shift_remove(&crane_id)?;
        self.handoffs.retain(|_, h| !h.involves(crane_id));
        self.mark_dirty();
        Some(removed)
    }

    /// Verschiebt eine Kranbahn. Übergabepunkte werden aus ihrem
    /// gespeicherten Parameter neu abgeleitet, Brückenpositionen sind
    /// ohnehin parametrisch.
    pub fn set_runway_endpoints(&mut self, runway_id: u64, start: Vec2, end: Vec2) -> bool {
        let Some(runway) = self.runways.get_mut(&runway_id) else {
            return false;
        };
        runway.start = start;
        runway.end = end;
        let runway = runway.clone();
        for handoff in self.handoffs.values_mut().filter(|h| h.runway_id == runway_id) {
            handoff.position = runway.point_at(handoff.runway_t);
        }
        self.mark_dirty();
        true
    }

    /// Entfernt eine Kranbahn. Krane darauf bleiben als hängende Referenz
    /// stehen und werden von der Validierung gemeldet.
    pub fn remove_runway(&mut self, runway_id: u64) -> Option<Runway> {
        let removed = self.runways.shift_remove(&runway_id)?;
        self.mark_dirty();
        Some(removed)
    }

    pub fn remove_jib_crane(&mut self, jib_id: u64) -> Option<JibCrane> {
        let removed = self.jib_cranes.shift_remove(&jib_id)?;
        self.mark_dirty();
        Some(removed)
    }

    pub fn create_jib_crane(
        &mut self,
        name: impl Into<String>,
        center: Vec2,
        radius: f32,
        arc_start_deg: f32,
        arc_end_deg: f32,
    ) -> u64 {
        let id = self.allocate_id();
        self.jib_cranes.insert(
            id,
            JibCrane::new(id, name, center, radius).with_arc(arc_start_deg, arc_end_deg),
        );
        self.mark_dirty();
        id
    }

    /// Überlappung zweier Krane per ID.
    pub fn crane_overlap(&self, crane_a: u64, crane_b: u64) -> Option<(f32, f32)> {
        find_overlap(self.cranes.get(&crane_a)?, self.cranes.get(&crane_b)?)
    }

    /// Alle Kranpaare mit überlappender Zone (jedes Paar einmal).
    pub fn overlapping_crane_pairs(&self) -> Vec<(u64, u64, (f32, f32))> {
        let cranes: Vec<&OverheadCrane> = self.cranes.values().collect();
        let mut pairs = Vec::new();
        for (i, a) in cranes.iter().enumerate() {
            for b in &cranes[i + 1..] {
                if let Some(overlap) = find_overlap(a, b) {
                    pairs.push((a.id, b.id, overlap));
                }
            }
        }
        pairs
    }

    /// Erstellt einen Übergabepunkt in der Mitte der aktuellen Überlappung.
    pub fn create_handoff(
        &mut self,
        crane_a: u64,
        crane_b: u64,
        kind: HandoffKind,
        rule: HandoffRule,
    ) -> Result<u64, HandoffError> {
        if crane_a == crane_b {
            return Err(HandoffError::SameCrane);
        }
        let a = self
            .cranes
            .get(&crane_a)
            .ok_or(HandoffError::UnknownCrane(crane_a))?;
        let b = self
            .cranes
            .get(&crane_b)
            .ok_or(HandoffError::UnknownCrane(crane_b))?;
        if a.runway_id != b.runway_id {
            return Err(HandoffError::DifferentRunways);
        }
        let runway = self
            .runways
            .get(&a.runway_id)
            .ok_or(HandoffError::UnknownRunway(a.runway_id))?;
        let (min, max) = find_overlap(a, b).ok_or(HandoffError::NoOverlap)?;

        let runway_t = (min + max) / 2.0;
        let position = runway.point_at(runway_t);
        let runway_id = runway.id;

        let id = self.allocate_id();
        self.handoffs.insert(
            id,
            HandoffPoint {
                id,
                position,
                runway_id,
                crane_a,
                crane_b,
                runway_t,
                kind,
                rule,
            },
        );
        self.mark_dirty();
        Ok(id)
    }

    pub fn remove_handoff(&mut self, handoff_id: u64) -> Option<HandoffPoint> {
        let removed = self.handoffs.shift_remove(&handoff_id)?;
        self.mark_dirty();
        Some(removed)
    }

    // ── Transport-Netzwerke ─────────────────────────────────────

    /// Legt ein neues Netzwerk an; die Farbe ergibt sich aus der Anzahl.
    pub fn create_network(&mut self, name: impl Into<String>) -> u64 {
        let id = self.allocate_id();
        let color_index = self.take_color_index();
        self.networks
            .insert(id, TransportNetwork::new(id, name, color_index));
        self.mark_dirty();
        id
    }

    /// Nächster Paletten-Index; gelöschte Netzwerke geben ihre Farbe nicht frei.
    fn take_color_index(&mut self) -> usize {
        let index = self.next_color_index;
        self.next_color_index += 1;
        index
    }

    /// Entfernt ein Netzwerk samt Punkten, Segmenten und Transportern.
    pub fn remove_network(&mut self, network_id: u64) -> Option<TransportNetwork> {
        let removed = self.networks.shift_remove(&network_id)?;
        log::info!(
            "Netzwerk '{}' ({}) entfernt: {} Wegpunkte, {} Segmente",
            removed.name,
            network_id,
            removed.waypoints.len(),
            removed.segments.len()
        );
        self.mark_dirty();
        Some(removed)
    }

    /// Netzwerk und ID-Zähler gleichzeitig mutabel ausleihen.
    pub fn network_with_ids(
        &mut self,
        network_id: u64,
    ) -> Option<(&mut TransportNetwork, &mut IdAllocator)> {
        let network = self.networks.get_mut(&network_id)?;
        Some((network, &mut self.ids))
    }

    /// Netzwerk, das den Punkt enthält.
    pub fn network_of_point(&self, point_id: u64) -> Option<u64> {
        self.networks
            .values()
            .find(|n| n.contains_point(point_id))
            .map(|n| n.id)
    }

    /// Übernimmt flache Alt-Sammlungen einmalig als eigenes Netzwerk.
    ///
    /// Leere Importe erzeugen kein Netzwerk.
    pub fn import_legacy_transport(&mut self, mut legacy: LegacyTransport) -> Option<u64> {
        if legacy.is_empty() {
            return None;
        }
        // Alt-IDs, die im Layout schon vergeben sein können, werden neu vergeben
        let before = self.ids.clone();
        self.ids.reserve_above(legacy.max_id());
        let remapped = legacy.remap_ids(|id| before.is_allocated(id), &mut self.ids);
        if remapped > 0 {
            log::warn!(
                "{} Alt-ID(s) kollidierten mit dem Layout und wurden neu vergeben",
                remapped
            );
        }

        let id = self.allocate_id();
        let color_index = self.take_color_index();
        let network = legacy.into_network(id, "Importiertes Netzwerk", color_index);
        log::info!(
            "Alt-Transportdaten übernommen: {} Stationen, {} Wegpunkte, {} Segmente",
            network.stations.len(),
            network.waypoints.len(),
            network.segments.len()
        );
        self.networks.insert(id, network);
        self.mark_dirty();
        Some(id)
    }

    // ── Generischer Zugriff ─────────────────────────────────────

    /// Ebene einer beliebigen Entity per ID.
    pub fn entity_layer(&self, id: u64) -> Option<LayerKind> {
        if self.nodes.contains_key(&id) || self.groups.contains_key(&id) {
            Some(LayerKind::Equipment)
        } else if self.edges.contains_key(&id) {
            Some(LayerKind::LocalFlow)
        } else if self.walls.contains_key(&id) || self.runways.contains_key(&id) {
            Some(LayerKind::Infrastructure)
        } else if self.zones.contains_key(&id) {
            Some(LayerKind::Spatial)
        } else if self.cranes.contains_key(&id)
            || self.jib_cranes.contains_key(&id)
            || self.handoffs.contains_key(&id)
        {
            Some(LayerKind::OverheadTransport)
        } else if self
            .networks
            .values()
            .any(|n| n.contains_point(id) || n.segments.contains_key(&id))
        {
            Some(LayerKind::GuidedTransport)
        } else {
            None
        }
    }

    /// Entfernt eine beliebige Entity samt Kaskaden.
    ///
    /// `false`, wenn die ID zu keiner löschbaren Entity gehört.
    pub fn remove_entity(&mut self, id: u64) -> bool {
        let removed = self.remove_node(id).is_some()
            || self.remove_edge(id).is_some()
            || self.remove_group(id).is_some()
            || self.remove_wall(id).is_some()
            || self.remove_zone(id).is_some()
            || self.remove_runway(id).is_some()
            || self.remove_crane(id).is_some()
            || self.remove_jib_crane(id).is_some()
            || self.remove_handoff(id).is_some()
            || self.remove_network(id).is_some();
        if removed {
            return true;
        }

        let network_hit = self.networks.values_mut().find_map(|network| {
            if network.contains_point(id) {
                network.remove_point(id).map(|_| ())
            } else {
                network.remove_segment(id).map(|_| ())
            }
        });
        if network_hit.is_some() {
            self.mark_dirty();
        }
        network_hit.is_some()
    }

    // ── Validierung ─────────────────────────────────────────────

    /// Prüft Layout-Referenzen und alle Netzwerke.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for edge in self.edges.values() {
            for end in [edge.from, edge.to] {
                if !self.nodes.contains_key(&end) {
                    issues.push(ValidationIssue::error(
                        IssueKind::DanglingReference,
                        format!("Kante {} verweist auf gelöschten Node {}", edge.id, end),
                        Some(edge.id),
                    ));
                }
            }
        }

        for group in self.groups.values() {
            for member in group.members.iter().filter(|m| !self.nodes.contains_key(*m)) {
                issues.push(ValidationIssue::warning(
                    IssueKind::DanglingReference,
                    format!("Gruppe '{}' enthält gelöschten Node {}", group.name, member),
                    Some(group.id),
                ));
            }
        }

        for crane in self.cranes.values() {
            if !self.runways.contains_key(&crane.runway_id) {
                issues.push(ValidationIssue::error(
                    IssueKind::DanglingReference,
                    format!(
                        "Kran '{}' verweist auf gelöschte Kranbahn {}",
                        crane.name, crane.runway_id
                    ),
                    Some(crane.id),
                ));
            }
        }

        for handoff in self.handoffs.values() {
            for crane_id in [handoff.crane_a, handoff.crane_b] {
                if !self.cranes.contains_key(&crane_id) {
                    issues.push(ValidationIssue::error(
                        IssueKind::DanglingReference,
                        format!(
                            "Übergabepunkt {} verweist auf gelöschten Kran {}",
                            handoff.id, crane_id
                        ),
                        Some(handoff.id),
                    ));
                }
            }
            if !self.cranes.contains_key(&handoff.crane_a)
                || !self.cranes.contains_key(&handoff.crane_b)
            {
                continue;
            }
            // Anker bleiben stehen; nur melden, wenn die Zonen sie verlassen haben
            let inside = self
                .crane_overlap(handoff.crane_a, handoff.crane_b)
                .is_some_and(|(min, max)| (min..=max).contains(&handoff.runway_t));
            if !inside {
                issues.push(ValidationIssue::warning(
                    IssueKind::StaleHandoff,
                    format!(
                        "Übergabepunkt {} liegt außerhalb der Überlappung der Krane {} und {}",
                        handoff.id, handoff.crane_a, handoff.crane_b
                    ),
                    Some(handoff.id),
                ));
            }
        }

        for network in self.networks.values() {
            issues.extend(network.validate());
        }

        issues
    }
}
