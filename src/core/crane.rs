//! Krane: Kranbahnen, Brückenkrane mit Einsatzzone, Schwenkkrane und
//! Übergabepunkte zwischen Kranen auf derselben Bahn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::constraint::{ArcConstraint, LineConstraint};
use super::geometry::DEGENERATE_EPSILON;

// ── Kranbahn ────────────────────────────────────────────────────────

/// Kranbahn: lineare Führung zwischen zwei Endpunkten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    pub id: u64,
    pub name: String,
    pub start: Vec2,
    pub end: Vec2,
}

impl Runway {
    pub fn new(id: u64, name: impl Into<String>, start: Vec2, end: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            start,
            end,
        }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Position zum Bahnparameter t ∈ [0, 1].
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start + (self.end - self.start) * t.clamp(0.0, 1.0)
    }

    /// Bahnparameter des Fußpunkts von `p` (auf [0, 1] begrenzt).
    pub fn parameter_at(&self, p: Vec2) -> f32 {
        let d = self.end - self.start;
        let len_sq = d.length_squared();
        if len_sq < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
            return 0.0;
        }
        ((p - self.start).dot(d) / len_sq).clamp(0.0, 1.0)
    }

    /// Einheitsnormale zur linken Seite (Blick von Start nach Ende).
    /// Entartete Bahnen liefern den Nullvektor.
    pub fn perpendicular(&self) -> Vec2 {
        let d = self.end - self.start;
        let len = d.length();
        if len < DEGENERATE_EPSILON {
            return Vec2::ZERO;
        }
        Vec2::new(-d.y, d.x) / len
    }

    /// Linien-Constraint über die volle Bahn.
    pub fn line(&self) -> LineConstraint {
        LineConstraint::new(self.start, self.end)
    }
}

// ── Brückenkran ─────────────────────────────────────────────────────

/// Brückenkran auf einer Kranbahn.
///
/// Invariante: `zone_min <= zone_max`, beide in [0, 1];
/// `bridge_position` liegt immer in der Zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverheadCrane {
    pub id: u64,
    pub name: String,
    pub runway_id: u64,
    zone_min: f32,
    zone_max: f32,
    /// Reichweite senkrecht zur Bahn, linke Seite
    pub reach_left: f32,
    /// Reichweite senkrecht zur Bahn, rechte Seite
    pub reach_right: f32,
    /// Aktuelle Brückenposition als Bahnparameter
    bridge_position: f32,
}

impl OverheadCrane {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        runway_id: u64,
        zone_min: f32,
        zone_max: f32,
    ) -> Self {
        let mut crane = Self {
            id,
            name: name.into(),
            runway_id,
            zone_min: 0.0,
            zone_max: 1.0,
            reach_left: 10.0,
            reach_right: 10.0,
            bridge_position: 0.5,
        };
        crane.set_zone(zone_min, zone_max);
        crane
    }

    pub fn zone_min(&self) -> f32 {
        self.zone_min
    }

    pub fn zone_max(&self) -> f32 {
        self.zone_max
    }

    /// Setzt die Einsatzzone. Vertauschte Grenzen werden getauscht,
    /// die Brückenposition wird in die neue Zone gezogen.
    pub fn set_zone(&mut self, zone_min: f32, zone_max: f32) {
        let a = zone_min.clamp(0.0, 1.0);
        let b = zone_max.clamp(0.0, 1.0);
        self.zone_min = a.min(b);
        self.zone_max = a.max(b);
        self.bridge_position = self.bridge_position.clamp(self.zone_min, self.zone_max);
    }

    pub fn bridge_position(&self) -> f32 {
        self.bridge_position
    }

    /// Setzt die Brückenposition (auf die Zone begrenzt).
    pub fn set_bridge_position(&mut self, t: f32) {
        self.bridge_position = t.clamp(self.zone_min, self.zone_max);
    }

    /// Setzt beide Reichweiten symmetrisch aus einer Feldbreite.
    pub fn set_bay_width(&mut self, width: f32) {
        let half = width.max(0.0) / 2.0;
        self.reach_left = half;
        self.reach_right = half;
    }

    /// Linien-Constraint der Brücke auf der gegebenen Bahn.
    pub fn constraint(&self, runway: &Runway) -> LineConstraint {
        runway.line().with_zone(self.zone_min, self.zone_max)
    }

    /// Weltposition der Brücke, aus dem gespeicherten Parameter abgeleitet.
    pub fn bridge_point(&self, runway: &Runway) -> Vec2 {
        self.constraint(runway).point_at(self.bridge_position)
    }

    /// Eckpunkte des Arbeitsbereichs (leer bei entarteter Bahn).
    pub fn envelope_polygon(&self, runway: &Runway) -> Vec<Vec2> {
        let perp = runway.perpendicular();
        if perp == Vec2::ZERO {
            return Vec::new();
        }
        let start = runway.point_at(self.zone_min);
        let end = runway.point_at(self.zone_max);
        vec![
            start + perp * self.reach_left,
            end + perp * self.reach_left,
            end - perp * self.reach_right,
            start - perp * self.reach_right,
        ]
    }

    /// Prüft ob ein Punkt im Arbeitsbereich liegt.
    pub fn point_in_envelope(&self, runway: &Runway, p: Vec2) -> bool {
        let t = runway.parameter_at(p);
        if t < self.zone_min || t > self.zone_max {
            return false;
        }
        let perp = runway.perpendicular();
        let offset = (p - runway.point_at(t)).dot(perp);
        if offset > 0.0 {
            offset <= self.reach_left
        } else {
            -offset <= self.reach_right
        }
    }
}

/// Überlappung der Einsatzzonen zweier Krane auf derselben Bahn.
///
/// `Some((min, max))` mit `min < max`, sonst `None`. Symmetrisch.
pub fn find_overlap(a: &OverheadCrane, b: &OverheadCrane) -> Option<(f32, f32)> {
    if a.runway_id != b.runway_id {
        return None;
    }
    let min = a.zone_min.max(b.zone_min);
    let max = a.zone_max.min(b.zone_max);
    (min < max).then_some((min, max))
}

// ── Schwenkkran ─────────────────────────────────────────────────────

/// Schwenkkran mit Drehpunkt, Radius und Schwenkbereich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JibCrane {
    pub id: u64,
    pub name: String,
    pub center: Vec2,
    pub radius: f32,
    /// Bogenanfang in Grad (0° = +x, gegen den Uhrzeigersinn)
    pub arc_start_deg: f32,
    /// Bogenende in Grad
    pub arc_end_deg: f32,
    /// Aktueller Auslegerwinkel (auf den Bogen begrenzt)
    pub hook_angle_deg: f32,
}

impl JibCrane {
    pub fn new(id: u64, name: impl Into<String>, center: Vec2, radius: f32) -> Self {
        Self {
            id,
            name: name.into(),
            center,
            radius,
            arc_start_deg: 0.0,
            arc_end_deg: 360.0,
            hook_angle_deg: 0.0,
        }
    }

    /// Setzt den Schwenkbereich (Builder).
    pub fn with_arc(mut self, start_deg: f32, end_deg: f32) -> Self {
        self.arc_start_deg = start_deg;
        self.arc_end_deg = end_deg;
        self.hook_angle_deg = self.arc().clamp_angle(self.hook_angle_deg);
        self
    }

    pub fn arc(&self) -> ArcConstraint {
        ArcConstraint::new(self.center, self.radius, self.arc_start_deg, self.arc_end_deg)
    }

    pub fn is_full_circle(&self) -> bool {
        self.arc().is_full_circle()
    }

    /// Weltposition des Hakens am Auslegerende.
    pub fn hook_point(&self) -> Vec2 {
        self.arc().point_at(self.hook_angle_deg)
    }

    /// Abdeckungsfläche als Polygon (Sektor bzw. Vollkreis).
    pub fn coverage_polygon(&self, segments: usize) -> Vec<Vec2> {
        self.arc().sector_polygon(segments)
    }
}

// ── Übergabepunkte ──────────────────────────────────────────────────

/// Art der Lastübergabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HandoffKind {
    /// Direkt von Haken zu Haken
    #[default]
    Direct,
    /// Über einen Bodenpuffer
    GroundBuffer,
}

/// Regel für den Ablauf der Übergabe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HandoffRule {
    /// Kran A übergibt, Kran B übernimmt
    #[default]
    Transfer,
    /// Kran A räumt den Bereich, bevor Kran B aufnimmt
    ClearAndPickup,
}

/// Vom Benutzer gesetzter Übergabepunkt zwischen zwei Kranen.
///
/// Die Position wird bei Erstellung festgelegt und nicht automatisch
/// nachgeführt, wenn sich Zonen später ändern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffPoint {
    pub id: u64,
    pub position: Vec2,
    pub runway_id: u64,
    pub crane_a: u64,
    pub crane_b: u64,
    /// Bahnparameter zum Erstellungszeitpunkt
    pub runway_t: f32,
    pub kind: HandoffKind,
    pub rule: HandoffRule,
}

impl HandoffPoint {
    pub fn involves(&self, crane_id: u64) -> bool {
        self.crane_a == crane_id || self.crane_b == crane_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn runway() -> Runway {
        Runway::new(1, "Bahn", Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0))
    }

    fn crane(id: u64, min: f32, max: f32) -> OverheadCrane {
        OverheadCrane::new(id, "EOT", 1, min, max)
    }

    #[test]
    fn overlap_of_intersecting_zones() {
        let a = crane(10, 0.0, 0.5);
        let b = crane(11, 0.4, 1.0);
        assert_eq!(find_overlap(&a, &b), Some((0.4, 0.5)));
        assert_eq!(find_overlap(&b, &a), Some((0.4, 0.5)));
    }

    #[test]
    fn disjoint_zones_have_no_overlap() {
        let a = crane(10, 0.0, 0.3);
        let b = crane(11, 0.5, 1.0);
        assert_eq!(find_overlap(&a, &b), None);
        assert_eq!(find_overlap(&b, &a), None);
    }

    #[test]
    fn touching_zones_have_no_overlap() {
        let a = crane(10, 0.0, 0.5);
        let b = crane(11, 0.5, 1.0);
        assert_eq!(find_overlap(&a, &b), None);
    }

    #[test]
    fn different_runways_have_no_overlap() {
        let a = crane(10, 0.0, 1.0);
        let mut b = crane(11, 0.0, 1.0);
        b.runway_id = 2;
        assert_eq!(find_overlap(&a, &b), None);
    }

    #[test]
    fn overlap_is_symmetric_for_many_zone_pairs() {
        let zones = [0.0, 0.15, 0.3, 0.45, 0.6, 0.75, 1.0];
        for &a_min in &zones {
            for &a_max in &zones {
                for &b_min in &zones {
                    for &b_max in &zones {
                        let a = crane(1, a_min, a_max);
                        let b = crane(2, b_min, b_max);
                        let ab = find_overlap(&a, &b);
                        assert_eq!(ab, find_overlap(&b, &a));
                        if let Some((min, max)) = ab {
                            assert!(min < max);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn reversed_zone_is_swapped() {
        let c = crane(1, 0.8, 0.2);
        assert_eq!(c.zone_min(), 0.2);
        assert_eq!(c.zone_max(), 0.8);
    }

    #[test]
    fn bridge_position_follows_zone() {
        let mut c = crane(1, 0.0, 1.0);
        c.set_bridge_position(0.9);
        c.set_zone(0.2, 0.6);
        assert_eq!(c.bridge_position(), 0.6);

        let p = c.bridge_point(&runway());
        assert_relative_eq!(p.x, 60.0, epsilon = 1e-4);
    }

    #[test]
    fn envelope_and_membership() {
        let mut c = crane(1, 0.2, 0.6);
        c.reach_left = 5.0;
        c.reach_right = 3.0;
        let r = runway();

        let polygon = c.envelope_polygon(&r);
        assert_eq!(polygon.len(), 4);
        assert_relative_eq!(polygon[0].y, 5.0);
        assert_relative_eq!(polygon[2].y, -3.0);

        assert!(c.point_in_envelope(&r, Vec2::new(40.0, 4.0)));
        assert!(c.point_in_envelope(&r, Vec2::new(40.0, -3.0)));
        assert!(!c.point_in_envelope(&r, Vec2::new(40.0, -4.0)));
        assert!(!c.point_in_envelope(&r, Vec2::new(70.0, 0.0)));
    }

    #[test]
    fn jib_hook_stays_on_arc() {
        let mut jib = JibCrane::new(1, "Jib", Vec2::ZERO, 10.0).with_arc(0.0, 90.0);
        jib.hook_angle_deg = 180.0;
        let hook = jib.hook_point();
        assert_relative_eq!(hook.length(), 10.0, epsilon = 1e-4);
        assert!(hook.x >= -1e-4 && hook.y >= -1e-4);
        assert!(!jib.is_full_circle());
    }

    #[test]
    fn handoff_involves_owning_cranes() {
        let h = HandoffPoint {
            id: 1,
            position: Vec2::ZERO,
            runway_id: 1,
            crane_a: 10,
            crane_b: 11,
            runway_t: 0.45,
            kind: HandoffKind::Direct,
            rule: HandoffRule::Transfer,
        };
        assert!(h.involves(10));
        assert!(h.involves(11));
        assert!(!h.involves(12));
    }
}
