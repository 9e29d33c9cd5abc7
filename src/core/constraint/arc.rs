use glam::Vec2;

use super::{ConstraintParam, Projection};
use crate::core::geometry::{normalize_degrees, point_on_circle, DEGENERATE_EPSILON};

/// Toleranz, ab der ein Bogen als Vollkreis gilt (Grad).
const FULL_CIRCLE_TOLERANCE_DEG: f32 = 0.1;

/// Kreisbogen um `center` von `start_deg` bis `end_deg` (gegen den Uhrzeigersinn).
///
/// Ist `end_deg < start_deg`, läuft der Bogen über 0° (Spannweite + 360°).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcConstraint {
    pub center: Vec2,
    pub radius: f32,
    pub start_deg: f32,
    pub end_deg: f32,
}

impl ArcConstraint {
    pub fn new(center: Vec2, radius: f32, start_deg: f32, end_deg: f32) -> Self {
        Self {
            center,
            radius,
            start_deg,
            end_deg,
        }
    }

    /// Spannweite des Bogens in Grad (0..=360).
    pub fn sweep_deg(&self) -> f32 {
        let sweep = self.end_deg - self.start_deg;
        if sweep < 0.0 {
            sweep + 360.0
        } else {
            sweep.min(360.0)
        }
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep_deg() >= 360.0 - FULL_CIRCLE_TOLERANCE_DEG
    }

    /// Begrenzt einen Winkel auf den Bogen.
    ///
    /// Winkel außerhalb landen auf der winkelmäßig näheren Grenze.
    pub fn clamp_angle(&self, angle_deg: f32) -> f32 {
        let angle = normalize_degrees(angle_deg);
        if self.is_full_circle() {
            return angle;
        }

        let start = normalize_degrees(self.start_deg);
        let sweep = self.sweep_deg();
        let offset = normalize_degrees(angle - start);
        if offset <= sweep {
            return angle;
        }

        let past_end = offset - sweep;
        let before_start = 360.0 - offset;
        if past_end < before_start {
            normalize_degrees(start + sweep)
        } else {
            start
        }
    }

    pub fn point_at(&self, angle_deg: f32) -> Vec2 {
        point_on_circle(self.center, self.radius, self.clamp_angle(angle_deg))
    }

    /// Projektion auf den Bogen: Winkel relativ zum Mittelpunkt, Begrenzung,
    /// Ausgabe auf festem Radius. Entartete Bögen (Radius ≤ 0) liefern den
    /// Eingabepunkt unverändert.
    pub fn project(&self, p: Vec2) -> Projection {
        let offset = p - self.center;
        if self.radius <= DEGENERATE_EPSILON {
            return Projection {
                point: p,
                param: ConstraintParam::Arc {
                    angle_deg: normalize_degrees(self.start_deg),
                },
            };
        }

        // Zeiger exakt im Mittelpunkt: Winkel undefiniert, Bogenanfang nehmen
        let raw_angle = if offset.length_squared() < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
            self.start_deg
        } else {
            offset.y.atan2(offset.x).to_degrees()
        };

        let angle_deg = self.clamp_angle(raw_angle);
        Projection {
            point: point_on_circle(self.center, self.radius, angle_deg),
            param: ConstraintParam::Arc { angle_deg },
        }
    }

    /// Sektor als Polygon: Mittelpunkt plus `segments + 1` Bogenpunkte.
    pub fn sector_polygon(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        let sweep = self.sweep_deg();
        let mut points = Vec::with_capacity(segments + 2);
        if !self.is_full_circle() {
            points.push(self.center);
        }
        for i in 0..=segments {
            let angle = self.start_deg + sweep * i as f32 / segments as f32;
            points.push(point_on_circle(self.center, self.radius, angle));
        }
        points
    }
}
