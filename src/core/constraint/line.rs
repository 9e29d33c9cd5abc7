use glam::Vec2;

use super::{ConstraintParam, Projection};
use crate::core::geometry::DEGENERATE_EPSILON;

/// Gerade zwischen zwei Endpunkten mit erlaubtem Teilbereich [zone_min, zone_max].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineConstraint {
    pub start: Vec2,
    pub end: Vec2,
    zone_min: f32,
    zone_max: f32,
}

impl LineConstraint {
    /// Gerade über die volle Länge.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            zone_min: 0.0,
            zone_max: 1.0,
        }
    }

    /// Begrenzt den erlaubten Teilbereich.
    ///
    /// Werte werden auf [0, 1] begrenzt, vertauschte Grenzen getauscht.
    pub fn with_zone(mut self, zone_min: f32, zone_max: f32) -> Self {
        let a = zone_min.clamp(0.0, 1.0);
        let b = zone_max.clamp(0.0, 1.0);
        self.zone_min = a.min(b);
        self.zone_max = a.max(b);
        self
    }

    pub fn zone(&self) -> (f32, f32) {
        (self.zone_min, self.zone_max)
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    fn is_degenerate(&self) -> bool {
        self.length() < DEGENERATE_EPSILON
    }

    /// Weltpunkt zum Parameter t (auf den Teilbereich begrenzt).
    pub fn point_at(&self, t: f32) -> Vec2 {
        if self.is_degenerate() {
            return self.start;
        }
        let t = t.clamp(self.zone_min, self.zone_max);
        self.start + (self.end - self.start) * t
    }

    /// Projektion: Skalarprojektion auf die Gerade, Begrenzung auf die
    /// Linienlänge, Normierung auf t und Begrenzung auf den Teilbereich.
    pub fn project(&self, p: Vec2) -> Projection {
        let length = self.length();
        if length < DEGENERATE_EPSILON {
            return Projection {
                point: self.start,
                param: ConstraintParam::Line {
                    t: 0.0_f32.clamp(self.zone_min, self.zone_max),
                },
            };
        }

        let dir = (self.end - self.start) / length;
        let along = (p - self.start).dot(dir).clamp(0.0, length);
        let t = (along / length).clamp(self.zone_min, self.zone_max);

        Projection {
            point: self.start + (self.end - self.start) * t,
            param: ConstraintParam::Line { t },
        }
    }
}
