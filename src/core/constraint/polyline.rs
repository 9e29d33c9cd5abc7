use glam::Vec2;

use super::{ConstraintParam, Projection};
use crate::core::geometry::project_onto_segment;

/// Menge von Strecken, auf die ein Punkt projiziert wird.
///
/// Als Kette (`from_chain`) für Pfade, als Fächer (`fan`) für einen Wegpunkt,
/// der mit mehreren Nachbarn verbunden ist.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolylineConstraint {
    segments: Vec<(Vec2, Vec2)>,
}

impl PolylineConstraint {
    /// Streckenzug durch die Punkte in Reihenfolge.
    pub fn from_chain(points: &[Vec2]) -> Self {
        Self {
            segments: points.windows(2).map(|w| (w[0], w[1])).collect(),
        }
    }

    /// Fächer aus Strecken `center → neighbor`.
    pub fn fan(center: Vec2, neighbors: &[Vec2]) -> Self {
        Self {
            segments: neighbors.iter().map(|n| (center, *n)).collect(),
        }
    }

    pub fn segments(&self) -> &[(Vec2, Vec2)] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn point_at(&self, segment: usize, t: f32) -> Option<Vec2> {
        let (a, b) = self.segments.get(segment)?;
        Some(a.lerp(*b, t.clamp(0.0, 1.0)))
    }

    /// Projiziert auf jede Strecke und wählt die mit minimalem Abstand.
    /// Ohne Strecken bleibt der Punkt unverändert.
    pub fn project(&self, p: Vec2) -> Projection {
        let best = self
            .segments
            .iter()
            .enumerate()
            .map(|(index, (a, b))| {
                let (foot, t) = project_onto_segment(p, *a, *b);
                (index, foot, t, p.distance_squared(foot))
            })
            .min_by(|x, y| x.3.total_cmp(&y.3));

        match best {
            Some((segment, _, t, _)) => Projection {
                // Über point_at, damit Projektion und Rückableitung identisch rechnen
                point: self.point_at(segment, t).unwrap_or(p),
                param: ConstraintParam::Polyline { segment, t },
            },
            None => Projection {
                point: p,
                param: ConstraintParam::Polyline { segment: 0, t: 0.0 },
            },
        }
    }
}
