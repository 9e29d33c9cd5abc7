use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::geometry::Rect;

/// Geschlossenes Polygon für Zonen-Zugehörigkeit.
///
/// Gültig erst ab drei Eckpunkten; ungültige Polygone enthalten keinen Punkt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Vec2>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Ray-Casting (Strahl in +x-Richtung, Kanten-Kreuzungen zählen).
    pub fn contains(&self, p: Vec2) -> bool {
        if !self.is_valid() {
            return false;
        }

        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y)
                && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Umschließendes Rechteck (leeres Polygon: `None`).
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.vertices.first()?;
        let (min, max) = self
            .vertices
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)));
        Some(Rect::from_corners(min, max))
    }

    /// Kanten als Punktpaare (inkl. Schlusskante).
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
