//! Spatial-Index (KD-Tree) für schnelle Abfragen auf Gleis-Punkten.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Punkts (Station oder Wegpunkt)
    pub point_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über Punkt-IDs und Positionen.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    point_ids: Vec<u64>,
    positions: Vec<Vec2>,
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            point_ids: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus (ID, Position)-Paaren.
    ///
    /// Die Reihenfolge wird nach ID sortiert, damit gleiche Eingaben
    /// unabhängig von der Iterations-Reihenfolge denselben Baum liefern.
    pub fn from_points(points: impl IntoIterator<Item = (u64, Vec2)>) -> Self {
        let mut entries: Vec<(u64, Vec2)> = points.into_iter().collect();
        entries.sort_unstable_by_key(|(id, _)| *id);

        let coords: Vec<[f64; 2]> = entries
            .iter()
            .map(|(_, pos)| [pos.x as f64, pos.y as f64])
            .collect();
        let tree: KdTree<f64, 2> = (&coords).into();

        Self {
            tree,
            point_ids: entries.iter().map(|(id, _)| *id).collect(),
            positions: entries.iter().map(|(_, pos)| *pos).collect(),
        }
    }

    /// Gibt die Anzahl indexierter Punkte zurück.
    pub fn len(&self) -> usize {
        self.point_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty()
    }

    /// Findet den nächsten Punkt zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let point_id = *self.point_ids.get(result.item as usize)?;

        Some(SpatialMatch {
            point_id,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Punkte innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| {
                let point_id = *self.point_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    point_id,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }

    /// Findet alle Punkte innerhalb eines axis-aligned Rechtecks.
    ///
    /// KD-Tree-Kreisabfrage um das Rechteck plus exakte Nachfilterung.
    pub fn within_rect(&self, min: Vec2, max: Vec2) -> Vec<u64> {
        if self.is_empty() {
            return Vec::new();
        }

        let center = (min + max) * 0.5;
        let half = (max - min) * 0.5;
        let radius_sq = (half.x as f64).powi(2) + (half.y as f64).powi(2);

        self.tree
            .within::<SquaredEuclidean>(&[center.x as f64, center.y as f64], radius_sq)
            .into_iter()
            .filter_map(|entry| {
                let index = entry.item as usize;
                let pos = self.positions.get(index)?;
                let inside = pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y;
                inside.then(|| self.point_ids.get(index).copied()).flatten()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> SpatialIndex {
        SpatialIndex::from_points([
            (1, Vec2::new(0.0, 0.0)),
            (2, Vec2::new(10.0, 0.0)),
            (3, Vec2::new(4.0, 3.0)),
        ])
    }

    #[test]
    fn nearest_returns_expected_point() {
        let nearest = sample_index()
            .nearest(Vec2::new(3.9, 2.9))
            .expect("Treffer erwartet");

        assert_eq!(nearest.point_id, 3);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn radius_query_returns_sorted_matches() {
        let matches = sample_index().within_radius(Vec2::new(0.0, 0.0), 6.0);

        let ids: Vec<u64> = matches.into_iter().map(|m| m.point_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn rect_query_returns_points_inside_bounds() {
        let mut ids = sample_index().within_rect(Vec2::new(-1.0, -1.0), Vec2::new(5.0, 3.5));
        ids.sort_unstable();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec2::new(0.0, 0.0)).is_none());
    }
}
