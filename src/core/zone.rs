//! Planungszonen als geschlossene Polygone.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::constraint::Polygon;

/// Art einer Planungszone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneKind {
    #[default]
    Planning,
    Restricted,
    Storage,
    Corridor,
}

/// Benannte Zone mit Polygon-Grenze (gültig ab drei Punkten).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: u64,
    pub name: String,
    pub kind: ZoneKind,
    pub boundary: Polygon,
}

impl Zone {
    pub fn new(id: u64, name: impl Into<String>, vertices: Vec<Vec2>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: ZoneKind::default(),
            boundary: Polygon::new(vertices),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.boundary.is_valid()
    }

    pub fn contains(&self, p: Vec2) -> bool {
        self.boundary.contains(p)
    }
}
