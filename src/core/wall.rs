//! Wände als Hindernis-Geometrie (read-only Eingabe für Hit-Test und Router).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Wandstück zwischen zwei Endpunkten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: u64,
    pub start: Vec2,
    pub end: Vec2,
    /// Wandstärke in Welteinheiten
    pub thickness: f32,
}

/// Endpunkt einer Wand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallEnd {
    Start,
    End,
}

impl Wall {
    pub fn new(id: u64, start: Vec2, end: Vec2, thickness: f32) -> Self {
        Self {
            id,
            start,
            end,
            thickness,
        }
    }

    pub fn endpoint(&self, end: WallEnd) -> Vec2 {
        match end {
            WallEnd::Start => self.start,
            WallEnd::End => self.end,
        }
    }

    pub fn set_endpoint(&mut self, end: WallEnd, pos: Vec2) {
        match end {
            WallEnd::Start => self.start = pos,
            WallEnd::End => self.end = pos,
        }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}
