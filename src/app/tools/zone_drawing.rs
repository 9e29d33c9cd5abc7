//! Zonen-Zeichnen: Klicks sammeln Eckpunkte, Abschluss erzeugt das Polygon.

use glam::Vec2;

/// Mindestanzahl Eckpunkte einer gültigen Zone.
pub const MIN_ZONE_VERTICES: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct ZoneDrawingTool {
    vertices: Vec<Vec2>,
}

impl ZoneDrawingTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, pos: Vec2) {
        self.vertices.push(pos);
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn has_pending_input(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Entnimmt den Entwurf; `Err` mit der Punktzahl, wenn er zu klein ist.
    /// In beiden Fällen ist das Tool danach leer.
    pub fn take_polygon(&mut self) -> Result<Vec<Vec2>, usize> {
        let vertices = std::mem::take(&mut self.vertices);
        if vertices.len() < MIN_ZONE_VERTICES {
            Err(vertices.len())
        } else {
            Ok(vertices)
        }
    }

    /// Verwirft den Entwurf und liefert die Anzahl verworfener Punkte.
    pub fn discard(&mut self) -> usize {
        std::mem::take(&mut self.vertices).len()
    }
}
