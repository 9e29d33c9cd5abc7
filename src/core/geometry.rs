//! Geometrische Grundbausteine: Rechtecke, Segment-Projektion, Abstände.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Längen unterhalb dieser Schwelle gelten als entartet.
pub const DEGENERATE_EPSILON: f32 = 1e-4;

/// Achsenparalleles Rechteck (Position = linke obere Ecke).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Linke obere Ecke
    pub position: Vec2,
    /// Breite/Höhe
    pub size: Vec2,
}

impl Rect {
    /// Erstellt ein Rechteck aus Ecke und Größe.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Erstellt das kleinste Rechteck, das beide Punkte umschließt.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min, max - min)
    }

    pub fn min(&self) -> Vec2 {
        self.position
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Prüft ob der Punkt innerhalb (inkl. Rand) liegt.
    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y
    }

    /// Vergrößert das Rechteck in alle Richtungen um `margin`.
    pub fn expand(&self, margin: f32) -> Self {
        Self::new(
            self.position - Vec2::splat(margin),
            self.size + Vec2::splat(2.0 * margin),
        )
    }

    /// Vereinigung zweier Rechtecke.
    pub fn union(&self, other: &Rect) -> Self {
        Self::from_corners(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Verschiebt das Rechteck.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.position + delta, self.size)
    }
}

/// Projiziert `p` auf die Strecke `a`–`b`.
///
/// Gibt den Fußpunkt und den auf [0, 1] begrenzten Parameter zurück.
/// Entartete Strecken liefern `(a, 0.0)`.
pub fn project_onto_segment(p: Vec2, a: Vec2, b: Vec2) -> (Vec2, f32) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < DEGENERATE_EPSILON * DEGENERATE_EPSILON {
        return (a, 0.0);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t, t)
}

/// Kürzester Abstand von `p` zur Strecke `a`–`b`.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let (foot, _) = project_onto_segment(p, a, b);
    p.distance(foot)
}

/// Normalisiert einen Winkel in Grad auf [0, 360).
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid kann durch Rundung genau 360.0 liefern
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Punkt auf einem Kreis (Winkel in Grad, 0° = +x, gegen den Uhrzeigersinn).
pub fn point_on_circle(center: Vec2, radius: f32, angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    center + Vec2::new(rad.cos(), rad.sin()) * radius
}
