//! Bewegungs-Constraints: projizieren freie Zeigerpositionen auf Bahnen.
//!
//! Jeder Constraint liefert neben dem projizierten Weltpunkt einen
//! kanonischen Parameter (`ConstraintParam`). Der Parameter ist maßgeblich:
//! ändert sich die Grundgeometrie (z.B. verschobene Kranbahn), wird der
//! Weltpunkt per `point_at` neu abgeleitet statt verschoben.

mod arc;
mod line;
mod polygon;
mod polyline;


pub use arc::ArcConstraint;
pub use line::LineConstraint;
pub use polygon::Polygon;
pub use polyline::PolylineConstraint;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Kanonischer Parameter einer Projektion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConstraintParam {
    /// Normierter Bahnparameter t ∈ [zone_min, zone_max]
    Line { t: f32 },
    /// Winkel in Grad, normalisiert auf [0, 360)
    Arc { angle_deg: f32 },
    /// Segment-Index und lokaler Parameter t ∈ [0, 1]
    Polyline { segment: usize, t: f32 },
}

/// Ergebnis einer Projektion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Projizierter Weltpunkt
    pub point: Vec2,
    /// Kanonischer Parameter (für idempotente Neuberechnung)
    pub param: ConstraintParam,
}

/// Geschlossene Menge der Drag-Constraints.
///
/// Polygone dienen nur der Zonen-Zugehörigkeit und sind deshalb kein
/// Drag-Constraint (siehe [`Polygon`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Gerade mit Teilbereich (Kranbahn)
    Line(LineConstraint),
    /// Kreisbogen (Schwenkkran)
    Arc(ArcConstraint),
    /// Streckenzug (Wegpunkt zwischen Gleissegmenten)
    Polyline(PolylineConstraint),
}

impl Constraint {
    /// Projiziert einen freien Punkt auf den Constraint.
    pub fn project(&self, p: Vec2) -> Projection {
        match self {
            Constraint::Line(line) => line.project(p),
            Constraint::Arc(arc) => arc.project(p),
            Constraint::Polyline(polyline) => polyline.project(p),
        }
    }

    /// Leitet den Weltpunkt aus einem gespeicherten Parameter ab.
    ///
    /// `None`, wenn der Parameter nicht zur Constraint-Art passt oder die
    /// Geometrie keinen Punkt liefern kann (leerer Streckenzug).
    pub fn point_at(&self, param: ConstraintParam) -> Option<Vec2> {
        match (self, param) {
            (Constraint::Line(line), ConstraintParam::Line { t }) => Some(line.point_at(t)),
            (Constraint::Arc(arc), ConstraintParam::Arc { angle_deg }) => {
                Some(arc.point_at(angle_deg))
            }
            (Constraint::Polyline(polyline), ConstraintParam::Polyline { segment, t }) => {
                polyline.point_at(segment, t)
            }
            _ => None,
        }
    }
}
