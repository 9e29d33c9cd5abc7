//! Interaktionsmodi. Der Modus ändert nie die Hit-Klassifikation, sondern
//! nur, ob der Aufrufer einen Drag zulässt.

use serde::{Deserialize, Serialize};

use super::hit_test::{HitResult, HitTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Alltagsbetrieb: Infrastruktur-Geometrie bleibt fest
    #[default]
    Normal,
    /// Planung: alles verschiebbar, Wegpunkte ohne Gleis-Constraint
    Design,
    /// Nur geführte Bewegungen (Kranbrücke, Haken, Wegpunkt)
    Frictionless,
}

impl InteractionMode {
    /// Entscheidet, ob ein Treffer gezogen werden darf.
    pub fn permits_drag(self, hit: &HitResult) -> bool {
        if !hit.interactive || !hit.target.is_draggable() {
            return false;
        }
        match self {
            InteractionMode::Design => true,
            InteractionMode::Frictionless => hit.target.is_constrained(),
            InteractionMode::Normal => !matches!(
                hit.target,
                HitTarget::ZoneVertex { .. } | HitTarget::Runway { .. }
            ),
        }
    }

    /// Wegpunkte folgen beim Ziehen ihren Segmenten.
    pub fn constrains_waypoints(self) -> bool {
        self != InteractionMode::Design
    }

    pub fn label(self) -> &'static str {
        match self {
            InteractionMode::Normal => "Normal",
            InteractionMode::Design => "Design",
            InteractionMode::Frictionless => "Geführt",
        }
    }
}
