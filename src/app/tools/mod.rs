//! Interaktive Zeichen-Werkzeuge.
//!
//! Tools klassifizieren Eingaben und halten ihren Entwurfszustand; sie
//! mutieren das Layout nie selbst. Die Anwendung erfolgt zentral in den
//! Use-Cases.

/// Gleis-Zeichnen mit automatischer Ketten-Fortsetzung.
pub mod track_drawing;
/// Zonen-Polygon per Klick.
pub mod zone_drawing;

pub use track_drawing::{TrackAnchor, TrackClick, TrackDrawingTool, TrackPhase};
pub use zone_drawing::{ZoneDrawingTool, MIN_ZONE_VERTICES};
