//! Handler für Gleis- und Zonen-Werkzeug.

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

pub fn track_click(state: &mut AppState, world_pos: Vec2) {
    use_cases::transport::track_tool_click(state, world_pos);
}

pub fn zone_click(state: &mut AppState, world_pos: Vec2) {
    use_cases::zones::zone_tool_click(state, world_pos);
}

/// Schließt das aktive Werkzeug ab (Gleis-Zug beenden bzw. Zone erzeugen).
pub fn finish(state: &mut AppState) {
    match state.editor.active_tool {
        EditorTool::TrackDraw => {
            use_cases::transport::finish_track(state);
        }
        EditorTool::ZoneDraw => {
            use_cases::zones::finish_zone(state);
        }
        EditorTool::Select => log::debug!("Kein Werkzeug zum Abschließen aktiv"),
    }
}
