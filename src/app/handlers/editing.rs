//! Handler für Platzierung, Kanten, Löschen und Editor-Werkzeug.

use crate::app::state::{EditorTool, NodeTemplate};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::InteractionMode;
use glam::Vec2;

/// Aktiviert ein Editor-Werkzeug. Angefangene Eingaben des alten Werkzeugs enden.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    if state.editor.active_tool == tool {
        return;
    }
    match state.editor.active_tool {
        EditorTool::TrackDraw => {
            use_cases::transport::finish_track(state);
        }
        EditorTool::ZoneDraw => use_cases::zones::cancel_zone(state),
        EditorTool::Select => {}
    }
    state.editor.active_tool = tool;
    state.editor.pending_node = None;
    state.set_status(format!("Editor-Werkzeug: {:?}", tool));
}

/// Setzt den Interaktionsmodus (entscheidet nur über die Drag-Erlaubnis).
pub fn set_interaction_mode(state: &mut AppState, mode: InteractionMode) {
    state.editor.mode = mode;
    state.set_status(format!("Modus: {}", mode.label()));
}

pub fn arm_node_placement(state: &mut AppState, template: NodeTemplate) {
    use_cases::placement::arm_node_placement(state, template);
}

pub fn place_pending_node(state: &mut AppState, world_pos: Vec2) {
    use_cases::placement::place_pending_node(state, world_pos);
}

pub fn connect_nodes(state: &mut AppState, from: u64, to: u64) {
    use_cases::editing::connect_nodes(state, from, to);
}

pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

pub fn set_edge_route(state: &mut AppState, edge_id: u64, route: Vec<Vec2>) {
    use_cases::editing::set_edge_route(state, edge_id, route);
}
