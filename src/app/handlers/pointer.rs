//! Handler für Zeiger-Interaktionen: Drag, Pan, Rechteck-Selektion, Abbruch.

use crate::app::drag::DragState;
use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::HitResult;
use glam::Vec2;

pub fn begin_pan(state: &mut AppState, world_pos: Vec2) {
    use_cases::viewport::begin_pan(state, world_pos);
}

pub fn begin_area_select(state: &mut AppState, world_pos: Vec2, additive: bool) {
    use_cases::selection::begin_area_select(state, world_pos, additive);
}

pub fn begin_drag(state: &mut AppState, hit: HitResult, world_pos: Vec2) {
    use_cases::drag::begin_drag(state, hit, world_pos);
}

/// Speist eine Zeigerbewegung in die aktive Interaktion ein.
pub fn update(state: &mut AppState, world_pos: Vec2) {
    match state.drag {
        DragState::Idle => {}
        DragState::Dragging { .. } => use_cases::drag::update_drag(state, world_pos),
        DragState::Panning { .. } => use_cases::viewport::update_pan(state, world_pos),
        DragState::AreaSelecting { .. } => {
            use_cases::selection::update_area_select(state, world_pos)
        }
    }
}

/// Schließt die aktive Interaktion ab.
pub fn end(state: &mut AppState, world_pos: Vec2) {
    match state.drag {
        DragState::Idle => {}
        DragState::Dragging { .. } => use_cases::drag::end_drag(state, world_pos),
        DragState::Panning { .. } => use_cases::viewport::end_pan(state, world_pos),
        DragState::AreaSelecting { .. } => {
            super::selection::end_area_select(state, world_pos)
        }
    }
}

/// Escape: bricht genau eine Ebene ab (Interaktion > Platzierung > Werkzeug-Entwurf).
pub fn cancel(state: &mut AppState) {
    match state.drag {
        DragState::Dragging { .. } => {
            use_cases::drag::cancel_drag(state);
            return;
        }
        DragState::Panning { .. } | DragState::AreaSelecting { .. } => {
            state.drag = DragState::Idle;
            log::debug!("Zeiger-Interaktion abgebrochen");
            return;
        }
        DragState::Idle => {}
    }
    if use_cases::placement::cancel_node_placement(state) {
        return;
    }
    match state.editor.active_tool {
        EditorTool::TrackDraw => {
            use_cases::transport::finish_track(state);
        }
        EditorTool::ZoneDraw => use_cases::zones::cancel_zone(state),
        EditorTool::Select => {}
    }
}
