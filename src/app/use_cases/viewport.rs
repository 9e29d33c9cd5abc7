//! Use-Case-Funktionen für das Verschieben der Ansicht.

use crate::app::drag::DragState;
use crate::app::AppState;
use glam::Vec2;

/// Startet das Verschieben der Ansicht.
pub fn begin_pan(state: &mut AppState, world_pos: Vec2) {
    if state.drag.is_idle() {
        state.drag = DragState::Panning { last: world_pos };
    }
}

/// Verschiebt die Ansicht um die Zeigerbewegung seit dem letzten Frame.
pub fn update_pan(state: &mut AppState, world_pos: Vec2) {
    if let DragState::Panning { last } = &mut state.drag {
        state.view.pan_offset += world_pos - *last;
        *last = world_pos;
    }
}

pub fn end_pan(state: &mut AppState, world_pos: Vec2) {
    update_pan(state, world_pos);
    if matches!(state.drag, DragState::Panning { .. }) {
        state.drag = DragState::Idle;
    }
}
