//! Handler für Selektions-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::{AppState, SelectionState};
use crate::core::HitResult;

/// Zeichnet einen Undo-Snapshot auf, wenn sich die Selektion geändert hat.
fn record_if_selection_changed(state: &mut AppState, old_selection: SelectionState) {
    if old_selection.selected_ids != state.selection.selected_ids {
        let snap = Snapshot {
            layout: state.layout.clone(),
            selection: old_selection,
        };
        state.history.record_snapshot(snap);
    }
}

/// Selektiert die getroffene Entity ohne Drag.
pub fn select_hit(state: &mut AppState, hit: HitResult, additive: bool) {
    let old = state.selection.clone();
    use_cases::selection::select_hit(state, hit, additive);
    record_if_selection_changed(state, old);
}

/// Schließt eine Rechteck-Selektion ab.
pub fn end_area_select(state: &mut AppState, world_pos: glam::Vec2) {
    let old = state.selection.clone();
    use_cases::selection::end_area_select(state, world_pos);
    record_if_selection_changed(state, old);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::clear_selection(state);
    record_if_selection_changed(state, old);
}
