//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
///
/// Während einer laufenden Zeiger-Interaktion wird nichts rückgängig gemacht.
pub fn undo(state: &mut AppState) {
    if !state.drag.is_idle() {
        log::debug!("Undo ignoriert: Interaktion aktiv");
        return;
    }
    // Laufender Gleis-Zug endet zuerst; ein leerer Zug ist damit bereits zurückgenommen
    if state.editor.track.is_drawing() && use_cases::transport::finish_track(state) {
        return;
    }
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        prev.apply_to(state);
        state.set_status("Rückgängig gemacht");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    if !state.drag.is_idle() {
        log::debug!("Redo ignoriert: Interaktion aktiv");
        return;
    }
    if state.editor.track.is_drawing() {
        use_cases::transport::finish_track(state);
    }
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        next.apply_to(state);
        state.set_status("Wiederhergestellt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
