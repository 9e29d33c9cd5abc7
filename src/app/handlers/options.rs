//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EngineOptions;

/// Übernimmt neue Optionen. Persistenz liegt beim Aufrufer.
///
/// Die History-Tiefe wirkt erst für neu erzeugte Zustände.
pub fn apply_options(state: &mut AppState, options: EngineOptions) {
    if options.history_depth != state.options.history_depth {
        log::debug!(
            "History-Tiefe {} → {} (gilt ab neuem Zustand)",
            state.options.history_depth,
            options.history_depth
        );
    }
    state.options = options;
    state.set_status("Optionen übernommen");
}
