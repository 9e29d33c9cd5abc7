//! Use-Case: Sichtbarkeit und Sperre der Ebenen.
//!
//! Ebenen-Zustand ist Anzeigezustand und erzeugt keinen History-Eintrag.

use crate::app::AppState;
use crate::core::LayerKind;

pub fn set_layer_visible(state: &mut AppState, layer: LayerKind, visible: bool) {
    state.layout_mut().layers.set_visible(layer, visible);
    if !visible {
        drop_selection_on_layer(state, layer);
    }
    let message = if visible {
        format!("Ebene {:?} eingeblendet", layer)
    } else {
        format!("Ebene {:?} ausgeblendet", layer)
    };
    state.set_status(message);
}

pub fn set_layer_locked(state: &mut AppState, layer: LayerKind, locked: bool) {
    state.layout_mut().layers.set_locked(layer, locked);
    let message = if locked {
        format!("Ebene {:?} gesperrt", layer)
    } else {
        format!("Ebene {:?} entsperrt", layer)
    };
    state.set_status(message);
}

/// Unsichtbare Entities können nicht selektiert bleiben.
fn drop_selection_on_layer(state: &mut AppState, layer: LayerKind) {
    let hidden: Vec<u64> = state
        .selection
        .selected_ids
        .iter()
        .copied()
        .filter(|id| state.layout.entity_layer(*id) == Some(layer))
        .collect();
    if hidden.is_empty() {
        return;
    }
    let ids = state.selection.ids_mut();
    for id in hidden {
        ids.shift_remove(&id);
    }
}
