//! Use-Cases für strukturelle Änderungen: Löschen, manuelle Kanten, Routen.

use crate::app::AppState;
use glam::Vec2;

/// Löscht alle selektierten Entities samt Kaskaden.
///
/// Entities auf gesperrten Ebenen bleiben erhalten. Ein History-Eintrag
/// entsteht nur, wenn tatsächlich etwas gelöscht wurde.
pub fn delete_selected(state: &mut AppState) {
    if state.selection.is_empty() {
        state.set_status("Nichts selektiert");
        return;
    }

    let ids: Vec<u64> = state.selection.selected_ids.iter().copied().collect();
    let (deletable, locked): (Vec<u64>, Vec<u64>) = ids.into_iter().partition(|id| {
        state
            .layout
            .entity_layer(*id)
            .is_none_or(|layer| !state.layout.layers.is_locked(layer))
    });

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let layout = state.layout_mut();
    let removed = deletable
        .into_iter()
        .filter(|id| layout.remove_entity(*id))
        .count();

    if removed == 0 {
        state.history.discard_last();
    }
    state.selection.clear();
    if !locked.is_empty() {
        state.selection.ids_mut().extend(locked.iter().copied());
        log::warn!("{} Element(e) auf gesperrten Ebenen nicht gelöscht", locked.len());
    }

    let message = if locked.is_empty() {
        format!("{} Element(e) gelöscht", removed)
    } else {
        format!(
            "{} Element(e) gelöscht, {} gesperrt",
            removed,
            locked.len()
        )
    };
    state.set_status(message);
}

/// Legt eine manuelle Kante an. Duplikate sind hier ausdrücklich erlaubt.
pub fn connect_nodes(state: &mut AppState, from: u64, to: u64) -> Option<u64> {
    if from == to {
        state.set_status("Node kann nicht mit sich selbst verbunden werden");
        return None;
    }
    if !state.layout.nodes.contains_key(&from) || !state.layout.nodes.contains_key(&to) {
        log::warn!("Kante {} → {} verweist auf unbekannten Node", from, to);
        state.set_status(format!("Kante {} → {} nicht möglich: Node fehlt", from, to));
        return None;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let edge_id = state.layout_mut().add_edge(from, to)?;
    state.set_status(format!("Kante {} → {} angelegt", from, to));
    Some(edge_id)
}

/// Übernimmt eine vom externen Router gelieferte Route.
///
/// Kein History-Eintrag: Routen sind abgeleitete Daten.
pub fn set_edge_route(state: &mut AppState, edge_id: u64, route: Vec<Vec2>) {
    if !state.layout.edges.contains_key(&edge_id) {
        log::debug!("Route für unbekannte Kante {} verworfen", edge_id);
        return;
    }
    let points = route.len();
    state.layout_mut().set_edge_route(edge_id, route);
    log::debug!("Route für Kante {} übernommen ({} Punkte)", edge_id, points);
}
