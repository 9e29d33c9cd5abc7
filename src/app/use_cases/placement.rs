//! Use-Case: Node-Platzierung mit Terminal-Anziehung.

use crate::app::state::NodeTemplate;
use crate::app::AppState;
use crate::core::{attract_on_placement, Rect};
use glam::Vec2;

/// Merkt eine Vorlage für den nächsten Klick vor.
pub fn arm_node_placement(state: &mut AppState, template: NodeTemplate) {
    let message = format!("'{}' platzieren: Position wählen", template.name);
    state.editor.pending_node = Some(template);
    state.set_status(message);
}

/// Setzt den vorgemerkten Node zentriert auf die Klickposition.
///
/// Der neue Node wird auf das nächste passende Terminal gezogen und
/// verknüpft (Platzierungs-Schwelle).
pub fn place_pending_node(state: &mut AppState, world_pos: Vec2) -> Option<u64> {
    let template = state.editor.pending_node.take()?;

    let mut position = world_pos - template.size * 0.5;
    if state.options.snap_to_grid {
        position = state.options.snap_to_grid_point(position);
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let threshold = state.options.placement_snap_distance;
    let stick_out = state.options.terminal_stick_out;
    let layout = state.layout_mut();
    let node_id = layout.create_node(
        template.name.clone(),
        template.kind,
        Rect::new(position, template.size),
    );
    let outcome = attract_on_placement(layout, node_id, threshold, stick_out);

    state.selection.select_only(node_id);
    let message = if outcome.created_edges.is_empty() {
        format!("'{}' platziert", template.name)
    } else {
        format!(
            "'{}' platziert und mit {} Kante(n) verbunden",
            template.name,
            outcome.created_edges.len()
        )
    };
    state.set_status(message);
    Some(node_id)
}

/// Verwirft eine vorgemerkte Platzierung.
pub fn cancel_node_placement(state: &mut AppState) -> bool {
    let Some(template) = state.editor.pending_node.take() else {
        return false;
    };
    state.set_status(format!("Platzierung von '{}' abgebrochen", template.name));
    true
}
