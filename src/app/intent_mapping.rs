//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Zeiger-Drücke laufen durch eine feste Prioritätskette, die genau einen
//! Command liefert: Spezial-Werkzeuge > Node-Platzierung > Pan >
//! Rechteck-Selektion > Griffe der Selektion (Wegpunkt, Wand-Endpunkt,
//! Wandkörper) > allgemeiner Hit-Test.

use super::events::PointerModifiers;
use super::{AppCommand, AppIntent, AppState, EditorTool};
use crate::core::{hit_selected_handle, hit_test, HitResult, HitTarget};
use glam::Vec2;

#[cfg(test)]
mod tests;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed {
            world_pos,
            modifiers,
        } => vec![pointer_press_command(state, world_pos, modifiers)],
        AppIntent::PointerMoved { world_pos } => {
            if state.drag.is_idle() {
                vec![]
            } else {
                vec![AppCommand::UpdatePointer { world_pos }]
            }
        }
        AppIntent::PointerReleased { world_pos } => {
            if state.drag.is_idle() {
                vec![]
            } else {
                vec![AppCommand::EndPointer { world_pos }]
            }
        }
        AppIntent::EscapePressed => {
            if !state.drag.is_idle()
                || state.editor.pending_node.is_some()
                || state.editor.has_pending_tool_input()
            {
                vec![AppCommand::CancelInteraction]
            } else {
                vec![AppCommand::ClearSelection]
            }
        }
        AppIntent::FinishToolRequested => vec![AppCommand::FinishTool],
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::SetInteractionModeRequested { mode } => {
            vec![AppCommand::SetInteractionMode { mode }]
        }
        AppIntent::NodePlacementRequested { template } => {
            vec![AppCommand::ArmNodePlacement { template }]
        }
        AppIntent::ConnectNodesRequested { from, to } => {
            vec![AppCommand::ConnectNodes { from, to }]
        }
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelected],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ValidateRequested => vec![AppCommand::Validate],
        AppIntent::CreateHandoffRequested {
            crane_a,
            crane_b,
            kind,
            rule,
        } => vec![AppCommand::CreateHandoff {
            crane_a,
            crane_b,
            kind,
            rule,
        }],
        AppIntent::SetCraneZoneRequested {
            crane_id,
            zone_min,
            zone_max,
        } => vec![AppCommand::SetCraneZone {
            crane_id,
            zone_min,
            zone_max,
        }],
        AppIntent::LayerVisibilityToggled { layer } => vec![AppCommand::SetLayerVisible {
            layer,
            visible: !state.layout.layers.is_visible(layer),
        }],
        AppIntent::LayerLockToggled { layer } => vec![AppCommand::SetLayerLocked {
            layer,
            locked: !state.layout.layers.is_locked(layer),
        }],
        AppIntent::EdgeRouteReceived { edge_id, route } => {
            vec![AppCommand::SetEdgeRoute { edge_id, route }]
        }
        AppIntent::ImportLegacyTransportRequested { legacy } => {
            vec![AppCommand::ImportLegacyTransport { legacy }]
        }
        AppIntent::CreateNetworkRequested { name } => vec![AppCommand::CreateNetwork { name }],
        AppIntent::SelectNetworkRequested { network_id } => {
            vec![AppCommand::SelectNetwork { network_id }]
        }
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}

/// Feste Dispatch-Kette für Zeiger-Drücke.
fn pointer_press_command(
    state: &AppState,
    world_pos: Vec2,
    modifiers: PointerModifiers,
) -> AppCommand {
    match state.editor.active_tool {
        EditorTool::TrackDraw => return AppCommand::TrackToolClick { world_pos },
        EditorTool::ZoneDraw => return AppCommand::ZoneToolClick { world_pos },
        EditorTool::Select => {}
    }
    if state.editor.pending_node.is_some() {
        return AppCommand::PlacePendingNode { world_pos };
    }
    if modifiers.pan {
        return AppCommand::BeginPan { world_pos };
    }
    if modifiers.area_select {
        return AppCommand::BeginAreaSelect {
            world_pos,
            additive: modifiers.additive,
        };
    }

    let handle = hit_selected_handle(&state.layout, world_pos, &state.options, |id| {
        state.selection.contains(id)
    });
    let hit = handle.unwrap_or_else(|| hit_test(&state.layout, world_pos, &state.options));
    hit_command(state, hit, world_pos, modifiers.additive)
}

fn hit_command(state: &AppState, hit: HitResult, world_pos: Vec2, additive: bool) -> AppCommand {
    if !additive && state.editor.mode.permits_drag(&hit) {
        return AppCommand::BeginDrag { hit, world_pos };
    }
    if hit.target == HitTarget::Canvas && !additive {
        return AppCommand::ClearSelection;
    }
    AppCommand::SelectHit { hit, additive }
}
