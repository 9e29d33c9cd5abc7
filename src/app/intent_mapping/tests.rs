use crate::app::{AppCommand, AppIntent, AppState, EditorTool, NodeTemplate, PointerModifiers};
use crate::core::{HitTarget, InteractionMode, LayerKind, NodeKind, Rect, WallEnd};
use glam::Vec2;

use super::map_intent_to_commands;

fn press(world_pos: Vec2, modifiers: PointerModifiers) -> AppIntent {
    AppIntent::PointerPressed {
        world_pos,
        modifiers,
    }
}

/// Wand von (0,0) nach (100,0), deren Startpunkt im Node-Rechteck liegt.
fn state_with_wall_under_node() -> (AppState, u64, u64) {
    let mut state = AppState::new();
    let layout = state.layout_mut();
    let node = layout.create_node(
        "Presse",
        NodeKind::Machine,
        Rect::new(Vec2::new(-10.0, -10.0), Vec2::new(20.0, 20.0)),
    );
    let wall = layout.create_wall(Vec2::ZERO, Vec2::new(100.0, 0.0), 0.3);
    (state, node, wall)
}

#[test]
fn special_tool_wins_over_all_modifiers() {
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::TrackDraw;
    let modifiers = PointerModifiers {
        pan: true,
        area_select: true,
        additive: false,
    };

    let commands = map_intent_to_commands(&state, press(Vec2::ONE, modifiers));

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::TrackToolClick { .. }));
}

#[test]
fn pending_placement_wins_over_hit_test() {
    let (mut state, _node, _wall) = state_with_wall_under_node();
    state.editor.pending_node = Some(NodeTemplate {
        name: "Puffer".into(),
        kind: NodeKind::Buffer,
        size: Vec2::splat(10.0),
    });

    let commands = map_intent_to_commands(&state, press(Vec2::ZERO, PointerModifiers::default()));

    assert!(matches!(commands[0], AppCommand::PlacePendingNode { .. }));
}

#[test]
fn pan_wins_over_area_select() {
    let state = AppState::new();
    let modifiers = PointerModifiers {
        pan: true,
        area_select: true,
        additive: false,
    };

    let commands = map_intent_to_commands(&state, press(Vec2::ZERO, modifiers));

    assert!(matches!(commands[0], AppCommand::BeginPan { .. }));
}

#[test]
fn generic_hit_prefers_node_body_over_wall() {
    let (state, node, _wall) = state_with_wall_under_node();

    let commands = map_intent_to_commands(&state, press(Vec2::ZERO, PointerModifiers::default()));

    match &commands[0] {
        AppCommand::BeginDrag { hit, .. } => {
            assert_eq!(hit.target, HitTarget::NodeBody { node_id: node })
        }
        other => panic!("BeginDrag erwartet, erhalten: {:?}", other),
    }
}

#[test]
fn selected_wall_endpoint_handle_wins_over_node_body() {
    let (mut state, _node, wall) = state_with_wall_under_node();
    state.selection.select_only(wall);

    let commands = map_intent_to_commands(&state, press(Vec2::ZERO, PointerModifiers::default()));

    match &commands[0] {
        AppCommand::BeginDrag { hit, .. } => assert_eq!(
            hit.target,
            HitTarget::WallEndpoint {
                wall_id: wall,
                end: WallEnd::Start
            }
        ),
        other => panic!("BeginDrag erwartet, erhalten: {:?}", other),
    }
}

#[test]
fn frictionless_mode_only_selects_free_nodes() {
    let (mut state, _node, _wall) = state_with_wall_under_node();
    state.editor.mode = InteractionMode::Frictionless;

    let commands = map_intent_to_commands(&state, press(Vec2::ZERO, PointerModifiers::default()));

    assert!(matches!(
        commands[0],
        AppCommand::SelectHit {
            additive: false,
            ..
        }
    ));
}

#[test]
fn canvas_press_clears_selection_unless_additive() {
    let state = AppState::new();

    let plain = map_intent_to_commands(
        &state,
        press(Vec2::splat(500.0), PointerModifiers::default()),
    );
    let additive = map_intent_to_commands(
        &state,
        press(
            Vec2::splat(500.0),
            PointerModifiers {
                additive: true,
                ..Default::default()
            },
        ),
    );

    assert!(matches!(plain[0], AppCommand::ClearSelection));
    assert!(matches!(additive[0], AppCommand::SelectHit { .. }));
}

#[test]
fn pointer_motion_without_interaction_maps_to_nothing() {
    let state = AppState::new();

    let moved = map_intent_to_commands(&state, AppIntent::PointerMoved { world_pos: Vec2::ONE });
    let released =
        map_intent_to_commands(&state, AppIntent::PointerReleased { world_pos: Vec2::ONE });

    assert!(moved.is_empty());
    assert!(released.is_empty());
}

#[test]
fn escape_cancels_pending_work_before_clearing_selection() {
    let mut state = AppState::new();
    assert!(matches!(
        map_intent_to_commands(&state, AppIntent::EscapePressed)[0],
        AppCommand::ClearSelection
    ));

    state.editor.active_tool = EditorTool::ZoneDraw;
    state.editor.zone.add_vertex(Vec2::ZERO);
    assert!(matches!(
        map_intent_to_commands(&state, AppIntent::EscapePressed)[0],
        AppCommand::CancelInteraction
    ));
}

#[test]
fn layer_toggle_inverts_current_state() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::LayerVisibilityToggled {
            layer: LayerKind::Spatial,
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::SetLayerVisible {
            layer: LayerKind::Spatial,
            visible: false
        }
    ));
}
