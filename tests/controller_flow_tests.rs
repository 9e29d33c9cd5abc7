use facility_layout_engine::core::{IssueKind, Rect, Severity};
use facility_layout_engine::{
    AppCommand, AppController, AppIntent, AppState, EngineOptions, LayerKind, NodeKind,
    PointerModifiers,
};
use glam::Vec2;

mod controller_flow;

#[test]
fn test_validate_requested_logs_command_and_stores_issues() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let layout = state.layout_mut();
    let network_id = layout.create_network("AGV");
    let (network, ids) = layout
        .network_with_ids(network_id)
        .expect("Netzwerk sollte existieren");
    network.create_waypoint(Vec2::new(10.0, 10.0), ids);

    controller
        .handle_intent(&mut state, AppIntent::ValidateRequested)
        .expect("ValidateRequested sollte ohne Fehler durchlaufen");

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::Validate));

    let orphan = state
        .ui
        .validation_issues
        .iter()
        .find(|i| i.kind == IssueKind::OrphanedPoint)
        .expect("Verwaister Wegpunkt sollte gemeldet werden");
    assert_eq!(orphan.severity, Severity::Warning);
    assert!(state
        .ui
        .status_message
        .as_deref()
        .is_some_and(|m| m.starts_with("Validierung:")));
}

#[test]
fn test_hidden_layer_is_not_hit() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let node = state.layout_mut().create_node(
        "Presse",
        NodeKind::Machine,
        Rect::new(Vec2::ZERO, Vec2::new(40.0, 20.0)),
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::LayerVisibilityToggled {
                layer: LayerKind::Equipment,
            },
        )
        .expect("LayerVisibilityToggled sollte ohne Fehler durchlaufen");
    assert!(!state.layout.layers.is_visible(LayerKind::Equipment));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                world_pos: Vec2::new(20.0, 10.0),
                modifiers: PointerModifiers::default(),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");

    assert!(!state.selection.contains(node));
    assert!(state.drag.is_idle());
}

#[test]
fn test_options_changed_replaces_options_in_memory() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let options = EngineOptions {
        link_snap_distance: 25.0,
        snap_to_grid: true,
        ..EngineOptions::default()
    };

    controller
        .handle_intent(
            &mut state,
            AppIntent::OptionsChanged {
                options: Box::new(options),
            },
        )
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.options.link_snap_distance, 25.0);
    assert!(state.options.snap_to_grid);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::ApplyOptions { .. })
    ));
}
