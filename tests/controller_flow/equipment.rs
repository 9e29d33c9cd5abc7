use facility_layout_engine::core::Rect;
use facility_layout_engine::{
    AppController, AppIntent, AppState, EngineOptions, InteractionMode, NodeKind, NodeTemplate,
};
use glam::Vec2;

use super::common::{click, drag, send, status};

/// Terminals ohne Überstand, damit Terminal = Rechteckkante.
fn flush_terminal_state() -> AppState {
    AppState::with_options(EngineOptions {
        terminal_stick_out: 0.0,
        ..EngineOptions::default()
    })
}

fn machine(state: &mut AppState, name: &str, position: Vec2) -> u64 {
    state
        .layout_mut()
        .create_node(name, NodeKind::Machine, Rect::new(position, Vec2::new(40.0, 20.0)))
}

#[test]
fn drag_to_forty_pixels_creates_exactly_one_edge() {
    let mut controller = AppController::new();
    let mut state = flush_terminal_state();
    // A: Ausgang bei (100,50)
    let a = machine(&mut state, "A", Vec2::new(60.0, 40.0));
    let b = machine(&mut state, "B", Vec2::new(300.0, 40.0));

    // B so ziehen, dass sein Eingang bei (140,50) liegt
    drag(
        &mut controller,
        &mut state,
        Vec2::new(320.0, 50.0),
        &[Vec2::new(200.0, 50.0), Vec2::new(160.0, 50.0)],
    );

    let layout = &state.layout;
    assert_eq!(layout.nodes[&b].bounds.position, Vec2::new(140.0, 40.0));
    assert_eq!(layout.edges.len(), 1);
    assert!(layout.has_edge(a, b));
    assert!(status(&state).contains("automatisch verbunden"));
}

#[test]
fn second_drag_does_not_duplicate_auto_edge() {
    let mut controller = AppController::new();
    let mut state = flush_terminal_state();
    let a = machine(&mut state, "A", Vec2::new(60.0, 40.0));
    let b = machine(&mut state, "B", Vec2::new(140.0, 40.0));
    state.layout_mut().add_edge(a, b).expect("Kante");

    drag(
        &mut controller,
        &mut state,
        Vec2::new(160.0, 50.0),
        &[Vec2::new(158.0, 50.0)],
    );

    // Abstand 38 liegt unter der Schwelle, die Kante existiert aber schon
    assert_eq!(state.layout.nodes[&b].bounds.position, Vec2::new(138.0, 40.0));
    assert_eq!(state.layout.edges.len(), 1);
}

#[test]
fn placement_attracts_to_nearby_terminal() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let stick_out = state.options.terminal_stick_out;
    let a = machine(&mut state, "A", Vec2::ZERO);

    send(
        &mut controller,
        &mut state,
        AppIntent::NodePlacementRequested {
            template: NodeTemplate {
                name: "B".into(),
                kind: NodeKind::Machine,
                size: Vec2::new(40.0, 20.0),
            },
        },
    );
    click(&mut controller, &mut state, Vec2::new(100.0, 20.0));

    let b = *state
        .selection
        .selected_ids
        .iter()
        .next()
        .expect("neuer Node selektiert");
    let layout = &state.layout;
    let exit = layout.nodes[&a].output_terminal(stick_out).expect("Ausgang");
    let entry = layout.nodes[&b].input_terminal(stick_out).expect("Eingang");
    assert!(exit.distance(entry) < 1e-4);
    assert!(layout.has_edge(a, b));
}

#[test]
fn moving_node_clears_cached_routes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = machine(&mut state, "A", Vec2::ZERO);
    let b = machine(&mut state, "B", Vec2::new(300.0, 0.0));
    let edge = state.layout_mut().add_edge(a, b).expect("Kante");
    send(
        &mut controller,
        &mut state,
        AppIntent::EdgeRouteReceived {
            edge_id: edge,
            route: vec![Vec2::new(52.0, 10.0), Vec2::new(150.0, 80.0), Vec2::new(288.0, 10.0)],
        },
    );
    assert!(state.layout.edges[&edge].route.is_some());

    drag(&mut controller, &mut state, Vec2::new(20.0, 10.0), &[Vec2::new(20.0, 60.0)]);

    assert!(state.layout.edges[&edge].route.is_none());
}

#[test]
fn frictionless_mode_does_not_move_free_nodes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = machine(&mut state, "A", Vec2::ZERO);
    send(
        &mut controller,
        &mut state,
        AppIntent::SetInteractionModeRequested {
            mode: InteractionMode::Frictionless,
        },
    );

    drag(&mut controller, &mut state, Vec2::new(20.0, 10.0), &[Vec2::new(80.0, 10.0)]);

    assert_eq!(state.layout.nodes[&a].bounds.position, Vec2::ZERO);
    assert!(state.selection.contains(a));
}

#[test]
fn delete_cascades_and_undo_restores() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let a = machine(&mut state, "A", Vec2::ZERO);
    let b = machine(&mut state, "B", Vec2::new(100.0, 0.0));
    let edge = state.layout_mut().add_edge(a, b).expect("Kante");
    let group = state.layout_mut().create_group("Zelle", [a, b], true);

    click(&mut controller, &mut state, Vec2::new(20.0, 10.0));
    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert!(!state.layout.nodes.contains_key(&a));
    assert!(!state.layout.edges.contains_key(&edge));
    assert!(!state.layout.groups[&group].members.contains(&a));

    send(&mut controller, &mut state, AppIntent::UndoRequested);

    assert!(state.layout.nodes.contains_key(&a));
    assert!(state.layout.edges.contains_key(&edge));
    assert!(state.layout.groups[&group].members.contains(&a));
}
