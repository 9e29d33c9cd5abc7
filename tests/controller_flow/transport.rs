use approx::assert_relative_eq;
use facility_layout_engine::core::{LegacyTransport, Rect, SegmentDefaults, Station, StationKind};
use facility_layout_engine::{
    AppController, AppIntent, AppState, EditorTool, InteractionMode, NodeKind,
};
use glam::Vec2;

use super::common::{click, drag, send, status};

fn track_state(controller: &mut AppController) -> (AppState, u64) {
    let mut state = AppState::new();
    send(
        controller,
        &mut state,
        AppIntent::CreateNetworkRequested {
            name: "AGV Halle 1".into(),
        },
    );
    send(
        controller,
        &mut state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::TrackDraw,
        },
    );
    let network_id = state.editor.active_network.expect("aktives Netzwerk");
    (state, network_id)
}

#[test]
fn track_chain_rejects_self_and_duplicate_connections() {
    let mut controller = AppController::new();
    let (mut state, network_id) = track_state(&mut controller);

    click(&mut controller, &mut state, Vec2::ZERO);
    click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    assert_eq!(state.layout.networks[&network_id].segments.len(), 1);

    // Zurück zum Vorgänger: Paar ist bereits verbunden
    click(&mut controller, &mut state, Vec2::new(2.0, 2.0));
    assert_eq!(status(&state), "Diese Punkte sind bereits verbunden");

    // Aktueller Startpunkt
    click(&mut controller, &mut state, Vec2::new(101.0, 1.0));
    assert_eq!(status(&state), "Punkt kann nicht mit sich selbst verbunden werden");

    click(&mut controller, &mut state, Vec2::new(100.0, 100.0));
    send(&mut controller, &mut state, AppIntent::FinishToolRequested);

    let network = &state.layout.networks[&network_id];
    assert_eq!(network.waypoints.len(), 3);
    assert_eq!(network.segments.len(), 2);
    assert!(!state.editor.track.is_drawing());
}

#[test]
fn escape_with_empty_chain_leaves_no_waypoint() {
    let mut controller = AppController::new();
    let (mut state, network_id) = track_state(&mut controller);
    let undo_before = state.history.undo_len();

    click(&mut controller, &mut state, Vec2::new(40.0, 40.0));
    send(&mut controller, &mut state, AppIntent::EscapePressed);

    assert!(state.layout.networks[&network_id].waypoints.is_empty());
    assert_eq!(state.history.undo_len(), undo_before);
}

#[test]
fn undo_on_empty_chain_then_escape_keeps_network() {
    let mut controller = AppController::new();
    let (mut state, network_id) = track_state(&mut controller);

    click(&mut controller, &mut state, Vec2::new(40.0, 40.0));
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    send(&mut controller, &mut state, AppIntent::EscapePressed);

    assert_eq!(state.layout.networks.len(), 1);
    assert!(state.layout.networks[&network_id].waypoints.is_empty());
    assert_eq!(state.history.undo_len(), 1);
}

#[test]
fn undo_mid_chain_then_escape_and_redo() {
    let mut controller = AppController::new();
    let (mut state, network_id) = track_state(&mut controller);

    click(&mut controller, &mut state, Vec2::ZERO);
    click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(!state.editor.track.is_drawing());
    assert!(state.layout.networks[&network_id].segments.is_empty());

    send(&mut controller, &mut state, AppIntent::EscapePressed);
    assert_eq!(state.layout.networks.len(), 1);

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.layout.networks[&network_id].segments.len(), 1);
}

#[test]
fn split_keeps_total_distance() {
    let mut controller = AppController::new();
    let (mut state, network_id) = track_state(&mut controller);
    click(&mut controller, &mut state, Vec2::ZERO);
    click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    send(&mut controller, &mut state, AppIntent::FinishToolRequested);

    click(&mut controller, &mut state, Vec2::new(30.0, 4.0));

    let network = &state.layout.networks[&network_id];
    assert_eq!(network.segments.len(), 2);
    let mut distances: Vec<f32> = network.segments.values().map(|s| s.distance).collect();
    distances.sort_by(f32::total_cmp);
    assert_relative_eq!(distances[0], 30.0, epsilon = 1e-3);
    assert_relative_eq!(distances[1], 70.0, epsilon = 1e-3);
}

/// Knick a(0,0), m(50,0), b(50,50); Select-Werkzeug aktiv.
fn bent_track() -> (AppState, u64, u64) {
    let mut state = AppState::new();
    let layout = state.layout_mut();
    let network_id = layout.create_network("AGV");
    let (network, ids) = layout.network_with_ids(network_id).expect("Netzwerk");
    let a = network.create_waypoint(Vec2::ZERO, ids);
    let m = network.create_waypoint(Vec2::new(50.0, 0.0), ids);
    let b = network.create_waypoint(Vec2::new(50.0, 50.0), ids);
    for (from, to) in [(a, m), (m, b)] {
        network
            .connect(from, to, SegmentDefaults::default(), ids)
            .expect("Segment");
    }
    (state, network_id, m)
}

#[test]
fn waypoint_drag_follows_nearest_track_leg() {
    let mut controller = AppController::new();
    let (mut state, network_id, m) = bent_track();

    drag(&mut controller, &mut state, Vec2::new(50.0, 0.0), &[Vec2::new(80.0, 10.0)]);

    let pos = state.layout.networks[&network_id]
        .point_position(m)
        .expect("Wegpunkt");
    assert_relative_eq!(pos.x, 50.0, epsilon = 1e-4);
    assert_relative_eq!(pos.y, 10.0, epsilon = 1e-4);
    assert_eq!(state.editor.active_network, Some(network_id));
}

#[test]
fn waypoint_moves_freely_in_design_mode() {
    let mut controller = AppController::new();
    let (mut state, network_id, m) = bent_track();
    send(
        &mut controller,
        &mut state,
        AppIntent::SetInteractionModeRequested {
            mode: InteractionMode::Design,
        },
    );

    drag(&mut controller, &mut state, Vec2::new(50.0, 0.0), &[Vec2::new(80.0, 10.0)]);

    let network = &state.layout.networks[&network_id];
    assert_eq!(network.point_position(m), Some(Vec2::new(80.0, 10.0)));
    let leg = network.segment_between(m, network.neighbors(m)[0]).expect("Segment");
    let (from, to) = network.segment_endpoints(leg).expect("Endpunkte");
    assert_relative_eq!(leg.distance, from.distance(to), epsilon = 1e-4);
}

#[test]
fn legacy_import_creates_network_once() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let mut source = AppState::new();
    let layout = source.layout_mut();
    let network_id = layout.create_network("alt");
    let (network, ids) = layout.network_with_ids(network_id).expect("Netzwerk");
    let a = network.create_waypoint(Vec2::ZERO, ids);
    let b = network.create_waypoint(Vec2::new(10.0, 0.0), ids);
    network
        .connect(a, b, SegmentDefaults::default(), ids)
        .expect("Segment");
    let legacy = LegacyTransport {
        stations: Vec::new(),
        waypoints: network.waypoints.values().cloned().collect(),
        segments: network.segments.values().cloned().collect(),
    };

    send(
        &mut controller,
        &mut state,
        AppIntent::ImportLegacyTransportRequested { legacy },
    );

    assert_eq!(state.layout.networks.len(), 1);
    let imported = state.layout.networks.values().next().expect("Netzwerk");
    assert!(imported.are_points_connected(a, b));
    let network_id = *state.layout.networks.keys().next().expect("Netzwerk-ID");
    assert!(network_id > b);
}

#[test]
fn legacy_import_into_populated_layout_keeps_ids_unique() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let node = state.layout_mut().create_node(
        "Presse",
        NodeKind::Machine,
        Rect::new(Vec2::ZERO, Vec2::new(40.0, 20.0)),
    );
    let legacy = LegacyTransport {
        stations: vec![Station::new(
            node,
            "Aufnahme",
            StationKind::Pickup,
            Rect::new(Vec2::new(300.0, 0.0), Vec2::new(10.0, 10.0)),
        )],
        waypoints: Vec::new(),
        segments: Vec::new(),
    };

    send(
        &mut controller,
        &mut state,
        AppIntent::ImportLegacyTransportRequested { legacy },
    );
    let network_id = state.editor.active_network.expect("importiertes Netzwerk");
    let station = *state.layout.networks[&network_id]
        .stations
        .keys()
        .next()
        .expect("Station");
    assert_ne!(station, node);

    click(&mut controller, &mut state, Vec2::new(20.0, 10.0));
    send(&mut controller, &mut state, AppIntent::DeleteSelectedRequested);

    assert!(!state.layout.nodes.contains_key(&node));
    assert!(state.layout.networks[&network_id].stations.contains_key(&station));
}
