use approx::assert_relative_eq;
use facility_layout_engine::core::{HandoffKind, HandoffRule};
use facility_layout_engine::{AppController, AppIntent, AppState, PointerModifiers};
use glam::Vec2;

use super::common::{drag, send, status};

/// Bahn (0,0)→(100,0) mit einem Kran, Zone [0.2, 0.6], Brücke bei t = 0.5.
fn runway_with_crane() -> (AppState, u64) {
    let mut state = AppState::new();
    let layout = state.layout_mut();
    let runway = layout.create_runway("Halle 1", Vec2::ZERO, Vec2::new(100.0, 0.0));
    let crane = layout
        .create_crane("K1", runway, 0.2, 0.6)
        .expect("Kran auf Bahn");
    (state, crane)
}

fn bridge_point(state: &AppState, crane_id: u64) -> Vec2 {
    let crane = &state.layout.cranes[&crane_id];
    crane.bridge_point(&state.layout.runways[&crane.runway_id])
}

#[test]
fn bridge_drag_stops_at_zone_end() {
    let mut controller = AppController::new();
    let (mut state, crane) = runway_with_crane();

    drag(
        &mut controller,
        &mut state,
        Vec2::new(50.0, 0.0),
        &[Vec2::new(70.0, 3.0), Vec2::new(90.0, 5.0)],
    );

    assert_relative_eq!(state.layout.cranes[&crane].bridge_position(), 0.6);
    let p = bridge_point(&state, crane);
    assert_relative_eq!(p.x, 60.0, epsilon = 1e-4);
    assert_relative_eq!(p.y, 0.0);
    assert!(state.drag.is_idle());
    assert_eq!(state.history.undo_len(), 1);
}

#[test]
fn escape_mid_drag_restores_bridge_without_history() {
    let mut controller = AppController::new();
    let (mut state, crane) = runway_with_crane();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerPressed {
            world_pos: Vec2::new(50.0, 0.0),
            modifiers: PointerModifiers::default(),
        },
    );
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            world_pos: Vec2::new(25.0, 0.0),
        },
    );
    assert_relative_eq!(state.layout.cranes[&crane].bridge_position(), 0.25);

    send(&mut controller, &mut state, AppIntent::EscapePressed);

    assert_relative_eq!(state.layout.cranes[&crane].bridge_position(), 0.5);
    assert!(!state.can_undo());
    assert!(state.drag.is_idle());
}

#[test]
fn undo_after_bridge_drag_restores_parameter() {
    let mut controller = AppController::new();
    let (mut state, crane) = runway_with_crane();

    drag(&mut controller, &mut state, Vec2::new(50.0, 0.0), &[Vec2::new(30.0, 0.0)]);
    assert_relative_eq!(state.layout.cranes[&crane].bridge_position(), 0.3);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_relative_eq!(state.layout.cranes[&crane].bridge_position(), 0.5);

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_relative_eq!(state.layout.cranes[&crane].bridge_position(), 0.3);
}

#[test]
fn handoff_between_overlapping_cranes() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let layout = state.layout_mut();
    let runway = layout.create_runway("Bahn", Vec2::ZERO, Vec2::new(200.0, 0.0));
    let a = layout.create_crane("A", runway, 0.0, 0.6).expect("Kran A");
    let b = layout.create_crane("B", runway, 0.4, 1.0).expect("Kran B");

    send(
        &mut controller,
        &mut state,
        AppIntent::CreateHandoffRequested {
            crane_a: a,
            crane_b: b,
            kind: HandoffKind::GroundBuffer,
            rule: HandoffRule::ClearAndPickup,
        },
    );

    assert_eq!(state.layout.handoffs.len(), 1);
    let handoff = state.layout.handoffs.values().next().expect("Übergabepunkt");
    assert_relative_eq!(handoff.runway_t, 0.5, epsilon = 1e-6);
    assert_relative_eq!(handoff.position.x, 100.0, epsilon = 1e-3);
    assert_eq!(handoff.kind, HandoffKind::GroundBuffer);
}

#[test]
fn handoff_without_overlap_is_rejected_with_message() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let layout = state.layout_mut();
    let runway = layout.create_runway("Bahn", Vec2::ZERO, Vec2::new(200.0, 0.0));
    let a = layout.create_crane("A", runway, 0.0, 0.3).expect("Kran A");
    let b = layout.create_crane("B", runway, 0.5, 1.0).expect("Kran B");

    send(
        &mut controller,
        &mut state,
        AppIntent::CreateHandoffRequested {
            crane_a: a,
            crane_b: b,
            kind: HandoffKind::Direct,
            rule: HandoffRule::Transfer,
        },
    );

    assert!(state.layout.handoffs.is_empty());
    assert!(status(&state).contains("überlappen nicht"));
    assert!(!state.can_undo());
}

#[test]
fn zone_change_pulls_bridge_into_new_zone() {
    let mut controller = AppController::new();
    let (mut state, crane) = runway_with_crane();

    send(
        &mut controller,
        &mut state,
        AppIntent::SetCraneZoneRequested {
            crane_id: crane,
            zone_min: 0.9,
            zone_max: 0.7,
        },
    );

    let c = &state.layout.cranes[&crane];
    assert_relative_eq!(c.zone_min(), 0.7);
    assert_relative_eq!(c.zone_max(), 0.9);
    assert_relative_eq!(c.bridge_position(), 0.7);
}
