use facility_layout_engine::{AppController, AppIntent, AppState, EditorTool, InteractionMode};
use glam::Vec2;

use super::common::{click, drag, send, status};

fn zone_tool() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    send(
        &mut controller,
        &mut state,
        AppIntent::SetEditorToolRequested {
            tool: EditorTool::ZoneDraw,
        },
    );
    (controller, state)
}

#[test]
fn two_point_zone_is_discarded() {
    let (mut controller, mut state) = zone_tool();
    click(&mut controller, &mut state, Vec2::ZERO);
    click(&mut controller, &mut state, Vec2::new(50.0, 0.0));

    send(&mut controller, &mut state, AppIntent::FinishToolRequested);

    assert!(state.layout.zones.is_empty());
    assert!(status(&state).starts_with("Zone verworfen"));
    assert!(!state.can_undo());
}

#[test]
fn triangle_creates_zone_as_one_undo_step() {
    let (mut controller, mut state) = zone_tool();
    for p in [Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::new(0.0, 100.0)] {
        click(&mut controller, &mut state, p);
    }
    send(&mut controller, &mut state, AppIntent::FinishToolRequested);

    assert_eq!(state.layout.zones.len(), 1);
    assert_eq!(state.history.undo_len(), 1);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.layout.zones.is_empty());
}

#[test]
fn escape_discards_draft() {
    let (mut controller, mut state) = zone_tool();
    click(&mut controller, &mut state, Vec2::ZERO);
    click(&mut controller, &mut state, Vec2::new(100.0, 0.0));

    send(&mut controller, &mut state, AppIntent::EscapePressed);
    assert!(state.editor.zone.vertices().is_empty());

    // Ein späteres Fertig erzeugt nichts mehr
    send(&mut controller, &mut state, AppIntent::FinishToolRequested);
    assert!(state.layout.zones.is_empty());
}

fn triangle_zone() -> (AppState, u64) {
    let mut state = AppState::new();
    let id = state
        .layout_mut()
        .create_zone(
            "Lager",
            vec![Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::new(0.0, 100.0)],
        )
        .expect("Dreieck");
    (state, id)
}

#[test]
fn zone_vertex_stays_put_in_normal_mode() {
    let mut controller = AppController::new();
    let (mut state, zone) = triangle_zone();

    drag(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 0.0),
        &[Vec2::new(140.0, 20.0)],
    );

    assert_eq!(state.layout.zones[&zone].boundary.vertices[1], Vec2::new(100.0, 0.0));
    assert!(state.selection.contains(zone));
}

#[test]
fn zone_vertex_moves_in_design_mode() {
    let mut controller = AppController::new();
    let (mut state, zone) = triangle_zone();
    send(
        &mut controller,
        &mut state,
        AppIntent::SetInteractionModeRequested {
            mode: InteractionMode::Design,
        },
    );

    drag(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 0.0),
        &[Vec2::new(140.0, 20.0)],
    );

    let vertices = &state.layout.zones[&zone].boundary.vertices;
    assert_eq!(vertices[1], Vec2::new(140.0, 20.0));
    assert_eq!(vertices[0], Vec2::ZERO);
}
