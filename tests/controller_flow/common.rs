use facility_layout_engine::{AppController, AppIntent, AppState, PointerModifiers};
use glam::Vec2;

/// Schickt einen Intent durch den Controller.
pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

pub fn click(controller: &mut AppController, state: &mut AppState, world_pos: Vec2) {
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            world_pos,
            modifiers: PointerModifiers::default(),
        },
    );
    send(controller, state, AppIntent::PointerReleased { world_pos });
}

/// Drücken, über die Zwischenpunkte bewegen, am letzten Punkt loslassen.
pub fn drag(controller: &mut AppController, state: &mut AppState, from: Vec2, path: &[Vec2]) {
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            world_pos: from,
            modifiers: PointerModifiers::default(),
        },
    );
    for &world_pos in path {
        send(controller, state, AppIntent::PointerMoved { world_pos });
    }
    let end = path.last().copied().unwrap_or(from);
    send(controller, state, AppIntent::PointerReleased { world_pos: end });
}

pub fn status(state: &AppState) -> &str {
    state.ui.status_message.as_deref().unwrap_or_default()
}
