//! Use-Cases für Brückenkrane: Einsatzzonen und Übergabepunkte.

use crate::app::AppState;
use crate::core::{HandoffKind, HandoffRule};

/// Erstellt einen Übergabepunkt in der Mitte der Zonen-Überlappung.
pub fn create_handoff(
    state: &mut AppState,
    crane_a: u64,
    crane_b: u64,
    kind: HandoffKind,
    rule: HandoffRule,
) -> Option<u64> {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    match state.layout_mut().create_handoff(crane_a, crane_b, kind, rule) {
        Ok(id) => {
            state.selection.select_only(id);
            state.set_status(format!(
                "Übergabepunkt zwischen Kran {} und Kran {} erstellt",
                crane_a, crane_b
            ));
            Some(id)
        }
        Err(e) => {
            state.history.discard_last();
            log::warn!("Übergabepunkt abgelehnt: {}", e);
            state.set_status(format!("Übergabepunkt nicht möglich: {}", e));
            None
        }
    }
}

/// Setzt die Einsatzzone eines Krans; die Brücke wird in die Zone gezogen.
///
/// Bestehende Übergabepunkte bleiben an ihrer Position.
pub fn set_crane_zone(state: &mut AppState, crane_id: u64, zone_min: f32, zone_max: f32) {
    if !state.layout.cranes.contains_key(&crane_id) {
        log::warn!("Einsatzzone für unbekannten Kran {} ignoriert", crane_id);
        state.set_status(format!("Kran {} existiert nicht", crane_id));
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let layout = state.layout_mut();
    let Some(crane) = layout.cranes.get_mut(&crane_id) else {
        return;
    };
    crane.set_zone(zone_min, zone_max);
    let (min, max) = (crane.zone_min(), crane.zone_max());
    layout.mark_dirty();

    let overlaps = layout
        .overlapping_crane_pairs()
        .into_iter()
        .filter(|(a, b, _)| *a == crane_id || *b == crane_id)
        .count();
    let message = if overlaps == 0 {
        format!("Kran {}: Einsatzzone {:.2} bis {:.2}", crane_id, min, max)
    } else {
        format!(
            "Kran {}: Einsatzzone {:.2} bis {:.2}, überlappt mit {} Kran/Kranen",
            crane_id, min, max, overlaps
        )
    };
    state.set_status(message);
}
