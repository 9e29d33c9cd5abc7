//! Use-Cases des Zonen-Werkzeugs.

use crate::app::tools::MIN_ZONE_VERTICES;
use crate::app::AppState;
use glam::Vec2;

/// Fügt dem Zonen-Entwurf einen Eckpunkt hinzu.
pub fn zone_tool_click(state: &mut AppState, world_pos: Vec2) {
    let pos = if state.options.snap_to_grid {
        state.options.snap_to_grid_point(world_pos)
    } else {
        world_pos
    };
    state.editor.zone.add_vertex(pos);
    let count = state.editor.zone.vertices().len();
    state.set_status(format!("Zone: {} Eckpunkt(e)", count));
}

/// Schließt den Entwurf ab. Unter drei Eckpunkten wird nichts erzeugt.
pub fn finish_zone(state: &mut AppState) -> Option<u64> {
    if !state.editor.zone.has_pending_input() {
        return None;
    }
    let vertices = match state.editor.zone.take_polygon() {
        Ok(vertices) => vertices,
        Err(count) => {
            log::warn!("Zone mit {} Eckpunkt(en) verworfen", count);
            state.set_status(format!(
                "Zone verworfen: mindestens {} Eckpunkte nötig ({} gesetzt)",
                MIN_ZONE_VERTICES, count
            ));
            return None;
        }
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let name = format!("Zone {}", state.layout.zones.len() + 1);
    let Some(id) = state.layout_mut().create_zone(name.as_str(), vertices) else {
        state.history.discard_last();
        state.set_status("Zone verworfen: ungültiges Polygon");
        return None;
    };
    state.selection.select_only(id);
    state.set_status(format!("'{}' erstellt", name));
    Some(id)
}

/// Verwirft den Entwurf (Escape).
pub fn cancel_zone(state: &mut AppState) {
    let discarded = state.editor.zone.discard();
    if discarded > 0 {
        state.set_status(format!("Zonen-Entwurf mit {} Eckpunkt(en) verworfen", discarded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_point_zone_is_discarded_with_message() {
        let mut state = AppState::new();
        zone_tool_click(&mut state, Vec2::ZERO);
        zone_tool_click(&mut state, Vec2::new(10.0, 0.0));

        assert_eq!(finish_zone(&mut state), None);

        assert!(state.layout.zones.is_empty());
        assert!(!state.editor.zone.has_pending_input());
        assert!(!state.can_undo());
        assert!(state
            .ui
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Zone verworfen")));
    }

    #[test]
    fn triangle_becomes_selected_zone() {
        let mut state = AppState::new();
        for p in [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)] {
            zone_tool_click(&mut state, p);
        }

        let id = finish_zone(&mut state).expect("Zone erstellt");

        assert_eq!(state.layout.zones[&id].boundary.vertices.len(), 3);
        assert!(state.selection.contains(id));
        assert!(state.can_undo());
    }

    #[test]
    fn grid_snap_applies_to_vertices() {
        let mut state = AppState::new();
        state.options.snap_to_grid = true;
        state.options.grid_size = 10.0;

        zone_tool_click(&mut state, Vec2::new(12.0, 18.0));

        assert_eq!(state.editor.zone.vertices(), &[Vec2::new(10.0, 20.0)]);
    }
}
