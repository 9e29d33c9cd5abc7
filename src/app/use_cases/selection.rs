//! Use-Case: Selektion per Klick und per Rechteck.

use crate::app::drag::DragState;
use crate::app::AppState;
use crate::core::{FacilityLayout, HitResult, HitTarget, LayerKind};
use glam::Vec2;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Selektiert die getroffene Entity.
///
/// Additiv wird die Entity umgeschaltet, sonst ersetzt sie die Selektion.
/// Klick auf Gleis-Elemente macht deren Netzwerk zum aktiven Netzwerk.
pub fn select_hit(state: &mut AppState, hit: HitResult, additive: bool) {
    let Some(id) = hit.target.entity_id() else {
        if !additive {
            clear_selection(state);
        }
        return;
    };

    if additive {
        let ids = state.selection.ids_mut();
        if !ids.shift_remove(&id) {
            ids.insert(id);
        }
    } else {
        state.selection.select_only(id);
    }

    if let HitTarget::TrackWaypoint { network_id, .. }
    | HitTarget::TrackStation { network_id, .. }
    | HitTarget::TrackSegment { network_id, .. } = hit.target
    {
        state.editor.active_network = Some(network_id);
    }
    if !hit.interactive {
        log::debug!("Entity {} liegt auf gesperrter Ebene (nur Selektion)", id);
    }
}

/// Berechnet das achsen-alignierte Bounding-Rect aus zwei Eckpunkten.
fn rect_min_max(a: Vec2, b: Vec2) -> (Vec2, Vec2) {
    (a.min(b), a.max(b))
}

pub fn begin_area_select(state: &mut AppState, world_pos: Vec2, additive: bool) {
    if state.drag.is_idle() {
        state.drag = DragState::AreaSelecting {
            start: world_pos,
            current: world_pos,
            additive,
        };
    }
}

pub fn update_area_select(state: &mut AppState, world_pos: Vec2) {
    if let DragState::AreaSelecting { current, .. } = &mut state.drag {
        *current = world_pos;
    }
}

/// Schließt die Rechteck-Selektion ab und selektiert alle Entities im Rechteck.
pub fn end_area_select(state: &mut AppState, world_pos: Vec2) {
    let DragState::AreaSelecting {
        start, additive, ..
    } = state.drag
    else {
        return;
    };
    state.drag = DragState::Idle;

    let (min, max) = rect_min_max(start, world_pos);
    let hits = entities_in_rect(&state.layout, min, max);

    if !additive {
        state.selection.clear();
    }
    let count = hits.len();
    state.selection.ids_mut().extend(hits);
    state.set_status(format!("{} Element(e) im Rechteck selektiert", count));
}

/// Alle Entities, die vollständig im Rechteck liegen (inkl. Rand).
///
/// Unsichtbare und gesperrte Ebenen werden übersprungen.
pub fn entities_in_rect(layout: &FacilityLayout, min: Vec2, max: Vec2) -> Vec<u64> {
    let inside = |p: Vec2| p.cmpge(min).all() && p.cmple(max).all();
    let usable = |layer: LayerKind| {
        layout.layers.is_visible(layer) && !layout.layers.is_locked(layer)
    };
    let mut ids = Vec::new();

    if usable(LayerKind::Equipment) {
        ids.extend(
            layout
                .nodes
                .values()
                .filter(|n| inside(n.center()))
                .map(|n| n.id),
        );
    }
    if usable(LayerKind::Infrastructure) {
        ids.extend(
            layout
                .walls
                .values()
                .filter(|w| inside(w.start) && inside(w.end))
                .map(|w| w.id),
        );
        ids.extend(
            layout
                .runways
                .values()
                .filter(|r| inside(r.start) && inside(r.end))
                .map(|r| r.id),
        );
    }
    if usable(LayerKind::Spatial) {
        ids.extend(
            layout
                .zones
                .values()
                .filter(|z| z.boundary.vertices.iter().all(|v| inside(*v)))
                .map(|z| z.id),
        );
    }
    if usable(LayerKind::OverheadTransport) {
        ids.extend(
            layout
                .jib_cranes
                .values()
                .filter(|j| inside(j.center))
                .map(|j| j.id),
        );
        ids.extend(
            layout
                .handoffs
                .values()
                .filter(|h| inside(h.position))
                .map(|h| h.id),
        );
    }
    if usable(LayerKind::GuidedTransport) {
        for network in layout.networks.values() {
            ids.extend(network.points_in_rect(min, max));
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NodeKind, Rect};

    fn state_with_nodes() -> (AppState, u64, u64) {
        let mut state = AppState::new();
        let layout = state.layout_mut();
        let a = layout.create_node(
            "A",
            NodeKind::Machine,
            Rect::new(Vec2::ZERO, Vec2::splat(10.0)),
        );
        let b = layout.create_node(
            "B",
            NodeKind::Machine,
            Rect::new(Vec2::new(100.0, 0.0), Vec2::splat(10.0)),
        );
        (state, a, b)
    }

    fn body(node_id: u64) -> HitResult {
        HitResult {
            target: HitTarget::NodeBody { node_id },
            interactive: true,
        }
    }

    #[test]
    fn additive_click_toggles_membership() {
        let (mut state, a, b) = state_with_nodes();

        select_hit(&mut state, body(a), false);
        select_hit(&mut state, body(b), true);
        assert!(state.selection.contains(a) && state.selection.contains(b));

        select_hit(&mut state, body(a), true);
        assert!(!state.selection.contains(a));
        assert!(state.selection.contains(b));
    }

    #[test]
    fn area_select_respects_locked_layers() {
        let (mut state, a, _b) = state_with_nodes();

        begin_area_select(&mut state, Vec2::new(-5.0, -5.0), false);
        end_area_select(&mut state, Vec2::new(50.0, 50.0));
        assert_eq!(state.selection.selected_ids.len(), 1);
        assert!(state.selection.contains(a));

        state.layout_mut().layers.set_locked(LayerKind::Equipment, true);
        begin_area_select(&mut state, Vec2::new(-5.0, -5.0), false);
        end_area_select(&mut state, Vec2::new(50.0, 50.0));
        assert!(state.selection.is_empty());
    }

    #[test]
    fn area_select_normalizes_corners() {
        let (mut state, a, b) = state_with_nodes();

        begin_area_select(&mut state, Vec2::new(200.0, 50.0), false);
        end_area_select(&mut state, Vec2::new(-5.0, -5.0));

        assert!(state.selection.contains(a));
        assert!(state.selection.contains(b));
        assert!(state.drag.is_idle());
    }
}
