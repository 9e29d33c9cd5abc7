//! Use-Case: Entity-Drag nach dem Drei-Phasen-Protokoll.
//!
//! - Begin: Snapshot aufnehmen (einmal pro Operation), Entity selektieren
//! - Continue: geführte Entities werden bei jedem Frame gegen den
//!   unveränderten Begin-Constraint projiziert, freie Nodes akkumulieren Deltas
//! - End: optional Raster-Snap, abgeleitete Geometrie verwerfen, Auto-Verknüpfung

use crate::app::drag::{DragKind, DragState};
use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{link_after_drag, ConstraintParam, FacilityLayout, HitResult};
use crate::shared::EngineOptions;
use glam::Vec2;

/// Startet einen Drag auf dem Treffer. Nicht ziehbare Treffer werden ignoriert.
pub fn begin_drag(state: &mut AppState, hit: HitResult, world_pos: Vec2) {
    if !state.drag.is_idle() {
        log::debug!("Drag ignoriert: andere Interaktion aktiv");
        return;
    }
    let Some(kind) = DragKind::from_hit(&hit.target, world_pos, state.editor.mode, &state.layout)
    else {
        log::debug!("Treffer {:?} ist nicht ziehbar", hit.target);
        return;
    };

    // Snapshot VOR Selektion und Mutation
    let begin = Snapshot::from_state(state);
    let mark = state.history.record_snapshot(begin.clone());

    if let Some(id) = hit.target.entity_id() {
        state.selection.select_only(id);
    }
    if let DragKind::Waypoint { network_id, .. } | DragKind::Station { network_id, .. } = kind {
        state.editor.active_network = Some(network_id);
    }

    log::debug!("Drag begonnen: {:?}", kind);
    state.drag = DragState::Dragging {
        kind,
        begin,
        mark,
        origin: world_pos,
        moved: false,
    };
}

/// Speist eine Zeigerposition in den laufenden Drag ein.
pub fn update_drag(state: &mut AppState, world_pos: Vec2) {
    let DragState::Dragging {
        kind,
        origin,
        moved,
        ..
    } = &mut state.drag
    else {
        return;
    };
    if !*moved && world_pos == *origin {
        return;
    }
    *moved = true;
    let current = kind.clone();

    if !entity_exists(&state.layout, &current) {
        log::debug!("Gezogene Entity {} existiert nicht mehr", current.entity_id());
        return;
    }

    let next = apply_drag(state.layout_mut(), &current, world_pos);
    if let DragState::Dragging { kind, .. } = &mut state.drag {
        *kind = next;
    }
}

/// Schließt den Drag ab: letzte Position, Raster, Cache-Invalidierung, Verknüpfung.
pub fn end_drag(state: &mut AppState, world_pos: Vec2) {
    update_drag(state, world_pos);

    let DragState::Dragging {
        kind,
        begin,
        mark,
        moved,
        ..
    } = std::mem::take(&mut state.drag)
    else {
        return;
    };

    if !moved || !entity_exists(&state.layout, &kind) {
        // Reiner Klick: Eintrag nur behalten, wenn sich die Selektion geändert hat
        if state.selection == begin.selection {
            state.history.discard_if_last(mark);
        }
        let message = format!("{} selektiert", entity_label(&state.layout, &kind));
        state.set_status(message);
        return;
    }

    let options = state.options.clone();
    let layout = state.layout_mut();
    if options.snap_to_grid {
        snap_to_grid(layout, &kind, &options);
    }
    let message = commit(layout, &kind, &options);
    state.set_status(message);
}

/// Bricht den Drag ab und stellt den Begin-Zustand ohne History-Eintrag wieder her.
///
/// Hat eine andere Operation während des Drags einen Eintrag angelegt, bleibt
/// der aktuelle Zustand stehen, damit deren Änderung nicht verloren geht.
pub fn cancel_drag(state: &mut AppState) {
    let DragState::Dragging {
        kind, begin, mark, ..
    } = std::mem::take(&mut state.drag)
    else {
        return;
    };
    if state.history.discard_if_last(mark).is_none() {
        log::warn!("Drag-Abbruch ohne Rücksprung: History wurde zwischenzeitlich verändert");
        let message = format!("Verschieben beendet: {}", entity_label(&state.layout, &kind));
        state.set_status(message);
        return;
    }
    begin.apply_to(state);
    let message = format!(
        "Verschieben abgebrochen: {}",
        entity_label(&state.layout, &kind)
    );
    state.set_status(message);
}

// ── Continue ────────────────────────────────────────────────────────

fn entity_exists(layout: &FacilityLayout, kind: &DragKind) -> bool {
    match kind {
        DragKind::FreeNode { node_id, .. } => layout.nodes.contains_key(node_id),
        DragKind::Group { group_id, .. } => layout.groups.contains_key(group_id),
        DragKind::CraneBridge { crane_id } => layout
            .cranes
            .get(crane_id)
            .is_some_and(|c| layout.runways.contains_key(&c.runway_id)),
        DragKind::JibHook { jib_id } | DragKind::JibCenter { jib_id, .. } => {
            layout.jib_cranes.contains_key(jib_id)
        }
        DragKind::Waypoint {
            network_id,
            point_id,
            ..
        }
        | DragKind::Station {
            network_id,
            point_id,
            ..
        } => layout
            .networks
            .get(network_id)
            .is_some_and(|n| n.contains_point(*point_id)),
        DragKind::ZoneVertex { zone_id, index } => layout
            .zones
            .get(zone_id)
            .is_some_and(|z| *index < z.boundary.vertices.len()),
        DragKind::Runway { runway_id, .. } => layout.runways.contains_key(runway_id),
        DragKind::WallEndpoint { wall_id, .. } | DragKind::WallBody { wall_id, .. } => {
            layout.walls.contains_key(wall_id)
        }
    }
}

/// Wendet eine Zeigerposition an und liefert die fortgeschriebene Drag-Art.
fn apply_drag(layout: &mut FacilityLayout, kind: &DragKind, world_pos: Vec2) -> DragKind {
    match *kind {
        DragKind::FreeNode {
            node_id,
            last_world,
        } => {
            layout.translate_node(node_id, world_pos - last_world);
            return DragKind::FreeNode {
                node_id,
                last_world: world_pos,
            };
        }
        DragKind::Group {
            group_id,
            last_world,
        } => {
            translate_group(layout, group_id, world_pos - last_world);
            return DragKind::Group {
                group_id,
                last_world: world_pos,
            };
        }
        DragKind::CraneBridge { crane_id } => project_bridge(layout, crane_id, world_pos),
        DragKind::JibHook { jib_id } => project_hook(layout, jib_id, world_pos),
        DragKind::JibCenter {
            jib_id,
            grab_offset,
        } => {
            if let Some(jib) = layout.jib_cranes.get_mut(&jib_id) {
                jib.center = world_pos + grab_offset;
                layout.mark_dirty();
            }
        }
        DragKind::Waypoint {
            network_id,
            point_id,
            ref constraint,
        } => {
            let target = constraint
                .as_ref()
                .map_or(world_pos, |c| c.project(world_pos).point);
            move_track_point(layout, network_id, point_id, target);
        }
        DragKind::Station {
            network_id,
            point_id,
            grab_offset,
        } => move_track_point(layout, network_id, point_id, world_pos + grab_offset),
        DragKind::ZoneVertex { zone_id, index } => {
            if let Some(vertex) = layout
                .zones
                .get_mut(&zone_id)
                .and_then(|z| z.boundary.vertices.get_mut(index))
            {
                *vertex = world_pos;
                layout.mark_dirty();
            }
        }
        DragKind::Runway {
            runway_id,
            begin_start,
            begin_end,
            begin_pointer,
        } => {
            let delta = world_pos - begin_pointer;
            layout.set_runway_endpoints(runway_id, begin_start + delta, begin_end + delta);
        }
        DragKind::WallEndpoint { wall_id, end } => {
            if let Some(wall) = layout.walls.get_mut(&wall_id) {
                wall.set_endpoint(end, world_pos);
                layout.mark_dirty();
            }
        }
        DragKind::WallBody {
            wall_id,
            begin_start,
            begin_end,
            begin_pointer,
        } => {
            let delta = world_pos - begin_pointer;
            set_wall(layout, wall_id, begin_start + delta, begin_end + delta);
        }
    }
    kind.clone()
}

fn translate_group(layout: &mut FacilityLayout, group_id: u64, delta: Vec2) {
    let Some(group) = layout.groups.get(&group_id) else {
        return;
    };
    let members: Vec<u64> = group.members.iter().copied().collect();
    for node_id in members {
        layout.translate_node(node_id, delta);
    }
}

fn project_bridge(layout: &mut FacilityLayout, crane_id: u64, pointer: Vec2) {
    let param = layout.cranes.get(&crane_id).and_then(|crane| {
        let runway = layout.runways.get(&crane.runway_id)?;
        Some(crane.constraint(runway).project(pointer).param)
    });
    if let Some(ConstraintParam::Line { t }) = param {
        if let Some(crane) = layout.cranes.get_mut(&crane_id) {
            crane.set_bridge_position(t);
            layout.mark_dirty();
        }
    }
}

fn project_hook(layout: &mut FacilityLayout, jib_id: u64, pointer: Vec2) {
    let Some(jib) = layout.jib_cranes.get_mut(&jib_id) else {
        return;
    };
    if let ConstraintParam::Arc { angle_deg } = jib.arc().project(pointer).param {
        jib.hook_angle_deg = angle_deg;
        layout.mark_dirty();
    }
}

fn move_track_point(layout: &mut FacilityLayout, network_id: u64, point_id: u64, pos: Vec2) {
    let moved = layout
        .networks
        .get_mut(&network_id)
        .is_some_and(|n| n.move_point(point_id, pos));
    if moved {
        layout.mark_dirty();
    }
}

fn set_wall(layout: &mut FacilityLayout, wall_id: u64, start: Vec2, end: Vec2) {
    if let Some(wall) = layout.walls.get_mut(&wall_id) {
        wall.start = start;
        wall.end = end;
        layout.mark_dirty();
    }
}

// ── End ─────────────────────────────────────────────────────────────

/// Freie Geometrie rastet direkt ein, geführte Entities werden nach dem
/// Einrasten erneut auf ihren Constraint projiziert.
fn snap_to_grid(layout: &mut FacilityLayout, kind: &DragKind, options: &EngineOptions) {
    let snap = |p: Vec2| options.snap_to_grid_point(p);
    match *kind {
        DragKind::FreeNode { node_id, .. } => {
            if let Some(pos) = layout.nodes.get(&node_id).map(|n| n.bounds.position) {
                layout.set_node_position(node_id, snap(pos));
            }
        }
        DragKind::Group { group_id, .. } => {
            let anchor = layout.groups.get(&group_id).and_then(|g| {
                g.members
                    .iter()
                    .find_map(|id| layout.nodes.get(id))
                    .map(|n| n.bounds.position)
            });
            if let Some(anchor) = anchor {
                translate_group(layout, group_id, snap(anchor) - anchor);
            }
        }
        DragKind::CraneBridge { crane_id } => {
            let point = layout.cranes.get(&crane_id).and_then(|c| {
                layout
                    .runways
                    .get(&c.runway_id)
                    .map(|r| c.bridge_point(r))
            });
            if let Some(point) = point {
                project_bridge(layout, crane_id, snap(point));
            }
        }
        DragKind::JibHook { jib_id } => {
            if let Some(point) = layout.jib_cranes.get(&jib_id).map(|j| j.hook_point()) {
                project_hook(layout, jib_id, snap(point));
            }
        }
        DragKind::JibCenter { jib_id, .. } => {
            if let Some(jib) = layout.jib_cranes.get_mut(&jib_id) {
                jib.center = snap(jib.center);
            }
        }
        DragKind::Waypoint {
            network_id,
            point_id,
            ref constraint,
        } => {
            let current = layout
                .networks
                .get(&network_id)
                .and_then(|n| n.point_position(point_id));
            if let Some(current) = current {
                let snapped = snap(current);
                let target = constraint
                    .as_ref()
                    .map_or(snapped, |c| c.project(snapped).point);
                move_track_point(layout, network_id, point_id, target);
            }
        }
        DragKind::Station {
            network_id,
            point_id,
            ..
        } => {
            let current = layout
                .networks
                .get(&network_id)
                .and_then(|n| n.point_position(point_id));
            if let Some(current) = current {
                move_track_point(layout, network_id, point_id, snap(current));
            }
        }
        DragKind::ZoneVertex { zone_id, index } => {
            if let Some(vertex) = layout
                .zones
                .get_mut(&zone_id)
                .and_then(|z| z.boundary.vertices.get_mut(index))
            {
                *vertex = snap(*vertex);
            }
        }
        DragKind::Runway { runway_id, .. } => {
            if let Some((start, end)) = layout.runways.get(&runway_id).map(|r| (r.start, r.end)) {
                let delta = snap(start) - start;
                layout.set_runway_endpoints(runway_id, start + delta, end + delta);
            }
        }
        DragKind::WallEndpoint { wall_id, end } => {
            if let Some(wall) = layout.walls.get_mut(&wall_id) {
                let snapped = snap(wall.endpoint(end));
                wall.set_endpoint(end, snapped);
            }
        }
        DragKind::WallBody { wall_id, .. } => {
            if let Some((start, end)) = layout.walls.get(&wall_id).map(|w| (w.start, w.end)) {
                let delta = snap(start) - start;
                set_wall(layout, wall_id, start + delta, end + delta);
            }
        }
    }
}

/// Verwirft gecachte Routen bewegter Nodes, verknüpft freie Nodes und
/// liefert die Statusnachricht.
fn commit(layout: &mut FacilityLayout, kind: &DragKind, options: &EngineOptions) -> String {
    let label = entity_label(layout, kind);
    match *kind {
        DragKind::FreeNode { node_id, .. } => {
            layout.clear_routes_touching(node_id);
            let outcome = link_after_drag(
                layout,
                node_id,
                options.link_snap_distance,
                options.terminal_stick_out,
            );
            if outcome.created_edges.is_empty() {
                format!("{} verschoben", label)
            } else {
                format!(
                    "{} verschoben, {} Kante(n) automatisch verbunden",
                    label,
                    outcome.created_edges.len()
                )
            }
        }
        DragKind::Group { group_id, .. } => {
            let members: Vec<u64> = layout
                .groups
                .get(&group_id)
                .map(|g| g.members.iter().copied().collect())
                .unwrap_or_default();
            for node_id in members {
                layout.clear_routes_touching(node_id);
            }
            format!("{} verschoben", label)
        }
        DragKind::CraneBridge { crane_id } => {
            let t = layout
                .cranes
                .get(&crane_id)
                .map_or(0.0, |c| c.bridge_position());
            format!("{}: Brücke bei t = {:.2}", label, t)
        }
        DragKind::JibHook { jib_id } => {
            let angle = layout
                .jib_cranes
                .get(&jib_id)
                .map_or(0.0, |j| j.hook_angle_deg);
            format!("{}: Ausleger auf {:.0}°", label, angle)
        }
        _ => format!("{} verschoben", label),
    }
}

/// Lesbare Bezeichnung der gezogenen Entity für Statusnachrichten.
fn entity_label(layout: &FacilityLayout, kind: &DragKind) -> String {
    let id = kind.entity_id();
    match kind {
        DragKind::FreeNode { .. } => layout
            .nodes
            .get(&id)
            .map_or_else(|| format!("Node {}", id), |n| format!("Node '{}'", n.name)),
        DragKind::Group { .. } => layout
            .groups
            .get(&id)
            .map_or_else(|| format!("Gruppe {}", id), |g| format!("Gruppe '{}'", g.name)),
        DragKind::CraneBridge { .. } => layout
            .cranes
            .get(&id)
            .map_or_else(|| format!("Kran {}", id), |c| format!("Kran '{}'", c.name)),
        DragKind::JibHook { .. } | DragKind::JibCenter { .. } => layout
            .jib_cranes
            .get(&id)
            .map_or_else(|| format!("Schwenkkran {}", id), |j| {
                format!("Schwenkkran '{}'", j.name)
            }),
        DragKind::Waypoint { .. } => format!("Wegpunkt {}", id),
        DragKind::Station { network_id, .. } => layout
            .networks
            .get(network_id)
            .and_then(|n| n.stations.get(&id))
            .map_or_else(|| format!("Station {}", id), |s| format!("Station '{}'", s.name)),
        DragKind::ZoneVertex { index, .. } => layout.zones.get(&id).map_or_else(
            || format!("Zone {}", id),
            |z| format!("Eckpunkt {} der Zone '{}'", index + 1, z.name),
        ),
        DragKind::Runway { .. } => layout
            .runways
            .get(&id)
            .map_or_else(|| format!("Kranbahn {}", id), |r| format!("Kranbahn '{}'", r.name)),
        DragKind::WallEndpoint { .. } | DragKind::WallBody { .. } => format!("Wand {}", id),
    }
}
