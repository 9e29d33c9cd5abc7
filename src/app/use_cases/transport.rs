//! Use-Cases für Transport-Netzwerke und das Gleis-Werkzeug.
//!
//! Ein Gleis-Zug ist eine Operation: der Snapshot entsteht beim ersten Klick,
//! ein Zug ohne erzeugtes Segment wird beim Beenden vollständig zurückgerollt.

use crate::app::tools::{TrackAnchor, TrackClick};
use crate::app::AppState;
use crate::core::{FacilityLayout, LegacyTransport, SegmentDefaults};
use crate::shared::EngineOptions;
use glam::Vec2;

/// Legt ein neues Netzwerk an und macht es aktiv.
pub fn create_network(state: &mut AppState, name: String) -> u64 {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let id = state.layout_mut().create_network(name.as_str());
    state.editor.active_network = Some(id);
    state.set_status(format!("Netzwerk '{}' angelegt", name));
    id
}

/// Wechselt das Netzwerk, in das gezeichnet wird. Ein laufender Zug endet.
pub fn select_network(state: &mut AppState, network_id: u64) {
    let Some(name) = state.layout.networks.get(&network_id).map(|n| n.name.clone()) else {
        log::warn!("Netzwerk {} existiert nicht", network_id);
        state.set_status(format!("Netzwerk {} existiert nicht", network_id));
        return;
    };
    if state.editor.track.is_drawing() {
        finish_track(state);
    }
    state.editor.active_network = Some(network_id);
    state.set_status(format!("Aktives Netzwerk: '{}'", name));
}

/// Übernimmt flache Alt-Transportdaten als eigenes Netzwerk.
pub fn import_legacy_transport(state: &mut AppState, legacy: LegacyTransport) -> Option<u64> {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    match state.layout_mut().import_legacy_transport(legacy) {
        Some(id) => {
            state.editor.active_network = Some(id);
            state.set_status("Alt-Transportdaten als Netzwerk übernommen");
            Some(id)
        }
        None => {
            state.history.discard_last();
            state.set_status("Keine Alt-Transportdaten zum Übernehmen");
            None
        }
    }
}

fn segment_defaults(options: &EngineOptions) -> SegmentDefaults {
    SegmentDefaults {
        bidirectional: true,
        speed_limit: options.default_segment_speed,
        lanes: options.default_segment_lanes,
    }
}

/// Aktives Netzwerk, sonst das erste vorhandene.
fn resolve_network(state: &AppState) -> Option<u64> {
    state
        .editor
        .active_network
        .filter(|id| state.layout.networks.contains_key(id))
        .or_else(|| state.layout.networks.keys().next().copied())
}

/// Verarbeitet einen Klick des Gleis-Werkzeugs.
pub fn track_tool_click(state: &mut AppState, world_pos: Vec2) {
    let Some(network_id) = resolve_network(state) else {
        state.set_status("Kein Transport-Netzwerk vorhanden");
        return;
    };
    state.editor.active_network = Some(network_id);

    let pos = if state.options.snap_to_grid {
        state.options.snap_to_grid_point(world_pos)
    } else {
        world_pos
    };
    let click = match state.layout.networks.get(&network_id) {
        Some(network) => state.editor.track.classify_click(network, pos, &state.options),
        None => return,
    };
    log::debug!("Gleis-Klick bei {:?}: {:?}", pos, click);

    match click {
        TrackClick::Start(point_id) => {
            // Snapshot am Beginn des Zugs
            let mark = state.record_undo_snapshot();
            state.editor.track.begin(point_id);
            state.editor.track_begin = Some(mark);
            state.selection.select_only(point_id);
            state.set_status(format!("Gleis-Zug ab Punkt {}", point_id));
        }
        TrackClick::StartAtNew(position) => {
            let mark = state.record_undo_snapshot();
            let Some(point_id) = create_waypoint(state.layout_mut(), network_id, position) else {
                state.history.discard_last();
                return;
            };
            state.editor.track.begin(point_id);
            state.editor.track_begin = Some(mark);
            state.selection.select_only(point_id);
            state.set_status(format!("Gleis-Zug ab neuem Wegpunkt {}", point_id));
        }
        TrackClick::InsertWaypoint {
            segment_id,
            position,
        } => {
            state.record_undo_snapshot();
            match split_segment(state.layout_mut(), network_id, segment_id, position) {
                Some(point_id) => {
                    state.selection.select_only(point_id);
                    state.set_status(format!(
                        "Segment {} durch Wegpunkt {} geteilt",
                        segment_id, point_id
                    ));
                }
                None => {
                    state.history.discard_last();
                    state.set_status(format!("Segment {} kann nicht geteilt werden", segment_id));
                }
            }
        }
        TrackClick::Connect { from, to } => connect_to_anchor(state, network_id, from, to),
        TrackClick::Rejected(reason) => {
            log::warn!("Gleis-Klick abgelehnt: {}", reason);
            state.set_status(reason);
        }
        TrackClick::Ignored => {}
    }
}

fn create_waypoint(layout: &mut FacilityLayout, network_id: u64, position: Vec2) -> Option<u64> {
    let (network, ids) = layout.network_with_ids(network_id)?;
    let point_id = network.create_waypoint(position, ids);
    layout.mark_dirty();
    Some(point_id)
}

fn split_segment(
    layout: &mut FacilityLayout,
    network_id: u64,
    segment_id: u64,
    position: Vec2,
) -> Option<u64> {
    let (network, ids) = layout.network_with_ids(network_id)?;
    let split = network.insert_waypoint(segment_id, position, ids)?;
    layout.mark_dirty();
    Some(split.waypoint_id)
}

/// Erzeugt bei Bedarf den Ziel-Wegpunkt und verbindet ihn mit dem Start.
fn connect_to_anchor(state: &mut AppState, network_id: u64, from: u64, anchor: TrackAnchor) {
    let defaults = segment_defaults(&state.options);
    let start_exists = state
        .layout
        .networks
        .get(&network_id)
        .is_some_and(|n| n.contains_point(from));
    if !start_exists {
        log::warn!("Gleis-Startpunkt {} existiert nicht mehr", from);
        state.set_status(format!("Startpunkt {} existiert nicht mehr", from));
        return;
    }

    let layout = state.layout_mut();
    let target = match anchor {
        TrackAnchor::Existing(id) => Some(id),
        TrackAnchor::NewWaypoint(position) => create_waypoint(layout, network_id, position),
        TrackAnchor::OnSegment {
            segment_id,
            position,
        } => split_segment(layout, network_id, segment_id, position),
    };
    let Some(to) = target else {
        state.set_status("Gleis-Endpunkt konnte nicht angelegt werden");
        return;
    };

    let result = layout
        .network_with_ids(network_id)
        .map(|(network, ids)| network.connect(from, to, defaults, ids));
    match result {
        Some(Ok(segment_id)) => {
            layout.mark_dirty();
            state.editor.track.continue_from(to);
            state.selection.select_only(to);
            state.set_status(format!(
                "Segment {} von Punkt {} zu Punkt {} erstellt",
                segment_id, from, to
            ));
        }
        Some(Err(e)) => {
            // Frisch angelegter Endpunkt bleibt nicht verwaist zurück
            if matches!(anchor, TrackAnchor::NewWaypoint(_)) {
                if let Some((network, _)) = layout.network_with_ids(network_id) {
                    network.remove_point(to);
                }
            }
            log::warn!("Segment {} → {} abgelehnt: {}", from, to, e);
            state.set_status(e.to_string());
        }
        None => state.set_status(format!("Netzwerk {} existiert nicht", network_id)),
    }
}

/// Beendet den Gleis-Zug (Fertig oder Escape).
///
/// Ohne erzeugtes Segment wird der Zug samt provisorischem Startpunkt
/// verworfen und hinterlässt keinen History-Eintrag. Liegt der Begin-Eintrag
/// nicht mehr oben (Undo oder Löschen während des Zugs), bleibt der Zustand
/// unverändert. Liefert `true`, wenn zurückgerollt wurde.
pub fn finish_track(state: &mut AppState) -> bool {
    let mark = state.editor.track_begin.take();
    match state.editor.track.finish() {
        Some(0) => {
            let begin = mark.and_then(|mark| state.history.discard_if_last(mark));
            match begin {
                Some(begin) => {
                    begin.apply_to(state);
                    state.set_status("Gleis-Zug ohne Segment verworfen");
                    true
                }
                None => {
                    log::debug!("Begin-Eintrag des Gleis-Zugs liegt nicht mehr oben");
                    state.set_status("Gleis-Zug ohne Segment beendet");
                    false
                }
            }
        }
        Some(count) => {
            state.set_status(format!("Gleis-Zug beendet: {} Segment(e)", count));
            false
        }
        None => false,
    }
}
