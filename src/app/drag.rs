//! Zustandsmaschine für Zeiger-Interaktionen.
//!
//! Höchstens eine Interaktion ist aktiv: `Idle → Dragging(kind, begin) → Idle`.
//! Alle Referenzen laufen über stabile IDs, damit Löschungen während eines
//! Drags den Vorgang nicht korrumpieren (fehlende Entity ⇒ No-op).

use super::history::{HistoryMark, Snapshot};
use crate::core::{HitTarget, InteractionMode, PolylineConstraint, TransportNetwork, WallEnd};
use glam::Vec2;

/// Was gerade gezogen wird.
#[derive(Debug, Clone, PartialEq)]
pub enum DragKind {
    /// Freier Node: akkumuliert Frame-Deltas
    FreeNode { node_id: u64, last_world: Vec2 },
    /// Gruppe: verschiebt alle Mitglieder
    Group { group_id: u64, last_world: Vec2 },
    /// Brücke eines Brückenkrans (Linien-Constraint)
    CraneBridge { crane_id: u64 },
    /// Haken eines Schwenkkrans (Bogen-Constraint)
    JibHook { jib_id: u64 },
    JibCenter { jib_id: u64, grab_offset: Vec2 },
    /// Wegpunkt; Constraint wird beim Begin aus den Nachbarn gebildet
    Waypoint {
        network_id: u64,
        point_id: u64,
        constraint: Option<PolylineConstraint>,
    },
    Station {
        network_id: u64,
        point_id: u64,
        grab_offset: Vec2,
    },
    ZoneVertex { zone_id: u64, index: usize },
    /// Kranbahn: Verschiebung relativ zum Begin-Zustand
    Runway {
        runway_id: u64,
        begin_start: Vec2,
        begin_end: Vec2,
        begin_pointer: Vec2,
    },
    WallEndpoint { wall_id: u64, end: WallEnd },
    WallBody {
        wall_id: u64,
        begin_start: Vec2,
        begin_end: Vec2,
        begin_pointer: Vec2,
    },
}

impl DragKind {
    /// Leitet die Drag-Art aus einem Treffer ab.
    ///
    /// `None` für nicht ziehbare Treffer oder fehlende Entities.
    pub fn from_hit(
        target: &HitTarget,
        world_pos: Vec2,
        mode: InteractionMode,
        layout: &crate::core::FacilityLayout,
    ) -> Option<Self> {
        let kind = match *target {
            HitTarget::NodeBody { node_id } => {
                layout.nodes.get(&node_id)?;
                DragKind::FreeNode {
                    node_id,
                    last_world: world_pos,
                }
            }
            HitTarget::GroupBorder { group_id } => {
                layout.groups.get(&group_id)?;
                DragKind::Group {
                    group_id,
                    last_world: world_pos,
                }
            }
            HitTarget::CraneBridge { crane_id } => {
                layout.cranes.get(&crane_id)?;
                DragKind::CraneBridge { crane_id }
            }
            HitTarget::JibHook { jib_id } => {
                layout.jib_cranes.get(&jib_id)?;
                DragKind::JibHook { jib_id }
            }
            HitTarget::JibCenter { jib_id } => {
                let jib = layout.jib_cranes.get(&jib_id)?;
                DragKind::JibCenter {
                    jib_id,
                    grab_offset: jib.center - world_pos,
                }
            }
            HitTarget::TrackWaypoint {
                network_id,
                point_id,
            } => {
                let network = layout.networks.get(&network_id)?;
                DragKind::Waypoint {
                    network_id,
                    point_id,
                    constraint: waypoint_constraint(network, point_id, mode),
                }
            }
            HitTarget::TrackStation {
                network_id,
                point_id,
            } => {
                let center = layout.networks.get(&network_id)?.point_position(point_id)?;
                DragKind::Station {
                    network_id,
                    point_id,
                    grab_offset: center - world_pos,
                }
            }
            HitTarget::ZoneVertex { zone_id, index } => {
                layout.zones.get(&zone_id)?;
                DragKind::ZoneVertex { zone_id, index }
            }
            HitTarget::Runway { runway_id } => {
                let runway = layout.runways.get(&runway_id)?;
                DragKind::Runway {
                    runway_id,
                    begin_start: runway.start,
                    begin_end: runway.end,
                    begin_pointer: world_pos,
                }
            }
            HitTarget::WallEndpoint { wall_id, end } => {
                layout.walls.get(&wall_id)?;
                DragKind::WallEndpoint { wall_id, end }
            }
            HitTarget::WallBody { wall_id } => {
                let wall = layout.walls.get(&wall_id)?;
                DragKind::WallBody {
                    wall_id,
                    begin_start: wall.start,
                    begin_end: wall.end,
                    begin_pointer: world_pos,
                }
            }
            HitTarget::NodeTerminal { .. }
            | HitTarget::PathLine { .. }
            | HitTarget::Handoff { .. }
            | HitTarget::CraneZone { .. }
            | HitTarget::TrackSegment { .. }
            | HitTarget::ZoneInterior { .. }
            | HitTarget::Canvas => return None,
        };
        Some(kind)
    }

    /// Entity-ID, die der Drag bewegt.
    pub fn entity_id(&self) -> u64 {
        match *self {
            DragKind::FreeNode { node_id, .. } => node_id,
            DragKind::Group { group_id, .. } => group_id,
            DragKind::CraneBridge { crane_id } => crane_id,
            DragKind::JibHook { jib_id } | DragKind::JibCenter { jib_id, .. } => jib_id,
            DragKind::Waypoint { point_id, .. } | DragKind::Station { point_id, .. } => point_id,
            DragKind::ZoneVertex { zone_id, .. } => zone_id,
            DragKind::Runway { runway_id, .. } => runway_id,
            DragKind::WallEndpoint { wall_id, .. } | DragKind::WallBody { wall_id, .. } => wall_id,
        }
    }
}

/// Im Design-Modus sind Wegpunkte frei beweglich.
fn waypoint_constraint(
    network: &TransportNetwork,
    point_id: u64,
    mode: InteractionMode,
) -> Option<PolylineConstraint> {
    if mode.constrains_waypoints() {
        network.waypoint_constraint(point_id)
    } else {
        None
    }
}

/// Aktive Zeiger-Interaktion.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Entity-Drag mit Snapshot des Begin-Zustands (für Escape)
    Dragging {
        kind: DragKind,
        begin: Snapshot,
        /// History-Eintrag des Begin
        mark: HistoryMark,
        /// Zeigerposition beim Begin
        origin: Vec2,
        /// Wurde der Zeiger seit Begin bewegt?
        moved: bool,
    },
    /// Ansicht verschieben
    Panning { last: Vec2 },
    /// Rechteck-Selektion
    AreaSelecting {
        start: Vec2,
        current: Vec2,
        additive: bool,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Gerade gezogene Entity (falls ein Entity-Drag läuft).
    pub fn dragged_entity(&self) -> Option<u64> {
        match self {
            DragState::Dragging { kind, .. } => Some(kind.entity_id()),
            _ => None,
        }
    }
}
