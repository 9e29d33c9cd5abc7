//! Gleis-Zeichnen: `Idle → Drawing(start) → Drawing(neues Ende) … → Idle`.
//!
//! Das Tool klassifiziert Klicks nur (reine Daten); angewendet wird zentral
//! im Transport-Use-Case.

use crate::core::{ConnectError, TransportNetwork};
use crate::shared::EngineOptions;
use glam::Vec2;

/// Endpunkt eines neuen Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackAnchor {
    /// Vorhandene Station oder vorhandener Wegpunkt
    Existing(u64),
    /// Neuer Wegpunkt auf freier Fläche
    NewWaypoint(Vec2),
    /// Neuer Wegpunkt, der ein vorhandenes Segment teilt
    OnSegment { segment_id: u64, position: Vec2 },
}

/// Phase des Gleis-Tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackPhase {
    #[default]
    Idle,
    Drawing {
        start: u64,
        /// Anzahl der in diesem Zug erzeugten Segmente
        created_segments: usize,
    },
}

/// Ergebnis eines Klicks.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackClick {
    /// Zug an vorhandenem Punkt beginnen
    Start(u64),
    /// Zug an neuem Wegpunkt beginnen
    StartAtNew(Vec2),
    /// Segment im Leerlauf teilen
    InsertWaypoint { segment_id: u64, position: Vec2 },
    /// Segment vom aktuellen Start zum Anker erzeugen
    Connect { from: u64, to: TrackAnchor },
    /// Abgelehnt; Zustand bleibt unverändert
    Rejected(String),
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct TrackDrawingTool {
    phase: TrackPhase,
}

impl TrackDrawingTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TrackPhase {
        self.phase
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.phase, TrackPhase::Drawing { .. })
    }

    pub fn has_pending_input(&self) -> bool {
        self.is_drawing()
    }

    /// Klassifiziert einen Klick gegen das Netzwerk.
    pub fn classify_click(
        &self,
        network: &TransportNetwork,
        pos: Vec2,
        options: &EngineOptions,
    ) -> TrackClick {
        let snapped_point = network
            .nearest_point(pos, options.track_snap_distance)
            .map(|hit| hit.point_id);

        match self.phase {
            TrackPhase::Idle => {
                if let Some(id) = snapped_point {
                    TrackClick::Start(id)
                } else if let Some(hit) =
                    network.nearest_segment(pos, options.segment_hit_distance)
                {
                    TrackClick::InsertWaypoint {
                        segment_id: hit.segment_id,
                        position: hit.foot,
                    }
                } else if options.auto_create_waypoints {
                    TrackClick::StartAtNew(pos)
                } else {
                    TrackClick::Ignored
                }
            }
            TrackPhase::Drawing { start, .. } => {
                if !network.contains_point(start) {
                    return TrackClick::Rejected(format!(
                        "Startpunkt {} existiert nicht mehr",
                        start
                    ));
                }
                if let Some(id) = snapped_point {
                    if id == start {
                        return TrackClick::Rejected(ConnectError::SelfConnection.to_string());
                    }
                    if network.are_points_connected(start, id) {
                        return TrackClick::Rejected(ConnectError::AlreadyConnected.to_string());
                    }
                    return TrackClick::Connect {
                        from: start,
                        to: TrackAnchor::Existing(id),
                    };
                }
                let segment_hit = network
                    .nearest_segment(pos, options.segment_hit_distance)
                    .filter(|hit| {
                        network
                            .segments
                            .get(&hit.segment_id)
                            .is_some_and(|s| !s.touches(start))
                    });
                if let Some(hit) = segment_hit {
                    TrackClick::Connect {
                        from: start,
                        to: TrackAnchor::OnSegment {
                            segment_id: hit.segment_id,
                            position: hit.foot,
                        },
                    }
                } else if options.auto_create_waypoints {
                    TrackClick::Connect {
                        from: start,
                        to: TrackAnchor::NewWaypoint(pos),
                    }
                } else {
                    TrackClick::Ignored
                }
            }
        }
    }

    /// Beginnt einen neuen Zug.
    pub fn begin(&mut self, start: u64) {
        self.phase = TrackPhase::Drawing {
            start,
            created_segments: 0,
        };
    }

    /// Setzt den Zug am neuen Endpunkt fort.
    pub fn continue_from(&mut self, end: u64) {
        if let TrackPhase::Drawing {
            created_segments, ..
        } = self.phase
        {
            self.phase = TrackPhase::Drawing {
                start: end,
                created_segments: created_segments + 1,
            };
        }
    }

    /// Beendet den Zug und liefert die Anzahl erzeugter Segmente.
    pub fn finish(&mut self) -> Option<usize> {
        match std::mem::take(&mut self.phase) {
            TrackPhase::Drawing {
                created_segments, ..
            } => Some(created_segments),
            TrackPhase::Idle => None,
        }
    }
}
