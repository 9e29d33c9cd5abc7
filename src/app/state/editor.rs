use crate::app::history::HistoryMark;
use crate::app::tools::{TrackDrawingTool, ZoneDrawingTool};
use crate::core::{InteractionMode, NodeKind};
use glam::Vec2;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Entities selektieren und verschieben
    #[default]
    Select,
    /// Gleise zwischen Stationen und Wegpunkten zeichnen
    TrackDraw,
    /// Zonen-Polygon per Klick aufziehen
    ZoneDraw,
}

/// Vorlage für einen noch zu platzierenden Node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTemplate {
    pub name: String,
    pub kind: NodeKind,
    pub size: Vec2,
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Interaktionsmodus (entscheidet nur über Drag-Erlaubnis)
    pub mode: InteractionMode,
    /// Wartende Node-Platzierung (nächster Klick setzt den Node)
    pub pending_node: Option<NodeTemplate>,
    /// Netzwerk, in das das Gleis-Tool zeichnet
    pub active_network: Option<u64>,
    pub track: TrackDrawingTool,
    /// History-Eintrag vom Beginn des laufenden Gleis-Zugs
    pub track_begin: Option<HistoryMark>,
    pub zone: ZoneDrawingTool,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }

    /// Hat das aktive Spezial-Werkzeug angefangene Eingaben?
    pub fn has_pending_tool_input(&self) -> bool {
        match self.active_tool {
            EditorTool::Select => false,
            EditorTool::TrackDraw => self.track.has_pending_input(),
            EditorTool::ZoneDraw => self.zone.has_pending_input(),
        }
    }
}
