use super::super::state::{EditorTool, NodeTemplate};
use crate::core::{HandoffKind, HandoffRule, HitResult, InteractionMode, LayerKind, LegacyTransport};
use crate::shared::EngineOptions;
use glam::Vec2;

/// Mutierende Commands, die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Werkzeuge ===
    /// Klick im Gleis-Tool
    TrackToolClick { world_pos: Vec2 },
    /// Klick im Zonen-Tool
    ZoneToolClick { world_pos: Vec2 },
    /// Aktives Werkzeug abschließen
    FinishTool,
    /// Werkzeug wechseln (bricht angefangene Eingaben ab)
    SetEditorTool { tool: EditorTool },
    /// Interaktionsmodus setzen
    SetInteractionMode { mode: InteractionMode },

    // === Platzierung & Editing ===
    /// Node-Vorlage für den nächsten Klick vormerken
    ArmNodePlacement { template: NodeTemplate },
    /// Vorgemerkten Node an Position setzen (mit Anziehung)
    PlacePendingNode { world_pos: Vec2 },
    /// Manuelle Kante anlegen
    ConnectNodes { from: u64, to: u64 },
    /// Selektierte Entities löschen (mit Kaskaden)
    DeleteSelected,
    /// Routing-Ergebnis übernehmen
    SetEdgeRoute { edge_id: u64, route: Vec<Vec2> },

    // === Zeiger-Interaktion ===
    /// Ansicht verschieben beginnen
    BeginPan { world_pos: Vec2 },
    /// Rechteck-Selektion beginnen
    BeginAreaSelect { world_pos: Vec2, additive: bool },
    /// Entity-Drag beginnen
    BeginDrag { hit: HitResult, world_pos: Vec2 },
    /// Treffer selektieren ohne Drag
    SelectHit { hit: HitResult, additive: bool },
    /// Zeigerbewegung in die aktive Interaktion einspeisen
    UpdatePointer { world_pos: Vec2 },
    /// Aktive Interaktion abschließen
    EndPointer { world_pos: Vec2 },
    /// Aktive Interaktion bzw. Werkzeug-Entwurf abbrechen
    CancelInteraction,
    ClearSelection,

    // === Krane ===
    CreateHandoff {
        crane_a: u64,
        crane_b: u64,
        kind: HandoffKind,
        rule: HandoffRule,
    },
    SetCraneZone {
        crane_id: u64,
        zone_min: f32,
        zone_max: f32,
    },

    // === Transport ===
    CreateNetwork { name: String },
    SelectNetwork { network_id: u64 },
    ImportLegacyTransport { legacy: LegacyTransport },

    // === Ebenen ===
    SetLayerVisible { layer: LayerKind, visible: bool },
    SetLayerLocked { layer: LayerKind, locked: bool },

    // === Prüfung, History, Optionen ===
    Validate,
    Undo,
    Redo,
    ApplyOptions { options: Box<EngineOptions> },
}
