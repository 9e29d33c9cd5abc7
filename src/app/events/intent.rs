use super::super::state::{EditorTool, NodeTemplate};
use crate::core::{HandoffKind, HandoffRule, InteractionMode, LayerKind, LegacyTransport};
use crate::shared::EngineOptions;
use glam::Vec2;

/// Modifikatoren eines Zeiger-Drucks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerModifiers {
    /// Ansicht verschieben (mittlere Taste / Leertaste)
    pub pan: bool,
    /// Rechteck-Selektion aufziehen (Shift + Drag)
    pub area_select: bool,
    /// Selektion erweitern statt ersetzen (Ctrl)
    pub additive: bool,
}

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger gedrückt (Weltkoordinaten)
    PointerPressed {
        world_pos: Vec2,
        modifiers: PointerModifiers,
    },
    /// Zeiger bewegt
    PointerMoved { world_pos: Vec2 },
    /// Zeiger losgelassen
    PointerReleased { world_pos: Vec2 },
    /// Escape: laufende Operation abbrechen
    EscapePressed,
    /// Enter / Doppelklick: aktives Werkzeug abschließen
    FinishToolRequested,
    /// Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Interaktionsmodus wechseln
    SetInteractionModeRequested { mode: InteractionMode },
    /// Node-Vorlage wählen; der nächste Klick platziert sie
    NodePlacementRequested { template: NodeTemplate },
    /// Manuelle Kante zwischen zwei Nodes
    ConnectNodesRequested { from: u64, to: u64 },
    /// Selektierte Entities löschen
    DeleteSelectedRequested,
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,
    /// Layout und Netzwerke prüfen
    ValidateRequested,
    /// Übergabepunkt zwischen zwei Kranen anlegen
    CreateHandoffRequested {
        crane_a: u64,
        crane_b: u64,
        kind: HandoffKind,
        rule: HandoffRule,
    },
    /// Einsatzzone eines Brückenkrans setzen
    SetCraneZoneRequested {
        crane_id: u64,
        zone_min: f32,
        zone_max: f32,
    },
    /// Ebene ein-/ausblenden
    LayerVisibilityToggled { layer: LayerKind },
    /// Ebene sperren/entsperren
    LayerLockToggled { layer: LayerKind },
    /// Externer Router liefert einen Streckenzug für eine Kante
    EdgeRouteReceived { edge_id: u64, route: Vec<Vec2> },
    /// Alt-Transportdaten einmalig übernehmen
    ImportLegacyTransportRequested { legacy: LegacyTransport },
    /// Neues Transport-Netzwerk anlegen
    CreateNetworkRequested { name: String },
    /// Netzwerk für das Gleis-Tool wählen
    SelectNetworkRequested { network_id: u64 },
    /// Optionen übernehmen
    OptionsChanged { options: Box<EngineOptions> },
}
