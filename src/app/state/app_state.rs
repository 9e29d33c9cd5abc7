use crate::app::drag::DragState;
use crate::app::history::{EditHistory, HistoryMark, Snapshot};
use crate::app::CommandLog;
use crate::core::FacilityLayout;
use crate::shared::EngineOptions;
use std::sync::Arc;

use super::{EditorToolState, SelectionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Layout (Arc für O(1)-Snapshots)
    pub layout: Arc<FacilityLayout>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Laufende Zeiger-Interaktion (höchstens eine gleichzeitig)
    pub drag: DragState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Schwellen, Radien, Raster)
    pub options: EngineOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen.
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            layout: Arc::new(FacilityLayout::new()),
            view: ViewState::default(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            drag: DragState::Idle,
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
        }
    }

    /// Mutabler Zugriff auf das Layout (CoW: klont nur wenn ein Snapshot es teilt).
    pub fn layout_mut(&mut self) -> &mut FacilityLayout {
        Arc::make_mut(&mut self.layout)
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Wird genau einmal pro Operation an der Begin-Grenze aufgerufen.
    pub fn record_undo_snapshot(&mut self) -> HistoryMark {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap)
    }

    /// Setzt die Statusnachricht und loggt sie.
    pub fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{}", message);
        self.ui.status_message = Some(message);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
