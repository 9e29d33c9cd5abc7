use crate::core::ValidationIssue;
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Verschiebung der Ansicht in Welteinheiten
    pub pan_offset: Vec2,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Letzte Statusnachricht (jede abgeschlossene Operation setzt genau eine)
    pub status_message: Option<String>,
    /// Befunde der letzten Validierung
    pub validation_issues: Vec<ValidationIssue>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
