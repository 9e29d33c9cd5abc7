//! Use-Case: Layout prüfen und Befunde für die UI ablegen.

use crate::app::AppState;
use crate::core::Severity;

/// Prüft das Layout. Befunde werden nur berichtet, nie korrigiert.
pub fn validate_layout(state: &mut AppState) {
    let issues = state.layout.validate();
    let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();
    let warnings = issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();

    for issue in &issues {
        match issue.severity {
            Severity::Error => log::warn!("Validierung: {}", issue.message),
            Severity::Warning | Severity::Info => log::debug!("Validierung: {}", issue.message),
        }
    }

    let message = if issues.is_empty() {
        "Validierung: keine Befunde".to_string()
    } else {
        format!(
            "Validierung: {} Fehler, {} Warnung(en), {} Befund(e) gesamt",
            errors,
            warnings,
            issues.len()
        )
    };
    state.ui.validation_issues = issues;
    state.set_status(message);
}
