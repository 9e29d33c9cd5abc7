//! Strukturierte Validierungs-Ergebnisse (werden nie automatisch korrigiert).

use serde::{Deserialize, Serialize};

/// Schweregrad eines Befunds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Art eines Befunds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// Station/Wegpunkt ohne Segment
    OrphanedPoint,
    /// Segment verweist auf unbekannten Punkt
    InvalidReference,
    /// Segment verbindet einen Punkt mit sich selbst
    SelfReference,
    /// Mehrere Segmente zwischen demselben Punktpaar
    DuplicateSegment,
    /// Netzwerk mit Fahrzeugen, aber ohne Home-Station
    MissingHomeStation,
    /// Fahrzeug ohne gültige Home-Station
    InvalidHomeStation,
    /// Punkte, die vom Hauptnetz nicht erreichbar sind
    DisconnectedSubgraph,
    /// Layout-Referenz (Kante, Gruppe, Kran, Übergabe) auf gelöschte ID
    DanglingReference,
    /// Übergabepunkt liegt nicht mehr in der Überlappung seiner Krane
    StaleHandoff,
}

/// Einzelner Validierungs-Befund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub kind: IssueKind,
    pub message: String,
    /// Betroffenes Element (falls eindeutig)
    pub entity_id: Option<u64>,
}

impl ValidationIssue {
    pub fn error(kind: IssueKind, message: impl Into<String>, entity_id: Option<u64>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            message: message.into(),
            entity_id,
        }
    }

    pub fn warning(kind: IssueKind, message: impl Into<String>, entity_id: Option<u64>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            message: message.into(),
            entity_id,
        }
    }
}

/// Prüft ob mindestens ein Befund die Schwere `Error` hat.
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}
