//! Facility Layout Engine (headless).
//!
//! Lädt einen Layout-Snapshot (JSON), übernimmt Alt-Transportdaten, prüft das
//! Layout und meldet Befunde sowie Kran-Überlappungen im Log.

use anyhow::Context;
use facility_layout_engine::core::{has_errors, LegacyTransport, Severity};
use facility_layout_engine::{EngineOptions, FacilityLayout};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Inhalt einer Szenen-Datei.
#[derive(Debug, Deserialize)]
struct SceneFile {
    layout: FacilityLayout,
    /// Flache Transportdaten aus Altbeständen (optional)
    #[serde(default)]
    legacy_transport: Option<LegacyTransport>,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Facility Layout Engine v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let Some(scene_path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        log::error!("Aufruf: Facility-Layout-Engine <szene.json>");
        std::process::exit(2);
    };

    // Optionen aus TOML laden (oder Standardwerte)
    let options = EngineOptions::load_from_file(&EngineOptions::config_path());
    let layout = load_scene(&scene_path)?;

    if report(&layout, &options) {
        std::process::exit(1);
    }
    Ok(())
}

/// Lädt die Szene und baut abgeleitete Indizes auf.
fn load_scene(path: &Path) -> anyhow::Result<FacilityLayout> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Szene nicht lesbar: {}", path.display()))?;
    let scene: SceneFile = serde_json::from_str(&content)
        .with_context(|| format!("Szene fehlerhaft: {}", path.display()))?;

    let mut layout = scene.layout;
    layout.rebuild_indices();
    if let Some(legacy) = scene.legacy_transport {
        if layout.import_legacy_transport(legacy).is_none() {
            log::info!("Alt-Transportdaten leer, nichts übernommen");
        }
    }
    log::info!(
        "Szene geladen: {} Nodes, {} Kanten, {} Krane, {} Netzwerke",
        layout.nodes.len(),
        layout.edges.len(),
        layout.cranes.len(),
        layout.networks.len()
    );
    Ok(layout)
}

/// Loggt Befunde und Überlappungen. `true`, wenn Fehler gefunden wurden.
fn report(layout: &FacilityLayout, options: &EngineOptions) -> bool {
    let issues = layout.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => log::error!("{}", issue.message),
            Severity::Warning => log::warn!("{}", issue.message),
            Severity::Info => log::info!("{}", issue.message),
        }
    }

    for (a, b, (min, max)) in layout.overlapping_crane_pairs() {
        log::info!(
            "Krane {} und {} überlappen auf t = {:.2} bis {:.2}",
            a,
            b,
            min,
            max
        );
    }

    for edge_id in layout.edges.keys() {
        if let Some((from, to)) = layout.edge_anchor_points(*edge_id, options.terminal_stick_out) {
            log::debug!("Kante {}: Anker {:?} → {:?}", edge_id, from, to);
        }
    }

    log::info!("{} Befund(e)", issues.len());
    has_errors(&issues)
}
