//! Zentrale Konfiguration der Layout-Engine.
//!
//! `EngineOptions` enthält alle zur Laufzeit änderbaren Schwellwerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Terminal-Anziehung ──────────────────────────────────────────────

/// Fangdistanz beim Platzieren eines Nodes (verschiebt den Node auf das Ziel-Terminal).
pub const PLACEMENT_SNAP_DISTANCE: f32 = 50.0;
/// Fangdistanz beim Verknüpfen nach einem Drag (erzeugt nur Kanten, verschiebt nichts).
pub const LINK_SNAP_DISTANCE: f32 = 40.0;
/// Abstand, um den Terminals nach außen über den Node-Rand hinausragen.
pub const TERMINAL_STICK_OUT: f32 = 12.0;

// ── Hit-Test ────────────────────────────────────────────────────────

/// Trefferradius eines Terminals.
pub const TERMINAL_HIT_RADIUS: f32 = 14.0;
/// Zusätzlicher Rand um Node-Rechtecke.
pub const NODE_HIT_MARGIN: f32 = 8.0;
/// Maximaler Abstand zu einer Pfad-Linie.
pub const PATH_HIT_MARGIN: f32 = 8.0;
/// Dicke des anklickbaren Rahmens einer Gruppe/Zelle.
pub const GROUP_BORDER_THICKNESS: f32 = 12.0;
/// Innenabstand zwischen Gruppenrahmen und Mitglieds-Nodes.
pub const GROUP_PADDING: f32 = 15.0;
/// Zusätzlicher Rand um Wandkörper (halbe Wandstärke kommt hinzu).
pub const WALL_HIT_MARGIN: f32 = 5.0;
/// Trefferradius für Wand-Endpunkte.
pub const WALL_ENDPOINT_HIT_RADIUS: f32 = 8.0;
/// Maximaler Abstand zur Kranbahn-Linie.
pub const RUNWAY_HIT_MARGIN: f32 = 6.0;
/// Trefferradius der Kranbrücke.
pub const CRANE_HIT_RADIUS: f32 = 12.0;
/// Rand um die Einsatzzone eines Krans entlang der Bahn.
pub const RUNWAY_ZONE_HIT_MARGIN: f32 = 15.0;
/// Trefferradius für Schwenkkran-Drehpunkt und Haken.
pub const JIB_HIT_RADIUS: f32 = 15.0;
/// Trefferradius eines Übergabepunkts.
pub const HANDOFF_HIT_RADIUS: f32 = 10.0;
/// Zusätzlicher Rand um Stations-Rechtecke.
pub const STATION_HIT_MARGIN: f32 = 4.0;
/// Trefferradius eines Transport-Wegpunkts.
pub const WAYPOINT_HIT_RADIUS: f32 = 15.0;
/// Trefferradius eines Zonen-Eckpunkts.
pub const ZONE_VERTEX_HIT_RADIUS: f32 = 20.0;

// ── Transport ───────────────────────────────────────────────────────

/// Fangdistanz für Stationen/Wegpunkte beim Gleis-Zeichnen.
pub const TRACK_SNAP_DISTANCE: f32 = 30.0;
/// Maximaler Abstand zu einem Segment für das Einfügen eines Wegpunkts.
pub const SEGMENT_HIT_DISTANCE: f32 = 15.0;
/// Standard-Geschwindigkeit neuer Segmente (m/s).
pub const DEFAULT_SEGMENT_SPEED: f32 = 2.0;
/// Standard-Spuranzahl neuer Segmente.
pub const DEFAULT_SEGMENT_LANES: u32 = 1;

// ── Raster & History ────────────────────────────────────────────────

/// Standard-Rasterweite in Welteinheiten.
pub const GRID_SIZE: f32 = 10.0;
/// Maximale Undo-Tiefe.
pub const HISTORY_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `facility_layout_engine.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineOptions {
    // ── Terminal-Anziehung ──────────────────────────────────────
    /// Fangdistanz beim Platzieren (mit Verschiebung)
    pub placement_snap_distance: f32,
    /// Fangdistanz beim Verknüpfen nach Drag (ohne Verschiebung)
    pub link_snap_distance: f32,
    /// Terminal-Überstand nach außen
    pub terminal_stick_out: f32,

    // ── Hit-Test ────────────────────────────────────────────────
    /// Trefferradius eines Terminals
    pub terminal_hit_radius: f32,
    /// Rand um Node-Rechtecke
    pub node_hit_margin: f32,
    /// Abstand zu Pfad-Linien
    pub path_hit_margin: f32,
    /// Rahmendicke von Gruppen/Zellen
    pub group_border_thickness: f32,
    /// Innenabstand Gruppenrahmen
    pub group_padding: f32,
    /// Rand um Wandkörper
    pub wall_hit_margin: f32,
    /// Trefferradius Wand-Endpunkte
    #[serde(default = "default_wall_endpoint_hit_radius")]
    pub wall_endpoint_hit_radius: f32,
    /// Abstand zur Kranbahn
    pub runway_hit_margin: f32,
    /// Trefferradius Kranbrücke
    pub crane_hit_radius: f32,
    /// Rand um die Kran-Einsatzzone
    pub runway_zone_hit_margin: f32,
    /// Trefferradius Schwenkkran
    pub jib_hit_radius: f32,
    /// Trefferradius Übergabepunkt
    #[serde(default = "default_handoff_hit_radius")]
    pub handoff_hit_radius: f32,
    /// Rand um Stationen
    pub station_hit_margin: f32,
    /// Trefferradius Wegpunkte
    pub waypoint_hit_radius: f32,
    /// Trefferradius Zonen-Eckpunkte
    pub zone_vertex_hit_radius: f32,

    // ── Transport ───────────────────────────────────────────────
    /// Fangdistanz beim Gleis-Zeichnen
    pub track_snap_distance: f32,
    /// Abstand für Wegpunkt-Einfügen auf Segmenten
    pub segment_hit_distance: f32,
    /// Standard-Geschwindigkeit neuer Segmente
    pub default_segment_speed: f32,
    /// Standard-Spuranzahl neuer Segmente
    pub default_segment_lanes: u32,
    /// Klick ins Leere beim Gleis-Zeichnen erzeugt einen Wegpunkt
    #[serde(default = "default_auto_create_waypoints")]
    pub auto_create_waypoints: bool,

    // ── Raster ──────────────────────────────────────────────────
    /// Rasterweite in Welteinheiten
    pub grid_size: f32,
    /// Beim Loslassen auf das Raster einrasten
    #[serde(default)]
    pub snap_to_grid: bool,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Undo-Tiefe
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            placement_snap_distance: PLACEMENT_SNAP_DISTANCE,
            link_snap_distance: LINK_SNAP_DISTANCE,
            terminal_stick_out: TERMINAL_STICK_OUT,

            terminal_hit_radius: TERMINAL_HIT_RADIUS,
            node_hit_margin: NODE_HIT_MARGIN,
            path_hit_margin: PATH_HIT_MARGIN,
            group_border_thickness: GROUP_BORDER_THICKNESS,
            group_padding: GROUP_PADDING,
            wall_hit_margin: WALL_HIT_MARGIN,
            wall_endpoint_hit_radius: WALL_ENDPOINT_HIT_RADIUS,
            runway_hit_margin: RUNWAY_HIT_MARGIN,
            crane_hit_radius: CRANE_HIT_RADIUS,
            runway_zone_hit_margin: RUNWAY_ZONE_HIT_MARGIN,
            jib_hit_radius: JIB_HIT_RADIUS,
            handoff_hit_radius: HANDOFF_HIT_RADIUS,
            station_hit_margin: STATION_HIT_MARGIN,
            waypoint_hit_radius: WAYPOINT_HIT_RADIUS,
            zone_vertex_hit_radius: ZONE_VERTEX_HIT_RADIUS,

            track_snap_distance: TRACK_SNAP_DISTANCE,
            segment_hit_distance: SEGMENT_HIT_DISTANCE,
            default_segment_speed: DEFAULT_SEGMENT_SPEED,
            default_segment_lanes: DEFAULT_SEGMENT_LANES,
            auto_create_waypoints: true,

            grid_size: GRID_SIZE,
            snap_to_grid: false,

            history_depth: HISTORY_DEPTH,
        }
    }
}

/// Serde-Default für `wall_endpoint_hit_radius` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_wall_endpoint_hit_radius() -> f32 {
    WALL_ENDPOINT_HIT_RADIUS
}

/// Serde-Default für `handoff_hit_radius`.
fn default_handoff_hit_radius() -> f32 {
    HANDOFF_HIT_RADIUS
}

fn default_auto_create_waypoints() -> bool {
    true
}

fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl EngineOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("facility_layout_engine"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("facility_layout_engine.toml")
    }

    /// Rastet einen Weltpunkt auf das konfigurierte Raster ein.
    ///
    /// Bei Rasterweite ≤ 0 bleibt der Punkt unverändert.
    pub fn snap_to_grid_point(&self, pos: glam::Vec2) -> glam::Vec2 {
        if self.grid_size <= 0.0 {
            return pos;
        }
        (pos / self.grid_size).round() * self.grid_size
    }
}
