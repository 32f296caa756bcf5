//! Zentrale Konfiguration der Strich-Pipeline.
//!
//! `InkOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Form-Snapping ───────────────────────────────────────────────────

/// Rundheits-Toleranz: max. Differenz zwischen größtem und kleinstem
/// Mittelpunktabstand, damit ein Strich als Kreis gilt (Canvas-Einheiten).
pub const CIRCLE_TOLERANCE: f32 = 200.0;
/// Winkelschritt (Radiant) beim Erzeugen des Kreis-Polygons.
pub const CIRCLE_ANGLE_STEP: f32 = 0.1;
/// Max. Lotabstand eines inneren Punkts zur Sehne, damit ein Strich als Linie gilt.
pub const LINE_TOLERANCE: f32 = 50.0;

// ── Outline ─────────────────────────────────────────────────────────

/// Minimale Strichbreite als Anteil der Strichstärke (dynamische Breite).
pub const OUTLINE_MIN_WIDTH_FACTOR: f32 = 0.3;
/// Geschwindigkeit (Einheiten pro Zeiteinheit), bei der die Breite halbiert wird.
pub const OUTLINE_SPEED_REFERENCE: f32 = 2.0;
/// Miter-Limit als Vielfaches der halben Breite.
pub const OUTLINE_MITER_LIMIT: f32 = 4.0;
/// Segmente pro runder Endkappe.
pub const OUTLINE_CAP_SEGMENTS: usize = 8;

// ── Spitzen ─────────────────────────────────────────────────────────

/// Anteil der Strichlänge, über den der Druck an den Enden ausläuft.
pub const TIP_TAPER_FRACTION: f32 = 0.15;
/// Restdruck am äußersten Ende einer runden Spitze.
pub const TIP_MIN_FORCE: f32 = 0.2;
/// Pfeilkopf-Länge als Vielfaches der Strichstärke.
pub const ARROW_HEAD_FACTOR: f32 = 3.0;
/// Minimale Pfeilkopf-Länge in Canvas-Einheiten.
pub const ARROW_HEAD_MIN_LENGTH: f32 = 12.0;
/// Öffnungswinkel eines Pfeil-Widerhakens (Radiant, 30°).
pub const ARROW_HEAD_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

// ── Glättung ────────────────────────────────────────────────────────

/// Lerp-Durchläufe des Pinsels (nach der Outline).
pub const BRUSH_LERP_ITERATIONS: usize = 3;
/// Lerp-Durchläufe aller übrigen Presets.
pub const DEFAULT_LERP_ITERATIONS: usize = 1;
/// Obergrenze der Lerp-Durchläufe (jeder Durchlauf verdoppelt die Punktanzahl).
pub const MAX_LERP_ITERATIONS: usize = 6;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Pipeline-Optionen.
/// Wird vom Aufrufer als TOML-Datei geladen und gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InkOptions {
    // ── Snapping ────────────────────────────────────────────────
    /// Rundheits-Toleranz für die Kreis-Erkennung
    pub circle_tolerance: f32,
    /// Winkelschritt des erzeugten Kreis-Polygons
    pub circle_angle_step: f32,
    /// Lot-Toleranz für die Linien-Erkennung
    pub line_tolerance: f32,

    // ── Outline ─────────────────────────────────────────────────
    /// Minimale Breite als Anteil der Strichstärke
    pub outline_min_width_factor: f32,
    /// Referenzgeschwindigkeit für die dynamische Breite
    pub outline_speed_reference: f32,
    /// Miter-Limit (Vielfaches der halben Breite)
    pub outline_miter_limit: f32,
    /// Segmente pro runder Endkappe
    pub outline_cap_segments: usize,

    // ── Spitzen ─────────────────────────────────────────────────
    /// Auslauf-Anteil der runden Spitze
    pub tip_taper_fraction: f32,
    /// Pfeilkopf-Länge relativ zur Strichstärke
    pub arrow_head_factor: f32,

    // ── Glättung ────────────────────────────────────────────────
    /// Lerp-Durchläufe des Pinsels
    pub brush_lerp_iterations: usize,
    /// Lerp-Durchläufe der übrigen Presets
    pub default_lerp_iterations: usize,
}

impl Default for InkOptions {
    fn default() -> Self {
        Self {
            circle_tolerance: CIRCLE_TOLERANCE,
            circle_angle_step: CIRCLE_ANGLE_STEP,
            line_tolerance: LINE_TOLERANCE,

            outline_min_width_factor: OUTLINE_MIN_WIDTH_FACTOR,
            outline_speed_reference: OUTLINE_SPEED_REFERENCE,
            outline_miter_limit: OUTLINE_MITER_LIMIT,
            outline_cap_segments: OUTLINE_CAP_SEGMENTS,

            tip_taper_fraction: TIP_TAPER_FRACTION,
            arrow_head_factor: ARROW_HEAD_FACTOR,

            brush_lerp_iterations: BRUSH_LERP_ITERATIONS,
            default_lerp_iterations: DEFAULT_LERP_ITERATIONS,
        }
    }
}

impl InkOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Ink-Optionen geladen aus: {}", path.display());
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
        log::info!("Ink-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfeilkopf-Länge für eine Strichstärke.
    pub fn arrow_head_length(&self, stroke_size: f32) -> f32 {
        (stroke_size * self.arrow_head_factor).max(ARROW_HEAD_MIN_LENGTH)
    }
}
