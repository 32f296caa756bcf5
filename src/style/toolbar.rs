//! Werkzeug-Einstellungen der Toolbar und ihre Abbildung auf Zeichenstile.

use super::{DrawingStyle, Preset, Rgba, WHITE};
use crate::core::TipType;
use crate::shared::InkOptions;
use serde::{Deserialize, Serialize};

/// Standard-Strichstärke eines Werkzeugs.
pub const DEFAULT_STROKE_SIZE: f32 = 24.0;
/// Standard-Untergrenze der Strichstärke.
pub const DEFAULT_MIN_STROKE_SIZE: f32 = 4.0;
/// Standard-Obergrenze der Strichstärke.
pub const DEFAULT_MAX_STROKE_SIZE: f32 = 48.0;

const BLUE: Rgba = [0.0, 0.0, 1.0, 1.0];
const RED: Rgba = [1.0, 0.0, 0.0, 1.0];
const GREEN: Rgba = [0.0, 1.0, 0.0, 1.0];

/// Werkzeugart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Brush,
    Pencil,
    Marker,
    Neon,
    /// Auswahl-Werkzeug, zeichnet nicht
    Lasso,
    Eraser,
}

/// Werkzeug-Variante (Spitze bzw. Radierer-Modus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolVariant {
    #[default]
    Round,
    Arrow,
    Eraser,
    Blur,
    /// Ganze Objekte löschen statt radieren
    Object,
}

/// Einstellungen eines Toolbar-Werkzeugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    pub kind: ToolKind,
    /// Aktive Variante
    pub variant: ToolVariant,
    /// Wählbare Varianten (leer = keine Auswahl)
    pub variants: Vec<ToolVariant>,
    /// Werkzeugfarbe; `None` für farblose Werkzeuge
    pub color: Option<Rgba>,
    pub stroke_size: f32,
    pub min_stroke_size: f32,
    pub max_stroke_size: f32,
}

impl ToolSettings {
    /// Werkzeug mit Standardwerten (runde Variante, Größe 24 in 4 … 48).
    pub fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            variant: ToolVariant::Round,
            variants: Vec::new(),
            color: None,
            stroke_size: DEFAULT_STROKE_SIZE,
            min_stroke_size: DEFAULT_MIN_STROKE_SIZE,
            max_stroke_size: DEFAULT_MAX_STROKE_SIZE,
        }
    }

    /// Kopie mit neuer Variante.
    pub fn with_variant(&self, variant: ToolVariant) -> Self {
        Self {
            variant,
            ..self.clone()
        }
    }

    /// Kopie mit wählbaren Varianten.
    pub fn with_variants(&self, variants: Vec<ToolVariant>) -> Self {
        Self {
            variants,
            ..self.clone()
        }
    }

    /// Kopie mit neuer Farbe.
    pub fn with_color(&self, color: Rgba) -> Self {
        Self {
            color: Some(color),
            ..self.clone()
        }
    }

    /// Kopie mit neuer Strichstärke, begrenzt auf `[min, max]`.
    pub fn with_stroke_size(&self, stroke_size: f32) -> Self {
        let clamped = if stroke_size.is_nan() {
            self.stroke_size
        } else {
            stroke_size
                .min(self.max_stroke_size)
                .max(self.min_stroke_size)
        };
        if clamped != stroke_size {
            log::debug!(
                "{:?}: Strichstärke {} auf {} begrenzt",
                self.kind,
                stroke_size,
                clamped
            );
        }
        Self {
            stroke_size: clamped,
            ..self.clone()
        }
    }

    /// Kopie mit neuer Obergrenze; die Strichstärke wird nachgezogen.
    pub fn with_max_stroke_size(&self, max_stroke_size: f32) -> Self {
        Self {
            max_stroke_size,
            ..self.clone()
        }
        .with_stroke_size(self.stroke_size)
    }

    /// Die Standard-Werkzeugleiste.
    pub fn default_tools() -> Vec<ToolSettings> {
        let round_or_arrow = vec![ToolVariant::Round, ToolVariant::Arrow];
        vec![
            ToolSettings::new(ToolKind::Brush)
                .with_variants(round_or_arrow.clone())
                .with_color(WHITE)
                .with_stroke_size(10.0),
            ToolSettings::new(ToolKind::Marker)
                .with_color(BLUE)
                .with_stroke_size(10.0),
            ToolSettings::new(ToolKind::Neon)
                .with_variants(round_or_arrow)
                .with_color(RED)
                .with_stroke_size(10.0),
            ToolSettings::new(ToolKind::Pencil)
                .with_color(GREEN)
                .with_stroke_size(10.0),
            ToolSettings::new(ToolKind::Lasso),
            ToolSettings::new(ToolKind::Eraser)
                .with_variant(ToolVariant::Eraser)
                .with_variants(vec![
                    ToolVariant::Eraser,
                    ToolVariant::Object,
                    ToolVariant::Blur,
                ])
                .with_max_stroke_size(72.0)
                .with_stroke_size(72.0),
        ]
    }
}

impl DrawingStyle {
    /// Zeichenstil für ein Toolbar-Werkzeug.
    ///
    /// `None` für Werkzeuge ohne Strich (Lasso, Objekt-Radierer).
    pub fn for_tool(tool: &ToolSettings, options: &InkOptions) -> Option<Self> {
        let size = tool.stroke_size;
        let color = tool.color.unwrap_or(WHITE);
        let tip_type = if tool.variant == ToolVariant::Arrow {
            TipType::Arrow
        } else {
            TipType::Default
        };

        let preset = match tool.kind {
            ToolKind::Brush => Preset::Brush,
            ToolKind::Pencil => Preset::Pencil,
            ToolKind::Marker => Preset::Marker,
            ToolKind::Neon => Preset::Neon,
            ToolKind::Lasso => return None,
            ToolKind::Eraser => match tool.variant {
                ToolVariant::Eraser => Preset::Erase,
                ToolVariant::Blur => Preset::Blur,
                _ => return None,
            },
        };
        Some(Self::preset(preset, size, color, tip_type, options))
    }
}
