//! Zeichenstile: Farbe, Strichstärke, Tinte und die zugehörige Stufenkette.
//!
//! Ein Stil wird einmal pro Werkzeugwahl erzeugt und bleibt für die Dauer
//! eines Strichs unverändert. Die Presets legen die Stufenreihenfolge fest;
//! sie ist relevant, weil die Outline-Breite davon abhängt, ob die Glättung
//! bereits gelaufen ist.

pub mod toolbar;

pub use toolbar::{ToolKind, ToolSettings, ToolVariant};

use crate::core::{Drawing, InkType, TipType};
use crate::shared::options::MAX_LERP_ITERATIONS;
use crate::shared::InkOptions;
use crate::transform::{
    LerpTransformer, OutlineTransformer, Stage, Tip, TipTransformer, TransformChain, Transforming,
};
use serde::{Deserialize, Serialize};

/// RGBA-Farbe mit Komponenten in `0.0 … 1.0`.
pub type Rgba = [f32; 4];

/// Deckendes Weiß.
pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Die festen Stil-Presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    /// Tip → Outline(dynamisch) → Lerp(3)
    Brush,
    /// Halbtransparent: Tip → Outline(fest) → Lerp(1)
    Marker,
    /// Tip → Lerp(1) → Outline(dynamisch)
    Neon,
    /// Tip → Lerp(1) → Outline(fest)
    Pencil,
    /// Weichzeichner-Tinte: Lerp(1) → Outline(fest)
    Blur,
    /// Radierer-Tinte: Lerp(1) → Outline(fest)
    Erase,
}

/// Vollständiger Zeichenstil eines Werkzeugs.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingStyle {
    /// Füllfarbe der Outline (Marker bereits mit halbiertem Alpha)
    pub color: Rgba,
    /// Strichstärke in Canvas-Einheiten
    pub stroke_size: f32,
    /// Wirkung der Outline auf das Bild
    pub ink: InkType,
    /// Spitzenart, aus der die Tip-Stufe abgeleitet wurde
    pub tip_type: TipType,
    /// Stufenkette, die auf jede Eingabe-Zeichnung angewendet wird
    pub transforming: TransformChain,
}

impl DrawingStyle {
    /// Erstellt einen Stil aus allen Bestandteilen.
    pub fn new(
        color: Rgba,
        stroke_size: f32,
        ink: InkType,
        tip_type: TipType,
        transforming: TransformChain,
    ) -> Self {
        Self {
            color,
            stroke_size,
            ink,
            tip_type,
            transforming,
        }
    }

    /// Baut ein Preset mit expliziten Optionen.
    ///
    /// Blur und Erase ignorieren `color` und `tip_type` (immer Weiß, Standardspitze).
    pub fn preset(
        preset: Preset,
        stroke_size: f32,
        color: Rgba,
        tip_type: TipType,
        options: &InkOptions,
    ) -> Self {
        let tip = || TipTransformer::new(Tip::new(tip_type, stroke_size, options));
        let outline = |dynamic| OutlineTransformer::from_options(dynamic, stroke_size, options);
        let brush_lerp = LerpTransformer::new(bounded_iterations(options.brush_lerp_iterations));
        let lerp = LerpTransformer::new(bounded_iterations(options.default_lerp_iterations));

        let chain = TransformChain::new;
        match preset {
            Preset::Brush => Self::new(
                color,
                stroke_size,
                InkType::Draw,
                tip_type,
                chain(vec![tip().into(), outline(true).into(), brush_lerp.into()]),
            ),
            Preset::Marker => Self::new(
                with_alpha(color, color[3] * 0.5),
                stroke_size,
                InkType::Draw,
                tip_type,
                chain(vec![tip().into(), outline(false).into(), lerp.into()]),
            ),
            Preset::Neon => Self::new(
                color,
                stroke_size,
                InkType::Draw,
                tip_type,
                chain(vec![tip().into(), lerp.into(), outline(true).into()]),
            ),
            Preset::Pencil => Self::new(
                color,
                stroke_size,
                InkType::Draw,
                tip_type,
                chain(vec![tip().into(), lerp.into(), outline(false).into()]),
            ),
            Preset::Blur => Self::new(
                WHITE,
                stroke_size,
                InkType::Blur,
                TipType::Default,
                chain(vec![lerp.into(), outline(false).into()]),
            ),
            Preset::Erase => Self::new(
                WHITE,
                stroke_size,
                InkType::Erase,
                TipType::Default,
                chain(vec![lerp.into(), outline(false).into()]),
            ),
        }
    }

    /// Pinsel mit Standard-Optionen.
    pub fn brush(stroke_size: f32, color: Rgba, tip_type: TipType) -> Self {
        Self::preset(Preset::Brush, stroke_size, color, tip_type, &InkOptions::default())
    }

    /// Marker mit Standard-Optionen (Alpha halbiert).
    pub fn marker(stroke_size: f32, color: Rgba, tip_type: TipType) -> Self {
        Self::preset(Preset::Marker, stroke_size, color, tip_type, &InkOptions::default())
    }

    /// Neon mit Standard-Optionen.
    pub fn neon(stroke_size: f32, color: Rgba, tip_type: TipType) -> Self {
        Self::preset(Preset::Neon, stroke_size, color, tip_type, &InkOptions::default())
    }

    /// Bleistift mit Standard-Optionen.
    pub fn pencil(stroke_size: f32, color: Rgba, tip_type: TipType) -> Self {
        Self::preset(Preset::Pencil, stroke_size, color, tip_type, &InkOptions::default())
    }

    /// Weichzeichner (weiß, Standardspitze) mit Standard-Optionen.
    pub fn blur(stroke_size: f32) -> Self {
        Self::preset(Preset::Blur, stroke_size, WHITE, TipType::Default, &InkOptions::default())
    }

    /// Radierer (weiß, Standardspitze) mit Standard-Optionen.
    pub fn erase(stroke_size: f32) -> Self {
        Self::preset(Preset::Erase, stroke_size, WHITE, TipType::Default, &InkOptions::default())
    }

    /// Kopie mit vorgeschalteter Fitting-Stufe (Catmull-Rom oder Bézier).
    pub fn with_smoothing(&self, stage: impl Into<Stage>) -> Self {
        Self {
            transforming: self.transforming.clone().prepend(stage),
            ..self.clone()
        }
    }

    /// Wendet die Stufenkette auf eine Zeichnung an.
    pub fn apply(&self, drawing: &Drawing) -> Drawing {
        let result = self.transforming.transform(drawing);
        log::debug!(
            "Stil {:?}: {} → {} Punkte über {} Stufen",
            self.ink,
            drawing.point_count(),
            result.point_count(),
            self.transforming.len()
        );
        result
    }
}

/// Begrenzt konfigurierte Lerp-Durchläufe auf `MAX_LERP_ITERATIONS`.
fn bounded_iterations(requested: usize) -> usize {
    if requested > MAX_LERP_ITERATIONS {
        log::warn!(
            "Lerp-Durchläufe {} zu hoch, verwende {}",
            requested,
            MAX_LERP_ITERATIONS
        );
        MAX_LERP_ITERATIONS
    } else {
        requested
    }
}

fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], alpha]
}
