//! Transformations-Stufen der Strich-Pipeline.
//!
//! Jede Stufe ist eine zustandslose, totale Funktion `Drawing → Drawing`.
//! Die konkrete Stufe wird über das Enum [`Stage`] ausgewählt; eine
//! [`TransformChain`] wendet mehrere Stufen strikt in Listenreihenfolge an.

pub mod bezier;
pub mod catmull_rom;
pub mod chain;
pub mod circle;
pub mod lerp;
pub mod line;
pub mod outline;
pub mod tip;

pub use bezier::BezierTransformer;
pub use catmull_rom::CatmullRomTransformer;
pub use chain::TransformChain;
pub use circle::CircleTransformer;
pub use lerp::LerpTransformer;
pub use line::LineTransformer;
pub use outline::OutlineTransformer;
pub use tip::{Tip, TipTransformer};

use crate::core::Drawing;

/// Fähigkeit einer Pipeline-Stufe: erzeugt aus einer Zeichnung eine neue.
pub trait Transforming {
    /// Wendet die Stufe an. Die Eingabe bleibt unverändert.
    fn transform(&self, drawing: &Drawing) -> Drawing;
}

/// Eine konkrete Pipeline-Stufe.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// Spitzenform (runder Auslauf oder Pfeil)
    Tip(TipTransformer),
    /// Mittellinie → gefülltes Outline-Polygon
    Outline(OutlineTransformer),
    /// Eckenabschneidende Glättung
    Lerp(LerpTransformer),
    /// Bézier-Kurve durch alle Punkte
    Bezier(BezierTransformer),
    /// Catmull-Rom-Spline mit Bogenlängen-Neuabtastung
    CatmullRom(CatmullRomTransformer),
    /// Kreis-Snapping des ersten Strichs
    Circle(CircleTransformer),
    /// Linien-Snapping des ersten Strichs
    Line(LineTransformer),
}

impl Stage {
    /// Kurzname für Logging.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Tip(_) => "Tip",
            Stage::Outline(_) => "Outline",
            Stage::Lerp(_) => "Lerp",
            Stage::Bezier(_) => "Bezier",
            Stage::CatmullRom(_) => "CatmullRom",
            Stage::Circle(_) => "Circle",
            Stage::Line(_) => "Line",
        }
    }
}

impl Transforming for Stage {
    fn transform(&self, drawing: &Drawing) -> Drawing {
        match self {
            Stage::Tip(stage) => stage.transform(drawing),
            Stage::Outline(stage) => stage.transform(drawing),
            Stage::Lerp(stage) => stage.transform(drawing),
            Stage::Bezier(stage) => stage.transform(drawing),
            Stage::CatmullRom(stage) => stage.transform(drawing),
            Stage::Circle(stage) => stage.transform(drawing),
            Stage::Line(stage) => stage.transform(drawing),
        }
    }
}

macro_rules! impl_stage_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Stage {
                fn from(stage: $ty) -> Self {
                    Stage::$variant(stage)
                }
            }
        )*
    };
}

impl_stage_from! {
    Tip => TipTransformer,
    Outline => OutlineTransformer,
    Lerp => LerpTransformer,
    Bezier => BezierTransformer,
    CatmullRom => CatmullRomTransformer,
    Circle => CircleTransformer,
    Line => LineTransformer,
}

/// Parameterwerte `from + k·step` für k = 0, 1, … solange `< to`.
///
/// Multiplikativ statt akkumulierend, damit sich Rundungsfehler nicht aufsummieren.
/// Liefert nichts bei nicht-positivem oder nicht-endlichem Schritt.
pub(crate) fn parameter_steps(from: f64, to: f64, step: f64) -> impl Iterator<Item = f64> {
    let valid = step > 0.0 && step.is_finite();
    (0u64..)
        .map(move |k| from + k as f64 * step)
        .take_while(move |&t| valid && t < to)
}
