//! Linien-Snapping: ein annähernd gerader erster Strich wird auf Start und Ende reduziert.

use super::Transforming;
use crate::core::{Drawing, Point, Stroke};
use crate::shared::geometry::point_line_distance;
use crate::shared::options::LINE_TOLERANCE;
use crate::shared::InkOptions;

/// Reduziert den ersten Strich auf `[erster, letzter]` Punkt, wenn alle inneren
/// Punkte höchstens `tolerance` von der Geraden durch diese beiden entfernt sind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineTransformer {
    /// Max. Lotabstand eines inneren Punkts
    pub tolerance: f32,
}

impl Default for LineTransformer {
    fn default() -> Self {
        Self::new(LINE_TOLERANCE)
    }
}

impl LineTransformer {
    /// Erstellt die Stufe mit gegebener Toleranz.
    pub fn new(tolerance: f32) -> Self {
        Self { tolerance }
    }

    /// Erstellt die Stufe aus den Laufzeit-Optionen.
    pub fn from_options(options: &InkOptions) -> Self {
        Self::new(options.line_tolerance)
    }

    /// Prüft, ob die Punkte (innerhalb der Toleranz) auf einer Geraden liegen.
    ///
    /// Bei zusammenfallendem Start und Ende ist der Abstand NaN und zählt nicht als Verstoß.
    pub fn is_single_line(&self, points: &[Point]) -> bool {
        if points.len() <= 2 {
            return true;
        }
        let first = points[0].location;
        let last = points[points.len() - 1].location;
        !points[1..points.len() - 1]
            .iter()
            .any(|p| point_line_distance(p.location, first, last) > self.tolerance)
    }

    fn snap(&self, stroke: &Stroke) -> Stroke {
        let points = stroke.points();
        if points.len() <= 2 || !self.is_single_line(points) {
            return stroke.clone();
        }
        log::debug!("Line: Strich mit {} Punkten als Linie erkannt", points.len());
        stroke.with_points(vec![points[0], points[points.len() - 1]])
    }
}

impl Transforming for LineTransformer {
    fn transform(&self, drawing: &Drawing) -> Drawing {
        drawing.map_strokes(|index, stroke| {
            if index == 0 {
                self.snap(stroke)
            } else {
                stroke.clone()
            }
        })
    }
}
