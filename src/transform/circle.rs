//! Kreis-Snapping: ein annähernd runder erster Strich wird zum exakten Kreis.

use super::{parameter_steps, Transforming};
use crate::core::{Drawing, Point, Rect, Stroke};
use crate::shared::options::{CIRCLE_ANGLE_STEP, CIRCLE_TOLERANCE};
use crate::shared::InkOptions;
use glam::Vec2;

/// Erkennt, ob der erste Strich ein Kreis ist, und ersetzt ihn dann durch ein
/// regelmäßiges Polygon auf dem Inkreis seines Frames.
///
/// Nur Strich 0 mit mehr als 2 Punkten wird geprüft; alle anderen bleiben unverändert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleTransformer {
    /// Max. Differenz zwischen größtem und kleinstem Mittelpunktabstand
    pub tolerance: f32,
    /// Winkelschritt des erzeugten Polygons (Radiant)
    pub angle_step: f32,
}

impl Default for CircleTransformer {
    fn default() -> Self {
        Self::new(CIRCLE_TOLERANCE, CIRCLE_ANGLE_STEP)
    }
}

impl CircleTransformer {
    /// Erstellt die Stufe; ungültige Winkelschritte fallen auf den Standardwert zurück.
    pub fn new(tolerance: f32, angle_step: f32) -> Self {
        let angle_step = if angle_step > 0.0 && angle_step.is_finite() {
            angle_step
        } else {
            log::warn!(
                "Ungültiger Kreis-Winkelschritt {}, verwende {}",
                angle_step,
                CIRCLE_ANGLE_STEP
            );
            CIRCLE_ANGLE_STEP
        };
        Self {
            tolerance,
            angle_step,
        }
    }

    /// Erstellt die Stufe aus den Laufzeit-Optionen.
    pub fn from_options(options: &InkOptions) -> Self {
        Self::new(options.circle_tolerance, options.circle_angle_step)
    }

    /// Prüft, ob alle Punkte annähernd gleich weit vom Mittelpunkt entfernt sind.
    pub fn is_circle(&self, points: &[Point], center: Vec2) -> bool {
        let (min, max) = points
            .iter()
            .map(|p| center.distance(p.location))
            .fold((f32::MAX, 0.0f32), |(min, max), d| (min.min(d), max.max(d)));
        max - min < self.tolerance
    }

    /// Regelmäßiges Polygon auf dem Kreis um die Frame-Mitte (Radius = halbe Breite),
    /// plus schließende Kopie des ersten Punkts.
    pub fn circle_points(&self, frame: Rect) -> Vec<Point> {
        let center = frame.center();
        let radius = frame.width() / 2.0;

        let mut result: Vec<Point> =
            parameter_steps(0.0, std::f64::consts::TAU, self.angle_step as f64)
                .map(|angle| {
                    let angle = angle as f32;
                    Point::new(
                        center + radius * Vec2::new(angle.cos(), angle.sin()),
                        0.0,
                        0.0,
                    )
                })
                .collect();
        if let Some(&first) = result.first() {
            result.push(first);
        }
        result
    }

    fn snap(&self, stroke: &Stroke) -> Stroke {
        if stroke.len() <= 2 {
            return stroke.clone();
        }
        let frame = stroke.frame();
        if !self.is_circle(stroke.points(), frame.center()) {
            return stroke.clone();
        }
        log::debug!(
            "Circle: Strich mit {} Punkten als Kreis erkannt (r = {:.1})",
            stroke.len(),
            frame.width() / 2.0
        );
        stroke.with(self.circle_points(frame), true)
    }
}

impl Transforming for CircleTransformer {
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
