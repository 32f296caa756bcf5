//! Bézier-Fitting: eine explizite Bézier-Kurve vom Grad N−1 durch alle N Punkte.

use super::{parameter_steps, Transforming};
use crate::core::{Drawing, Point, Stroke};
use glam::Vec2;

/// Zeitinkrement pro erzeugtem Punkt.
///
/// Platzhalterwert: die Stufe erhält nur die monotone Reihenfolge, keine echte Zeit.
pub const SYNTHETIC_TIME_STEP: f64 = 10.0;

/// Ersetzt jeden Strich durch Abtastwerte der Bézier-Kurve, deren
/// Kontrollpunkte die Strichpunkte sind.
///
/// Abgetastet wird bei `t = k/N` über `[0, 1)`. Die Bernstein-Gewichte werden
/// über Fakultäten in `f64` berechnet; ab etwa N > 170 laufen diese über.
/// Ein dabei entstehendes NaN-Gewicht wird als 1.0 gewertet, Abtastwerte mit
/// NaN-Koordinate werden verworfen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BezierTransformer;

impl BezierTransformer {
    /// Erstellt die Stufe.
    pub fn new() -> Self {
        Self
    }
}

impl Transforming for BezierTransformer {
    fn transform(&self, drawing: &Drawing) -> Drawing {
        drawing.map_strokes(|_, stroke| fit_stroke(stroke))
    }
}

fn fit_stroke(stroke: &Stroke) -> Stroke {
    let points = stroke.points();
    if points.len() <= 1 {
        return stroke.clone();
    }

    let count = points.len();
    let degree = count - 1;
    let mut time = points[0].time;
    let mut fitted = Vec::with_capacity(count);
    let mut dropped = 0usize;

    for t in parameter_steps(0.0, 1.0, 1.0 / count as f64) {
        let mut x = 0.0f64;
        let mut y = 0.0f64;
        for (i, point) in points.iter().enumerate() {
            let weight = basis_weight(i, degree, t);
            x += point.location.x as f64 * weight;
            y += point.location.y as f64 * weight;
        }
        time += SYNTHETIC_TIME_STEP;
        if x.is_nan() || y.is_nan() {
            dropped += 1;
            continue;
        }
        fitted.push(Point::new(Vec2::new(x as f32, y as f32), time, 0.0));
    }

    if dropped > 0 {
        log::debug!(
            "Bezier: {} von {} Abtastwerten wegen NaN verworfen (Grad {})",
            dropped,
            dropped + fitted.len(),
            degree
        );
    }

    stroke.with_points(fitted)
}

/// Bernstein-Gewicht `C(n,i)·tⁱ·(1−t)ⁿ⁻ⁱ`; NaN wird zu 1.0.
pub fn basis_weight(i: usize, n: usize, t: f64) -> f64 {
    let weight = factorial(n) / (factorial(i) * factorial(n - i))
        * t.powf(i as f64)
        * (1.0 - t).powf((n - i) as f64);
    if weight.is_nan() {
        1.0
    } else {
        weight
    }
}

/// n! in `f64` (∞ ab n = 171).
fn factorial(n: usize) -> f64 {
    (2..=n).fold(1.0, |acc, k| acc * k as f64)
}
