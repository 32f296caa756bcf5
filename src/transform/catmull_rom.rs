//! Catmull-Rom-Fitting mit Bogenlängen-Neuabtastung.
//!
//! Der Spline läuft durch die inneren Kontrollpunkte; die Abtastung erfolgt
//! gleichmäßig nach Bogenlänge statt nach Spline-Parameter, sodass die Dichte
//! der ursprünglichen Eingabe keine Rolle mehr spielt.

use super::{parameter_steps, Transforming};
use crate::core::{Drawing, Point, Stroke};
use crate::shared::spline_geometry::{catmull_rom_point, polyline_length};
use glam::Vec2;

/// Ersetzt jeden Strich durch eine nach Bogenlänge gleichmäßig abgetastete
/// Catmull-Rom-Spline mit gleicher Punktanzahl.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CatmullRomTransformer;

impl CatmullRomTransformer {
    /// Erstellt die Stufe.
    pub fn new() -> Self {
        Self
    }
}

impl Transforming for CatmullRomTransformer {
    fn transform(&self, drawing: &Drawing) -> Drawing {
        drawing.map_strokes(|_, stroke| fit_stroke(stroke))
    }
}

fn fit_stroke(stroke: &Stroke) -> Stroke {
    let points = stroke.points();
    if points.len() <= 1 {
        return stroke.clone();
    }

    let delta = 1.0 / points.len() as f64;
    let table = ArcLengthTable::build(points, delta);
    let resampled = parameter_steps(0.0, 1.0, delta)
        .map(|t| spline_point(points, table.parameter_at(t)))
        .collect();

    stroke.with_points(resampled)
}

/// Punkt auf der Spline an Parameter `t` (Segmentindex = ⌊t⌋).
///
/// - weniger als 4 Punkte: erster Punkt
/// - Segment ohne vier Kontrollpunkte: vorletzter Punkt
///
/// Zeit und Druck stammen vom ersten Kontrollpunkt des Segments.
/// `points` darf nicht leer sein.
pub fn spline_point(points: &[Point], t: f64) -> Point {
    if points.len() < 4 {
        return points[0];
    }

    let floor = t.max(0.0).floor();
    let index = floor as usize;
    if index >= points.len() - 3 {
        return points[points.len() - 2];
    }

    let u = (t.max(0.0) - floor) as f32;
    let p0 = points[index];
    p0.with_location(catmull_rom_point(
        p0.location,
        points[index + 1].location,
        points[index + 2].location,
        points[index + 3].location,
        u,
    ))
}

/// Bogenlängen-Tabelle je Einheitssegment der Spline.
///
/// `segment_lengths[0] = 0`, `segment_lengths[i]` = Länge des Segments `[i−1, i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcLengthTable {
    segment_lengths: Vec<f64>,
    max_length: f64,
}

impl ArcLengthTable {
    /// Misst jedes Einheitssegment über eine dichte Polyline (Schrittweite `delta`).
    pub fn build(points: &[Point], delta: f64) -> Self {
        let mut segment_lengths = Vec::with_capacity(points.len());
        segment_lengths.push(0.0);

        for i in 1..points.len() {
            let samples: Vec<Vec2> = parameter_steps((i - 1) as f64, i as f64, delta)
                .map(|t| spline_point(points, t).location)
                .collect();
            segment_lengths.push(polyline_length(&samples) as f64);
        }

        let max_length = segment_lengths.iter().sum();
        Self {
            segment_lengths,
            max_length,
        }
    }

    /// Gesamtlänge aller Segmente.
    pub fn max_length(&self) -> f64 {
        self.max_length
    }

    /// Bildet einen Bogenlängen-Anteil `t ∈ [0, 1]` auf einen Spline-Parameter ab.
    ///
    /// Werte außerhalb werden auf Parameter 0 bzw. 1 begrenzt.
    pub fn parameter_at(&self, t: f64) -> f64 {
        if t < 0.0 {
            return 0.0;
        } else if t > 1.0 {
            return 1.0;
        }

        let lengths = &self.segment_lengths;
        let current = t * self.max_length;
        let mut total = 0.0;
        let mut index = 0;
        while index + 2 < lengths.len() && current > total + lengths[index + 1] {
            index += 1;
            total += lengths[index];
        }

        let segment_length = lengths.get(index + 1).copied().unwrap_or(0.0);
        let remainder = current - total;
        let fraction = if segment_length > 0.0 {
            remainder / segment_length
        } else {
            0.0
        };
        index as f64 + fraction
    }
}

#[cfg(test)]
mod tests;
