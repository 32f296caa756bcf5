//! Outline-Erzeugung: Mittellinie → geschlossenes, füllbares Polygon.
//!
//! Die Breite ist entweder konstant (Strichstärke) oder dynamisch aus Druck
//! und Geschwindigkeit abgeleitet. Ecken werden als Miter über den Schnittpunkt
//! der versetzten Kanten gebildet, offene Enden erhalten runde Kappen.

use super::Transforming;
use crate::core::{Drawing, Point, Stroke};
use crate::shared::geometry::{left_normal, line_intersection};
use crate::shared::options::{
    OUTLINE_CAP_SEGMENTS, OUTLINE_MIN_WIDTH_FACTOR, OUTLINE_MITER_LIMIT, OUTLINE_SPEED_REFERENCE,
};
use crate::shared::InkOptions;
use glam::Vec2;
use std::f32::consts::PI;

/// Wandelt jeden Strich mit mindestens zwei Punkten in sein Outline-Polygon um.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineTransformer {
    /// Breite aus Druck/Geschwindigkeit statt konstant
    pub dynamic_width: bool,
    /// Maximale (und bei fester Breite einzige) Strichbreite
    pub stroke_size: f32,
    /// Minimale Breite als Anteil der Strichstärke (0 … 1)
    pub min_width_factor: f32,
    /// Geschwindigkeit, bei der die Breite halbiert wird
    pub speed_reference: f32,
    /// Miter-Limit (Vielfaches der halben Breite)
    pub miter_limit: f32,
    /// Segmente pro runder Endkappe
    pub cap_segments: usize,
}

impl OutlineTransformer {
    /// Erstellt die Stufe mit Standard-Optionen.
    pub fn new(dynamic_width: bool, stroke_size: f32) -> Self {
        Self {
            dynamic_width,
            stroke_size,
            min_width_factor: OUTLINE_MIN_WIDTH_FACTOR,
            speed_reference: OUTLINE_SPEED_REFERENCE,
            miter_limit: OUTLINE_MITER_LIMIT,
            cap_segments: OUTLINE_CAP_SEGMENTS,
        }
    }

    /// Erstellt die Stufe aus den Laufzeit-Optionen.
    pub fn from_options(dynamic_width: bool, stroke_size: f32, options: &InkOptions) -> Self {
        Self {
            dynamic_width,
            stroke_size,
            min_width_factor: options.outline_min_width_factor.clamp(0.0, 1.0),
            speed_reference: options.outline_speed_reference,
            miter_limit: options.outline_miter_limit.max(1.0),
            cap_segments: options.outline_cap_segments.max(1),
        }
    }

    /// Breite je Punkt, immer in `[stroke_size·min_width_factor, stroke_size]`.
    pub fn width_profile(&self, points: &[Point]) -> Vec<f32> {
        if !self.dynamic_width {
            return vec![self.stroke_size; points.len()];
        }
        let min_factor = self.min_width_factor.clamp(0.0, 1.0);
        (0..points.len())
            .map(|i| {
                let pressure = pressure_factor(points[i].force);
                let speed = speed_factor(speed_at(points, i), self.speed_reference);
                self.stroke_size * (min_factor + (1.0 - min_factor) * pressure * speed)
            })
            .collect()
    }

    /// Erzeugt das Outline-Polygon einer Mittellinie.
    pub fn outline(&self, stroke: &Stroke) -> Stroke {
        if stroke.len() <= 1 {
            return stroke.clone();
        }

        let widths = self.width_profile(stroke.points());
        let (points, widths) = dedup(stroke.points(), &widths, stroke.is_closed());
        let polygon = if points.len() == 1 {
            dot(points[0], widths[0] / 2.0, self.cap_segments)
        } else if stroke.is_closed() && points.len() >= 3 {
            self.closed_outline(&points, &widths)
        } else {
            self.open_outline(&points, &widths)
        };

        log::trace!(
            "Outline: {} Mittelpunkte → {} Outline-Punkte (dynamisch: {})",
            stroke.len(),
            polygon.len(),
            self.dynamic_width
        );
        stroke.with(polygon, true)
    }

    /// Linker Versatzvektor an `p`, Miter über den Schnittpunkt der versetzten Kanten.
    fn offset_at(&self, p: Vec2, dir_in: Vec2, dir_out: Vec2, half: f32) -> Vec2 {
        let n_in = left_normal(dir_in);
        let n_out = left_normal(dir_out);
        let a0 = p + n_in * half;
        let b0 = p + n_out * half;

        let offset = match line_intersection(a0, a0 + dir_in, b0, b0 + dir_out) {
            Some(corner) => corner - p,
            None => (n_in + n_out).try_normalize().unwrap_or(n_in) * half,
        };

        let limit = self.miter_limit * half;
        if offset.length() > limit {
            offset.normalize_or_zero() * limit
        } else {
            offset
        }
    }

    fn open_outline(&self, points: &[Point], widths: &[f32]) -> Vec<Point> {
        let n = points.len();
        let dirs: Vec<Vec2> = points
            .windows(2)
            .map(|w| (w[1].location - w[0].location).normalize_or_zero())
            .collect();

        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        for i in 0..n {
            let dir_in = dirs[i.saturating_sub(1)];
            let dir_out = dirs[i.min(n - 2)];
            let offset = self.offset_at(points[i].location, dir_in, dir_out, widths[i] / 2.0);
            left.push(points[i].with_location(points[i].location + offset));
            right.push(points[i].with_location(points[i].location - offset));
        }

        let mut polygon = Vec::with_capacity(2 * n + 2 * self.cap_segments);
        polygon.extend_from_slice(&left);
        polygon.extend(cap(points[n - 1], dirs[n - 2], widths[n - 1] / 2.0, self.cap_segments));
        polygon.extend(right.iter().rev());
        polygon.extend(cap(points[0], -dirs[0], widths[0] / 2.0, self.cap_segments));
        polygon
    }

    fn closed_outline(&self, points: &[Point], widths: &[f32]) -> Vec<Point> {
        let n = points.len();
        let dirs: Vec<Vec2> = (0..n)
            .map(|i| (points[(i + 1) % n].location - points[i].location).normalize_or_zero())
            .collect();

        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        for i in 0..n {
            let offset = self.offset_at(
                points[i].location,
                dirs[(i + n - 1) % n],
                dirs[i],
                widths[i] / 2.0,
            );
            left.push(points[i].with_location(points[i].location + offset));
            right.push(points[i].with_location(points[i].location - offset));
        }

        // Äußerer Ring vorwärts, innerer Ring rückwärts (Keyhole)
        let mut polygon = Vec::with_capacity(2 * n + 3);
        polygon.extend_from_slice(&left);
        polygon.push(left[0]);
        polygon.push(right[0]);
        polygon.extend(right[1..].iter().rev());
        polygon.push(right[0]);
        polygon
    }
}

/// Druck → Breitenanteil; fehlender Druck (≤ 0 oder NaN) zählt als voll.
fn pressure_factor(force: f32) -> f32 {
    if force > 0.0 {
        force.min(1.0)
    } else {
        1.0
    }
}

/// Geschwindigkeit → Breitenanteil `1 / (1 + v / v_ref)`.
fn speed_factor(speed: f32, reference: f32) -> f32 {
    if reference > 0.0 && speed.is_finite() && speed > 0.0 {
        1.0 / (1.0 + speed / reference)
    } else {
        1.0
    }
}

/// Zentrale Differenz der Geschwindigkeit am Punkt `i` (0 ohne Zeitfortschritt).
fn speed_at(points: &[Point], i: usize) -> f32 {
    let prev = &points[i.saturating_sub(1)];
    let next = &points[(i + 1).min(points.len() - 1)];
    let dt = next.time - prev.time;
    if dt > 0.0 && dt.is_finite() {
        (prev.distance(next) as f64 / dt) as f32
    } else {
        0.0
    }
}

/// Entfernt aufeinanderfolgende Punkte mit gleicher Position (samt Breite).
///
/// Bei geschlossenen Strichen entfällt zusätzlich ein Schlusspunkt, der den
/// Startpunkt doppelt.
fn dedup(points: &[Point], widths: &[f32], closed: bool) -> (Vec<Point>, Vec<f32>) {
    let mut out_points: Vec<Point> = Vec::with_capacity(points.len());
    let mut out_widths = Vec::with_capacity(points.len());
    for (point, &width) in points.iter().zip(widths) {
        if out_points
            .last()
            .is_some_and(|last| last.location == point.location)
        {
            continue;
        }
        out_points.push(*point);
        out_widths.push(width);
    }
    if closed
        && out_points.len() > 1
        && out_points[0].location == out_points[out_points.len() - 1].location
    {
        out_points.pop();
        out_widths.pop();
    }
    (out_points, out_widths)
}

/// Innere Punkte einer Halbkreis-Kappe von links nach rechts um `dir` herum.
fn cap(center: Point, dir: Vec2, half: f32, segments: usize) -> impl Iterator<Item = Point> {
    let normal = left_normal(dir);
    (1..segments).map(move |k| {
        let angle = PI * k as f32 / segments as f32;
        let offset = (normal * angle.cos() + dir * angle.sin()) * half;
        center.with_location(center.location + offset)
    })
}

/// Vollkreis um einen einzelnen Punkt.
fn dot(center: Point, half: f32, segments: usize) -> Vec<Point> {
    let count = 2 * segments.max(2);
    (0..count)
        .map(|k| {
            let angle = 2.0 * PI * k as f32 / count as f32;
            center.with_location(center.location + Vec2::from_angle(angle) * half)
        })
        .collect()
}

impl Transforming for OutlineTransformer {
    fn transform(&self, drawing: &Drawing) -> Drawing {
        drawing.map_strokes(|_, stroke| self.outline(stroke))
    }
}
