//! Lerp-Glättung: wiederholtes Eckenabschneiden (Chaikin) über Punktinterpolation.

use super::Transforming;
use crate::core::{Drawing, Point};

/// Ersetzt in jedem Durchlauf jedes Segment durch seine ¼- und ¾-Interpolanten.
///
/// Position, Zeit und Druck werden gemeinsam interpoliert. Offene Striche
/// behalten ersten und letzten Punkt, geschlossene laufen über das Schlusssegment.
/// Jeder Durchlauf verdoppelt die Punktanzahl; die Form konvergiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LerpTransformer {
    /// Anzahl der Glättungsdurchläufe
    pub iterations: usize,
}

impl LerpTransformer {
    /// Erstellt die Stufe mit `iterations` Durchläufen.
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Glättet eine Punktfolge.
    pub fn smooth(&self, points: &[Point], closed: bool) -> Vec<Point> {
        let mut current = points.to_vec();
        for _ in 0..self.iterations {
            current = cut_corners(&current, closed);
        }
        current
    }
}

impl Transforming for LerpTransformer {
    fn transform(&self, drawing: &Drawing) -> Drawing {
        drawing.map_strokes(|_, stroke| {
            if stroke.len() <= 1 || self.iterations == 0 {
                return stroke.clone();
            }
            stroke.with_points(self.smooth(stroke.points(), stroke.is_closed()))
        })
    }
}

/// Ein Chaikin-Durchlauf.
fn cut_corners(points: &[Point], closed: bool) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut result = Vec::with_capacity(points.len() * 2);
    if closed {
        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            result.push(a.lerp(b, 0.25));
            result.push(a.lerp(b, 0.75));
        }
    } else {
        result.push(points[0]);
        for w in points.windows(2) {
            result.push(w[0].lerp(w[1], 0.25));
            result.push(w[0].lerp(w[1], 0.75));
        }
        result.push(points[points.len() - 1]);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Stroke;
    use crate::shared::geometry::point_segment_distance;
    use glam::Vec2;

    fn square(closed: bool) -> Stroke {
        Stroke::new(
            vec![
                Point::new(Vec2::new(0.0, 0.0), 0.0, 0.0),
                Point::new(Vec2::new(100.0, 0.0), 10.0, 1.0),
                Point::new(Vec2::new(100.0, 100.0), 20.0, 0.0),
                Point::new(Vec2::new(0.0, 100.0), 30.0, 1.0),
            ],
            closed,
        )
    }

    fn smooth(stroke: &Stroke, iterations: usize) -> Stroke {
        LerpTransformer::new(iterations)
            .transform(&Drawing::single(stroke.clone()))
            .strokes()[0]
            .clone()
    }

    /// Größter Abstand eines Punkts von `fine` zur Polyline `coarse`.
    fn deviation(fine: &Stroke, coarse: &Stroke) -> f32 {
        let mut segments: Vec<(Vec2, Vec2)> = coarse
            .points()
            .windows(2)
            .map(|w| (w[0].location, w[1].location))
            .collect();
        if coarse.is_closed() {
            let pts = coarse.points();
            segments.push((pts[pts.len() - 1].location, pts[0].location));
        }
        fine.points()
            .iter()
            .map(|p| {
                segments
                    .iter()
                    .map(|&(a, b)| point_segment_distance(p.location, a, b))
                    .fold(f32::MAX, f32::min)
            })
            .fold(0.0, f32::max)
    }

    #[test]
    fn test_einzelpunkt_und_null_durchlaeufe_sind_identitaet() {
        let single = Stroke::open(vec![Point::at(1.0, 2.0)]);
        assert_eq!(smooth(&single, 3), single);
        assert_eq!(smooth(&square(false), 0), square(false));
    }

    #[test]
    fn test_punktanzahl_waechst_monoton() {
        for closed in [false, true] {
            let stroke = square(closed);
            let mut last = stroke.len();
            for iterations in 1..=4 {
                let len = smooth(&stroke, iterations).len();
                assert_eq!(len, stroke.len() << iterations);
                assert!(len > last);
                last = len;
            }
        }
    }

    #[test]
    fn test_offener_strich_behaelt_endpunkte() {
        let stroke = square(false);
        let result = smooth(&stroke, 2);
        assert_eq!(result.points()[0], stroke.points()[0]);
        assert_eq!(result.points()[result.len() - 1], stroke.points()[3]);
    }

    #[test]
    fn test_zeit_und_druck_werden_interpoliert() {
        let result = smooth(&square(false), 1);
        // Erstes Segment: ¼ und ¾
        assert_eq!(result.points()[1].location, Vec2::new(25.0, 0.0));
        assert_eq!(result.points()[1].time, 2.5);
        assert_eq!(result.points()[2].force, 0.75);
    }

    #[test]
    fn test_geschlossener_strich_schneidet_alle_ecken() {
        let result = smooth(&square(true), 1);
        assert!(result.is_closed());
        // Keine Originalecke bleibt erhalten
        for corner in square(true).points() {
            assert!(result
                .points()
                .iter()
                .all(|p| p.location.distance(corner.location) > 1.0));
        }
    }

    #[test]
    fn test_form_konvergiert() {
        let stroke = square(true);
        let early = deviation(&smooth(&stroke, 2), &smooth(&stroke, 1));
        let late = deviation(&smooth(&stroke, 4), &smooth(&stroke, 3));
        assert!(late < early / 4.0, "früh {:.3}, spät {:.3}", early, late);
    }
}
