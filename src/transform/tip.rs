//! Spitzenform: runder Druck-Auslauf oder Pfeilkopf am Strich-Ende.

use super::Transforming;
use crate::core::{Drawing, Point, Stroke, TipType};
use crate::shared::options::{ARROW_HEAD_ANGLE, TIP_MIN_FORCE, TIP_TAPER_FRACTION};
use crate::shared::InkOptions;
use glam::Vec2;

/// Konkrete Spitzenform mit ihren Maßen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tip {
    /// Druck läuft an beiden Enden über `taper_fraction` der Strichlänge aus.
    Round {
        /// Anteil der Strichlänge je Ende (0 … 0.5)
        taper_fraction: f32,
    },
    /// Pfeilkopf am Strich-Ende.
    Arrow {
        /// Länge der Widerhaken in Canvas-Einheiten
        head_length: f32,
    },
}

impl Tip {
    /// Leitet die Spitzenform aus Spitzenart und Strichstärke ab.
    pub fn new(tip_type: TipType, stroke_size: f32, options: &InkOptions) -> Self {
        match tip_type {
            TipType::Default => Tip::Round {
                taper_fraction: options.tip_taper_fraction,
            },
            TipType::Arrow => Tip::Arrow {
                head_length: options.arrow_head_length(stroke_size),
            },
        }
    }
}

impl Default for Tip {
    fn default() -> Self {
        Tip::Round {
            taper_fraction: TIP_TAPER_FRACTION,
        }
    }
}

/// Formt Anfang und Ende jedes offenen Strichs gemäß [`Tip`].
///
/// Geschlossene Striche und Striche mit höchstens einem Punkt bleiben unverändert.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TipTransformer {
    /// Anzuwendende Spitzenform
    pub tip: Tip,
}

impl TipTransformer {
    /// Erstellt die Stufe.
    pub fn new(tip: Tip) -> Self {
        Self { tip }
    }

    fn shape(&self, stroke: &Stroke) -> Stroke {
        if stroke.len() <= 1 || stroke.is_closed() {
            return stroke.clone();
        }
        match self.tip {
            Tip::Round { taper_fraction } => {
                stroke.with_points(taper(stroke.points(), taper_fraction))
            }
            Tip::Arrow { head_length } => match arrow_head(stroke.points(), head_length) {
                Some(points) => stroke.with_points(points),
                None => stroke.clone(),
            },
        }
    }
}

impl Transforming for TipTransformer {
    fn transform(&self, drawing: &Drawing) -> Drawing {
        drawing.map_strokes(|_, stroke| self.shape(stroke))
    }
}

/// Skaliert den Druck an beiden Enden linear auf `TIP_MIN_FORCE` herunter.
///
/// Punkte ohne Druckinformation (`force == 0`) gelten als voller Druck.
fn taper(points: &[Point], taper_fraction: f32) -> Vec<Point> {
    let mut along = Vec::with_capacity(points.len());
    let mut total = 0.0f32;
    along.push(0.0);
    for w in points.windows(2) {
        total += w[0].distance(&w[1]);
        along.push(total);
    }

    let taper_length = total * taper_fraction.clamp(0.0, 0.5);
    points
        .iter()
        .zip(along)
        .map(|(point, distance)| {
            let base = if point.force > 0.0 { point.force } else { 1.0 };
            let edge = distance.min(total - distance);
            let factor = if taper_length > 0.0 && edge < taper_length {
                TIP_MIN_FORCE + (1.0 - TIP_MIN_FORCE) * (edge / taper_length)
            } else {
                1.0
            };
            point.with_force(base * factor)
        })
        .collect()
}

/// Hängt `links, Ende, rechts, Ende` an das Strich-Ende an.
///
/// Die Richtung wird zum letzten Punkt gemessen, der mindestens ¼ Kopflänge
/// vom Ende entfernt liegt (sonst zum ersten Punkt). `None` ohne Richtung.
fn arrow_head(points: &[Point], head_length: f32) -> Option<Vec<Point>> {
    let tip = *points.last()?;
    let min_distance = head_length / 4.0;
    let anchor = points
        .iter()
        .rev()
        .find(|p| p.distance(&tip) >= min_distance)
        .unwrap_or(&points[0]);

    let back = (anchor.location - tip.location).normalize_or_zero();
    if back == Vec2::ZERO {
        return None;
    }

    let left = Vec2::from_angle(-ARROW_HEAD_ANGLE).rotate(back) * head_length;
    let right = Vec2::from_angle(ARROW_HEAD_ANGLE).rotate(back) * head_length;

    let mut result = Vec::with_capacity(points.len() + 4);
    result.extend_from_slice(points);
    result.push(tip.with_location(tip.location + left));
    result.push(tip);
    result.push(tip.with_location(tip.location + right));
    result.push(tip);
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn horizontal(count: usize, force: f32) -> Stroke {
        Stroke::open(
            (0..count)
                .map(|i| Point::new(Vec2::new(i as f32 * 10.0, 0.0), i as f64, force))
                .collect(),
        )
    }

    fn apply(tip: Tip, stroke: &Stroke) -> Stroke {
        TipTransformer::new(tip)
            .transform(&Drawing::single(stroke.clone()))
            .strokes()[0]
            .clone()
    }

    #[test]
    fn test_runde_spitze_laeuft_an_beiden_enden_aus() {
        let stroke = horizontal(11, 0.0);
        let result = apply(
            Tip::Round {
                taper_fraction: 0.2,
            },
            &stroke,
        );

        let forces: Vec<f32> = result.points().iter().map(|p| p.force).collect();
        assert_relative_eq!(forces[0], TIP_MIN_FORCE);
        assert_relative_eq!(forces[10], TIP_MIN_FORCE);
        // Taper über 20 Einheiten: Punkt 1 liegt auf halber Strecke
        assert_relative_eq!(forces[1], TIP_MIN_FORCE + (1.0 - TIP_MIN_FORCE) * 0.5);
        assert_relative_eq!(forces[5], 1.0);
        // Geometrie bleibt unverändert
        for (a, b) in result.points().iter().zip(stroke.points()) {
            assert_eq!(a.location, b.location);
        }
    }

    #[test]
    fn test_runde_spitze_skaliert_vorhandenen_druck() {
        let result = apply(Tip::default(), &horizontal(21, 0.5));
        assert_relative_eq!(result.points()[10].force, 0.5);
        assert_relative_eq!(result.points()[0].force, 0.5 * TIP_MIN_FORCE);
    }

    #[test]
    fn test_pfeil_haengt_vier_punkte_an() {
        let stroke = horizontal(5, 0.7);
        let result = apply(Tip::Arrow { head_length: 20.0 }, &stroke);
        assert_eq!(result.len(), 9);

        let tip = stroke.points()[4].location;
        let pts = result.points();
        assert_eq!(pts[6].location, tip);
        assert_eq!(pts[8].location, tip);

        // Widerhaken zeigen zurück (x < Spitze), symmetrisch zur Strichachse
        let left = pts[5].location;
        let right = pts[7].location;
        assert!(left.x < tip.x && right.x < tip.x);
        assert_relative_eq!(left.y, -right.y, epsilon = 1e-4);
        assert_relative_eq!(left.distance(tip), 20.0, epsilon = 1e-3);
        assert_relative_eq!(pts[5].force, 0.7);
    }

    #[test]
    fn test_pfeil_ohne_richtung_bleibt_unveraendert() {
        let stroke = Stroke::open(vec![Point::at(5.0, 5.0), Point::at(5.0, 5.0)]);
        assert_eq!(apply(Tip::Arrow { head_length: 20.0 }, &stroke), stroke);
    }

    #[test]
    fn test_einzelpunkt_und_geschlossen_bleiben_unveraendert() {
        let single = horizontal(1, 0.3);
        assert_eq!(apply(Tip::default(), &single), single);

        let closed = horizontal(4, 0.3).with_closed(true);
        assert_eq!(apply(Tip::Arrow { head_length: 10.0 }, &closed), closed);
    }

    #[test]
    fn test_tip_aus_spitzenart() {
        let options = InkOptions::default();
        assert_eq!(
            Tip::new(TipType::Arrow, 10.0, &options),
            Tip::Arrow { head_length: 30.0 }
        );
        assert_eq!(Tip::new(TipType::Default, 10.0, &options), Tip::default());
    }
}
