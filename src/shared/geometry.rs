//! Rein-mathematische Geometrie-Primitive (Abstände, Schnittpunkte).
//!
//! Layer-neutral: wird von allen Transformations-Stufen verwendet.

use glam::Vec2;

/// Lotabstand von `p` zur unendlichen Geraden durch `a` und `b`.
///
/// Für `a == b` ist der Nenner 0 und das Ergebnis NaN; Aufrufer vergleichen
/// mit `>`, NaN gilt damit als „innerhalb“ jeder Toleranz.
pub fn point_line_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    (d.y * p.x - d.x * p.y + b.x * a.y - b.y * a.x).abs() / d.length()
}

/// Abstand von `p` zur Strecke `a`–`b` (Projektion auf die Strecke begrenzt).
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    let len_sq = d.length_squared();
    if len_sq < f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(d) / len_sq).clamp(0.0, 1.0);
    p.distance(a + d * t)
}

/// 2D-Kreuzprodukt (z-Komponente).
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Schnittpunkt der unendlichen Geraden `a0`–`a1` und `b0`–`b1`.
///
/// `None` bei (nahezu) parallelen Geraden.
pub fn line_intersection(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<Vec2> {
    let da = a1 - a0;
    let db = b1 - b0;
    let denom = cross(da, db);
    if denom.abs() < 1e-6 * da.length().max(1.0) * db.length().max(1.0) {
        return None;
    }
    let t = cross(b0 - a0, db) / denom;
    Some(a0 + da * t)
}

/// Linke Normale (90° gegen den Uhrzeigersinn) eines Richtungsvektors.
pub fn left_normal(dir: Vec2) -> Vec2 {
    Vec2::new(-dir.y, dir.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_line_distance_horizontal() {
        let d = point_line_distance(
            Vec2::new(5.0, 3.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert_relative_eq!(d, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_point_line_distance_ausserhalb_der_strecke() {
        // Gerade ist unendlich: Punkt jenseits von b hat trotzdem Lotabstand 0
        let d = point_line_distance(
            Vec2::new(20.0, 20.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
        );
        assert_relative_eq!(d, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_point_line_distance_entartet_ist_nan() {
        let d = point_line_distance(Vec2::new(1.0, 1.0), Vec2::ZERO, Vec2::ZERO);
        assert!(d.is_nan());
    }

    #[test]
    fn test_point_segment_distance_begrenzt() {
        let d = point_segment_distance(
            Vec2::new(13.0, 4.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert_relative_eq!(d, 5.0, epsilon = 1e-5);
    }

    #[test]
    fn test_line_intersection_kreuz() {
        let p = line_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        )
        .expect("Schnittpunkt erwartet");
        assert!((p - Vec2::new(5.0, 5.0)).length() < 1e-4);
    }

    #[test]
    fn test_line_intersection_parallel() {
        assert!(line_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(10.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn test_left_normal() {
        assert_eq!(left_normal(Vec2::X), Vec2::Y);
    }
}
