//! Reine Geometrie-Funktionen für Catmull-Rom-Splines.
//!
//! Layer-neutral: kann von allen Transformations-Stufen importiert werden.

use glam::Vec2;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let [q0, q1, q2, q3] = catmull_rom_weights(t);
    0.5 * (p0 * q0 + p1 * q1 + p2 * q2 + p3 * q3)
}

/// Basisgewichte (ohne Faktor 0.5) der vier Kontrollpunkte an Stelle `t`.
pub fn catmull_rom_weights(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [
        -t3 + 2.0 * t2 - t,
        3.0 * t3 - 5.0 * t2 + 2.0,
        -3.0 * t3 + 4.0 * t2 + t,
        t3 - t2,
    ]
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
