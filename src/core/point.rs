//! Einzelner Abtastpunkt eines Strichs (Position, Zeitstempel, Druck).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ein Abtastpunkt eines Strichs.
///
/// Punkte werden nie in-place verändert: Transformationen erzeugen über die
/// `with_*`-Methoden neue Werte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position in Canvas-Einheiten
    pub location: Vec2,
    /// Zeitstempel (monoton innerhalb eines Strichs)
    pub time: f64,
    /// Stiftdruck (≥ 0, 0 = kein Drucksensor)
    pub force: f32,
}

impl Point {
    /// Erstellt einen neuen Punkt.
    pub fn new(location: Vec2, time: f64, force: f32) -> Self {
        Self {
            location,
            time,
            force,
        }
    }

    /// Punkt ohne Zeit- und Druckinformation.
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(Vec2::new(x, y), 0.0, 0.0)
    }

    /// Kopie mit neuer Position.
    pub fn with_location(self, location: Vec2) -> Self {
        Self { location, ..self }
    }

    /// Kopie mit neuem Druck.
    pub fn with_force(self, force: f32) -> Self {
        Self { force, ..self }
    }

    /// Lineare Interpolation aller Felder (t ∈ [0, 1]).
    pub fn lerp(self, other: Point, t: f32) -> Self {
        Self {
            location: self.location.lerp(other.location, t),
            time: self.time + (other.time - self.time) * t as f64,
            force: self.force + (other.force - self.force) * t,
        }
    }

    /// Euklidische Distanz zu einem anderen Punkt.
    pub fn distance(&self, other: &Point) -> f32 {
        self.location.distance(other.location)
    }
}
