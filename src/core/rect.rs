//! Achsenparalleles Rechteck (Bounding-Box eines Strichs).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Achsenparalleles Rechteck, beschrieben durch Minimum- und Maximum-Ecke.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Ecke mit den kleinsten Koordinaten
    pub min: Vec2,
    /// Ecke mit den größten Koordinaten
    pub max: Vec2,
}

impl Rect {
    /// Leeres Rechteck im Ursprung (Frame eines leeren Strichs).
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Erstellt ein Rechteck aus zwei beliebigen Ecken.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Kleinstes Rechteck, das alle Positionen enthält (`ZERO` bei leerer Eingabe).
    pub fn bounding(positions: impl IntoIterator<Item = Vec2>) -> Self {
        let mut iter = positions.into_iter();
        let Some(first) = iter.next() else {
            return Self::ZERO;
        };
        iter.fold(Self::from_corners(first, first), |rect, p| Self {
            min: rect.min.min(p),
            max: rect.max.max(p),
        })
    }

    /// Breite des Rechtecks.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Höhe des Rechtecks.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Mittelpunkt des Rechtecks.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Prüft, ob eine Position im Rechteck liegt (Rand inklusive).
    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}
