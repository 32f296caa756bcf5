//! Ein einzelner Strich: geordnete Punktfolge mit abgeleitetem Frame.

use super::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Serialisierte Form eines Strichs (ohne abgeleiteten Frame).
#[derive(Serialize, Deserialize)]
struct StrokeData {
    points: Vec<Point>,
    #[serde(default)]
    is_closed: bool,
}

/// Geordnete Punktfolge eines Strichs.
///
/// Der `frame` wird bei jeder Konstruktion aus den Punkten berechnet und kann
/// daher nie veraltet sein. Änderungen laufen ausschließlich über `with_*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StrokeData", into = "StrokeData")]
pub struct Stroke {
    points: Vec<Point>,
    is_closed: bool,
    frame: Rect,
}

impl Stroke {
    /// Erstellt einen Strich und berechnet seinen Frame.
    pub fn new(points: Vec<Point>, is_closed: bool) -> Self {
        let frame = Rect::bounding(points.iter().map(|p| p.location));
        Self {
            points,
            is_closed,
            frame,
        }
    }

    /// Offener Strich aus Punkten.
    pub fn open(points: Vec<Point>) -> Self {
        Self::new(points, false)
    }

    /// Punkte in Zeichenreihenfolge.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Ob der Strich eine geschlossene Kontur bildet.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Bounding-Box aller Punkte.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Ob der Strich keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Kopie mit neuen Punkten (Frame wird neu berechnet).
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self::new(points, self.is_closed)
    }

    /// Kopie mit neuen Punkten und neuem Geschlossen-Flag.
    pub fn with(&self, points: Vec<Point>, is_closed: bool) -> Self {
        Self::new(points, is_closed)
    }

    /// Kopie mit neuem Geschlossen-Flag.
    pub fn with_closed(&self, is_closed: bool) -> Self {
        Self {
            is_closed,
            ..self.clone()
        }
    }

    /// Gesamtlänge der Polyline (ohne Schlusssegment bei geschlossenen Strichen).
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}

impl From<StrokeData> for Stroke {
    fn from(data: StrokeData) -> Self {
        Self::new(data.points, data.is_closed)
    }
}

impl From<Stroke> for StrokeData {
    fn from(stroke: Stroke) -> Self {
        Self {
            points: stroke.points,
            is_closed: stroke.is_closed,
        }
    }
}
