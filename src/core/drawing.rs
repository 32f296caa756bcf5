//! Unveränderliche Zeichnung: geordnete Folge von Strichen.

use super::Stroke;
use serde::{Deserialize, Serialize};

/// Eine Zeichnung aus Strichen in Zeichenreihenfolge (z-Order).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    /// Erstellt eine Zeichnung aus Strichen.
    pub fn new(strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Zeichnung mit genau einem Strich.
    pub fn single(stroke: Stroke) -> Self {
        Self::new(vec![stroke])
    }

    /// Striche in Zeichenreihenfolge.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Kopie mit komplett ersetzter Strich-Folge.
    pub fn with_strokes(&self, strokes: Vec<Stroke>) -> Self {
        Self { strokes }
    }

    /// Wendet `f` auf jeden Strich an (mit Strich-Index) und liefert eine neue Zeichnung.
    pub fn map_strokes(&self, mut f: impl FnMut(usize, &Stroke) -> Stroke) -> Self {
        self.with_strokes(
            self.strokes
                .iter()
                .enumerate()
                .map(|(index, stroke)| f(index, stroke))
                .collect(),
        )
    }

    /// Gesamtzahl der Punkte über alle Striche.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}
