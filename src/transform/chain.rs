//! Geordnete Stufenfolge einer Pipeline.

use super::{CircleTransformer, LineTransformer, Stage, Transforming};
use crate::core::Drawing;
use crate::shared::InkOptions;

/// Wendet ihre Stufen strikt in Listenreihenfolge an.
///
/// Keine Stufe wird übersprungen; Sonderfälle (z.B. Kreis-Snapping nur für
/// den ersten Strich) entscheidet jede Stufe selbst.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransformChain {
    stages: Vec<Stage>,
}

impl TransformChain {
    /// Erstellt eine Kette aus Stufen.
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Snapping-Kette für Form-Gesten: erst Linie, dann Kreis.
    pub fn shape_snap(options: &InkOptions) -> Self {
        Self::new(vec![
            LineTransformer::from_options(options).into(),
            CircleTransformer::from_options(options).into(),
        ])
    }

    /// Stufen in Anwendungsreihenfolge.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Anzahl der Stufen.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// `true`, wenn die Kette keine Stufe enthält (Identität).
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Kopie mit zusätzlicher Stufe am Ende.
    pub fn then(mut self, stage: impl Into<Stage>) -> Self {
        self.stages.push(stage.into());
        self
    }

    /// Kopie mit zusätzlicher Stufe am Anfang.
    pub fn prepend(mut self, stage: impl Into<Stage>) -> Self {
        self.stages.insert(0, stage.into());
        self
    }
}

impl Transforming for TransformChain {
    fn transform(&self, drawing: &Drawing) -> Drawing {
        let mut current = drawing.clone();
        for stage in &self.stages {
            current = stage.transform(&current);
            log::trace!(
                "Stufe {}: {} Striche, {} Punkte",
                stage.name(),
                current.strokes().len(),
                current.point_count()
            );
        }
        current
    }
}

impl FromIterator<Stage> for TransformChain {
    fn from_iter<I: IntoIterator<Item = Stage>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
