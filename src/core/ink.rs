//! Tinten- und Spitzenarten eines Zeichenstils.

use serde::{Deserialize, Serialize};

/// Art, wie ein Strich auf das Bild wirkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InkType {
    /// Deckend zeichnen
    #[default]
    Draw,
    /// Bildbereich weichzeichnen
    Blur,
    /// Bildbereich radieren
    Erase,
}

/// Form des Strich-Endes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TipType {
    /// Runde, auslaufende Enden
    #[default]
    Default,
    /// Pfeilspitze am Strich-Ende
    Arrow,
}
