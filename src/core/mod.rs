//! Core-Datenmodell: Punkte, Striche, Zeichnungen.
//!
//! Alle Typen sind unveränderliche Werte; Transformationen erzeugen neue
//! Instanzen über die `with_*`-Methoden.

pub mod drawing;
pub mod ink;
pub mod point;
pub mod rect;
pub mod stroke;

pub use drawing::Drawing;
pub use ink::{InkType, TipType};
pub use point::Point;
pub use rect::Rect;
pub use stroke::Stroke;
