//! Markup-Ink Library.
//! Geometrie-Pipeline für Markup-Striche: Kurven-Fitting, Form-Snapping,
//! Spitzen, Outline-Erzeugung und Glättung über unveränderlichen Zeichnungen.

pub mod core;
pub mod shared;
pub mod style;
pub mod transform;

pub use core::{Drawing, InkType, Point, Rect, Stroke, TipType};
pub use shared::InkOptions;
pub use style::{DrawingStyle, Preset, Rgba, ToolKind, ToolSettings, ToolVariant};
pub use transform::{
    BezierTransformer, CatmullRomTransformer, CircleTransformer, LerpTransformer,
    LineTransformer, OutlineTransformer, Stage, Tip, TipTransformer, TransformChain,
    Transforming,
};
