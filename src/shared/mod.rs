//! Geteilte, layer-neutrale Bausteine: Geometrie-Primitive und Konfiguration.

pub mod geometry;
pub mod options;
pub mod spline_geometry;

pub use options::InkOptions;
