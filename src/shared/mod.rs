//! Geteilte Typen und Geometrie für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Spline-Mathematik, die von `core`, `render`
//! und `app` gleichermassen genutzt werden.

pub mod options;
pub mod spline_geometry;

pub use options::{MotionOptions, RoadOptions, ViewerOptions};
pub use options::{CENTER_LINE_OFFSET, MIN_POINT_SPACING, RIDER_HEIGHT};
