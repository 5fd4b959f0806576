//! Application-Layer: Strassen-Generator und Motion-Controller.

pub mod motion;
pub mod road_generator;

pub use motion::{BikeController, MotionState, Movable, TrackedObject};
pub use road_generator::{sample_transform, RoadError, RoadGenerator, Transform};
