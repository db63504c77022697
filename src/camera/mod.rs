//! Camera system for framing the scene.
//!
//! Provides a perspective camera with screen-to-ray unprojection, an orbit
//! controller with distance clamps, and the single-slot pose tween used for
//! every animated camera move.

/// Orbit controller owning the camera and its active tween.
pub mod controller;
/// Core camera struct, poses and GPU uniform types.
pub mod core;
/// Timed pose interpolation.
pub mod tween;

pub use self::controller::CameraController;
pub use self::core::{Camera, CameraPose, CameraUniform};
pub use self::tween::CameraTween;
