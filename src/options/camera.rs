use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, start pose, tween and orbit parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 100.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye position at startup.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Look-at point at startup.
    #[schemars(skip)]
    pub start_look_at: [f32; 3],
    /// Seconds a framing move takes.
    #[schemars(title = "Move Duration", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub tween_duration: f32,
    /// Curve applied to framing moves.
    #[schemars(title = "Move Easing")]
    pub easing: EasingFunction,
    /// Orbit radians per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Fraction of distance per scroll step.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
    /// Closest the eye may orbit to its target.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest the eye may orbit from its target.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl CameraOptions {
    /// Reject values the controller cannot animate or clamp with.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.tween_duration.is_finite() && self.tween_duration >= 0.0) {
            return Err(format!(
                "camera.tween_duration must be a finite, non-negative number of seconds (got {})",
                self.tween_duration
            ));
        }
        let (min, max) = (self.min_distance, self.max_distance);
        if !(min.is_finite() && max.is_finite() && 0.0 <= min && min <= max) {
            return Err(format!(
                "camera distance range must satisfy 0 <= min_distance <= max_distance (got {min}..{max})"
            ));
        }
        Ok(())
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            start_position: [100.0, 50.0, 100.0],
            start_look_at: [0.0, 0.0, 0.0],
            tween_duration: 1.0,
            easing: EasingFunction::Linear,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            min_distance: 10.0,
            max_distance: 200.0,
        }
    }
}
