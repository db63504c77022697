//! Timed interpolation between two camera poses.

use super::core::CameraPose;
use crate::util::easing::EasingFunction;

/// One camera move from `start` to `target` over `duration` seconds.
///
/// The tween does not touch the camera itself; the controller samples it
/// once per frame and writes the result.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTween {
    start: CameraPose,
    target: CameraPose,
    duration: f32,
    elapsed: f32,
    easing: EasingFunction,
}

impl CameraTween {
    /// New tween starting now.
    #[must_use]
    pub fn new(
        start: CameraPose,
        target: CameraPose,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start,
            target,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Interpolation fraction, `elapsed / duration` clamped to [0, 1].
    /// Non-positive or non-finite durations are always complete.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Whether the target has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.fraction() >= 1.0
    }

    /// Advance by `dt` seconds and return the pose to display.
    pub fn advance(&mut self, dt: f32) -> CameraPose {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.sample()
    }

    /// Pose at the current elapsed time. Endpoints are returned exactly.
    #[must_use]
    pub fn sample(&self) -> CameraPose {
        let t = self.fraction();
        if t >= 1.0 {
            self.target
        } else if t <= 0.0 {
            self.start
        } else {
            self.start.lerp(&self.target, self.easing.evaluate(t))
        }
    }

    /// Pose the tween starts from.
    #[must_use]
    pub fn start(&self) -> CameraPose {
        self.start
    }

    /// Pose the tween ends at.
    #[must_use]
    pub fn target(&self) -> CameraPose {
        self.target
    }
}
