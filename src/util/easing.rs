//! Easing functions for camera tweens.
//!
//! Camera framing is linear unless configured otherwise; the other curves
//! exist so presets can soften preset-view jumps.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Smoothstep (slow start and end).
    SmoothStep,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control value.
        c1: f32,
        /// Second inner control value.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing: plain linear interpolation.
    pub const DEFAULT: EasingFunction = EasingFunction::Linear;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Every curve maps 0 to 0 and 1 to 1.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(-0.5), 0.0);
        assert!((hermite.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_curves() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_smoothstep_is_symmetric() {
        let s = EasingFunction::SmoothStep;
        assert_eq!(s.evaluate(0.5), 0.5);
        assert!((s.evaluate(0.25) + s.evaluate(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(EasingFunction::default(), EasingFunction::Linear);
    }
}
