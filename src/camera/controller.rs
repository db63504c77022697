use glam::{Quat, Vec2, Vec3};

use super::core::{Camera, CameraPose, CameraUniform};
use super::tween::CameraTween;
use crate::options::CameraOptions;
use crate::util::easing::EasingFunction;

/// Polar angle limit (radians from straight up/down) for orbiting.
const POLAR_MARGIN: f32 = 0.05;

/// Owns the camera, its GPU uniform snapshot, and at most one active tween.
///
/// Starting a tween replaces whatever tween was running; the new one starts
/// from the camera's current pose, so an interrupted move continues smoothly
/// from where it was instead of fighting the old one.
pub struct CameraController {
    /// The camera being driven.
    pub camera: Camera,
    /// Uniform snapshot, refreshed by [`update_uniform`](Self::update_uniform).
    pub uniform: CameraUniform,

    tween: Option<CameraTween>,
    tween_duration: f32,
    easing: EasingFunction,

    rotate_speed: f32,
    zoom_speed: f32,
    min_distance: f32,
    max_distance: f32,
}

impl CameraController {
    /// Create a controller placed at the configured start pose.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let camera = Camera {
            eye: Vec3::from_array(options.start_position),
            target: Vec3::from_array(options.start_look_at),
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        let (min_distance, max_distance) = distance_range(options);

        Self {
            camera,
            uniform,
            tween: None,
            tween_duration: options.tween_duration,
            easing: options.easing,
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            min_distance,
            max_distance,
        }
    }

    /// Re-read tunables after an options change. Does not move the camera.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.camera.fovy = options.fovy;
        self.camera.znear = options.znear;
        self.camera.zfar = options.zfar;
        self.tween_duration = options.tween_duration;
        self.easing = options.easing;
        self.rotate_speed = options.rotate_speed;
        self.zoom_speed = options.zoom_speed;
        (self.min_distance, self.max_distance) = distance_range(options);
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.camera.pose()
    }

    /// Jump to `pose` immediately, cancelling any tween.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.tween = None;
        self.camera.set_pose(pose);
    }

    /// Start animating toward `target` over the configured duration.
    ///
    /// A missing target leaves the camera where it is. Returns whether a
    /// tween was started.
    pub fn animate_to(&mut self, target: Option<CameraPose>) -> bool {
        self.animate_to_over(target, self.tween_duration)
    }

    /// Like [`animate_to`](Self::animate_to) with an explicit duration.
    pub fn animate_to_over(
        &mut self,
        target: Option<CameraPose>,
        duration: f32,
    ) -> bool {
        let Some(target) = target else {
            log::warn!(
                "camera move requested without a target pose; staying at {:?}",
                self.camera.eye
            );
            return false;
        };
        if !(target.position.is_finite() && target.look_at.is_finite()) {
            log::warn!("ignoring non-finite camera target {target:?}");
            return false;
        }

        if self.tween.is_some() {
            log::debug!("superseding in-flight camera tween");
        }
        let tween =
            CameraTween::new(self.camera.pose(), target, duration, self.easing);
        // A zero-length tween is complete on creation.
        if tween.is_finished() {
            self.camera.set_pose(target);
            self.tween = None;
        } else {
            self.tween = Some(tween);
        }
        true
    }

    /// Advance the active tween by `dt` seconds. Call once per frame.
    /// Returns true while a tween is still in progress.
    pub fn update_animation(&mut self, dt: f32) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        let pose = tween.advance(dt);
        let finished = tween.is_finished();
        self.camera.set_pose(pose);
        if finished {
            self.tween = None;
        }
        !finished
    }

    /// Whether a tween is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The running tween, if any.
    #[must_use]
    pub fn tween(&self) -> Option<&CameraTween> {
        self.tween.as_ref()
    }

    /// Refresh and return the uniform snapshot.
    pub fn update_uniform(&mut self) -> &CameraUniform {
        self.uniform.update_view_proj(&self.camera);
        &self.uniform
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Orbit the eye around the look-at point by `delta` pixels of drag.
    /// Manual orbiting cancels any tween.
    pub fn rotate(&mut self, delta: Vec2) {
        self.tween = None;
        let offset = self.camera.eye - self.camera.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        // Horizontal rotation around world up
        let yaw = Quat::from_rotation_y(-delta.x * self.rotate_speed);
        let offset = yaw * offset;

        // Vertical rotation around the camera's right vector, clamped so
        // the eye never passes over the pole.
        let dir = offset / distance;
        let polar = dir.y.clamp(-1.0, 1.0).acos();
        let pitch = (-delta.y * self.rotate_speed)
            .clamp(POLAR_MARGIN - polar, std::f32::consts::PI - POLAR_MARGIN - polar);
        let right = Vec3::Y.cross(dir).normalize_or_zero();
        let offset = if right == Vec3::ZERO {
            offset
        } else {
            Quat::from_axis_angle(right, pitch) * offset
        };

        self.camera.eye = self.camera.target + offset;
    }

    /// Move the eye toward (positive) or away from the look-at point,
    /// clamped to the configured distance range.
    pub fn zoom(&mut self, delta: f32) {
        self.tween = None;
        let offset = self.camera.eye - self.camera.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        let new_distance = (distance * (1.0 - delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        self.camera.eye = self.camera.target + offset / distance * new_distance;
    }
}

/// Orbit distance bounds as an ordered pair. Non-finite or negative values
/// fall back to the defaults.
fn distance_range(options: &CameraOptions) -> (f32, f32) {
    let defaults = CameraOptions::default();
    let usable = |d: f32, fallback: f32| {
        if d.is_finite() && d >= 0.0 {
            d
        } else {
            log::warn!("ignoring orbit distance {d}; using {fallback}");
            fallback
        }
    };
    let min = usable(options.min_distance, defaults.min_distance);
    let max = usable(options.max_distance, defaults.max_distance);
    (min.min(max), min.max(max))
}
