use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::picking::Ray;

/// A camera position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Look-at target in world space.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Pose from an eye position and look-at point.
    #[must_use]
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Component-wise linear interpolation of position and look-at.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }
}

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Current eye/target as a pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.eye, self.target)
    }

    /// Move the eye and target to `pose`.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.eye = pose.position;
        self.target = pose.look_at;
    }

    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// Convert a pixel position to a world-space ray.
    ///
    /// `screen` is in pixels from the top-left corner, `viewport` is the
    /// surface size in pixels.
    #[must_use]
    pub fn screen_to_ray(&self, screen: Vec2, viewport: Vec2) -> Ray {
        self.ndc_to_ray(screen_to_ndc(screen, viewport))
    }

    /// Convert normalized device coordinates (-1..1, y up) to a world-space
    /// ray starting on the near plane.
    #[must_use]
    pub fn ndc_to_ray(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = self.build_matrix().inverse();

        let world_near = inv_view_proj * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let world_far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);

        // Perspective divide
        let origin = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;

        Ray::new(origin, far - origin)
    }

    /// Project a world-space point to pixel coordinates. `None` when the
    /// point is behind the camera.
    #[must_use]
    pub fn project(&self, world: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.build_matrix() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }
}

/// Pixel position to normalized device coordinates (y flipped).
#[must_use]
pub fn screen_to_ndc(screen: Vec2, viewport: Vec2) -> Vec2 {
    let size = viewport.max(Vec2::ONE);
    Vec2::new(
        (screen.x / size.x) * 2.0 - 1.0,
        1.0 - (screen.y / size.y) * 2.0,
    )
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 75.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        let forward = (camera.target - camera.eye).normalize_or_zero();
        self.forward = forward.to_array();
        self.fovy = camera.fovy;
    }
}
