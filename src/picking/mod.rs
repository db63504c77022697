//! CPU ray picking against the scene's interactive objects.
//!
//! A pointer position is unprojected into a world ray by the camera, then
//! tested against each object's local-space box or sphere. Which objects
//! take part is decided by a [`PickFilter`] built from object categories,
//! so hover, click and double-click each use their own registry without
//! keeping separate object lists.

mod ray;
mod raycaster;

pub use ray::{ray_sphere_intersect, Aabb, Ray};
pub use raycaster::{intersect_object, pick, PickFilter, PickHit};
