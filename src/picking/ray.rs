use glam::Vec3;

const DIR_EPS: f32 = 1e-12;

/// Half-line with a unit direction (or zero direction when degenerate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    /// New ray; `dir` is normalized, degenerate directions become zero.
    #[must_use]
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box centered on `center` with full extents `size`.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Slab test. Returns the entry distance along the ray (or exit
    /// distance when the origin is inside), if any part of the box lies in
    /// `[0, inf)`.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;
        let mut entered = false;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.dir[axis];
            let minp = self.min[axis];
            let maxp = self.max[axis];

            if dir.abs() <= DIR_EPS {
                if origin < minp || origin > maxp {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (minp - origin) * inv;
            let mut t1 = (maxp - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            if t0 > t_min {
                t_min = t0;
                entered = true;
            }
            t_max = t_max.min(t1);

            if t_max < t_min {
                return None;
            }
        }

        if entered {
            Some(t_min)
        } else if t_max.is_finite() {
            // Origin inside the box: report where the ray leaves it.
            Some(t_max)
        } else {
            None
        }
    }
}

/// Ray-sphere intersection. Returns the distance to the first hit in front
/// of the origin, or the far hit when the origin is inside the sphere.
#[must_use]
pub fn ray_sphere_intersect(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let a = ray.dir.dot(ray.dir);
    if a <= DIR_EPS {
        return None;
    }
    let b = 2.0 * oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t > 0.0 {
        return Some(t);
    }
    let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
    (t2 > 0.0).then_some(t2)
}
