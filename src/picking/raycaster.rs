use glam::Vec3;

use super::ray::{ray_sphere_intersect, Aabb, Ray};
use crate::scene::{ObjectId, Scene, SceneObject, Shape};

/// Which objects a hit test considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickFilter {
    /// Labelled areas: building, courts, pool.
    Hover,
    /// Hover targets plus furniture.
    Click,
    /// A single object (e.g. the main building for double-click).
    Only(ObjectId),
}

impl PickFilter {
    /// Whether `object` is in this registry. Non-interactive objects never
    /// are.
    #[must_use]
    pub fn matches(self, object: &SceneObject) -> bool {
        if !object.interactive {
            return false;
        }
        match self {
            Self::Hover => object.category.is_hover_target(),
            Self::Click => object.category.is_click_target(),
            Self::Only(id) => object.id() == id,
        }
    }
}

/// Nearest intersection found by [`pick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Object that was hit.
    pub object: ObjectId,
    /// Distance along the (unit) world ray.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Intersect `ray` with every object matching `filter` and return the
/// nearest hit. Equal distances resolve to the earlier-inserted object.
/// An empty registry simply yields `None`.
#[must_use]
pub fn pick(scene: &Scene, ray: &Ray, filter: PickFilter) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;

    for object in scene.objects().iter().filter(|o| filter.matches(o)) {
        let Some(distance) = intersect_object(object, ray) else {
            continue;
        };
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(PickHit {
                object: object.id(),
                distance,
                point: ray.at(distance),
            });
        }
    }

    if let Some(hit) = &best {
        log::debug!("pick hit {} at distance {:.2}", hit.object, hit.distance);
    }
    best
}

/// Distance along `ray` to `object`'s shape, tested in the object's local
/// space.
#[must_use]
pub fn intersect_object(object: &SceneObject, ray: &Ray) -> Option<f32> {
    let local_from_world = object.transform.to_mat4().inverse();
    if !local_from_world.is_finite() {
        return None;
    }

    // Unnormalized local direction: the local parameter is the world
    // distance.
    let local = Ray {
        origin: local_from_world.transform_point3(ray.origin),
        dir: local_from_world.transform_vector3(ray.dir),
    };

    let t = match object.shape {
        Shape::Cuboid { size } => {
            Aabb::from_center_size(Vec3::ZERO, size).intersect(&local)
        }
        Shape::Sphere { radius } => {
            ray_sphere_intersect(&local, Vec3::ZERO, radius)
        }
    }?;
    (t.is_finite() && t >= 0.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::scene::{Category, FurnitureKind, Transform};

    fn scene() -> (Scene, ObjectId, ObjectId, ObjectId) {
        let mut scene = Scene::new();
        let near = scene.add_object(SceneObject::new(
            "near",
            Category::Pool,
            Shape::cuboid(2.0, 2.0, 2.0),
            Vec3::new(0.0, 0.0, 5.0),
        ));
        let far = scene.add_object(SceneObject::new(
            "far",
            Category::Building,
            Shape::cuboid(2.0, 2.0, 2.0),
            Vec3::new(0.0, 0.0, -5.0),
        ));
        let chair = scene.add_object(SceneObject::new(
            "chair",
            Category::Furniture(FurnitureKind::Lounger),
            Shape::cuboid(2.0, 2.0, 2.0),
            Vec3::new(0.0, 0.0, 10.0),
        ));
        (scene, near, far, chair)
    }

    fn down_z() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z)
    }

    #[test]
    fn nearest_hit_wins() {
        let (scene, near, _, _) = scene();
        let hit = pick(&scene, &down_z(), PickFilter::Hover);
        assert_eq!(hit.map(|h| h.object), Some(near));
        assert!(hit.is_some_and(|h| (h.distance - 14.0).abs() < 1e-4));
    }

    #[test]
    fn click_registry_includes_furniture() {
        let (scene, _, _, chair) = scene();
        let hit = pick(&scene, &down_z(), PickFilter::Click);
        assert_eq!(hit.map(|h| h.object), Some(chair));
    }

    #[test]
    fn only_filter_sees_through_other_objects() {
        let (scene, _, far, _) = scene();
        let hit = pick(&scene, &down_z(), PickFilter::Only(far));
        assert_eq!(hit.map(|h| h.object), Some(far));
    }

    #[test]
    fn empty_scene_has_no_hit() {
        assert!(pick(&Scene::new(), &down_z(), PickFilter::Click).is_none());
    }

    #[test]
    fn decor_never_picks() {
        let mut scene = Scene::new();
        let _ = scene.add_object(SceneObject::new(
            "terrain",
            Category::Decor,
            Shape::cuboid(100.0, 1.0, 100.0),
            Vec3::ZERO,
        ));
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
        assert!(pick(&scene, &ray, PickFilter::Click).is_none());
    }

    #[test]
    fn rotated_box_is_hit_in_local_space() {
        let mut scene = Scene::new();
        // A long thin box turned 90 degrees now spans the z axis.
        let id = scene.add_object(
            SceneObject::new(
                "slab",
                Category::Building,
                Shape::cuboid(20.0, 1.0, 1.0),
                Vec3::ZERO,
            )
            .with_transform(Transform {
                rotation: Quat::from_rotation_y(90f32.to_radians()),
                ..Transform::IDENTITY
            }),
        );
        let ray = Ray::new(Vec3::new(0.0, 10.0, 8.0), Vec3::NEG_Y);
        let hit = pick(&scene, &ray, PickFilter::Hover);
        assert_eq!(hit.map(|h| h.object), Some(id));
        assert!(hit.is_some_and(|h| (h.distance - 9.5).abs() < 1e-4));
    }

    #[test]
    fn scaled_sphere_distance_is_world_distance() {
        let mut scene = Scene::new();
        let _ = scene.add_object(
            SceneObject::new(
                "umbrella",
                Category::Furniture(FurnitureKind::Umbrella),
                Shape::Sphere { radius: 1.0 },
                Vec3::ZERO,
            )
            .with_transform(Transform::IDENTITY.scaled(3.0)),
        );
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let hit = pick(&scene, &ray, PickFilter::Click);
        assert!(hit.is_some_and(|h| (h.distance - 7.0).abs() < 1e-4));
    }
}
