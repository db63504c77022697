//! Demo resort layout: one hotel, tennis and padel courts, a pool, some
//! grounds and a handful of poolside furniture.
//!
//! This is sample content for the viewer and tests, not a faithful model of
//! any real site.

use glam::Vec3;

use super::{Category, FurnitureKind, Scene, SceneObject, Shape};
use crate::framing::FramingTable;
use crate::overlay::HoverLabels;

const TENNIS_COURTS: usize = 3;
const PADEL_COURTS: usize = 3;

/// Build the demo scene.
#[must_use]
pub fn build_scene() -> Scene {
    let mut scene = Scene::new();

    // Grounds
    let _ = scene.add_object(
        SceneObject::new(
            "terrain",
            Category::Decor,
            Shape::cuboid(180.0, 0.01, 140.0),
            Vec3::ZERO,
        )
        .with_color([0.35, 0.6, 0.25]),
    );
    let _ = scene.add_object(
        SceneObject::new(
            "parking",
            Category::Decor,
            Shape::cuboid(40.0, 0.1, 40.0),
            Vec3::new(-60.0, 0.05, -45.0),
        )
        .with_color([0.25, 0.25, 0.27]),
    );

    let _ = scene.add_object(
        SceneObject::new(
            "hotel",
            Category::Building,
            Shape::cuboid(70.0, 12.0, 55.0),
            Vec3::new(0.0, 6.0, -20.0),
        )
        .with_color([0.7, 0.45, 0.35]),
    );

    for i in 0..TENNIS_COURTS {
        let x = -70.0 + i as f32 * 38.0;
        let _ = scene.add_object(
            SceneObject::new(
                format!("tennis-{i}"),
                Category::TennisCourt,
                Shape::cuboid(36.0, 0.5, 18.0),
                Vec3::new(x, 0.25, 30.0),
            )
            .with_color([0.75, 0.4, 0.25]),
        );
        let _ = scene.add_object(
            SceneObject::new(
                format!("tennis-roof-{i}"),
                Category::Decor,
                Shape::cuboid(36.0, 0.2, 18.0),
                Vec3::new(x, 10.0, 30.0),
            )
            .with_color([0.5, 0.5, 0.5]),
        );
    }

    for i in 0..PADEL_COURTS {
        let _ = scene.add_object(
            SceneObject::new(
                format!("padel-{i}"),
                Category::PadelCourt,
                Shape::cuboid(20.0, 0.5, 10.0),
                Vec3::new(-60.0 + i as f32 * 25.0, 0.25, 55.0),
            )
            .with_color([0.2, 0.45, 0.7]),
        );
    }

    let _ = scene.add_object(
        SceneObject::new(
            "pool",
            Category::Pool,
            Shape::cuboid(25.0, 0.1, 25.0),
            Vec3::new(40.0, 0.05, 40.0),
        )
        .with_color([0.2, 0.6, 0.85]),
    );

    add_poolside_furniture(&mut scene);
    scene
}

fn add_poolside_furniture(scene: &mut Scene) {
    for i in 0..4 {
        let z = 30.0 + i as f32 * 6.0;
        let _ = scene.add_object(
            SceneObject::new(
                format!("lounger-{i}"),
                Category::Furniture(FurnitureKind::Lounger),
                Shape::cuboid(1.0, 0.4, 2.2),
                Vec3::new(55.0, 0.2, z),
            )
            .with_color([0.95, 0.95, 0.9]),
        );
    }
    let _ = scene.add_object(
        SceneObject::new(
            "umbrella",
            Category::Furniture(FurnitureKind::Umbrella),
            Shape::Sphere { radius: 1.5 },
            Vec3::new(57.0, 2.5, 36.0),
        )
        .with_color([0.9, 0.3, 0.2])
        .with_description("Shaded corner by the pool"),
    );
    let _ = scene.add_object(
        SceneObject::new(
            "terrace-table",
            Category::Furniture(FurnitureKind::Table),
            Shape::cuboid(1.5, 0.8, 1.5),
            Vec3::new(25.0, 12.5, -40.0),
        )
        .with_color([0.55, 0.35, 0.2])
        .with_description("Rooftop terrace"),
    );
    let _ = scene.add_object(
        SceneObject::new(
            "garden-bench",
            Category::Furniture(FurnitureKind::Bench),
            Shape::cuboid(2.0, 0.5, 0.6),
            Vec3::new(-45.0, 0.25, 42.0),
        )
        .with_color([0.45, 0.3, 0.2]),
    );
}

/// Hover labels floating above each labelled area.
#[must_use]
pub fn build_labels() -> HoverLabels {
    let mut labels = HoverLabels::new();
    labels.add(Category::Building, "Hotel 4*", Vec3::new(0.0, 15.0, -20.0));
    labels.add(Category::TennisCourt, "Tennis courts", Vec3::new(-32.0, 12.0, 30.0));
    labels.add(Category::PadelCourt, "Padel courts", Vec3::new(-35.0, 8.0, 55.0));
    labels.add(Category::Pool, "Pool", Vec3::new(40.0, 5.0, 40.0));
    labels
}

/// Descriptions and camera poses for the demo categories.
#[must_use]
pub fn build_framing() -> FramingTable {
    let mut table = FramingTable::new();
    table.insert_category(
        Category::Building,
        "Four-star hotel: 120 rooms, rooftop terrace and solar roof.",
        Vec3::new(50.0, 20.0, 30.0),
        Vec3::new(0.0, 6.0, -20.0),
    );
    table.insert_category(
        Category::TennisCourt,
        "Three covered clay tennis courts.",
        Vec3::new(-32.0, 25.0, 75.0),
        Vec3::new(-32.0, 0.0, 30.0),
    );
    table.insert_category(
        Category::PadelCourt,
        "Three padel courts next to the gardens.",
        Vec3::new(-35.0, 15.0, 80.0),
        Vec3::new(-35.0, 0.0, 55.0),
    );
    table.insert_category(
        Category::Pool,
        "Outdoor pool, open from May to September.",
        Vec3::new(70.0, 15.0, 70.0),
        Vec3::new(40.0, 0.0, 40.0),
    );
    table.insert_category(
        Category::Furniture(FurnitureKind::Lounger),
        "Sun loungers, free for guests.",
        Vec3::new(62.0, 5.0, 48.0),
        Vec3::new(55.0, 0.0, 39.0),
    );
    table.insert_metadata(
        "Rooftop terrace",
        "Rooftop terrace with bar service at sunset.",
        Vec3::new(40.0, 20.0, -25.0),
        Vec3::new(25.0, 12.0, -40.0),
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scene_has_every_labelled_category() {
        let scene = build_scene();
        let labels = build_labels();
        for label in labels.iter() {
            assert!(
                scene.objects().iter().any(|o| o.category == label.category),
                "no object for label {}",
                label.text
            );
        }
        assert!(scene.main_building().is_some());
    }

    #[test]
    fn interactive_footprints_do_not_overlap() {
        let scene = build_scene();
        let footprints: Vec<_> = scene
            .objects()
            .iter()
            .filter(|o| o.interactive)
            .filter_map(|o| match o.shape {
                Shape::Cuboid { size } => {
                    let half = size * 0.5;
                    let center = o.position();
                    Some((o.name.as_str(), center - half, center + half))
                }
                Shape::Sphere { .. } => None,
            })
            .collect();
        for (i, (a, a_min, a_max)) in footprints.iter().enumerate() {
            for (b, b_min, b_max) in &footprints[i + 1..] {
                let overlaps = a_min.x < b_max.x
                    && b_min.x < a_max.x
                    && a_min.z < b_max.z
                    && b_min.z < a_max.z;
                let stacked = a_max.y <= b_min.y || b_max.y <= a_min.y;
                assert!(!overlaps || stacked, "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn decor_is_not_interactive() {
        let scene = build_scene();
        assert!(scene
            .objects()
            .iter()
            .filter(|o| o.category == Category::Decor)
            .all(|o| !o.interactive));
    }
}
