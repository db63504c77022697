//! Pointer interaction: hover labels, click-to-frame, double-click.

use glam::{Vec2, Vec3};

use super::ResortEngine;
use crate::options::DoubleClickAction;
use crate::picking::{self, PickFilter, PickHit};
use crate::scene::ObjectId;

impl ResortEngine {
    fn pick_at(&self, x: f32, y: f32, filter: PickFilter) -> Option<PickHit> {
        let ray = self
            .camera
            .camera
            .screen_to_ray(Vec2::new(x, y), self.viewport);
        picking::pick(&self.scene, &ray, filter)
    }

    /// Show the label of the nearest hover target under the pointer and
    /// hide every other label. Returns the hovered object.
    pub fn hover(&mut self, x: f32, y: f32) -> Option<ObjectId> {
        let hit = self.pick_at(x, y, PickFilter::Hover);
        let category = hit
            .and_then(|h| self.scene.object(h.object))
            .map(|o| o.category);
        self.labels.show_only(category);
        hit.map(|h| h.object)
    }

    /// Select the nearest clickable object under the pointer and frame it.
    ///
    /// On a hit the overlay is rebuilt around the object, the detail panel
    /// shows its description and the camera starts moving to its framing
    /// pose. On a miss the selection and panel are cleared.
    pub fn click(&mut self, x: f32, y: f32) -> Option<ObjectId> {
        let Some(hit) = self.pick_at(x, y, PickFilter::Click) else {
            self.clear_selection();
            return None;
        };
        let Some(object) = self.scene.object(hit.object) else {
            self.clear_selection();
            return None;
        };

        let interaction = &self.options.interaction;
        self.selection.select(object, interaction.highlight_scale);
        let framing = self.framing.resolve(
            object,
            Vec3::from_array(interaction.fallback_offset),
        );
        log::info!(
            "selected {} ({}) at {:.2}",
            object.name,
            object.category.display_name(),
            hit.distance
        );
        self.panel.show(framing.description);
        let _ = self.camera.animate_to(framing.pose);
        Some(hit.object)
    }

    /// Run the configured double-click action if the pointer is over the
    /// main building. Returns whether the action ran.
    pub fn double_click(&mut self, x: f32, y: f32) -> bool {
        let Some(building) = self.scene.main_building() else {
            return false;
        };
        if self.pick_at(x, y, PickFilter::Only(building)).is_none() {
            return false;
        }

        match self.options.interaction.double_click {
            DoubleClickAction::EnterBuilding => {
                log::info!("entering main building");
                self.camera
                    .animate_to(Some(self.options.interaction.enter_pose()))
            }
            DoubleClickAction::RotateBuilding => {
                let step = self.options.interaction.rotation_step_degrees;
                log::info!("rotating main building by {step}°");
                self.scene.rotate_main_building(step)
            }
        }
    }

    /// Clear the selection, its overlay and the detail panel.
    pub fn clear_selection(&mut self) {
        if let Some(id) = self.selection.clear() {
            log::debug!("cleared selection {id}");
        }
        self.panel.hide();
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec2, Vec3};

    use crate::camera::CameraPose;
    use crate::engine::ResortEngine;
    use crate::framing::FramingTable;
    use crate::options::{DoubleClickAction, Options};
    use crate::overlay::HoverLabels;
    use crate::scene::{Category, FurnitureKind, Scene, SceneObject, Shape};
    use crate::ResortCommand;

    const SIZE: (u32, u32) = (800, 600);
    const DT: f32 = 1.0 / 60.0;

    fn object_a() -> SceneObject {
        SceneObject::new(
            "A",
            Category::Building,
            Shape::cuboid(10.0, 10.0, 10.0),
            Vec3::new(0.0, 9.0, -30.0),
        )
    }

    fn scenario(options: Options) -> ResortEngine {
        let mut scene = Scene::new();
        let _ = scene.add_object(object_a());
        let mut framing = FramingTable::new();
        framing.insert_category(
            Category::Building,
            "Object A",
            Vec3::new(50.0, 20.0, -50.0),
            Vec3::new(0.0, 9.0, -30.0),
        );
        let mut labels = HoverLabels::new();
        labels.add(Category::Building, "A", Vec3::new(0.0, 20.0, -30.0));
        ResortEngine::new(scene, labels, framing, options, SIZE)
    }

    fn screen_of(engine: &ResortEngine, world: Vec3) -> Vec2 {
        engine
            .camera()
            .camera
            .project(world, engine.viewport())
            .unwrap()
    }

    fn settle(engine: &mut ResortEngine) {
        for _ in 0..90 {
            let _ = engine.frame(DT);
        }
    }

    #[test]
    fn clicking_object_frames_it_exactly() {
        let mut engine = scenario(Options::default());
        let p = screen_of(&engine, Vec3::new(0.0, 9.0, -30.0));

        let hit = engine.click(p.x, p.y);
        assert!(hit.is_some());
        assert!(engine.panel().is_visible());
        assert_eq!(engine.panel().text(), "Object A");
        assert!(engine.camera().is_animating());

        settle(&mut engine);
        assert!(!engine.camera().is_animating());
        assert_eq!(
            engine.camera().pose(),
            CameraPose::new(Vec3::new(50.0, 20.0, -50.0), Vec3::new(0.0, 9.0, -30.0))
        );
    }

    #[test]
    fn overlay_sits_on_selected_object() {
        let mut engine = scenario(Options::default());
        let p = screen_of(&engine, Vec3::new(0.0, 9.0, -30.0));
        let id = engine.click(p.x, p.y).unwrap();

        let overlay = engine.selection().overlay().unwrap();
        let object = engine.scene().object(id).unwrap();
        assert_eq!(overlay.transform.translation, object.position());
        assert_eq!(overlay.transform.scale, Vec3::splat(1.05));
    }

    #[test]
    fn miss_clears_selection_and_panel() {
        let mut engine = scenario(Options::default());
        let p = screen_of(&engine, Vec3::new(0.0, 9.0, -30.0));
        let _ = engine.click(p.x, p.y);
        assert!(engine.selection().selected().is_some());

        // Top-left corner looks at empty sky.
        assert_eq!(engine.click(1.0, 1.0), None);
        assert!(engine.selection().selected().is_none());
        assert!(engine.selection().overlay().is_none());
        assert!(!engine.panel().is_visible());
    }

    #[test]
    fn hover_shows_one_label() {
        let mut engine = scenario(Options::default());
        let p = screen_of(&engine, Vec3::new(0.0, 9.0, -30.0));

        assert!(engine.hover(p.x, p.y).is_some());
        let visible: Vec<_> =
            engine.labels().iter().filter(|l| l.visible).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category, Category::Building);

        assert!(engine.hover(1.0, 1.0).is_none());
        assert!(engine.labels().visible().is_none());
    }

    #[test]
    fn hover_label_matches_hit_category() {
        let mut engine = ResortEngine::resort(Options::default(), SIZE);
        let p = screen_of(&engine, Vec3::new(40.0, 0.05, 40.0));
        let id = engine.hover(p.x, p.y).unwrap();
        assert_eq!(engine.scene().object(id).unwrap().category, Category::Pool);
        assert_eq!(engine.labels().visible().unwrap().category, Category::Pool);
    }

    #[test]
    fn furniture_is_clickable_but_not_hoverable() {
        let mut engine = ResortEngine::resort(Options::default(), SIZE);
        engine.camera_mut().set_pose(CameraPose::new(
            Vec3::new(55.0, 10.0, 55.0),
            Vec3::new(55.0, 0.2, 30.0),
        ));
        let p = screen_of(&engine, Vec3::new(55.0, 0.2, 30.0));

        let hovered = engine
            .hover(p.x, p.y)
            .and_then(|id| engine.scene().object(id))
            .map(|o| o.category);
        assert_ne!(hovered, Some(Category::Furniture(FurnitureKind::Lounger)));

        let clicked = engine.click(p.x, p.y).unwrap();
        assert_eq!(
            engine.scene().object(clicked).unwrap().category,
            Category::Furniture(FurnitureKind::Lounger)
        );
        assert_eq!(engine.panel().text(), "Sun loungers, free for guests.");
    }

    #[test]
    fn described_object_without_entry_uses_offset_pose() {
        let mut engine = ResortEngine::resort(Options::default(), SIZE);
        let umbrella = Vec3::new(57.0, 2.5, 36.0);
        engine
            .camera_mut()
            .set_pose(CameraPose::new(Vec3::new(57.0, 20.0, 60.0), umbrella));
        let p = screen_of(&engine, umbrella);

        let _ = engine.click(p.x, p.y).unwrap();
        assert_eq!(engine.panel().text(), "Shaded corner by the pool");
        settle(&mut engine);
        assert_eq!(
            engine.camera().pose(),
            CameraPose::new(umbrella + Vec3::splat(10.0), umbrella)
        );
    }

    #[test]
    fn object_without_any_framing_keeps_camera_still() {
        let mut engine = ResortEngine::resort(Options::default(), SIZE);
        let bench = Vec3::new(-45.0, 0.25, 42.0);
        let start = CameraPose::new(Vec3::new(-45.0, 8.0, 52.0), bench);
        engine.camera_mut().set_pose(start);
        let p = screen_of(&engine, bench);

        let _ = engine.click(p.x, p.y).unwrap();
        assert!(engine.panel().is_visible());
        assert!(!engine.camera().is_animating());
        assert_eq!(engine.camera().pose(), start);
    }

    #[test]
    fn double_click_enters_building_by_default() {
        let mut engine = scenario(Options::default());
        let p = screen_of(&engine, Vec3::new(0.0, 9.0, -30.0));

        engine.execute(ResortCommand::Click { x: p.x, y: p.y });
        engine.execute(ResortCommand::DoubleClick { x: p.x, y: p.y });
        settle(&mut engine);

        let enter = Options::default().interaction.enter_pose();
        assert_eq!(engine.camera().pose(), enter);
        let building = engine.scene().main_building().unwrap();
        assert_eq!(
            engine.scene().object(building).unwrap().transform.rotation,
            Quat::IDENTITY
        );
    }

    #[test]
    fn double_click_rotate_variant_turns_building_and_overlay_follows() {
        let mut options = Options::default();
        options.interaction.double_click = DoubleClickAction::RotateBuilding;
        let mut engine = scenario(options);
        let p = screen_of(&engine, Vec3::new(0.0, 9.0, -30.0));

        let _ = engine.click(p.x, p.y);
        assert!(engine.double_click(p.x, p.y));
        let _ = engine.frame(DT);

        let building = engine.scene().main_building().unwrap();
        let rotation = engine.scene().object(building).unwrap().transform.rotation;
        let expected = Quat::from_rotation_y(90f32.to_radians());
        assert!(rotation.abs_diff_eq(expected, 1e-6));
        let overlay = engine.selection().overlay().unwrap();
        assert!(overlay.transform.rotation.abs_diff_eq(expected, 1e-6));

        engine.execute(ResortCommand::ResetRotation);
        let _ = engine.frame(DT);
        let overlay = engine.selection().overlay().unwrap();
        assert_eq!(overlay.transform.rotation, Quat::IDENTITY);
    }

    #[test]
    fn double_click_off_building_does_nothing() {
        let mut engine = scenario(Options::default());
        let before = engine.camera().pose();
        assert!(!engine.double_click(1.0, 1.0));
        assert!(!engine.camera().is_animating());
        assert_eq!(engine.camera().pose(), before);
    }

    #[test]
    fn empty_scene_never_hits() {
        let mut engine = ResortEngine::new(
            Scene::new(),
            HoverLabels::new(),
            FramingTable::new(),
            Options::default(),
            SIZE,
        );
        assert_eq!(engine.hover(400.0, 300.0), None);
        assert_eq!(engine.click(400.0, 300.0), None);
        assert!(!engine.double_click(400.0, 300.0));
    }

    #[test]
    fn selection_cleared_when_object_removed() {
        let mut engine = scenario(Options::default());
        let p = screen_of(&engine, Vec3::new(0.0, 9.0, -30.0));
        let id = engine.click(p.x, p.y).unwrap();
        let _ = engine.scene_mut().remove_object(id);
        let _ = engine.frame(DT);
        assert!(engine.selection().selected().is_none());
        assert!(engine.selection().overlay().is_none());
        assert!(!engine.panel().is_visible());
        assert_eq!(engine.panel().text(), "");
    }
}
