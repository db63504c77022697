//! Current selection and its outline overlay.

use crate::scene::{ObjectId, Scene, SceneObject, Shape, Transform};

/// Which triangle faces the overlay renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceCulling {
    /// Render only back faces, so the enlarged copy shows as an outline
    /// around the original.
    BackFacesOnly,
}

/// A uniformly enlarged copy of the selected object's shape.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightOverlay {
    /// Same shape as the selected object.
    pub shape: Shape,
    /// Object transform with the scale multiplied by `scale_factor`.
    pub transform: Transform,
    /// Uniform enlargement (e.g. 1.05).
    pub scale_factor: f32,
    /// Face culling mode for the overlay material.
    pub culling: FaceCulling,
    /// Outline color (linear RGB).
    pub color: [f32; 3],
}

impl HighlightOverlay {
    /// Build an overlay for `object`.
    #[must_use]
    pub fn for_object(object: &SceneObject, scale_factor: f32) -> Self {
        Self {
            shape: object.shape,
            transform: object.transform.scaled(scale_factor),
            scale_factor,
            culling: FaceCulling::BackFacesOnly,
            color: [1.0, 0.85, 0.2],
        }
    }

    /// Copy position and rotation from `object`.
    pub fn track(&mut self, object: &SceneObject) {
        self.transform.translation = object.transform.translation;
        self.transform.rotation = object.transform.rotation;
    }
}

/// At most one selected object plus its overlay.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<(ObjectId, HighlightOverlay)>,
}

impl Selection {
    /// No selection.
    #[must_use]
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Select `object`, replacing any previous selection and overlay.
    pub fn select(&mut self, object: &SceneObject, scale_factor: f32) {
        self.current = Some((
            object.id(),
            HighlightOverlay::for_object(object, scale_factor),
        ));
    }

    /// Drop the selection. Returns the previously selected object.
    pub fn clear(&mut self) -> Option<ObjectId> {
        self.current.take().map(|(id, _)| id)
    }

    /// Selected object id.
    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    /// The outline overlay, present exactly when something is selected.
    #[must_use]
    pub fn overlay(&self) -> Option<&HighlightOverlay> {
        self.current.as_ref().map(|(_, overlay)| overlay)
    }

    /// Re-sync the overlay to the selected object's transform. Clears the
    /// selection if the object is gone. Returns whether a selection remains.
    pub fn track(&mut self, scene: &Scene) -> bool {
        let Some((id, overlay)) = self.current.as_mut() else {
            return false;
        };
        if let Some(object) = scene.object(*id) {
            overlay.track(object);
            true
        } else {
            log::debug!("selected object {id} left the scene");
            self.current = None;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::scene::Category;

    fn hotel() -> SceneObject {
        SceneObject::new(
            "hotel",
            Category::Building,
            Shape::cuboid(70.0, 12.0, 55.0),
            Vec3::new(0.0, 6.0, -20.0),
        )
    }

    #[test]
    fn overlay_is_scaled_copy_at_object_position() {
        let mut scene = Scene::new();
        let id = scene.add_object(hotel());
        let mut selection = Selection::new();
        if let Some(object) = scene.object(id) {
            selection.select(object, 1.05);
        }

        let overlay = selection.overlay();
        assert_eq!(selection.selected(), Some(id));
        assert_eq!(
            overlay.map(|o| o.transform.translation),
            Some(Vec3::new(0.0, 6.0, -20.0))
        );
        assert_eq!(overlay.map(|o| o.transform.scale), Some(Vec3::splat(1.05)));
        assert_eq!(overlay.map(|o| o.culling), Some(FaceCulling::BackFacesOnly));
    }

    #[test]
    fn track_follows_rotation() {
        let mut scene = Scene::new();
        let id = scene.add_object(hotel());
        let mut selection = Selection::new();
        if let Some(object) = scene.object(id) {
            selection.select(object, 1.05);
        }
        assert!(scene.rotate_main_building(90.0));
        assert!(selection.track(&scene));

        let expected = scene.object(id).map(|o| o.transform.rotation);
        assert_eq!(selection.overlay().map(|o| o.transform.rotation), expected);
        assert_ne!(expected, Some(Quat::IDENTITY));
    }

    #[test]
    fn removed_object_clears_selection() {
        let mut scene = Scene::new();
        let id = scene.add_object(hotel());
        let mut selection = Selection::new();
        if let Some(object) = scene.object(id) {
            selection.select(object, 1.05);
        }
        let _ = scene.remove_object(id);
        assert!(!selection.track(&scene));
        assert!(selection.selected().is_none());
        assert!(selection.overlay().is_none());
    }

    #[test]
    fn clear_returns_previous() {
        let mut scene = Scene::new();
        let id = scene.add_object(hotel());
        let mut selection = Selection::new();
        if let Some(object) = scene.object(id) {
            selection.select(object, 1.05);
        }
        assert_eq!(selection.clear(), Some(id));
        assert_eq!(selection.clear(), None);
    }
}
