//! Authoritative scene context: flat object storage and the designated main
//! building.
//!
//! The scene owns every entity. The framing controller only reads object
//! placement from here and writes camera/selection state elsewhere; UI
//! commands (recolor, rotate building) mutate objects through the methods
//! below so the render-side dirty flag stays accurate.

mod object;
pub mod resort;
mod transform;

use glam::{Quat, Vec3};
pub use object::{Category, FurnitureKind, ObjectId, SceneObject, Shape};
pub use transform::Transform;

/// The authoritative scene. Owns all objects in a flat list.
pub struct Scene {
    /// Objects in insertion order.
    objects: Vec<SceneObject>,
    next_object_id: u32,
    main_building: Option<ObjectId>,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_object_id: 0,
            main_building: None,
            generation: 0,
            rendered_generation: 0,
        }
    }

    // -- Mutation helpers --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Record that the renderer has consumed the current generation.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Objects --

    /// Add an object and return its id. The first `Building` added becomes
    /// the main building.
    pub fn add_object(&mut self, mut object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        object.id = id;
        if object.category == Category::Building && self.main_building.is_none()
        {
            self.main_building = Some(id);
        }
        self.objects.push(object);
        self.invalidate();
        id
    }

    /// Remove an object. Clears the main-building designation if it pointed
    /// at it.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        if self.main_building == Some(id) {
            self.main_building = None;
        }
        self.invalidate();
        Some(self.objects.remove(idx))
    }

    /// Look up an object.
    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Mutable lookup. Marks the scene dirty when the object exists.
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        self.invalidate();
        self.objects.get_mut(idx)
    }

    /// All objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    // -- Main building --

    /// The object double-click tests against.
    #[must_use]
    pub fn main_building(&self) -> Option<ObjectId> {
        self.main_building
    }

    /// Rotate the main building about the vertical axis. Returns `false`
    /// when there is no main building.
    pub fn rotate_main_building(&mut self, degrees: f32) -> bool {
        let Some(id) = self.main_building else {
            return false;
        };
        let Some(building) = self.object_mut(id) else {
            return false;
        };
        building.transform.rotation =
            Quat::from_rotation_y(degrees.to_radians())
                * building.transform.rotation;
        true
    }

    /// Restore the main building's rotation to identity.
    pub fn reset_main_building_rotation(&mut self) -> bool {
        let Some(id) = self.main_building else {
            return false;
        };
        let Some(building) = self.object_mut(id) else {
            return false;
        };
        building.transform.rotation = Quat::IDENTITY;
        true
    }

    // -- Bulk edits --

    /// Set the color of every furniture object of `kind`. Returns how many
    /// objects changed.
    pub fn recolor(&mut self, kind: FurnitureKind, color: [f32; 3]) -> usize {
        let mut changed = 0;
        for object in &mut self.objects {
            if object.category == Category::Furniture(kind) {
                object.color = color;
                changed += 1;
            }
        }
        if changed > 0 {
            self.invalidate();
        }
        changed
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
