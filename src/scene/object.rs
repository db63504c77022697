use std::fmt;

use glam::Vec3;

use super::transform::Transform;

/// Stable identity of an object within a [`Scene`](super::Scene).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub(crate) u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Furniture variety, used for recoloring and framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FurnitureKind {
    /// Poolside sun lounger.
    Lounger,
    /// Beach umbrella.
    Umbrella,
    /// Garden bench.
    Bench,
    /// Terrace table.
    Table,
}

/// What an object is. Attached at creation; drives labels, framing and
/// which pick registry the object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// The main hotel building.
    Building,
    /// One of the tennis courts.
    TennisCourt,
    /// One of the padel courts.
    PadelCourt,
    /// The outdoor pool.
    Pool,
    /// A piece of furniture.
    Furniture(FurnitureKind),
    /// Non-interactive content: terrain, gardens, parking, roofs.
    Decor,
}

impl Category {
    /// Member of the hover registry (objects that raise a label).
    #[must_use]
    pub fn is_hover_target(self) -> bool {
        matches!(
            self,
            Self::Building | Self::TennisCourt | Self::PadelCourt | Self::Pool
        )
    }

    /// Member of the click registry: the hover registry plus furniture.
    #[must_use]
    pub fn is_click_target(self) -> bool {
        self.is_hover_target() || matches!(self, Self::Furniture(_))
    }

    /// Human-readable name used when nothing more specific is configured.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Building => "Hotel",
            Self::TennisCourt => "Tennis court",
            Self::PadelCourt => "Padel court",
            Self::Pool => "Pool",
            Self::Furniture(FurnitureKind::Lounger) => "Sun lounger",
            Self::Furniture(FurnitureKind::Umbrella) => "Umbrella",
            Self::Furniture(FurnitureKind::Bench) => "Bench",
            Self::Furniture(FurnitureKind::Table) => "Table",
            Self::Decor => "Grounds",
        }
    }
}

/// Local-space geometry used for hit-testing and the highlight overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Box centered on the origin with the given full extents.
    Cuboid {
        /// Width, height and depth.
        size: Vec3,
    },
    /// Sphere centered on the origin.
    Sphere {
        /// Sphere radius.
        radius: f32,
    },
}

impl Shape {
    /// Box shape from its full width, height and depth.
    #[must_use]
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Cuboid {
            size: Vec3::new(width, height, depth),
        }
    }
}

/// An entity in the scene.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub(crate) id: ObjectId,
    /// Short name for logs.
    pub name: String,
    /// Kind of object.
    pub category: Category,
    /// Hit-test geometry.
    pub shape: Shape,
    /// World placement.
    pub transform: Transform,
    /// Base color (linear RGB).
    pub color: [f32; 3],
    /// Free-text metadata shown in the detail panel and used as a framing
    /// key.
    pub description: Option<String>,
    /// Whether the object takes part in picking at all.
    pub interactive: bool,
}

impl SceneObject {
    /// New object at `position`. Decor is non-interactive; everything else
    /// is interactive.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: Category,
        shape: Shape,
        position: Vec3,
    ) -> Self {
        Self {
            id: ObjectId(u32::MAX),
            name: name.into(),
            category,
            shape,
            transform: Transform::from_translation(position),
            color: [0.8, 0.8, 0.8],
            description: None,
            interactive: category != Category::Decor,
        }
    }

    /// Attach free-text metadata.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the base color.
    #[must_use]
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Replace the whole transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Identity assigned by the owning scene.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.transform.translation
    }
}
