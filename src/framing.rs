//! What to show and where to put the camera when an object is selected.
//!
//! Entries are keyed either by object [`Category`] or by the object's
//! free-text description. Objects carrying a description are looked up by
//! that text first; if nothing matches they fall back to a pose offset from
//! their own position. Objects without a description use their category
//! entry, and get no camera move at all if the category has none.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::camera::CameraPose;
use crate::scene::{Category, SceneObject};

/// Description and camera pose for one key.
#[derive(Debug, Clone, PartialEq)]
pub struct FramingEntry {
    /// Detail-panel text.
    pub description: String,
    /// Where the camera goes.
    pub pose: CameraPose,
}

/// Resolved framing for a selected object.
#[derive(Debug, Clone, PartialEq)]
pub struct Framing {
    /// Detail-panel text.
    pub description: String,
    /// Camera target; `None` means the camera stays put.
    pub pose: Option<CameraPose>,
}

/// Static lookup from category or description to framing.
#[derive(Debug, Clone, Default)]
pub struct FramingTable {
    by_category: FxHashMap<Category, FramingEntry>,
    by_description: FxHashMap<String, FramingEntry>,
}

impl FramingTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for a category.
    pub fn insert_category(
        &mut self,
        category: Category,
        description: impl Into<String>,
        position: Vec3,
        look_at: Vec3,
    ) {
        let _ = self.by_category.insert(
            category,
            FramingEntry {
                description: description.into(),
                pose: CameraPose::new(position, look_at),
            },
        );
    }

    /// Add or replace the entry for objects whose description equals `key`.
    pub fn insert_metadata(
        &mut self,
        key: impl Into<String>,
        description: impl Into<String>,
        position: Vec3,
        look_at: Vec3,
    ) {
        let _ = self.by_description.insert(
            key.into(),
            FramingEntry {
                description: description.into(),
                pose: CameraPose::new(position, look_at),
            },
        );
    }

    /// Resolve the framing for `object`.
    ///
    /// `fallback_offset` is added to the object's position for described
    /// objects that have no matching entry.
    #[must_use]
    pub fn resolve(
        &self,
        object: &SceneObject,
        fallback_offset: Vec3,
    ) -> Framing {
        if let Some(text) = &object.description {
            if let Some(entry) = self.by_description.get(text) {
                return Framing {
                    description: entry.description.clone(),
                    pose: Some(entry.pose),
                };
            }
            let position = object.position();
            return Framing {
                description: text.clone(),
                pose: Some(CameraPose::new(position + fallback_offset, position)),
            };
        }

        self.by_category.get(&object.category).map_or_else(
            || Framing {
                description: object.category.display_name().to_owned(),
                pose: None,
            },
            |entry| Framing {
                description: entry.description.clone(),
                pose: Some(entry.pose),
            },
        )
    }
}
