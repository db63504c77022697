use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

/// Named camera positions reachable from UI buttons.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PresetView {
    /// Front of the hotel.
    Hotel,
    /// Above the tennis and padel courts.
    Courts,
    /// Poolside.
    Pool,
    /// Whole-site view.
    Overview,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
/// A serializable camera pose.
pub struct PoseOptions {
    /// Eye position.
    pub position: [f32; 3],
    /// Look-at point.
    pub look_at: [f32; 3],
}

impl PoseOptions {
    /// Convert to a camera pose.
    #[must_use]
    pub fn to_pose(self) -> CameraPose {
        CameraPose::new(self.position.into(), self.look_at.into())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Views", inline)]
#[serde(default)]
/// Poses for each [`PresetView`].
pub struct ViewOptions {
    /// Hotel preset.
    pub hotel: PoseOptions,
    /// Courts preset.
    pub courts: PoseOptions,
    /// Pool preset.
    pub pool: PoseOptions,
    /// Overview preset.
    pub overview: PoseOptions,
}

impl ViewOptions {
    /// Pose for a preset.
    #[must_use]
    pub fn pose(&self, view: PresetView) -> CameraPose {
        match view {
            PresetView::Hotel => self.hotel,
            PresetView::Courts => self.courts,
            PresetView::Pool => self.pool,
            PresetView::Overview => self.overview,
        }
        .to_pose()
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            hotel: PoseOptions {
                position: [0.0, 25.0, 30.0],
                look_at: [0.0, 6.0, -20.0],
            },
            courts: PoseOptions {
                position: [-35.0, 40.0, 90.0],
                look_at: [-35.0, 0.0, 40.0],
            },
            pool: PoseOptions {
                position: [70.0, 20.0, 70.0],
                look_at: [40.0, 0.0, 40.0],
            },
            overview: PoseOptions {
                position: [100.0, 50.0, 100.0],
                look_at: [0.0, 0.0, 0.0],
            },
        }
    }
}
