use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

/// What double-clicking the main building does.
///
/// The two behaviors are alternatives; exactly one is active.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum DoubleClickAction {
    /// Fly the camera to the configured interior pose.
    #[default]
    EnterBuilding,
    /// Turn the building by the configured step about the vertical axis.
    RotateBuilding,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Selection, double-click and fallback framing parameters.
pub struct InteractionOptions {
    /// Double-click behavior on the main building.
    #[schemars(title = "Double Click")]
    pub double_click: DoubleClickAction,
    /// Uniform enlargement of the selection outline.
    #[schemars(title = "Outline Scale", range(min = 1.0, max = 1.5), extend("step" = 0.01))]
    pub highlight_scale: f32,
    /// Camera offset from an object that has no framing entry.
    #[schemars(skip)]
    pub fallback_offset: [f32; 3],
    /// Eye position for the enter-building move.
    #[schemars(skip)]
    pub enter_position: [f32; 3],
    /// Look-at point for the enter-building move.
    #[schemars(skip)]
    pub enter_look_at: [f32; 3],
    /// Degrees per rotate-building step.
    #[schemars(title = "Rotation Step", range(min = 1.0, max = 180.0), extend("step" = 1.0))]
    pub rotation_step_degrees: f32,
}

impl InteractionOptions {
    /// Target pose for entering the building.
    #[must_use]
    pub fn enter_pose(&self) -> CameraPose {
        CameraPose::new(
            self.enter_position.into(),
            self.enter_look_at.into(),
        )
    }
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            double_click: DoubleClickAction::EnterBuilding,
            highlight_scale: 1.05,
            fallback_offset: [10.0, 10.0, 10.0],
            enter_position: [0.0, 4.0, 10.0],
            enter_look_at: [0.0, 4.0, -20.0],
            rotation_step_degrees: 90.0,
        }
    }
}
