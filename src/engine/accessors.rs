//! Read-only queries and escape hatches for [`ResortEngine`].

use glam::Vec2;

use super::ResortEngine;
use crate::camera::CameraController;
use crate::environment::{EnvironmentMode, LightingPreset, RainField};
use crate::options::Options;
use crate::overlay::{DetailPanel, HoverLabels};
use crate::scene::Scene;
use crate::selection::Selection;
use crate::util::frame_timing::FrameTiming;

// ── Scene ──

impl ResortEngine {
    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access for hosts that add or move objects.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Current selection and overlay.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

// ── Camera ──

impl ResortEngine {
    /// The camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Mutable camera controller.
    pub fn camera_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// Viewport size in physical pixels.
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }
}

// ── UI ──

impl ResortEngine {
    /// Hover labels.
    #[must_use]
    pub fn labels(&self) -> &HoverLabels {
        &self.labels
    }

    /// The detail panel.
    #[must_use]
    pub fn panel(&self) -> &DetailPanel {
        &self.panel
    }

    /// Day/night and rain switches.
    #[must_use]
    pub fn environment(&self) -> EnvironmentMode {
        self.environment
    }

    /// Lighting for the current environment mode.
    #[must_use]
    pub fn lighting(&self) -> LightingPreset {
        self.environment.lighting(&self.options.lighting)
    }

    /// The rain particle field (static while rain is off).
    #[must_use]
    pub fn rain(&self) -> &RainField {
        &self.rain
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Frame counter and smoothed FPS.
    #[must_use]
    pub fn frame_timing(&self) -> &FrameTiming {
        &self.frame_timing
    }
}
