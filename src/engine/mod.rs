//! The camera framing controller.
//!
//! [`ResortEngine`] owns the scene, the camera, the selection and every
//! piece of UI state. Hosts drive it with [`ResortCommand`]s and call
//! [`frame`](ResortEngine::frame) once per display refresh.

mod accessors;
pub mod command;
mod controls;
mod interaction;
mod options;

use glam::Vec2;

pub use self::command::ResortCommand;
use crate::camera::{CameraController, CameraUniform};
use crate::environment::{EnvironmentMode, LightingPreset, RainField};
use crate::framing::FramingTable;
use crate::options::Options;
use crate::overlay::{DetailPanel, HoverLabels};
use crate::scene::{resort, Scene};
use crate::selection::Selection;
use crate::util::frame_timing::FrameTiming;

/// Seed for the rain particle field, so runs are reproducible.
const RAIN_SEED: u64 = 0x5EED;

/// Everything a renderer needs after one [`ResortEngine::frame`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Camera uniform for this frame.
    pub uniform: CameraUniform,
    /// Lighting and clear color for the current environment mode.
    pub lighting: LightingPreset,
    /// Whether a camera tween is still running.
    pub animating: bool,
    /// Whether scene objects changed since the previous frame.
    pub scene_dirty: bool,
}

/// Headless camera framing controller for a resort scene.
///
/// # Construction
///
/// Use [`ResortEngine::resort`] for the bundled demo layout or
/// [`ResortEngine::new`] to supply your own scene, labels and framing
/// table.
///
/// # Frame loop
///
/// ```ignore
/// for cmd in input.handle_event(&event) {
///     engine.execute(cmd);
/// }
/// let out = engine.frame(dt);
/// renderer.upload_camera(bytemuck::bytes_of(&out.uniform));
/// ```
pub struct ResortEngine {
    scene: Scene,
    camera: CameraController,
    selection: Selection,
    labels: HoverLabels,
    panel: DetailPanel,
    framing: FramingTable,
    environment: EnvironmentMode,
    rain: RainField,
    options: Options,
    /// Viewport size in physical pixels.
    viewport: Vec2,
    frame_timing: FrameTiming,
}

impl ResortEngine {
    /// Engine over an explicit scene. `size` is the viewport in physical
    /// pixels.
    #[must_use]
    pub fn new(
        scene: Scene,
        labels: HoverLabels,
        framing: FramingTable,
        options: Options,
        size: (u32, u32),
    ) -> Self {
        let viewport = Vec2::new(size.0 as f32, size.1 as f32);
        let aspect = if size.1 > 0 {
            viewport.x / viewport.y
        } else {
            1.0
        };
        let camera = CameraController::new(&options.camera, aspect);
        let rain = RainField::new(&options.lighting, RAIN_SEED);

        log::info!(
            "resort engine ready: {} objects, viewport {}x{}",
            scene.len(),
            size.0,
            size.1
        );

        Self {
            scene,
            camera,
            selection: Selection::new(),
            labels,
            panel: DetailPanel::default(),
            framing,
            environment: EnvironmentMode::default(),
            rain,
            options,
            viewport,
            frame_timing: FrameTiming::new(),
        }
    }

    /// Engine over the bundled demo resort.
    #[must_use]
    pub fn resort(options: Options, size: (u32, u32)) -> Self {
        Self::new(
            resort::build_scene(),
            resort::build_labels(),
            resort::build_framing(),
            options,
            size,
        )
    }

    /// Run one command.
    pub fn execute(&mut self, command: ResortCommand) {
        match command {
            ResortCommand::Hover { x, y } => {
                let _ = self.hover(x, y);
            }
            ResortCommand::Click { x, y } => {
                let _ = self.click(x, y);
            }
            ResortCommand::DoubleClick { x, y } => {
                let _ = self.double_click(x, y);
            }
            ResortCommand::RotateCamera { delta } => self.camera.rotate(delta),
            ResortCommand::Zoom { delta } => self.camera.zoom(delta),
            ResortCommand::JumpTo(view) => {
                let _ = self.jump_to(view);
            }
            ResortCommand::Resize { width, height } => {
                self.resize(width, height);
            }
            ResortCommand::ToggleDayNight => {
                let _ = self.toggle_day_night();
            }
            ResortCommand::ToggleSeason => {
                let _ = self.toggle_season();
            }
            ResortCommand::ResetRotation => {
                let _ = self.reset_rotation();
            }
            ResortCommand::Recolor { kind, color } => {
                let _ = self.recolor(kind, color);
            }
            ResortCommand::ClearSelection => self.clear_selection(),
        }
    }

    /// Advance one frame of `dt` seconds.
    ///
    /// Steps the camera tween, re-syncs the selection overlay to its
    /// object (dropping the selection and panel once the object is gone),
    /// steps rain while it is on, and returns the data a renderer uploads
    /// for this frame.
    pub fn frame(&mut self, dt: f32) -> FrameOutput {
        let animating = self.camera.update_animation(dt);
        let had_selection = self.selection.selected().is_some();
        if had_selection && !self.selection.track(&self.scene) {
            self.panel.hide();
        }
        if self.environment.rainy {
            self.rain.step(dt);
        }

        let uniform = *self.camera.update_uniform();
        let lighting = self.environment.lighting(&self.options.lighting);
        let scene_dirty = self.scene.is_dirty();
        self.scene.mark_rendered();
        self.frame_timing.end_frame();

        FrameOutput {
            uniform,
            lighting,
            animating,
            scene_dirty,
        }
    }

    /// Update the viewport after a window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Vec2::new(width as f32, height as f32);
        self.camera.resize(width, height);
    }
}
