//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation (key press, mouse gesture, UI button or
//! programmatic call) is represented as a `ResortCommand`. Consumers
//! construct commands and pass them to
//! [`ResortEngine::execute`](super::ResortEngine::execute).

use glam::Vec2;

use crate::options::PresetView;
use crate::scene::FurnitureKind;

/// A discrete or parameterized operation the engine can perform.
///
/// The engine never cares *how* a command was triggered:
///
/// ```ignore
/// engine.execute(ResortCommand::ToggleDayNight);
/// engine.execute(ResortCommand::Click { x: 400.0, y: 300.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ResortCommand {
    // ── Pointer ─────────────────────────────────────────────────────
    /// Update hover labels for the pointer position.
    Hover {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Select whatever is under the pointer, or clear on a miss.
    Click {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Run the configured double-click action on the main building.
    DoubleClick {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Orbit the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },
    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },
    /// Animate to a named preset view.
    JumpTo(PresetView),
    /// Viewport changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },

    // ── Environment ─────────────────────────────────────────────────
    /// Flip day and night.
    ToggleDayNight,
    /// Flip rain/season.
    ToggleSeason,

    // ── Scene ───────────────────────────────────────────────────────
    /// Restore the main building's rotation.
    ResetRotation,
    /// Paint every furniture object of one kind.
    Recolor {
        /// Which furniture to paint.
        kind: FurnitureKind,
        /// Linear RGB color.
        color: [f32; 3],
    },
    /// Clear the current selection and hide the detail panel.
    ClearSelection,
}
