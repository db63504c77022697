//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (mouse tracking,
//! drag detection, double-click timing) and the key-binding map. It is the
//! only thing that sits between raw window events and the engine's
//! [`execute`](crate::ResortEngine::execute) method.

use glam::Vec2;
use web_time::Instant;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use super::mouse::{ClickResult, InputState};
use crate::engine::command::ResortCommand;
use crate::options::{KeybindingOptions, PresetView};

impl KeyAction {
    /// Convert to the corresponding parameterless [`ResortCommand`].
    #[must_use]
    pub fn to_command(self) -> ResortCommand {
        match self {
            Self::ToggleDayNight => ResortCommand::ToggleDayNight,
            Self::ToggleSeason => ResortCommand::ToggleSeason,
            Self::ResetRotation => ResortCommand::ResetRotation,
            Self::ViewHotel => ResortCommand::JumpTo(PresetView::Hotel),
            Self::ViewCourts => ResortCommand::JumpTo(PresetView::Courts),
            Self::ViewPool => ResortCommand::JumpTo(PresetView::Pool),
            Self::ViewOverview => ResortCommand::JumpTo(PresetView::Overview),
            Self::Cancel => ResortCommand::ClearSelection,
        }
    }
}

/// Converts raw window events into [`ResortCommand`]s.
///
/// # Usage
///
/// ```ignore
/// for cmd in input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Mouse tracking and double-click state machine.
    state: InputState,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            state: InputState::new(),
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ResortCommand> {
        self.key_bindings.lookup(key).map(KeyAction::to_command)
    }

    /// Process a raw input event stamped with the current time.
    pub fn handle_event(&mut self, event: &InputEvent) -> Vec<ResortCommand> {
        self.handle_event_at(event, Instant::now())
    }

    /// Process a raw input event that happened at `now`.
    ///
    /// A release can yield two commands: the `Click` and, when it completes
    /// a double-click, the `DoubleClick` after it.
    pub fn handle_event_at(
        &mut self,
        event: &InputEvent,
        now: Instant,
    ) -> Vec<ResortCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(*x, *y))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(*button, *pressed, now)
            }
            InputEvent::Scroll { delta } => {
                vec![ResortCommand::Zoom { delta: *delta }]
            }
            InputEvent::Key { code } => {
                self.handle_key_press(code).into_iter().collect()
            }
            InputEvent::Resized { width, height } => vec![ResortCommand::Resize {
                width: *width,
                height: *height,
            }],
        }
    }

    /// Cursor moved: orbit while dragging, hover otherwise.
    fn handle_cursor_moved(&mut self, pos: Vec2) -> Vec<ResortCommand> {
        let delta = self.state.handle_mouse_position(pos);

        if self.state.is_dragging {
            return vec![ResortCommand::RotateCamera { delta }];
        }
        if self.state.is_pressed() {
            return Vec::new();
        }
        vec![ResortCommand::Hover { x: pos.x, y: pos.y }]
    }

    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
        now: Instant,
    ) -> Vec<ResortCommand> {
        if button != MouseButton::Left {
            return Vec::new();
        }

        if pressed {
            self.state.handle_mouse_down();
            return Vec::new();
        }

        match self.state.process_mouse_up(now) {
            ClickResult::NoAction => Vec::new(),
            ClickResult::SingleClick { pos } => {
                vec![ResortCommand::Click { x: pos.x, y: pos.y }]
            }
            ClickResult::DoubleClick { pos } => vec![
                ResortCommand::Click { x: pos.x, y: pos.y },
                ResortCommand::DoubleClick { x: pos.x, y: pos.y },
            ],
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
