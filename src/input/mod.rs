//! Input handling: event types, the click state machine, and the input
//! processor that converts raw window events into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable keyboard actions.
pub mod keyboard;
/// Double-click state machine and mouse position tracking.
pub(crate) mod mouse;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
