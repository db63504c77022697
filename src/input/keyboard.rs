use serde::{Deserialize, Serialize};

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_day_night = "KeyN"
/// view_pool = "KeyP"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Flip day and night.
    ToggleDayNight,
    /// Flip the rain/season mode.
    ToggleSeason,
    /// Undo main-building rotation.
    ResetRotation,
    /// Jump to the hotel preset.
    ViewHotel,
    /// Jump to the courts preset.
    ViewCourts,
    /// Jump to the pool preset.
    ViewPool,
    /// Jump to the overview preset.
    ViewOverview,
    /// Drop the current selection.
    Cancel,
}
