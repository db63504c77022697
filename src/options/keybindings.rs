use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ViewPool` → `"KeyP"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::ToggleDayNight, "KeyN".into()),
            (KeyAction::ToggleSeason, "KeyR".into()),
            (KeyAction::ResetRotation, "Backspace".into()),
            (KeyAction::ViewHotel, "KeyH".into()),
            (KeyAction::ViewCourts, "KeyC".into()),
            (KeyAction::ViewPool, "KeyP".into()),
            (KeyAction::ViewOverview, "KeyO".into()),
            (KeyAction::Cancel, "Escape".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|(_, bound)| bound.as_str() == key)
            .map(|(action, _)| *action)
    }
}
