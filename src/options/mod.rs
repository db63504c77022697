//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera, lighting, interaction, preset views,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! site can ship its own preset file.

mod camera;
mod interaction;
mod keybindings;
mod lighting;
mod views;

use std::path::Path;

pub use camera::CameraOptions;
pub use interaction::{DoubleClickAction, InteractionOptions};
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use views::{PoseOptions, PresetView, ViewOptions};

use crate::error::ResortError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, tween and orbit parameters.
    pub camera: CameraOptions,
    /// Lighting presets and rain.
    pub lighting: LightingOptions,
    /// Selection and double-click behavior.
    pub interaction: InteractionOptions,
    /// Preset camera views.
    pub views: ViewOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ResortError::OptionsParse`] for malformed TOML or values
    /// outside their usable range.
    pub fn from_toml(content: &str) -> Result<Self, ResortError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| ResortError::OptionsParse(e.to_string()))?;
        options.camera.validate().map_err(ResortError::OptionsParse)?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ResortError> {
        let content = std::fs::read_to_string(path).map_err(ResortError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ResortError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ResortError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ResortError::Io)?;
        }
        std::fs::write(path, content).map_err(ResortError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[interaction]
double_click = "rotate_building"

[camera]
tween_duration = 0.5
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.interaction.double_click,
            DoubleClickAction::RotateBuilding
        );
        assert_eq!(opts.camera.tween_duration, 0.5);
        // Everything else should be default
        assert_eq!(opts.interaction.highlight_scale, 1.05);
        assert_eq!(opts.lighting.day_ambient, 0.6);
        assert_eq!(opts.camera.easing, crate::util::easing::EasingFunction::Linear);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\nfovy = \"wide\"").unwrap_err();
        assert!(matches!(err, ResortError::OptionsParse(_)));
    }

    #[test]
    fn unusable_camera_values_are_rejected() {
        for toml_str in [
            "[camera]\nmin_distance = 300.0\nmax_distance = 200.0",
            "[camera]\nmax_distance = nan",
            "[camera]\ntween_duration = nan",
            "[camera]\ntween_duration = inf",
            "[camera]\ntween_duration = -1.0",
        ] {
            let err = Options::from_toml(toml_str).unwrap_err();
            assert!(
                matches!(err, ResortError::OptionsParse(_)),
                "accepted {toml_str:?}"
            );
        }
        assert!(Options::from_toml("[camera]\ntween_duration = 0.0").is_ok());
    }

    #[test]
    fn easing_is_configurable() {
        let opts = Options::from_toml(
            "[camera]\neasing = { cubic_hermite = { c1 = 0.33, c2 = 1.0 } }",
        )
        .unwrap();
        assert_eq!(
            opts.camera.easing,
            crate::util::easing::EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 }
        );
    }

    #[test]
    fn keybinding_lookup() {
        use crate::input::KeyAction;
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyN"),
            Some(KeyAction::ToggleDayNight)
        );
        assert_eq!(opts.keybindings.lookup("KeyP"), Some(KeyAction::ViewPool));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn preset_views_resolve() {
        let views = ViewOptions::default();
        let pool = views.pose(PresetView::Pool);
        assert_eq!(pool.look_at, glam::Vec3::new(40.0, 0.0, 40.0));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("interaction"));
        assert!(props.contains_key("views"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("tween_duration").is_some());
        assert!(camera.get("znear").is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("resortview-options-test");
        let path = dir.join("preset.toml");
        let mut opts = Options::default();
        opts.interaction.double_click = DoubleClickAction::RotateBuilding;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_file(&path);
    }
}
