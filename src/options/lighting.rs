use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Lighting", inline)]
#[serde(default)]
/// Light intensities and background colors for each environment mode.
pub struct LightingOptions {
    /// Ambient intensity by day.
    #[schemars(title = "Day Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub day_ambient: f32,
    /// Sun intensity by day.
    #[schemars(title = "Day Sun", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub day_directional: f32,
    /// Sky color by day.
    #[schemars(skip)]
    pub day_background: [f32; 3],
    /// Ambient intensity at night.
    #[schemars(title = "Night Ambient", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub night_ambient: f32,
    /// Moon intensity at night.
    #[schemars(title = "Night Moon", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub night_directional: f32,
    /// Sky color at night.
    #[schemars(skip)]
    pub night_background: [f32; 3],
    /// Multiplier applied to both intensities while raining.
    #[schemars(title = "Rain Dimming", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub rain_factor: f32,
    /// Overcast sky color while raining by day.
    #[schemars(skip)]
    pub rain_background: [f32; 3],
    /// Directional light position; it shines toward the origin.
    #[schemars(skip)]
    pub sun_position: [f32; 3],
    /// Number of rain drops simulated.
    #[schemars(title = "Rain Drops", range(min = 0, max = 20000))]
    pub rain_drops: u32,
    /// Fall speed of rain drops in units per second.
    #[schemars(title = "Rain Speed", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub rain_speed: f32,
    /// Width, height and depth of the rain volume, centered on the origin.
    #[schemars(skip)]
    pub rain_volume: [f32; 3],
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            day_ambient: 0.6,
            day_directional: 0.8,
            day_background: [0.529, 0.808, 0.922],
            night_ambient: 0.15,
            night_directional: 0.1,
            night_background: [0.02, 0.03, 0.1],
            rain_factor: 0.6,
            rain_background: [0.45, 0.5, 0.55],
            sun_position: [100.0, 50.0, 50.0],
            rain_drops: 1500,
            rain_speed: 30.0,
            rain_volume: [120.0, 40.0, 100.0],
        }
    }
}
