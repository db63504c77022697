//! Day/night and rain/season state, the lighting it implies, and the rain
//! particle field.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::LightingOptions;

/// Two independent environment switches. No intermediate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentMode {
    /// Night lighting is active.
    pub night: bool,
    /// Rain (the season toggle) is active.
    pub rainy: bool,
}

impl EnvironmentMode {
    /// Flip day/night. Returns the new `night` value.
    pub fn toggle_night(&mut self) -> bool {
        self.night = !self.night;
        self.night
    }

    /// Flip rain. Returns the new `rainy` value.
    pub fn toggle_rain(&mut self) -> bool {
        self.rainy = !self.rainy;
        self.rainy
    }

    /// Lighting for the current mode.
    ///
    /// Night takes the night intensities and sky. Rain dims both
    /// intensities by `rain_factor`; by day it also swaps in the overcast
    /// sky.
    #[must_use]
    pub fn lighting(self, options: &LightingOptions) -> LightingPreset {
        let (mut ambient, mut directional, mut background) = if self.night {
            (
                options.night_ambient,
                options.night_directional,
                options.night_background,
            )
        } else {
            (
                options.day_ambient,
                options.day_directional,
                options.day_background,
            )
        };

        if self.rainy {
            ambient *= options.rain_factor;
            directional *= options.rain_factor;
            if !self.night {
                background = options.rain_background;
            }
        }

        LightingPreset {
            light_dir: light_direction(options.sun_position),
            directional,
            background,
            ambient,
        }
    }
}

/// Unit vector from the light toward the origin.
fn light_direction(position: [f32; 3]) -> [f32; 3] {
    (-Vec3::from_array(position))
        .try_normalize()
        .unwrap_or(Vec3::NEG_Y)
        .to_array()
}

/// Scene lighting for one environment mode.
///
/// Laid out for direct upload as a 32-byte uniform:
///   `light_dir`: vec3<f32> (offset 0), `directional`: f32 (offset 12),
///   background: vec3<f32> (offset 16), ambient: f32 (offset 28).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingPreset {
    /// Direction the directional light travels (normalized).
    pub light_dir: [f32; 3],
    /// Directional light intensity.
    pub directional: f32,
    /// Clear color.
    pub background: [f32; 3],
    /// Ambient light intensity.
    pub ambient: f32,
}

/// Falling rain drops inside a box centered on the origin.
///
/// Drops move straight down at a fixed speed and wrap to the top of the box
/// when they pass the ground.
pub struct RainField {
    drops: Vec<Vec3>,
    speed: f32,
    height: f32,
}

impl RainField {
    /// Spawn `options.rain_drops` drops uniformly inside the rain volume.
    #[must_use]
    pub fn new(options: &LightingOptions, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let [width, height, depth] = options.rain_volume;
        let (half_w, half_d) = (width.max(0.0) * 0.5, depth.max(0.0) * 0.5);
        let height = height.max(0.0);

        let drops = (0..options.rain_drops)
            .map(|_| {
                Vec3::new(
                    sample(&mut rng, -half_w, half_w),
                    sample(&mut rng, 0.0, height),
                    sample(&mut rng, -half_d, half_d),
                )
            })
            .collect();

        Self {
            drops,
            speed: options.rain_speed,
            height,
        }
    }

    /// Drop positions.
    #[must_use]
    pub fn drops(&self) -> &[Vec3] {
        &self.drops
    }

    /// Advance every drop by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) || self.height <= 0.0 {
            return;
        }
        let fall = self.speed * dt;
        for drop in &mut self.drops {
            drop.y -= fall;
            if drop.y < 0.0 {
                drop.y = drop.y.rem_euclid(self.height);
            }
        }
    }
}

fn sample(rng: &mut StdRng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}
