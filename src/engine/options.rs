//! Options methods for [`ResortEngine`].

use std::path::Path;

use super::{ResortEngine, RAIN_SEED};
use crate::environment::RainField;
use crate::error::ResortError;
use crate::options::Options;

impl ResortEngine {
    /// Replace options and push them to every subsystem.
    pub fn set_options(&mut self, new: Options) {
        let rain_changed = new.lighting.rain_drops
            != self.options.lighting.rain_drops
            || new.lighting.rain_volume != self.options.lighting.rain_volume
            || new.lighting.rain_speed != self.options.lighting.rain_speed;
        self.options = new;
        self.camera.apply_options(&self.options.camera);
        if rain_changed {
            self.rain = RainField::new(&self.options.lighting, RAIN_SEED);
        }
    }

    /// Load options from a TOML file and apply them.
    ///
    /// # Errors
    ///
    /// Returns [`ResortError`] if the file cannot be read or parsed; the
    /// current options stay in effect.
    pub fn load_options(&mut self, path: &Path) -> Result<(), ResortError> {
        let options = Options::load(path)?;
        log::info!("loaded options from {}", path.display());
        self.set_options(options);
        Ok(())
    }
}
