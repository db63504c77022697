//! UI button handlers: environment toggles, preset views, recoloring and
//! building rotation.

use super::ResortEngine;
use crate::options::PresetView;
use crate::scene::FurnitureKind;

impl ResortEngine {
    /// Flip day/night. Returns whether it is now night.
    pub fn toggle_day_night(&mut self) -> bool {
        let night = self.environment.toggle_night();
        log::info!("environment: {}", if night { "night" } else { "day" });
        night
    }

    /// Flip the rain/season mode. Returns whether it is now raining.
    pub fn toggle_season(&mut self) -> bool {
        let rainy = self.environment.toggle_rain();
        log::info!("environment: rain {}", if rainy { "on" } else { "off" });
        rainy
    }

    /// Animate to a preset view.
    pub fn jump_to(&mut self, view: PresetView) -> bool {
        log::debug!("jumping to {view:?} view");
        self.camera.animate_to(Some(self.options.views.pose(view)))
    }

    /// Paint every furniture object of `kind`. Returns how many changed.
    pub fn recolor(&mut self, kind: FurnitureKind, color: [f32; 3]) -> usize {
        let changed = self.scene.recolor(kind, color);
        if changed == 0 {
            log::warn!("recolor: no {kind:?} furniture in scene");
        } else {
            log::info!("recolored {changed} {kind:?} object(s)");
        }
        changed
    }

    /// Restore the main building's rotation.
    pub fn reset_rotation(&mut self) -> bool {
        self.scene.reset_main_building_rotation()
    }
}
