//! UI domain: in-run HUD elements.

mod hud_fuel;

use bevy::prelude::*;

use crate::ui::hud_fuel::{spawn_fuel_gauge_ui, update_fuel_gauge};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_fuel_gauge_ui)
            .add_systems(Update, update_fuel_gauge);
    }
}
