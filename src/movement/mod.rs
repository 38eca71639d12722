//! Movement domain: plugin wiring and public exports for the character controller.
//!
//! Two update rates drive the controller. Input sampling, jump buffering, wall
//! slide / wall jump and facing run every frame in `Update`; contact sensing,
//! horizontal control, jumps, thrust, fuel and tilt run in `FixedUpdate`, ahead
//! of the physics step.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod motion;
mod resources;
mod systems;


pub use components::*;
pub use events::JumpEvent;
pub use motion::JumpKind;
pub use resources::*;

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_gravity, apply_horizontal_movement, apply_jump, apply_thrust, apply_tilt,
    buffer_jump_input, detect_contacts, handle_wall_interaction, read_input, refill_fuel,
    sync_facing_sprite, tick_wall_jump_lock, update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<SelectedCharacter>()
            .init_resource::<PlayerRegistry>()
            .add_message::<JumpEvent>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    buffer_jump_input,
                    handle_wall_interaction,
                    update_facing,
                    sync_facing_sprite,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                (
                    detect_contacts,
                    tick_wall_jump_lock,
                    apply_horizontal_movement,
                    apply_gravity,
                    apply_jump,
                    apply_thrust,
                    refill_fuel,
                    apply_tilt,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_plugins(dev::MovementDevPlugin);
    }
}
