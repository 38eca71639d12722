//! Movement domain: jetpack thrust and fuel bookkeeping.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::motion::{burn_fuel, settle_fuel};
use crate::movement::{Fuel, MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn apply_thrust(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut Fuel, Forces), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut fuel, mut forces) in &mut query {
        let was_empty = fuel.is_empty();
        if burn_fuel(&mut fuel, input.thrust_held, dt, &tuning) {
            forces.apply_force(Vec2::Y * tuning.jetpack_force);
            if !was_empty && fuel.is_empty() {
                debug!("Jetpack fuel depleted");
            }
        }
    }
}

/// Refills while grounded, then clamps. Runs after thrust every physics tick.
pub(crate) fn refill_fuel(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut Fuel), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut fuel) in &mut query {
        settle_fuel(&mut fuel, state.contacts.grounded, dt, &tuning);
    }
}
