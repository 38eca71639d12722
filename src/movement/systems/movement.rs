//! Movement domain: locomotion systems for timers and velocity.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{JumpEvent, MovementInput, MovementState, MovementTuning, Player};

/// Frame-rate wall slide / wall jump. Runs after the jump press is buffered.
pub(crate) fn handle_wall_interaction(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut jump_events: MessageWriter<JumpEvent>,
    mut query: Query<(Entity, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (entity, mut state, mut velocity) in &mut query {
        let jumped = state.wall_interaction(
            input.axis,
            input.jump_just_pressed,
            &mut velocity.0,
            dt,
            &tuning,
        );

        if let Some(kind) = jumped {
            jump_events.write(JumpEvent { entity, kind });
        }
    }
}

pub(crate) fn tick_wall_jump_lock(
    time: Res<Time>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.tick_wall_jump_lock(dt);
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        state.apply_horizontal(input.axis, &mut velocity.0, &tuning);
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        state.apply_gravity(&mut velocity.0, dt, &tuning);
    }
}

pub(crate) fn apply_jump(
    tuning: Res<MovementTuning>,
    mut jump_events: MessageWriter<JumpEvent>,
    mut query: Query<(Entity, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (entity, mut state, mut velocity) in &mut query {
        if let Some(kind) = state.try_jump(&mut velocity.0, &tuning) {
            jump_events.write(JumpEvent { entity, kind });
        }
    }
}
