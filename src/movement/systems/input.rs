//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis = x;
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.thrust_held = keyboard.pressed(KeyCode::KeyE);
}

pub(crate) fn buffer_jump_input(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        state.buffer_jump(input.jump_just_pressed, dt, &tuning);
    }
}
