//! Movement domain: facing and body tilt.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::motion::tilt_angle;
use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<&mut MovementState, With<Player>>,
) {
    for mut state in &mut query {
        if state.update_facing(input.axis) {
            debug!("Facing {:?}", state.facing);
        }
    }
}

/// Mirrors the sprite to match facing. Facing itself never lives in the transform.
pub(crate) fn sync_facing_sprite(
    mut query: Query<(&MovementState, &mut Sprite), (With<Player>, Changed<MovementState>)>,
) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing.sign() < 0.0;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

pub(crate) fn apply_tilt(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut Rotation), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut rotation) in &mut query {
        let angle = tilt_angle(
            rotation.as_degrees(),
            input.axis,
            state.contacts.grounded,
            dt,
            &tuning,
        );
        *rotation = Rotation::degrees(angle);
    }
}
