//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod fuel;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod orientation;

pub(crate) use collisions::detect_contacts;
pub(crate) use fuel::{apply_thrust, refill_fuel};
pub(crate) use input::{buffer_jump_input, read_input};
pub(crate) use movement::{
    apply_gravity, apply_horizontal_movement, apply_jump, handle_wall_interaction,
    tick_wall_jump_lock,
};
pub(crate) use orientation::{apply_tilt, sync_facing_sprite, update_facing};
