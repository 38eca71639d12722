//! Movement domain: tuning, input and lookup resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every tunable constant of the controller. Loaded from `controller.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    /// Upward force applied each fixed tick while thrusting.
    pub jetpack_force: f32,
    pub jump_force: f32,
    pub wall_jump_force: f32,
    pub wall_jump_horizontal_force: f32,
    /// Maximum downward speed while wall sliding.
    pub wall_slide_speed: f32,
    /// Downward acceleration applied by the controller; the body itself has no gravity.
    pub gravity: f32,

    pub rotation_speed: f32,
    pub normalize_rotation_speed: f32,
    /// Degrees.
    pub max_tilt_angle: f32,

    pub fuel_capacity: f32,
    pub fuel_burn_rate: f32,
    pub fuel_refill_rate: f32,

    pub ground_probe_width: f32,
    pub ground_probe_height: f32,
    /// Offset of the ground box center below the body origin.
    pub ground_probe_drop: f32,
    pub wall_check_distance: f32,

    pub jump_buffer_time: f32,
    pub coyote_time: f32,
    /// How long a wall jump stays available after sliding stops.
    pub wall_jump_time: f32,
    /// How long horizontal control stays locked after a wall jump.
    pub wall_jump_duration: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jetpack_force: 3900.0,
            jump_force: 720.0,
            wall_jump_force: 900.0,
            wall_jump_horizontal_force: 480.0,
            wall_slide_speed: 120.0,
            gravity: 1800.0,
            rotation_speed: 100.0,
            normalize_rotation_speed: 3.0,
            max_tilt_angle: 20.0,
            fuel_capacity: 100.0,
            fuel_burn_rate: 18.0,
            fuel_refill_rate: 20.0,
            ground_probe_width: 22.0,
            ground_probe_height: 6.0,
            ground_probe_drop: 24.0,
            wall_check_distance: 16.0,
            jump_buffer_time: 0.15,
            coyote_time: 0.15,
            wall_jump_time: 0.2,
            wall_jump_duration: 0.4,
        }
    }
}

impl MovementTuning {
    /// Center of the ground overlap box relative to the body origin.
    pub fn ground_probe_offset(&self) -> Vec2 {
        Vec2::new(0.0, -self.ground_probe_drop)
    }

    /// Seconds of continuous thrust a full tank provides.
    pub fn full_burn_time(&self) -> f32 {
        if self.fuel_burn_rate <= 0.0 {
            return f32::INFINITY;
        }
        self.fuel_capacity / self.fuel_burn_rate
    }
}

/// Latest input sample. Written once per frame by the input sampler.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Raw horizontal axis in `[-1, 1]`.
    pub axis: f32,
    /// Jump was pressed this frame (edge, not level).
    pub jump_just_pressed: bool,
    pub thrust_held: bool,
}

/// Resource tracking the character definition to spawn
#[derive(Resource, Debug, Default)]
pub struct SelectedCharacter {
    pub character_id: Option<String>,
}

impl SelectedCharacter {
    pub fn select(&mut self, character_id: impl Into<String>) {
        self.character_id = Some(character_id.into());
    }
}

/// Spawned characters by id, for collaborators that need to find a specific one.
#[derive(Resource, Debug, Default)]
pub struct PlayerRegistry {
    entities: HashMap<String, Entity>,
}

impl PlayerRegistry {
    pub fn register(&mut self, id: impl Into<String>, entity: Entity) -> Option<Entity> {
        self.entities.insert(id.into(), entity)
    }

    pub fn get(&self, id: &str) -> Option<Entity> {
        self.entities.get(id).copied()
    }
}
