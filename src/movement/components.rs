//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Id of the character definition this player was spawned from.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct CharacterId(pub String);

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// True when the horizontal input points away from this facing.
    pub fn opposes(self, axis: f32) -> bool {
        match self {
            Facing::Right => axis < 0.0,
            Facing::Left => axis > 0.0,
        }
    }

    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }
}

/// Sensor results for one fixed tick. Never carried into decisions of a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactSnapshot {
    pub grounded: bool,
    pub touching_wall: bool,
}

/// Where the character is in the jump/wall-jump cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MotionPhase {
    Grounded,
    #[default]
    Airborne,
    WallSliding,
    /// Horizontal input and facing flips are ignored until `remaining` runs out.
    WallJumpLocked { remaining: f32 },
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub facing: Facing,
    pub contacts: ContactSnapshot,
    pub phase: MotionPhase,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    /// Open while sliding and shortly after; a jump press inside it wall-jumps.
    pub wall_jump_timer: f32,
    /// Launch direction (+1/-1) captured while sliding.
    pub wall_jump_direction: f32,
    pub can_double_jump: bool,
}

/// Jetpack fuel reserve.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Fuel {
    pub current: f32,
    pub max: f32,
}

impl Fuel {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Fill level in `[0, 1]` for display.
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    pub fn burn(&mut self, rate: f32, dt: f32) {
        self.current -= rate * dt;
    }

    pub fn refill(&mut self, rate: f32, dt: f32) {
        if self.current < self.max {
            self.current += rate * dt;
        }
    }

    pub fn clamp(&mut self) {
        self.current = self.current.min(self.max).max(0.0);
    }
}
