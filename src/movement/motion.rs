//! Movement domain: the jump / wall-jump state machine.
//!
//! Everything here is plain arithmetic on [`MovementState`] so the systems in
//! `systems/` stay thin wrappers that move data between the ECS and these
//! methods. Variable-rate methods take the frame delta, fixed-rate methods take
//! the physics step.

use bevy::prelude::*;

use crate::movement::{ContactSnapshot, Facing, Fuel, MotionPhase, MovementState, MovementTuning};

/// Which impulse a jump produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Grounded jump, including jumps inside the coyote window.
    Ground,
    Double,
    Wall,
}

fn decay(timer: f32, dt: f32) -> f32 {
    (timer - dt).max(0.0)
}

impl MovementState {
    pub fn new(facing: Facing) -> Self {
        Self {
            facing,
            wall_jump_direction: -facing.sign(),
            ..default()
        }
    }

    pub fn is_wall_jump_locked(&self) -> bool {
        matches!(self.phase, MotionPhase::WallJumpLocked { .. })
    }

    pub fn is_wall_sliding(&self) -> bool {
        self.phase == MotionPhase::WallSliding
    }

    pub fn jump_buffered(&self) -> bool {
        self.jump_buffer_timer > 0.0
    }

    pub fn coyote_open(&self) -> bool {
        self.coyote_timer > 0.0
    }

    /// Phase implied by contacts alone.
    fn resting_phase(&self) -> MotionPhase {
        if self.contacts.grounded {
            MotionPhase::Grounded
        } else {
            MotionPhase::Airborne
        }
    }

    /// Opens the jump buffer on a press, otherwise lets it run down.
    pub fn buffer_jump(&mut self, pressed: bool, dt: f32, tuning: &MovementTuning) {
        if pressed {
            self.jump_buffer_timer = tuning.jump_buffer_time;
        } else {
            self.jump_buffer_timer = decay(self.jump_buffer_timer, dt);
        }
    }

    /// Stores this tick's sensor results and advances the coyote window.
    pub fn sense(&mut self, contacts: ContactSnapshot, dt: f32, tuning: &MovementTuning) {
        let was_grounded = self.contacts.grounded;
        self.contacts = contacts;

        self.coyote_timer = if contacts.grounded {
            tuning.coyote_time
        } else {
            decay(self.coyote_timer, dt)
        };

        if matches!(self.phase, MotionPhase::Grounded | MotionPhase::Airborne) {
            self.phase = self.resting_phase();
        }

        if contacts.grounded && !was_grounded {
            debug!("Landed: can_double_jump={}", self.can_double_jump);
        } else if !contacts.grounded && was_grounded {
            debug!("Left ground: coyote={:.3}", self.coyote_timer);
        }
    }

    /// Runs the wall-jump lock down by one physics step.
    pub fn tick_wall_jump_lock(&mut self, dt: f32) {
        if let MotionPhase::WallJumpLocked { remaining } = self.phase {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.phase = self.resting_phase();
                debug!("Wall jump lock expired");
            } else {
                self.phase = MotionPhase::WallJumpLocked { remaining };
            }
        }
    }

    /// Wall slide and wall jump, evaluated each frame before the next jump step.
    ///
    /// Sliding clamps the fall speed and keeps the wall-jump window open; a jump
    /// press inside the window launches away from the wall and locks horizontal
    /// control for `wall_jump_duration`.
    pub fn wall_interaction(
        &mut self,
        axis: f32,
        jump_pressed: bool,
        velocity: &mut Vec2,
        dt: f32,
        tuning: &MovementTuning,
    ) -> Option<JumpKind> {
        let sliding = self.contacts.touching_wall && !self.contacts.grounded && axis != 0.0;

        if sliding {
            if !self.is_wall_sliding() {
                debug!("Wall slide started, facing={:?}", self.facing);
            }
            self.phase = MotionPhase::WallSliding;
            velocity.y = velocity.y.max(-tuning.wall_slide_speed);
            self.wall_jump_direction = -self.facing.sign();
            self.wall_jump_timer = tuning.wall_jump_time;
        } else {
            if self.is_wall_sliding() {
                self.phase = self.resting_phase();
            }
            self.wall_jump_timer = decay(self.wall_jump_timer, dt);
        }

        if !(jump_pressed && self.wall_jump_timer > 0.0) {
            return None;
        }

        *velocity = Vec2::new(
            self.wall_jump_direction * tuning.wall_jump_horizontal_force,
            tuning.wall_jump_force,
        );
        self.wall_jump_timer = 0.0;
        self.jump_buffer_timer = 0.0;
        self.can_double_jump = true;
        self.phase = MotionPhase::WallJumpLocked {
            remaining: tuning.wall_jump_duration,
        };

        if self.facing.sign() != self.wall_jump_direction {
            self.facing = self.facing.flipped();
        }
        // The wall ray was cast along the old facing.
        self.contacts.touching_wall = false;

        debug!(
            "Wall jump: direction={}, facing={:?}",
            self.wall_jump_direction, self.facing
        );
        Some(JumpKind::Wall)
    }

    /// Controller gravity for one physics tick. A wall slide stays capped after the pull.
    pub fn apply_gravity(&self, velocity: &mut Vec2, dt: f32, tuning: &MovementTuning) {
        velocity.y -= tuning.gravity * dt;
        if self.is_wall_sliding() {
            velocity.y = velocity.y.max(-tuning.wall_slide_speed);
        }
    }

    /// Input-driven horizontal velocity. Left alone during the wall-jump lock.
    pub fn apply_horizontal(&self, axis: f32, velocity: &mut Vec2, tuning: &MovementTuning) {
        if self.is_wall_jump_locked() {
            return;
        }
        velocity.x = axis * tuning.move_speed;
    }

    /// Primary jump, then double jump, in that priority.
    pub fn try_jump(&mut self, velocity: &mut Vec2, tuning: &MovementTuning) -> Option<JumpKind> {
        if !self.jump_buffered() {
            return None;
        }

        if self.coyote_open() {
            velocity.y = tuning.jump_force;
            self.can_double_jump = true;
            self.jump_buffer_timer = 0.0;
            self.coyote_timer = 0.0;
            if self.is_wall_jump_locked() {
                self.phase = self.resting_phase();
            }
            debug!("Ground jump: grounded={}", self.contacts.grounded);
            return Some(JumpKind::Ground);
        }

        if self.can_double_jump && !self.contacts.grounded && !self.contacts.touching_wall {
            velocity.y = tuning.jump_force;
            self.can_double_jump = false;
            self.jump_buffer_timer = 0.0;
            debug!("Double jump");
            return Some(JumpKind::Double);
        }

        None
    }

    /// Flips facing when the input points the other way. No-op while locked.
    pub fn update_facing(&mut self, axis: f32) -> bool {
        if self.is_wall_jump_locked() || !self.facing.opposes(axis) {
            return false;
        }
        self.facing = self.facing.flipped();
        true
    }
}

/// Burns fuel for this physics step if thrust is held and the tank is not
/// empty. Returns whether thrust force should be applied.
pub fn burn_fuel(fuel: &mut Fuel, thrust_held: bool, dt: f32, tuning: &MovementTuning) -> bool {
    if !thrust_held || fuel.is_empty() {
        return false;
    }
    fuel.burn(tuning.fuel_burn_rate, dt);
    true
}

/// Grounded refill followed by the end-of-step clamp.
pub fn settle_fuel(fuel: &mut Fuel, grounded: bool, dt: f32, tuning: &MovementTuning) {
    if grounded {
        fuel.refill(tuning.fuel_refill_rate, dt);
    }
    fuel.clamp();
}

/// Signed shortest difference from `from` to `to`, in degrees within `(-180, 180]`.
pub fn delta_angle(from: f32, to: f32) -> f32 {
    let delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// Interpolates between two angles in degrees along the shortest arc.
/// `t` is clamped to `[0, 1]`.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    from + delta_angle(from, to) * t.clamp(0.0, 1.0)
}

/// Next body angle in degrees: lean against the input, and ease upright when
/// grounded with no input. The upright ease starts from the same `current`
/// angle and replaces the lean result.
pub fn tilt_angle(current: f32, axis: f32, grounded: bool, dt: f32, tuning: &MovementTuning) -> f32 {
    let max = tuning.max_tilt_angle.abs();
    let target = (-axis * max).clamp(-max, max);
    let mut angle = lerp_angle(current, target, tuning.rotation_speed * dt);

    if grounded && axis.abs() <= f32::EPSILON {
        angle = lerp_angle(current, 0.0, tuning.normalize_rotation_speed * dt);
    }

    angle
}
