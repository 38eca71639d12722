//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The ContentRegistry provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{Facing, MovementTuning};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Controller tuning (controller.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerFile {
    pub schema_version: u32,
    /// Character spawned when nothing else was selected.
    pub default_character_id: String,
    pub tuning: MovementTuning,
}

// ============================================================================
// Characters (characters.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CharacterDef {
    pub id: String,
    pub name: String,
    /// Replaces the tuned move speed when positive.
    #[serde(default)]
    pub move_speed: Option<f32>,
    /// Replaces the tuned jump force when positive.
    #[serde(default)]
    pub jump_force: Option<f32>,
    #[serde(default)]
    pub facing: Facing,
    /// Sprite tint as linear RGB.
    #[serde(default = "default_tint")]
    pub tint: (f32, f32, f32),
}

fn default_tint() -> (f32, f32, f32) {
    (0.9, 0.9, 0.9)
}

impl CharacterDef {
    /// Tuning for this character: positive stat overrides win over the shared values.
    pub fn apply_overrides(&self, base: &MovementTuning) -> MovementTuning {
        let mut tuning = base.clone();
        if let Some(speed) = self.move_speed.filter(|s| *s > 0.0) {
            tuning.move_speed = speed;
        }
        if let Some(jump) = self.jump_force.filter(|j| *j > 0.0) {
            tuning.jump_force = jump;
        }
        tuning
    }
}
