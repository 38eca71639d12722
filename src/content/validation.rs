//! Validation of loaded controller content.
//!
//! Movement never validates at runtime; it clamps. Anything that would make
//! clamping meaningless (negative windows, an empty tank, a missing starting
//! character) is rejected here before the player spawns.

use super::registry::ContentRegistry;
use crate::movement::MovementTuning;

/// A validation error with context about what failed.
#[derive(Debug, PartialEq)]
pub struct ValidationError {
    pub source: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.source, self.field, self.message)
    }
}

/// Helper macro for range checks on tuning fields
macro_rules! check_tuning {
    ($errors:expr, $tuning:expr, $field:ident, $cond:expr, $expect:expr) => {
        let value = $tuning.$field;
        if !value.is_finite() || !$cond(value) {
            $errors.push(ValidationError {
                source: "MovementTuning",
                field: stringify!($field),
                message: format!("expected {}, got {}", $expect, value),
            });
        }
    };
}

/// Validate tuning values.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let non_negative = |v: f32| v >= 0.0;
    let positive = |v: f32| v > 0.0;

    check_tuning!(errors, tuning, move_speed, non_negative, ">= 0");
    check_tuning!(errors, tuning, jetpack_force, non_negative, ">= 0");
    check_tuning!(errors, tuning, jump_force, non_negative, ">= 0");
    check_tuning!(errors, tuning, wall_jump_force, non_negative, ">= 0");
    check_tuning!(errors, tuning, wall_jump_horizontal_force, non_negative, ">= 0");
    check_tuning!(errors, tuning, wall_slide_speed, non_negative, ">= 0");
    check_tuning!(errors, tuning, gravity, non_negative, ">= 0");

    check_tuning!(errors, tuning, rotation_speed, non_negative, ">= 0");
    check_tuning!(errors, tuning, normalize_rotation_speed, non_negative, ">= 0");
    check_tuning!(errors, tuning, max_tilt_angle, |v: f32| (0.0..=180.0).contains(&v), "0..=180");

    check_tuning!(errors, tuning, fuel_capacity, positive, "> 0");
    check_tuning!(errors, tuning, fuel_burn_rate, non_negative, ">= 0");
    check_tuning!(errors, tuning, fuel_refill_rate, non_negative, ">= 0");

    check_tuning!(errors, tuning, ground_probe_width, positive, "> 0");
    check_tuning!(errors, tuning, ground_probe_height, positive, "> 0");
    check_tuning!(errors, tuning, ground_probe_drop, |v: f32| v.is_finite(), "a finite offset");
    check_tuning!(errors, tuning, wall_check_distance, positive, "> 0");

    check_tuning!(errors, tuning, jump_buffer_time, non_negative, ">= 0");
    check_tuning!(errors, tuning, coyote_time, non_negative, ">= 0");
    check_tuning!(errors, tuning, wall_jump_time, non_negative, ">= 0");
    check_tuning!(errors, tuning, wall_jump_duration, non_negative, ">= 0");

    errors
}

/// Validate that the character to spawn exists.
pub fn validate_selection(registry: &ContentRegistry, selected: Option<&str>) -> Vec<ValidationError> {
    let id = selected.unwrap_or(registry.default_character_id.as_str());
    if registry.characters.contains_key(id) {
        return Vec::new();
    }

    vec![ValidationError {
        source: "SelectedCharacter",
        field: "character_id",
        message: format!("no character definition '{}'", id),
    }]
}
