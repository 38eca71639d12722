//! Movement domain: player bootstrap from loaded content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::movement::{
    CharacterId, Fuel, GameLayer, MovementState, MovementTuning, Player, PlayerRegistry,
    SelectedCharacter,
};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
/// Fixed body mass. Thrust acceleration is `jetpack_force / PLAYER_MASS`.
pub(crate) const PLAYER_MASS: f32 = 1.5;

/// Spawn the selected character (or the default one) with full fuel and zeroed timers.
pub(crate) fn spawn_player(
    mut commands: Commands,
    selected: Res<SelectedCharacter>,
    registry: Res<ContentRegistry>,
    mut players: ResMut<PlayerRegistry>,
    mut tuning: ResMut<MovementTuning>,
) {
    let Some(def) = registry.character(selected.character_id.as_deref()) else {
        warn!(
            "Character {:?} not found in registry, nothing to spawn",
            selected.character_id
        );
        return;
    };

    if players.get(&def.id).is_some() {
        info!("Player '{}' already exists, skipping spawn", def.id);
        return;
    }

    *tuning = def.apply_overrides(&tuning);

    info!(
        "Spawning player: char={}, facing={:?}, move_speed={}, jump_force={}",
        def.id, def.facing, tuning.move_speed, tuning.jump_force
    );

    let (r, g, b) = def.tint;
    let entity = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                CharacterId(def.id.clone()),
                MovementState::new(def.facing),
                Fuel::new(tuning.fuel_capacity),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(r, g, b),
                custom_size: Some(PLAYER_SIZE),
                flip_x: def.facing.sign() < 0.0,
                ..default()
            },
            Transform::from_xyz(0.0, 100.0, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                Mass(PLAYER_MASS),
                NoAutoMass,
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0), // We handle gravity manually for more control
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .id();

    players.register(def.id.clone(), entity);
}
