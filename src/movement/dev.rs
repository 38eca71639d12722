//! Movement domain: debug-only test level and controller overlay.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{
    CharacterId, Fuel, GameLayer, Ground, JumpEvent, JumpKind, MovementState, Player, Wall,
};

pub(crate) struct MovementDevPlugin;

impl Plugin for MovementDevPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlayState>()
            .add_systems(Startup, spawn_test_room)
            .add_systems(Update, (toggle_debug_overlay, update_debug_overlay).chain());
    }
}

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub(crate) struct DebugOverlayState {
    pub visible: bool,
    pub last_jump: Option<JumpKind>,
    pub jump_count: u32,
}

/// Marker for the controller overlay text
#[derive(Component, Debug)]
pub(crate) struct DebugInfoOverlay;

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut spawn_block = |marker_is_wall: bool, color: Color, size: Vec2, at: Vec2| {
        let mut block = commands.spawn((
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(at.x, at.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));
        if marker_is_wall {
            block.insert((Wall, wall_layers));
        } else {
            block.insert((Ground, ground_layers));
        }
    };

    // Floor
    spawn_block(false, ground_color, Vec2::new(800.0, 40.0), Vec2::new(0.0, -200.0));
    // Outer walls
    spawn_block(true, wall_color, Vec2::new(40.0, 500.0), Vec2::new(-420.0, 50.0));
    spawn_block(true, wall_color, Vec2::new(40.0, 500.0), Vec2::new(420.0, 50.0));
    // Platforms, rising left to right
    spawn_block(false, platform_color, Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0));
    spawn_block(false, platform_color, Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0));
    spawn_block(false, platform_color, Vec2::new(120.0, 20.0), Vec2::new(0.0, 150.0));
    // Narrow shaft for chained wall jumps
    spawn_block(true, wall_color, Vec2::new(30.0, 260.0), Vec2::new(-130.0, -50.0));
    spawn_block(true, wall_color, Vec2::new(30.0, 260.0), Vec2::new(-50.0, -50.0));
}

/// Toggle the overlay with F1 or backtick
pub(crate) fn toggle_debug_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut overlay: ResMut<DebugOverlayState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !(keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote)) {
        return;
    }

    overlay.visible = !overlay.visible;
    if overlay.visible {
        commands.spawn((
            DebugInfoOverlay,
            Text::new("Loading..."),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(Color::srgb(0.8, 0.9, 0.8)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                bottom: Val::Px(20.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(500),
        ));
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn update_debug_overlay(
    mut jumps: MessageReader<JumpEvent>,
    mut overlay: ResMut<DebugOverlayState>,
    player_query: Query<
        (Entity, &CharacterId, &Transform, &LinearVelocity, &MovementState, &Fuel),
        With<Player>,
    >,
    mut text_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let player = player_query.iter().next();

    // Only the tracked player's jumps count.
    for jump in jumps.read() {
        if player.is_some_and(|(entity, ..)| entity == jump.entity) {
            overlay.last_jump = Some(jump.kind);
            overlay.jump_count += 1;
        }
    }

    let (Some((_, id, transform, velocity, state, fuel)), Ok(mut text)) =
        (player, text_query.single_mut())
    else {
        return;
    };

    let pos = transform.translation;
    **text = format!(
        "{}\nPos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nPhase: {:?}\nFacing: {:?}\n\
         Grounded: {} Wall: {}\nCoyote: {:.2} Buffer: {:.2} WallJump: {:.2}\n\
         Double jump: {}\nFuel: {:.1}/{:.0}\nJumps: {} (last {:?})",
        id.0,
        pos.x,
        pos.y,
        velocity.x,
        velocity.y,
        state.phase,
        state.facing,
        state.contacts.grounded,
        state.contacts.touching_wall,
        state.coyote_timer,
        state.jump_buffer_timer,
        state.wall_jump_timer,
        state.can_double_jump,
        fuel.current,
        fuel.max,
        overlay.jump_count,
        overlay.last_jump,
    );
}
