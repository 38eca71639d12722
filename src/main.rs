mod content;
mod core;
mod movement;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::SelectedCharacter;

fn main() {
    // Optional first argument: character id from characters.ron
    let mut selected = SelectedCharacter::default();
    if let Some(id) = std::env::args().nth(1) {
        selected.select(id);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Jetpack Platformer".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default().with_length_unit(64.0))
        .insert_resource(selected)
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            ui::UiPlugin,
        ))
        .run();
}
