//! Content domain: RON-driven controller configuration.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::CharacterDef;
pub use loader::load_all_content;
pub use registry::ContentRegistry;
pub use validation::{validate_selection, validate_tuning};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::{MovementTuning, SelectedCharacter};

/// Directory holding controller.ron and characters.ron.
#[derive(Resource, Debug, Clone)]
pub struct ContentPath(pub PathBuf);

impl Default for ContentPath {
    fn default() -> Self {
        Self(PathBuf::from("assets/data"))
    }
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContentPath>()
            .init_resource::<ContentRegistry>()
            .register_type::<CharacterDef>()
            .add_systems(PreStartup, load_content);
    }
}

/// Loads and validates content before anything spawns. Any error is fatal.
fn load_content(
    path: Res<ContentPath>,
    selected: Res<SelectedCharacter>,
    mut registry: ResMut<ContentRegistry>,
    mut tuning: ResMut<MovementTuning>,
    mut exit: MessageWriter<AppExit>,
) {
    let (loaded, loaded_tuning) = match load_all_content(&path.0) {
        Ok(content) => content,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            exit.write(AppExit::error());
            return;
        }
    };

    let mut problems = validate_tuning(&loaded_tuning);
    problems.extend(validate_selection(&loaded, selected.character_id.as_deref()));
    if !problems.is_empty() {
        for problem in &problems {
            error!("Invalid content: {}", problem);
        }
        exit.write(AppExit::error());
        return;
    }

    info!("{}", loaded.summary());
    info!(
        "Controller tuning: move_speed={}, jump_force={}, fuel_capacity={}, full burn {:.1}s",
        loaded_tuning.move_speed,
        loaded_tuning.jump_force,
        loaded_tuning.fuel_capacity,
        loaded_tuning.full_burn_time()
    );

    *registry = loaded;
    *tuning = loaded_tuning;
}
