//! Loader for RON content files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;
use crate::movement::MovementTuning;

pub const CONTROLLER_FILE: &str = "controller.ron";
pub const CHARACTERS_FILE: &str = "characters.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text into `T`, naming `file` in any error.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a RON file containing a DataFile<T> wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    let data: DataFile<T> = parse_ron(&path.display().to_string(), &contents)?;
    Ok(data.items)
}

/// Load a single RON struct (not wrapped in DataFile).
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let contents = read_file(path)?;
    parse_ron(&path.display().to_string(), &contents)
}

/// Build a registry from already-parsed files. Duplicate ids are reported.
pub fn build_registry(
    controller: &ControllerFile,
    characters: Vec<CharacterDef>,
) -> Result<ContentRegistry, Vec<ContentLoadError>> {
    let mut registry = ContentRegistry {
        default_character_id: controller.default_character_id.clone(),
        ..default()
    };
    let mut errors = Vec::new();

    for character in characters {
        let id = character.id.clone();
        if registry.characters.insert(id.clone(), character).is_some() {
            errors.push(ContentLoadError {
                file: CHARACTERS_FILE.to_string(),
                message: format!("duplicate character id '{}'", id),
            });
        }
    }

    if errors.is_empty() {
        Ok(registry)
    } else {
        Err(errors)
    }
}

/// Load controller tuning and character definitions from `base_path`.
/// Returns errors for any files that fail to load.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(ContentRegistry, MovementTuning), Vec<ContentLoadError>> {
    let mut errors = Vec::new();

    // Tuning is required - nothing can spawn without it
    let controller = match load_single_file::<ControllerFile>(&base_path.join(CONTROLLER_FILE)) {
        Ok(controller) => controller,
        Err(e) => {
            errors.push(e);
            return Err(errors);
        }
    };

    let characters =
        match load_data_file::<CharacterDef>(&base_path.join(CHARACTERS_FILE)) {
            Ok(items) => items,
            Err(e) => {
                errors.push(e);
                Vec::new()
            }
        };

    match build_registry(&controller, characters) {
        Ok(registry) if errors.is_empty() => {
            debug!("{} schema v{}", CONTROLLER_FILE, controller.schema_version);
            Ok((registry, controller.tuning))
        }
        Ok(_) => Err(errors),
        Err(mut registry_errors) => {
            errors.append(&mut registry_errors);
            Err(errors)
        }
    }
}
