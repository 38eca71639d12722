//! ContentRegistry resource providing lookups for loaded content.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::*;

/// Central registry for all loaded controller content.
#[derive(Resource, Debug, Default)]
pub struct ContentRegistry {
    pub characters: HashMap<String, CharacterDef>,
    pub default_character_id: String,
}

impl ContentRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "ContentRegistry loaded:\n\
             - Characters: {}\n\
             - Default character: {}",
            self.characters.len(),
            self.default_character_id,
        )
    }

    /// Definition for `id`, or the default character when `id` is `None`.
    pub fn character(&self, id: Option<&str>) -> Option<&CharacterDef> {
        self.characters
            .get(id.unwrap_or(self.default_character_id.as_str()))
    }
}
