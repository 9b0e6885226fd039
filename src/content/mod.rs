//! Content domain: tuning and level data loaded from RON at startup.

mod data;
mod loader;
mod validation;


pub use data::{COIN_RADIUS, LevelDef, PlatformDef, RectDef, ShapeGeometry, ShapeSpawn};
pub use loader::{ContentLoadError, load_level, load_tuning, parse_level, parse_ron};
pub use validation::{LayoutError, validate_level};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::player::PlayerTuning;

pub const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let base_path = PathBuf::from(CONTENT_DIR);

        let tuning = match load_tuning(&base_path) {
            Ok(tuning) => {
                info!("Loaded player tuning from {}", base_path.display());
                tuning
            }
            Err(e) => {
                warn!("{}; using default player tuning", e);
                PlayerTuning::default()
            }
        };

        let level = match load_level(&base_path) {
            Ok(level) => {
                info!(
                    "Loaded level '{}' with {} shapes",
                    level.name,
                    level.shapes().len()
                );
                level
            }
            Err(e) => {
                error!("{}; using built-in level", e);
                LevelDef::default()
            }
        };

        app.insert_resource(tuning).insert_resource(level);
    }
}
