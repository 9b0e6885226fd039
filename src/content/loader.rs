//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::LevelDef;
use super::validation::validate_level;
use crate::player::PlayerTuning;

pub const TUNING_FILE: &str = "tuning.ron";
pub const LEVEL_FILE: &str = "level_1.ron";

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

/// Parse RON text, tagging failures with the file they came from.
pub fn parse_ron<T>(file_name: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

fn read_content_file(path: &Path) -> Result<(String, String), ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;
    Ok((file_name, contents))
}

/// Load a single RON struct.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let (file_name, contents) = read_content_file(path)?;
    parse_ron(&file_name, &contents)
}

pub fn load_tuning(base_path: &Path) -> Result<PlayerTuning, ContentLoadError> {
    load_single_file(&base_path.join(TUNING_FILE))
}

/// Parse and validate a level, rejecting layouts the physics engine cannot build.
pub fn parse_level(file_name: &str, contents: &str) -> Result<LevelDef, ContentLoadError> {
    let level: LevelDef = parse_ron(file_name, contents)?;
    check_level(file_name, level)
}

pub fn load_level(base_path: &Path) -> Result<LevelDef, ContentLoadError> {
    let (file_name, contents) = read_content_file(&base_path.join(LEVEL_FILE))?;
    parse_level(&file_name, &contents)
}

fn check_level(file_name: &str, level: LevelDef) -> Result<LevelDef, ContentLoadError> {
    let problems = validate_level(&level);
    if problems.is_empty() {
        return Ok(level);
    }

    let message = problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(ContentLoadError {
        file: file_name.to_string(),
        message: format!("Invalid layout: {}", message),
    })
}
