//! Validation for level layouts.

use super::data::{LevelDef, RectDef};

/// A layout problem with the element it was found on.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutError {
    pub element: &'static str,
    pub index: usize,
    pub problem: String,
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}: {}", self.element, self.index, self.problem)
    }
}

fn check_rect(errors: &mut Vec<LayoutError>, element: &'static str, index: usize, rect: &RectDef) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        errors.push(LayoutError {
            element,
            index,
            problem: format!("non-positive size {}x{}", rect.width, rect.height),
        });
    }
}

/// Check a level for geometry the physics engine cannot build.
/// Returns a list of problems, empty if the layout is usable.
pub fn validate_level(level: &LevelDef) -> Vec<LayoutError> {
    let mut errors = Vec::new();

    if level.platforms.is_empty() {
        errors.push(LayoutError {
            element: "Level",
            index: 0,
            problem: "no platforms".to_string(),
        });
    }

    for (index, platform) in level.platforms.iter().enumerate() {
        if platform.points.len() < 2 {
            errors.push(LayoutError {
                element: "Platform",
                index,
                problem: format!("needs at least 2 points, found {}", platform.points.len()),
            });
        }
    }

    for (index, rect) in level.death_zones.iter().enumerate() {
        check_rect(&mut errors, "DeathZone", index, rect);
    }
    for (index, rect) in level.hazards.iter().enumerate() {
        check_rect(&mut errors, "Hazard", index, rect);
    }
    check_rect(&mut errors, "Door", 0, &level.door);

    let spawn = level.spawn_point();
    if !spawn.is_finite() {
        errors.push(LayoutError {
            element: "PlayerSpawn",
            index: 0,
            problem: format!("not a finite point: {:?}", level.player_spawn),
        });
    }

    errors
}
