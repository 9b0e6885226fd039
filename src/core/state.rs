//! Core domain: game state and system ordering for the frame loop.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Playing,
    Paused,
    GameOver,
    Won,
}

impl GameState {
    /// States a full restart can be started from.
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::GameOver | GameState::Won)
    }
}

/// Order of gameplay work inside `Update`.
///
/// Contacts are routed first so the controller and level flow see this
/// frame's ground count and flags.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum GameplaySet {
    Contacts,
    Input,
    Control,
    Flow,
}
