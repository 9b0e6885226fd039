//! Core domain: run-wide player progress.

use bevy::prelude::*;

pub const DEFAULT_LIVES: u32 = 3;

/// Lives and coins for one run. Reset only by a full restart.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PlayerSession {
    lives: u32,
    coins: u32,
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new(DEFAULT_LIVES)
    }
}

impl PlayerSession {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            lives: starting_lives,
            coins: 0,
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Removes one life, never going below zero. Returns the lives left.
    pub fn lose_life(&mut self) -> u32 {
        self.lives = self.lives.saturating_sub(1);
        self.lives
    }

    pub fn collect_coin(&mut self) -> u32 {
        self.coins += 1;
        self.coins
    }

    /// Start a new run with the given life count.
    pub fn reset(&mut self, starting_lives: u32) {
        *self = Self::new(starting_lives);
    }
}
