//! Player domain: system modules for input and controller updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::read_input;
pub(crate) use movement::{apply_player_input, sync_player_sprite, update_player};
