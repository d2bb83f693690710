//! Core game state, player actions and the game loop driver.

pub mod constants;
pub mod game_logic;
pub mod game_state;
pub mod tick;

pub use constants::*;
pub use game_logic::*;
pub use game_state::*;
pub use tick::*;
