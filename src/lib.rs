//! Ink Blade - terminal incremental wuxia RPG library
//!
//! This module exposes the game engine for testing and external use.

pub mod art;
pub mod combat;
pub mod config;
pub mod core;
pub mod economy;
pub mod i18n;
pub mod items;

pub use crate::core::constants::*;
pub use crate::core::game_state::{GameState, PlayerStats};
