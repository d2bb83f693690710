//! Skills, buildings, upgrade costs and derived stats.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
