//! Enemy types, the encounter state machine and damage resolution.

pub mod encounter;
pub mod logic;
pub mod types;

pub use encounter::*;
pub use logic::*;
pub use types::*;
