//! Item system: types, the static pool, the shop and synthesis.

pub mod pool;
pub mod shop;
pub mod synthesis;
pub mod types;

pub use pool::*;
pub use shop::*;
pub use synthesis::*;
pub use types::*;
