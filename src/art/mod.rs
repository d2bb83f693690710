//! Ink-wash art for game entities, painted by an external image service.

pub mod gemini;
pub mod studio;
pub mod types;

pub use gemini::*;
pub use studio::*;
pub use types::*;
