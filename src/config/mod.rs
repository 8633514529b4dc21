//! Server configuration read from the environment.

pub mod loader;
pub mod types;

pub use types::*;
