//! Request extractors: per-request book session and validated JSON bodies.

pub mod json;
pub mod session;
pub use json::ValidJson;
pub use session::BookSession;
