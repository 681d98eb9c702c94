//! Public runtime API surface.
//!
//! Gathers the error types exposed to consumers so session code can stay
//! focused on orchestration.

pub mod errors;

pub use errors::{Result, RuntimeError};
