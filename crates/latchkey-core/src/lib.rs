//! Core types shared across the latchkey workspace.
//!
//! Domain types (passcode, lock state, entry outcome), the reference
//! configuration constants, and the common error type.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
