//! Latchkey controller crate providing the door-lock decision engine.
//!
//! This crate contains the entry buffer, key classification, lock state
//! machine, screen layout, and the polling session that wires them to
//! keypad, servo, buzzer, and display devices.

pub mod config;
pub mod entry;
pub mod keys;
pub mod lock;
pub mod screen;
pub mod session;

pub use config::LockConfig;
pub use entry::EntryBuffer;
pub use keys::{KeyClass, classify};
pub use lock::{LockController, LockTransition};
pub use session::Session;

// Re-export the outcome type callers match on (single source of truth)
pub use latchkey_core::EntryOutcome;
