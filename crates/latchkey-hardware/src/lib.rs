//! Hardware device abstraction layer for the Latchkey door-lock controller.
//!
//! This crate provides trait-based abstractions for the door-lock peripherals:
//! the matrix keypad, the servo-driven lock actuator, the feedback buzzer, and
//! the character display. These traits enable polymorphic behavior and easy
//! substitution between mock implementations (for development and testing) and
//! real hardware drivers.
//!
//! # Design Philosophy
//!
//! The hardware abstraction layer is designed with the following principles:
//!
//! - **Async-first**: All I/O operations are asynchronous using native `async fn`
//!   in traits (Rust 1.90 + Edition 2024 RPITIT).
//! - **Generics-based**: The traits are not object-safe; implementations are
//!   injected through generic type parameters for zero-cost static dispatch.
//! - **Thread-safe**: All traits require `Send + Sync` for use with Tokio.
//! - **Error-aware**: All operations return `Result<T>` with detailed error information.
//!
//! # Device Traits
//!
//! The crate defines four device traits, one per peripheral:
//!
//! ## Keypads
//!
//! The [`KeypadDevice`] trait represents the matrix keypad the user types on.
//! Keypads are polled rather than awaited, matching how a real matrix scan
//! works:
//!
//! ```no_run
//! use latchkey_hardware::traits::{KeyPress, KeypadDevice};
//! use latchkey_hardware::error::Result;
//!
//! async fn count_digits<K: KeypadDevice>(keypad: &mut K) -> Result<usize> {
//!     let mut digits = 0;
//!
//!     while let Some(key) = keypad.poll_key().await? {
//!         if key.is_digit() {
//!             digits += 1;
//!         }
//!     }
//!
//!     Ok(digits)
//! }
//! ```
//!
//! ## Lock Actuators
//!
//! The [`LockActuator`] trait represents the mechanism that throws the
//! deadbolt:
//!
//! ```no_run
//! use latchkey_hardware::traits::LockActuator;
//! use latchkey_hardware::types::ActuatorPosition;
//! use latchkey_hardware::error::Result;
//!
//! async fn secure<A: LockActuator>(actuator: &mut A) -> Result<()> {
//!     actuator.actuate(ActuatorPosition::Locked).await
//! }
//! ```
//!
//! ## Buzzers and Displays
//!
//! The [`BuzzerDevice`] and [`DisplayDevice`] traits cover the feedback
//! peripherals:
//!
//! ```no_run
//! use latchkey_hardware::traits::{BuzzerDevice, DisplayDevice};
//! use latchkey_hardware::error::Result;
//!
//! async fn announce<B: BuzzerDevice, D: DisplayDevice>(
//!     buzzer: &mut B,
//!     display: &mut D,
//! ) -> Result<()> {
//!     buzzer.beep(200, 1).await?;
//!     display.show_line(0, "DOOR OPENED").await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`Result<T>`][error::Result] which uses the
//! [`HardwareError`] error type. This provides detailed context about hardware
//! failures including disconnections, timeouts, and communication errors.
//!
//! # Mock Implementations
//!
//! The [`mock`] module provides a mock for every trait, each as a
//! device/handle pair: the device half goes to the controller, the handle
//! half stays with the test to drive input and observe output.
//!
//! [`KeypadDevice`]: traits::KeypadDevice
//! [`LockActuator`]: traits::LockActuator
//! [`BuzzerDevice`]: traits::BuzzerDevice
//! [`DisplayDevice`]: traits::DisplayDevice

pub mod error;
pub mod mock;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{HardwareError, Result};
pub use traits::{BuzzerDevice, DisplayDevice, KeyPress, KeypadDevice, LockActuator};
pub use types::{ActuatorPosition, DeviceInfo};

// Re-export mock device/handle pairs
pub use mock::{
    ActuationEvent, Beep, MockBuzzer, MockBuzzerHandle, MockKeypad, MockKeypadHandle, MockLcd,
    MockLcdHandle, MockServo, MockServoHandle,
};
