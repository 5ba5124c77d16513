//! Mock device implementations for testing and development.
//!
//! This module provides simulated device implementations that can be controlled
//! and observed programmatically without requiring physical hardware.
//!
//! Each mock comes as a device/handle pair. The device half implements the
//! hardware trait and is handed to the controller; the handle half stays
//! with the test, which uses it to press keys and to observe actuations,
//! beeps, and rendered display frames.

pub mod buzzer;
pub mod keypad;
pub mod lcd;
pub mod servo;

// Re-export commonly used types
pub use buzzer::{Beep, MockBuzzer, MockBuzzerHandle};
pub use keypad::{MockKeypad, MockKeypadHandle};
pub use lcd::{MockLcd, MockLcdHandle};
pub use servo::{ActuationEvent, MockServo, MockServoHandle};
