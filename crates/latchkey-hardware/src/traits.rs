//! Hardware device trait definitions.
//!
//! This module defines trait interfaces for the door-lock peripherals:
//! keypad, lock actuator, buzzer, and character display. These traits
//! establish the contract between the controller and its devices, enabling
//! polymorphic behavior and easy substitution between mock and real
//! hardware implementations.
//!
//! All traits use native `async fn` methods (Rust 1.90 + Edition 2024 RPITIT),
//! eliminating the need for the `async_trait` macro.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::types::{ActuatorPosition, DeviceInfo};

/// One key of the reference 4x4 matrix keypad.
///
/// The symbol alphabet is the sixteen keys of the reference layout:
/// digits `0`-`9`, letters `A`-`D`, star and hash. What a key *means*
/// (digit, clear command, ignored) is decided by the controller, not
/// here; this type only identifies which key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeyPress {
    /// Numeric digit key (0-9).
    Digit(u8),

    /// Letter key (A-D).
    Letter(char),

    /// Star key (*).
    Star,

    /// Hash/pound key (#).
    Hash,
}

impl KeyPress {
    /// Create a digit key press.
    ///
    /// # Errors
    ///
    /// Returns an error if the digit is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::traits::KeyPress;
    ///
    /// let key = KeyPress::digit(5).unwrap();
    /// assert_eq!(key.as_digit(), Some(5));
    ///
    /// assert!(KeyPress::digit(10).is_err());
    /// ```
    pub fn digit(d: u8) -> Result<Self> {
        if d > 9 {
            return Err(crate::error::HardwareError::invalid_data(format!(
                "Digit must be 0-9, got {}",
                d
            )));
        }
        Ok(Self::Digit(d))
    }

    /// Create a letter key press.
    ///
    /// Lowercase input is normalized to uppercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the letter is not in the range A-D.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::traits::KeyPress;
    ///
    /// let key = KeyPress::letter('c').unwrap();
    /// assert_eq!(key, KeyPress::Letter('C'));
    ///
    /// assert!(KeyPress::letter('E').is_err());
    /// ```
    pub fn letter(c: char) -> Result<Self> {
        let c = c.to_ascii_uppercase();
        if !('A'..='D').contains(&c) {
            return Err(crate::error::HardwareError::invalid_data(format!(
                "Letter key must be A-D, got '{}'",
                c
            )));
        }
        Ok(Self::Letter(c))
    }

    /// Parse a key press from its character on the keypad legend.
    ///
    /// Accepts the full symbol alphabet: `0`-`9`, `A`-`D` (either case),
    /// `*` and `#`.
    ///
    /// # Errors
    ///
    /// Returns an error for any character not on the keypad.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::traits::KeyPress;
    ///
    /// assert_eq!(KeyPress::from_char('7').unwrap(), KeyPress::Digit(7));
    /// assert_eq!(KeyPress::from_char('c').unwrap(), KeyPress::Letter('C'));
    /// assert_eq!(KeyPress::from_char('*').unwrap(), KeyPress::Star);
    /// assert!(KeyPress::from_char('x').is_err());
    /// ```
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '0'..='9' => Ok(Self::Digit(c as u8 - b'0')),
            'A'..='D' | 'a'..='d' => Ok(Self::Letter(c.to_ascii_uppercase())),
            '*' => Ok(Self::Star),
            '#' => Ok(Self::Hash),
            _ => Err(crate::error::HardwareError::invalid_data(format!(
                "'{}' is not on the keypad",
                c
            ))),
        }
    }

    /// The character printed on this key.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::traits::KeyPress;
    ///
    /// assert_eq!(KeyPress::Digit(3).to_char(), '3');
    /// assert_eq!(KeyPress::Letter('C').to_char(), 'C');
    /// assert_eq!(KeyPress::Hash.to_char(), '#');
    /// ```
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Digit(d) => {
                debug_assert!(d <= 9, "Digit must be 0-9");
                char::from(b'0' + d)
            }
            Self::Letter(c) => c,
            Self::Star => '*',
            Self::Hash => '#',
        }
    }

    /// Check if this key is a digit.
    #[must_use]
    pub fn is_digit(&self) -> bool {
        matches!(self, Self::Digit(_))
    }

    /// Get the digit value if this is a digit key.
    #[must_use]
    pub fn as_digit(&self) -> Option<u8> {
        match self {
            Self::Digit(d) => Some(*d),
            _ => None,
        }
    }
}

/// Keypad device abstraction.
///
/// Represents the matrix keypad the user types on. The keypad is polled:
/// at most one key is reported per poll, and polls between keypresses
/// report nothing.
///
/// # Object Safety and Dynamic Dispatch
///
/// **NOTE**: This trait is NOT object-safe because `async fn` methods return
/// `impl Future`, which is an opaque type that cannot be used in trait objects
/// (Edition 2024 RPITIT). You cannot use `Box<dyn KeypadDevice>` or
/// `&dyn KeypadDevice`. Inject implementations through generic type
/// parameters instead:
///
/// ```no_run
/// use latchkey_hardware::traits::{KeyPress, KeypadDevice};
/// use latchkey_hardware::error::Result;
///
/// async fn next_key<K: KeypadDevice>(keypad: &mut K) -> Result<Option<KeyPress>> {
///     keypad.poll_key().await
/// }
/// ```
///
/// This provides zero-cost abstraction through compile-time monomorphization
/// while keeping mock and real hardware interchangeable.
pub trait KeypadDevice: Send + Sync {
    /// Poll for a key pressed since the last call.
    ///
    /// Returns `Ok(None)` when no key has been pressed; this is the idle
    /// case, not an error. Each pressed key is reported exactly once.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The device is disconnected
    /// - A communication error occurs
    async fn poll_key(&mut self) -> Result<Option<KeyPress>>;

    /// Get device information.
    ///
    /// Returns metadata about the keypad device including name, model,
    /// and optional firmware version.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while querying
    /// device information.
    async fn get_info(&self) -> Result<DeviceInfo>;
}

/// Lock actuator abstraction.
///
/// Represents the mechanism that physically locks and unlocks the door
/// (a servo-driven deadbolt in the reference build). Actuation is
/// fire-and-forget: no position feedback or confirmation is modeled.
///
/// # Object Safety and Dynamic Dispatch
///
/// **NOTE**: This trait is NOT object-safe (Edition 2024 RPITIT). For
/// generic type parameters, see [`KeypadDevice`] documentation.
pub trait LockActuator: Send + Sync {
    /// Drive the mechanism to the given position.
    ///
    /// Driving to the position the mechanism already holds is harmless;
    /// the boot sequence relies on this to reach a known locked state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The device is disconnected
    /// - A communication error occurs
    async fn actuate(&mut self, position: ActuatorPosition) -> Result<()>;

    /// Get device information.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while querying
    /// device information.
    async fn get_info(&self) -> Result<DeviceInfo>;
}

/// Buzzer device abstraction.
///
/// Represents the piezo buzzer used for audible feedback. Patterns are
/// fire-and-forget: the device plays them on its own; callers that need
/// to wait out a pattern (the session feedback sequence does) time the
/// pause themselves.
///
/// # Object Safety and Dynamic Dispatch
///
/// **NOTE**: This trait is NOT object-safe (Edition 2024 RPITIT). For
/// generic type parameters, see [`KeypadDevice`] documentation.
pub trait BuzzerDevice: Send + Sync {
    /// Play a beep pattern.
    ///
    /// Plays `count` tones of `duration_ms` milliseconds each, separated
    /// by equal-length silent gaps. A `count` of 1 is a single tone.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The device is disconnected
    /// - A communication error occurs
    async fn beep(&mut self, duration_ms: u16, count: u8) -> Result<()>;

    /// Get device information.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while querying
    /// device information.
    async fn get_info(&self) -> Result<DeviceInfo>;
}

/// Character display abstraction.
///
/// Represents a small character LCD (16x2 in the reference build). The
/// display is purely presentational; nothing in the lock logic depends
/// on it for correctness.
///
/// # Object Safety and Dynamic Dispatch
///
/// **NOTE**: This trait is NOT object-safe (Edition 2024 RPITIT). For
/// generic type parameters, see [`KeypadDevice`] documentation.
pub trait DisplayDevice: Send + Sync {
    /// Replace the contents of one row.
    ///
    /// The text is written from column 0; shorter text is padded with
    /// spaces to the full width and longer text is truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The row is outside the display
    /// - A communication error occurs
    async fn show_line(&mut self, row: usize, text: &str) -> Result<()>;

    /// Write a single character at the given cell.
    ///
    /// The rest of the row is left untouched; this is how the entry mask
    /// draws and erases individual stars.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The row or column is outside the display
    /// - A communication error occurs
    async fn show_char(&mut self, row: usize, col: usize, ch: char) -> Result<()>;

    /// Blank the whole display.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs.
    async fn clear(&mut self) -> Result<()>;

    /// Get device information.
    ///
    /// # Errors
    ///
    /// Returns an error if a communication error occurs while querying
    /// device information.
    async fn get_info(&self) -> Result<DeviceInfo>;
}
