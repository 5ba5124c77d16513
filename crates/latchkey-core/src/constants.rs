//! Reference configuration constants for the door-lock controller.
//!
//! This module defines the fixed values of the reference hardware build: a
//! 4x4 matrix keypad, a 16x2 character LCD, a servo-driven deadbolt and a
//! piezo buzzer. Timings, screen positions and messages reproduce the
//! behavior of that build, so an emulated session is observably identical
//! to the physical device.
//!
//! # Usage
//!
//! Constants are organized by category for easy discovery:
//!
//! ```
//! use latchkey_core::constants::*;
//! use std::time::Duration;
//!
//! // Passcode length validation
//! fn acceptable_length(len: usize) -> bool {
//!     (MIN_PASSCODE_LENGTH..=MAX_PASSCODE_LENGTH).contains(&len)
//! }
//! assert!(acceptable_length(DEFAULT_PASSCODE.len()));
//!
//! // Timing configuration
//! let debounce = Duration::from_millis(KEY_DEBOUNCE_MS);
//! assert_eq!(debounce.as_millis(), 60);
//! ```
//!
//! # Screen layout
//!
//! The entry mask occupies row [`MASK_ROW`] starting at [`MASK_START_COLUMN`]
//! and must fit the display at the longest supported passcode:
//!
//! ```
//! use latchkey_core::constants::*;
//!
//! assert!(MASK_START_COLUMN + MAX_PASSCODE_LENGTH <= DISPLAY_COLUMNS);
//! ```

// ============================================================================
// Passcode Constraints
// ============================================================================

/// Passcode of the reference build.
///
/// Used as the default configuration value and throughout the test suite.
/// Production deployments inject their own passcode at boot.
///
/// # Value: "0123"
pub const DEFAULT_PASSCODE: &str = "0123";

/// Minimum passcode length (digits).
///
/// Shorter passcodes are rejected at construction.
///
/// # Value: 4 digits
pub const MIN_PASSCODE_LENGTH: usize = 4;

/// Maximum passcode length (digits).
///
/// Bounded by the entry mask area: the mask starts at column
/// [`MASK_START_COLUMN`] and one star is drawn per digit, so the longest
/// passcode must still fit on the [`DISPLAY_COLUMNS`]-wide screen.
///
/// # Value: 8 digits
pub const MAX_PASSCODE_LENGTH: usize = 8;

// ============================================================================
// Keypad
// ============================================================================

/// The key that clears the in-progress entry.
///
/// On the reference 4x4 keypad this is the letter key `C`. Pressing it
/// resets the entry buffer and wipes the mask; every other letter key is
/// ignored.
///
/// # Value: 'C'
pub const CLEAR_KEY: char = 'C';

// ============================================================================
// Timing Configuration
// ============================================================================

/// Idle wait between keypad polls (milliseconds).
///
/// The session sleeps this long whenever a poll returns no key, keeping
/// the loop cooperative without adding perceptible input latency.
///
/// # Value: 10ms
pub const POLL_INTERVAL_MS: u64 = 10;

/// Debounce pause after a key is read (milliseconds).
///
/// Matrix keypads bounce on contact; the reference build settles for this
/// long before acting on a key.
///
/// # Value: 60ms
pub const KEY_DEBOUNCE_MS: u64 = 60;

/// Boot banner dwell (milliseconds).
///
/// How long the welcome screen stays up before the first entry prompt.
///
/// # Value: 2000ms (2 seconds)
pub const BANNER_HOLD_MS: u64 = 2000;

/// Outcome screen dwell (milliseconds).
///
/// How long the result of an evaluation (granted or rejected) stays on
/// screen before the session clears it and returns to the entry prompt.
///
/// # Value: 1500ms (1.5 seconds)
///
/// # Examples
///
/// ```
/// use latchkey_core::constants::RESULT_HOLD_MS;
/// use std::time::Duration;
///
/// let dwell = Duration::from_millis(RESULT_HOLD_MS);
/// assert_eq!(dwell.as_secs_f64(), 1.5);
/// ```
pub const RESULT_HOLD_MS: u64 = 1500;

// ============================================================================
// Buzzer Feedback
// ============================================================================

/// Tone length for a correct entry (milliseconds).
///
/// # Value: 200ms
pub const GRANT_BEEP_MS: u16 = 200;

/// Number of tones for a correct entry.
///
/// # Value: 1
pub const GRANT_BEEP_COUNT: u8 = 1;

/// Tone length for a rejected entry (milliseconds).
///
/// # Value: 150ms
pub const DENY_BEEP_MS: u16 = 150;

/// Number of tones for a rejected entry.
///
/// Played as [`DENY_BEEP_MS`] tones separated by equal-length gaps.
///
/// # Value: 3
pub const DENY_BEEP_COUNT: u8 = 3;

// ============================================================================
// Display Geometry
// ============================================================================

/// Number of display rows.
///
/// # Value: 2
pub const DISPLAY_ROWS: usize = 2;

/// Number of display columns.
///
/// # Value: 16
pub const DISPLAY_COLUMNS: usize = 16;

/// Row on which the entry mask is drawn.
///
/// # Value: 1 (the bottom row)
pub const MASK_ROW: usize = 1;

/// Column of the first mask star.
///
/// The i-th accepted digit (0-based) draws `*` at column
/// `MASK_START_COLUMN + i` on [`MASK_ROW`]; clearing the entry blanks
/// those cells.
///
/// # Value: 5
///
/// # Examples
///
/// ```
/// use latchkey_core::constants::MASK_START_COLUMN;
///
/// // Third digit accepted: star lands on column 7
/// let star_col = MASK_START_COLUMN + 2;
/// assert_eq!(star_col, 7);
/// ```
pub const MASK_START_COLUMN: usize = 5;

// ============================================================================
// Display Messages
// ============================================================================

/// Boot banner, top row (centered).
///
/// # Value: "WELCOME TO"
pub const MSG_BANNER_TOP: &str = "WELCOME TO";

/// Boot banner, bottom row (centered).
///
/// # Value: "DOOR LOCK SYSTEM"
pub const MSG_BANNER_BOTTOM: &str = "DOOR LOCK SYSTEM";

/// Entry prompt, shown on the top row while digits are collected.
///
/// # Value: "ENTER PASSWORD"
pub const MSG_PROMPT: &str = "ENTER PASSWORD";

/// Top row of both granted-outcome screens.
///
/// # Value: "CORRECT PASSWORD"
pub const MSG_CORRECT: &str = "CORRECT PASSWORD";

/// Bottom row when a correct entry opened the door.
///
/// # Value: "DOOR OPENED"
pub const MSG_DOOR_OPENED: &str = "DOOR OPENED";

/// Bottom row when a correct entry drove the door back to locked.
///
/// # Value: "DOOR LOCKED"
pub const MSG_DOOR_LOCKED: &str = "DOOR LOCKED";

/// Top row of the rejected-outcome screen.
///
/// # Value: "WRONG PASSWORD!"
pub const MSG_WRONG: &str = "WRONG PASSWORD!";

/// Bottom row of the rejected-outcome screen.
///
/// # Value: "PLEASE TRY AGAIN"
pub const MSG_TRY_AGAIN: &str = "PLEASE TRY AGAIN";
