//! Session configuration.

use std::time::Duration;

use latchkey_core::Passcode;
use latchkey_core::constants::{BANNER_HOLD_MS, KEY_DEBOUNCE_MS, POLL_INTERVAL_MS, RESULT_HOLD_MS};

/// Configuration for a door-lock session.
///
/// All values are fixed at construction; there is no way to change the
/// passcode or the timing of a running session. The defaults reproduce
/// the reference build.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use latchkey_core::Passcode;
/// use latchkey_controller::LockConfig;
///
/// let config = LockConfig {
///     passcode: Passcode::new("31337442").unwrap(),
///     result_hold: Duration::from_millis(500),
///     ..LockConfig::default()
/// };
///
/// assert_eq!(config.passcode.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct LockConfig {
    /// The passcode that toggles the lock.
    pub passcode: Passcode,

    /// How long the session sleeps between empty keypad polls.
    pub poll_interval: Duration,

    /// Settling pause after each detected key press.
    pub key_debounce: Duration,

    /// How long the boot banner stays on screen.
    pub banner_hold: Duration,

    /// How long a result screen stays up before the next entry.
    pub result_hold: Duration,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            passcode: Passcode::default(),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            key_debounce: Duration::from_millis(KEY_DEBOUNCE_MS),
            banner_hold: Duration::from_millis(BANNER_HOLD_MS),
            result_hold: Duration::from_millis(RESULT_HOLD_MS),
        }
    }
}
