//! Common test utilities for door-lock session integration tests.
//!
//! This module provides helper functions shared across integration tests
//! for the latchkey door-lock controller.
//!
//! # Helper Philosophy
//!
//! The helpers follow a three-tier design:
//!
//! 1. **Creation helpers** (`create_session*`) - Wire a session to fresh mock devices
//! 2. **Scenario helpers** (`run_session*`) - Drive a complete session over a key sequence
//! 3. **Assertion helpers** (`assert_*`) - Check what the mock devices observed
//!
//! Most tests only need a scenario helper plus one or two assertions.
//!
//! # Usage Examples
//!
//! ```ignore
//! use latchkey_hardware::ActuatorPosition;
//!
//! #[tokio::test(start_paused = true)]
//! async fn test_correct_entry() {
//!     let mut run = common::run_session("0123").await;
//!
//!     // Boot locks the door, the correct entry opens it
//!     common::assert_actuations(
//!         &mut run.servo,
//!         &[ActuatorPosition::Locked, ActuatorPosition::Open],
//!     );
//!     common::assert_beeps(&mut run.buzzer, &[common::grant_beep()]);
//! }
//! ```
//!
//! # Determinism
//!
//! Scenario helpers queue every key up front and then drop the keypad
//! handle. The mock keypad delivers all queued keys before reporting the
//! disconnect, so the session processes the whole sequence and returns,
//! with no timing races. Run scenario tests under
//! `#[tokio::test(start_paused = true)]` so the banner hold and result
//! dwell auto-advance instead of sleeping for real.

use latchkey_controller::{LockConfig, Session};
use latchkey_core::constants::{DENY_BEEP_COUNT, DENY_BEEP_MS, GRANT_BEEP_COUNT, GRANT_BEEP_MS};
use latchkey_hardware::{
    ActuatorPosition, Beep, MockBuzzer, MockBuzzerHandle, MockKeypad, MockKeypadHandle, MockLcd,
    MockLcdHandle, MockServo, MockServoHandle,
};

/// A session wired entirely to mock devices.
pub type MockSession = Session<MockKeypad, MockServo, MockBuzzer, MockLcd>;

/// Observation handles for every device attached to a fresh session.
///
/// Tests that drive the session interactively hold on to `keypad` and
/// press keys while the session runs; dropping it is what ends the
/// session.
pub struct DeviceHandles {
    pub keypad: MockKeypadHandle,
    pub servo: MockServoHandle,
    pub buzzer: MockBuzzerHandle,
    pub lcd: MockLcdHandle,
}

/// What the output devices observed over a completed session run.
///
/// The keypad handle is consumed by the scenario helpers, so only output
/// devices appear here.
pub struct SessionObservers {
    pub servo: MockServoHandle,
    pub buzzer: MockBuzzerHandle,
    pub lcd: MockLcdHandle,
}

/// Create a session wired to mock devices with the default config.
///
/// The default config uses the reference passcode `"0123"` and the
/// reference timings. Nothing runs until the caller awaits
/// `session.run()`.
pub fn create_session() -> (MockSession, DeviceHandles) {
    create_session_with_config(LockConfig::default())
}

/// Create a session wired to mock devices with a custom config.
///
/// # Examples
///
/// ```ignore
/// let mut config = LockConfig::default();
/// config.passcode = Passcode::new("98765").expect("valid passcode");
/// let (session, handles) = common::create_session_with_config(config);
/// ```
pub fn create_session_with_config(config: LockConfig) -> (MockSession, DeviceHandles) {
    let (keypad, keypad_handle) = MockKeypad::new();
    let (servo, servo_handle) = MockServo::new();
    let (buzzer, buzzer_handle) = MockBuzzer::new();
    let (lcd, lcd_handle) = MockLcd::new();

    let session = Session::new(config, keypad, servo, buzzer, lcd);
    let handles = DeviceHandles {
        keypad: keypad_handle,
        servo: servo_handle,
        buzzer: buzzer_handle,
        lcd: lcd_handle,
    };

    (session, handles)
}

/// Run a complete session over a key sequence with the default config.
///
/// See [`run_session_with_config`] for the mechanics.
pub async fn run_session(keys: &str) -> SessionObservers {
    run_session_with_config(keys, LockConfig::default()).await
}

/// Run a complete session over a key sequence and return what the
/// output devices observed.
///
/// Queues every key in `keys` (`'0'`-`'9'`, `'A'`-`'D'`, `'*'`, `'#'`),
/// drops the keypad handle, and awaits the session until it drains the
/// queue and sees the disconnect.
///
/// # Panics
///
/// Panics if the key sequence contains a character that is not on the
/// keypad, or if the session ends with a hardware error instead of the
/// clean keypad-disconnect shutdown.
pub async fn run_session_with_config(keys: &str, config: LockConfig) -> SessionObservers {
    let (session, handles) = create_session_with_config(config);
    let DeviceHandles {
        keypad,
        servo,
        buzzer,
        lcd,
    } = handles;

    keypad
        .press_sequence(keys)
        .await
        .expect("Test helper: mock keypad rejected key sequence");
    drop(keypad);

    session
        .run()
        .await
        .expect("Test helper: session ended with a hardware error");

    SessionObservers { servo, buzzer, lcd }
}

/// Assert the exact actuation sequence the servo received.
///
/// Drains the servo handle, so each test calls this once.
pub fn assert_actuations(servo: &mut MockServoHandle, expected: &[ActuatorPosition]) {
    assert_eq!(
        servo.drain_positions(),
        expected,
        "Servo: actuation sequence mismatch"
    );
}

/// Assert the exact beep patterns the buzzer received.
///
/// Drains the buzzer handle, so each test calls this once.
pub fn assert_beeps(buzzer: &mut MockBuzzerHandle, expected: &[Beep]) {
    assert_eq!(
        buzzer.drain_beeps(),
        expected,
        "Buzzer: beep sequence mismatch"
    );
}

/// Assert the display shows a fresh entry prompt.
///
/// A fresh prompt is the centered `ENTER PASSWORD` line on top and a
/// blank entry row below it. This is the screen every completed entry
/// and every clear returns to.
pub fn assert_prompt_screen(lcd: &MockLcdHandle) {
    assert_eq!(
        lcd.line(0),
        Some(" ENTER PASSWORD ".to_string()),
        "Display: top row is not the entry prompt"
    );
    assert_eq!(
        lcd.line(1),
        Some(blank_row()),
        "Display: entry row is not blank"
    );
}

/// Route session logs to the test output.
///
/// Call at the top of a test and run with `--nocapture` to see what the
/// session logged. Honors `RUST_LOG`; falls back to `debug`. Safe to
/// call from several tests, only the first call installs the
/// subscriber.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// The beep pattern played for a correct entry.
pub fn grant_beep() -> Beep {
    Beep {
        duration_ms: GRANT_BEEP_MS,
        count: GRANT_BEEP_COUNT,
    }
}

/// The beep pattern played for an incorrect entry.
pub fn deny_beep() -> Beep {
    Beep {
        duration_ms: DENY_BEEP_MS,
        count: DENY_BEEP_COUNT,
    }
}

/// A blank 16-column display row.
pub fn blank_row() -> String {
    " ".repeat(16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use latchkey_core::LockState;

    #[test]
    fn test_create_session_starts_locked() {
        let (session, _handles) = create_session();
        assert_eq!(session.controller().state(), LockState::Locked);
    }

    #[test]
    fn test_beep_patterns_match_reference_feedback() {
        assert_eq!(
            grant_beep(),
            Beep {
                duration_ms: 200,
                count: 1,
            }
        );
        assert_eq!(
            deny_beep(),
            Beep {
                duration_ms: 150,
                count: 3,
            }
        );
    }

    #[test]
    fn test_blank_row_spans_display() {
        assert_eq!(blank_row().len(), 16);
        assert!(blank_row().chars().all(|c| c == ' '));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_session_with_no_keys_boots_and_stops() {
        init_tracing();
        let mut run = run_session("").await;

        assert_actuations(&mut run.servo, &[ActuatorPosition::Locked]);
        assert_beeps(&mut run.buzzer, &[]);
        assert_prompt_screen(&run.lcd);
    }
}
