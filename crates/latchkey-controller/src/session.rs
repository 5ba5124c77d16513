//! The door-lock session loop.
//!
//! This module owns the runtime behavior of the lock: one cooperative
//! task that polls the keypad, feeds digits through classification into
//! the entry buffer, and on each completed entry runs the evaluation
//! sequence, beep, actuate, result screen, dwell, as a single
//! uninterruptible unit. Keys pressed during the sequence queue up in
//! the keypad and are consumed once it finishes.
//!
//! The session ends cleanly when the keypad disconnects; any other
//! hardware failure aborts it with an error.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, trace, warn};

use latchkey_core::constants::{DENY_BEEP_COUNT, DENY_BEEP_MS, GRANT_BEEP_COUNT, GRANT_BEEP_MS};
use latchkey_core::{EntryOutcome, Error, Result};
use latchkey_hardware::{
    ActuatorPosition, BuzzerDevice, DisplayDevice, HardwareError, KeyPress, KeypadDevice,
    LockActuator,
};

use crate::config::LockConfig;
use crate::entry::EntryBuffer;
use crate::keys::{KeyClass, classify};
use crate::lock::LockController;
use crate::screen;

/// Bridge a device failure into the session's error type.
fn hardware_error(err: HardwareError) -> Error {
    Error::Hardware(err.to_string())
}

/// Wall-clock length of a beep pattern.
///
/// A pattern is `count` tones of `duration_ms` separated by equal-length
/// gaps, so it spans `2 * count - 1` segments.
fn beep_pattern_duration(duration_ms: u16, count: u8) -> Duration {
    let segments = (2 * u64::from(count)).saturating_sub(1);
    Duration::from_millis(segments * u64::from(duration_ms))
}

/// A running door-lock controller wired to its four peripherals.
///
/// The session owns the devices, the lock controller, and the entry
/// buffer. Construct it with [`Session::new`] and drive it with
/// [`Session::run`], which loops until the keypad disconnects.
///
/// Devices are injected as generic parameters, so the same session runs
/// against mocks in tests and real drivers in production.
///
/// # Examples
///
/// ```no_run
/// use latchkey_controller::{LockConfig, Session};
/// use latchkey_hardware::{MockBuzzer, MockKeypad, MockLcd, MockServo};
///
/// #[tokio::main]
/// async fn main() {
///     let (keypad, keys) = MockKeypad::new();
///     let (servo, _servo_events) = MockServo::new();
///     let (buzzer, _beeps) = MockBuzzer::new();
///     let (lcd, _frames) = MockLcd::new();
///
///     let session = Session::new(LockConfig::default(), keypad, servo, buzzer, lcd);
///     let running = tokio::spawn(session.run());
///
///     // Type the passcode, then walk away
///     keys.press_sequence("0123").await.expect("keypad detached");
///     drop(keys);
///
///     running.await.expect("session task panicked").expect("hardware failure");
/// }
/// ```
pub struct Session<K, A, B, D> {
    config: LockConfig,
    keypad: K,
    actuator: A,
    buzzer: B,
    display: D,
    controller: LockController,
    entry: EntryBuffer,
}

impl<K, A, B, D> Session<K, A, B, D>
where
    K: KeypadDevice,
    A: LockActuator,
    B: BuzzerDevice,
    D: DisplayDevice,
{
    /// Wire a new session to its peripherals.
    ///
    /// The lock starts `Locked` and the entry buffer is sized to the
    /// configured passcode. Nothing touches the hardware until
    /// [`run`](Session::run).
    pub fn new(config: LockConfig, keypad: K, actuator: A, buzzer: B, display: D) -> Self {
        let controller = LockController::new(config.passcode.clone());
        let entry = EntryBuffer::for_passcode(&config.passcode);

        Self {
            config,
            keypad,
            actuator,
            buzzer,
            display,
            controller,
            entry,
        }
    }

    /// Get the lock decision engine.
    ///
    /// Useful for inspecting the lock state and transition history
    /// before handing the session to [`run`](Session::run).
    pub fn controller(&self) -> &LockController {
        &self.controller
    }

    /// Run the session until the keypad disconnects.
    ///
    /// Boots the hardware into a known state, then polls for keys and
    /// reacts to them. Returns `Ok(())` on keypad disconnect, which is
    /// the normal way to stop a session.
    ///
    /// # Errors
    ///
    /// Returns `Error::Hardware` if any device other than a
    /// disconnecting keypad reports a failure.
    pub async fn run(mut self) -> Result<()> {
        info!(
            passcode_len = self.config.passcode.len(),
            "Door-lock session starting"
        );
        self.log_devices().await;

        self.boot().await?;

        loop {
            match self.keypad.poll_key().await {
                Ok(Some(key)) => {
                    sleep(self.config.key_debounce).await;
                    self.handle_key(key).await?;
                }
                Ok(None) => sleep(self.config.poll_interval).await,
                Err(err) if err.is_disconnected() => {
                    info!("Keypad disconnected, session ending");
                    return Ok(());
                }
                Err(err) => return Err(hardware_error(err)),
            }
        }
    }

    /// Log attached device metadata.
    ///
    /// Metadata is informational; a failed query never blocks boot.
    async fn log_devices(&self) {
        if let Ok(device) = self.keypad.get_info().await {
            debug!(device = %device.name, "Keypad attached");
        }
        if let Ok(device) = self.actuator.get_info().await {
            debug!(device = %device.name, "Actuator attached");
        }
        if let Ok(device) = self.buzzer.get_info().await {
            debug!(device = %device.name, "Buzzer attached");
        }
        if let Ok(device) = self.display.get_info().await {
            debug!(device = %device.name, "Display attached");
        }
    }

    /// Drive the hardware into its boot state.
    ///
    /// The mechanism reaches the locked position before anything is
    /// shown; the banner then holds for the configured time before the
    /// first prompt appears.
    async fn boot(&mut self) -> Result<()> {
        self.actuator
            .actuate(ActuatorPosition::Locked)
            .await
            .map_err(hardware_error)?;

        screen::render_banner(&mut self.display)
            .await
            .map_err(hardware_error)?;
        sleep(self.config.banner_hold).await;

        self.display.clear().await.map_err(hardware_error)?;
        screen::render_prompt(&mut self.display)
            .await
            .map_err(hardware_error)?;

        Ok(())
    }

    /// React to one debounced key press.
    async fn handle_key(&mut self, key: KeyPress) -> Result<()> {
        match classify(key) {
            KeyClass::Digit(digit) => self.handle_digit(digit).await,
            KeyClass::Clear => self.restart_entry().await,
            KeyClass::Ignored => {
                trace!(key = %key.to_char(), "Ignored key");
                Ok(())
            }
        }
    }

    /// Record a digit and evaluate the entry once it is complete.
    ///
    /// The digit value is never logged or displayed; only the count of
    /// typed digits and a masking star leave the buffer.
    async fn handle_digit(&mut self, digit: char) -> Result<()> {
        if self.entry.push(digit) {
            debug!(typed = self.entry.len(), "Digit recorded");
            screen::render_mask_star(&mut self.display, self.entry.len() - 1)
                .await
                .map_err(hardware_error)?;
        }

        if self.entry.is_full() {
            self.evaluate_entry().await?;
        }

        Ok(())
    }

    /// Throw away the current entry and show a fresh prompt.
    async fn restart_entry(&mut self) -> Result<()> {
        debug!(discarded = self.entry.len(), "Entry cleared");
        self.entry.reset();

        self.display.clear().await.map_err(hardware_error)?;
        screen::render_prompt(&mut self.display)
            .await
            .map_err(hardware_error)?;

        Ok(())
    }

    /// Run the full evaluation sequence for a completed entry.
    ///
    /// Decision, beep, actuation, result screen, and dwell happen as one
    /// uninterruptible unit; the keypad is not polled again until the
    /// fresh prompt is up.
    async fn evaluate_entry(&mut self) -> Result<()> {
        self.display.clear().await.map_err(hardware_error)?;

        let outcome = self.controller.evaluate(self.entry.digits());

        match outcome {
            EntryOutcome::Opened => {
                info!("Correct entry, door opened");
                self.feedback_beep(GRANT_BEEP_MS, GRANT_BEEP_COUNT).await?;
                self.actuator
                    .actuate(ActuatorPosition::Open)
                    .await
                    .map_err(hardware_error)?;
            }
            EntryOutcome::Relocked => {
                info!("Correct entry, door relocked");
                self.feedback_beep(GRANT_BEEP_MS, GRANT_BEEP_COUNT).await?;
                self.actuator
                    .actuate(ActuatorPosition::Locked)
                    .await
                    .map_err(hardware_error)?;
            }
            EntryOutcome::Rejected => {
                warn!("Incorrect entry, lock state unchanged");
                self.feedback_beep(DENY_BEEP_MS, DENY_BEEP_COUNT).await?;
            }
        }

        screen::render_outcome(&mut self.display, outcome)
            .await
            .map_err(hardware_error)?;
        sleep(self.config.result_hold).await;

        self.display.clear().await.map_err(hardware_error)?;
        self.entry.reset();
        screen::render_prompt(&mut self.display)
            .await
            .map_err(hardware_error)?;

        Ok(())
    }

    /// Play a beep pattern and wait it out.
    ///
    /// The buzzer plays on its own; the session sleeps for the pattern
    /// length so the rest of the sequence stays behind the audio.
    async fn feedback_beep(&mut self, duration_ms: u16, count: u8) -> Result<()> {
        self.buzzer
            .beep(duration_ms, count)
            .await
            .map_err(hardware_error)?;
        sleep(beep_pattern_duration(duration_ms, count)).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latchkey_core::LockState;
    use latchkey_hardware::{
        Beep, MockBuzzer, MockBuzzerHandle, MockKeypad, MockKeypadHandle, MockLcd, MockLcdHandle,
        MockServo, MockServoHandle,
    };
    use rstest::rstest;

    type MockSession = Session<MockKeypad, MockServo, MockBuzzer, MockLcd>;

    fn session() -> (
        MockSession,
        MockKeypadHandle,
        MockServoHandle,
        MockBuzzerHandle,
        MockLcdHandle,
    ) {
        let (keypad, keys) = MockKeypad::new();
        let (servo, servo_events) = MockServo::new();
        let (buzzer, beeps) = MockBuzzer::new();
        let (lcd, frames) = MockLcd::new();

        let session = Session::new(LockConfig::default(), keypad, servo, buzzer, lcd);
        (session, keys, servo_events, beeps, frames)
    }

    #[rstest]
    #[case(200, 1, 200)]
    #[case(150, 3, 750)]
    #[case(100, 2, 300)]
    #[case(500, 0, 0)]
    fn test_beep_pattern_duration(#[case] duration_ms: u16, #[case] count: u8, #[case] total: u64) {
        assert_eq!(
            beep_pattern_duration(duration_ms, count),
            Duration::from_millis(total)
        );
    }

    #[test]
    fn test_new_session_starts_locked() {
        let (session, _keys, _servo, _beeps, _frames) = session();

        assert_eq!(session.controller().state(), LockState::Locked);
        assert!(session.controller().history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_boot_locks_door_before_prompt() {
        let (mut session, _keys, mut servo, _beeps, frames) = session();

        session.boot().await.unwrap();

        assert_eq!(servo.drain_positions(), vec![ActuatorPosition::Locked]);
        assert_eq!(frames.line(0), Some(" ENTER PASSWORD ".to_string()));
        assert_eq!(frames.line(1), Some(" ".repeat(16)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_digits_render_masking_stars() {
        let (mut session, _keys, _servo, _beeps, frames) = session();
        session.boot().await.unwrap();

        session.handle_key(KeyPress::Digit(0)).await.unwrap();
        session.handle_key(KeyPress::Digit(1)).await.unwrap();

        assert_eq!(frames.line(1), Some("     **         ".to_string()));
        // The digits themselves never reach the display
        assert!(!frames.snapshot().join("").contains('0'));
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_entry_opens_door() {
        let (mut session, _keys, mut servo, mut beeps, frames) = session();
        session.boot().await.unwrap();
        servo.drain_positions();

        for digit in [0, 1, 2, 3] {
            session.handle_key(KeyPress::Digit(digit)).await.unwrap();
        }

        assert_eq!(session.controller.state(), LockState::Unlocked);
        assert_eq!(servo.drain_positions(), vec![ActuatorPosition::Open]);
        assert_eq!(
            beeps.drain_beeps(),
            vec![Beep {
                duration_ms: 200,
                count: 1,
            }]
        );
        // Sequence ends back at a fresh prompt
        assert_eq!(frames.line(0), Some(" ENTER PASSWORD ".to_string()));
        assert_eq!(frames.line(1), Some(" ".repeat(16)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_correct_entry_relocks_door() {
        let (mut session, _keys, mut servo, _beeps, _frames) = session();
        session.boot().await.unwrap();
        servo.drain_positions();

        for digit in [0, 1, 2, 3, 0, 1, 2, 3] {
            session.handle_key(KeyPress::Digit(digit)).await.unwrap();
        }

        assert_eq!(session.controller.state(), LockState::Locked);
        assert_eq!(
            servo.drain_positions(),
            vec![ActuatorPosition::Open, ActuatorPosition::Locked]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_entry_beeps_without_actuating() {
        let (mut session, _keys, mut servo, mut beeps, _frames) = session();
        session.boot().await.unwrap();
        servo.drain_positions();

        for digit in [0, 1, 2, 9] {
            session.handle_key(KeyPress::Digit(digit)).await.unwrap();
        }

        assert_eq!(session.controller.state(), LockState::Locked);
        assert_eq!(servo.drain_positions(), vec![]);
        assert_eq!(
            beeps.drain_beeps(),
            vec![Beep {
                duration_ms: 150,
                count: 3,
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_key_restarts_entry() {
        let (mut session, _keys, _servo, _beeps, frames) = session();
        session.boot().await.unwrap();

        session.handle_key(KeyPress::Digit(0)).await.unwrap();
        session.handle_key(KeyPress::Digit(1)).await.unwrap();
        session.handle_key(KeyPress::Letter('C')).await.unwrap();

        assert!(session.entry.is_empty());
        assert_eq!(frames.line(0), Some(" ENTER PASSWORD ".to_string()));
        assert_eq!(frames.line(1), Some(" ".repeat(16)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ignored_keys_change_nothing() {
        let (mut session, _keys, mut servo, mut beeps, frames) = session();
        session.boot().await.unwrap();
        servo.drain_positions();
        let before = frames.snapshot();

        session.handle_key(KeyPress::Star).await.unwrap();
        session.handle_key(KeyPress::Hash).await.unwrap();
        session.handle_key(KeyPress::Letter('A')).await.unwrap();
        session.handle_key(KeyPress::Letter('D')).await.unwrap();

        assert!(session.entry.is_empty());
        assert_eq!(frames.snapshot(), before);
        assert_eq!(servo.drain_positions(), vec![]);
        assert_eq!(beeps.drain_beeps(), vec![]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_resets_after_evaluation() {
        let (mut session, _keys, _servo, _beeps, frames) = session();
        session.boot().await.unwrap();

        for digit in [0, 1, 2, 9] {
            session.handle_key(KeyPress::Digit(digit)).await.unwrap();
        }

        // The next digit starts a fresh entry at the first mask column
        session.handle_key(KeyPress::Digit(5)).await.unwrap();

        assert_eq!(session.entry.len(), 1);
        assert_eq!(frames.line(1), Some("     *          ".to_string()));
    }
}
