//! Mock buzzer implementation for testing and development.
//!
//! This module provides a simulated piezo buzzer that records every beep
//! pattern for test inspection without requiring physical hardware.

use crate::{Result, traits::BuzzerDevice, types::DeviceInfo};
use tokio::sync::mpsc;

/// A single recorded beep pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beep {
    /// Tone length in milliseconds
    pub duration_ms: u16,

    /// Number of tones in the pattern
    pub count: u8,
}

/// Mock buzzer for testing and development.
///
/// This device simulates the feedback buzzer. Every `beep` call is
/// recorded and streamed to a `MockBuzzerHandle`, so tests can assert
/// that the right pattern was played for each outcome.
///
/// # Examples
///
/// ```
/// use latchkey_hardware::mock::{Beep, MockBuzzer};
/// use latchkey_hardware::traits::BuzzerDevice;
///
/// #[tokio::main]
/// async fn main() -> latchkey_hardware::Result<()> {
///     let (mut buzzer, mut handle) = MockBuzzer::new();
///
///     buzzer.beep(150, 3).await?;
///
///     let beep = handle.next_beep().await.unwrap();
///     assert_eq!(beep, Beep { duration_ms: 150, count: 3 });
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockBuzzer {
    /// Channel sender for beep events
    beep_tx: mpsc::UnboundedSender<Beep>,

    /// Device name
    name: String,
}

impl MockBuzzer {
    /// Create a new mock buzzer with the default name.
    ///
    /// Returns a tuple of (MockBuzzer, MockBuzzerHandle) where the handle
    /// can be used to observe beep patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::mock::MockBuzzer;
    ///
    /// let (buzzer, handle) = MockBuzzer::new();
    /// ```
    pub fn new() -> (Self, MockBuzzerHandle) {
        Self::with_name("Mock Buzzer".to_string())
    }

    /// Create a new mock buzzer with a custom name.
    pub fn with_name(name: String) -> (Self, MockBuzzerHandle) {
        let (beep_tx, beep_rx) = mpsc::unbounded_channel();

        let buzzer = Self {
            beep_tx,
            name: name.clone(),
        };

        let handle = MockBuzzerHandle { beep_rx, name };

        (buzzer, handle)
    }
}

impl Default for MockBuzzer {
    fn default() -> Self {
        Self::new().0
    }
}

impl BuzzerDevice for MockBuzzer {
    async fn beep(&mut self, duration_ms: u16, count: u8) -> Result<()> {
        // A dropped handle must not fail the device; observation is optional.
        let _ = self.beep_tx.send(Beep { duration_ms, count });
        Ok(())
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(self.name.clone(), "Mock Buzzer v1.0").with_firmware_version("1.0.0"))
    }
}

/// Handle for observing a mock buzzer.
///
/// This handle receives one `Beep` per `beep` call, in call order. The
/// channel is unbounded, so a test can run an entire scenario first and
/// inspect the patterns afterwards.
#[derive(Debug)]
pub struct MockBuzzerHandle {
    /// Channel receiver for beep events
    beep_rx: mpsc::UnboundedReceiver<Beep>,

    /// Device name
    name: String,
}

impl MockBuzzerHandle {
    /// Wait for the next beep pattern.
    ///
    /// Returns `None` once the buzzer has been dropped and all recorded
    /// beeps have been consumed.
    pub async fn next_beep(&mut self) -> Option<Beep> {
        self.beep_rx.recv().await
    }

    /// Take the next recorded beep without waiting.
    ///
    /// Returns `None` if no beep is pending.
    pub fn try_next_beep(&mut self) -> Option<Beep> {
        self.beep_rx.try_recv().ok()
    }

    /// Drain all pending beeps, in call order.
    pub fn drain_beeps(&mut self) -> Vec<Beep> {
        let mut beeps = Vec::new();
        while let Ok(beep) = self.beep_rx.try_recv() {
            beeps.push(beep);
        }
        beeps
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_buzzer_records_beep() {
        let (mut buzzer, mut handle) = MockBuzzer::new();

        buzzer.beep(200, 1).await.unwrap();

        let beep = handle.next_beep().await.unwrap();
        assert_eq!(
            beep,
            Beep {
                duration_ms: 200,
                count: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_mock_buzzer_beep_order() {
        let (mut buzzer, mut handle) = MockBuzzer::new();

        buzzer.beep(200, 1).await.unwrap();
        buzzer.beep(150, 3).await.unwrap();

        let beeps = handle.drain_beeps();
        assert_eq!(
            beeps,
            vec![
                Beep {
                    duration_ms: 200,
                    count: 1,
                },
                Beep {
                    duration_ms: 150,
                    count: 3,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_mock_buzzer_try_next_beep_empty() {
        let (_buzzer, mut handle) = MockBuzzer::new();

        assert_eq!(handle.try_next_beep(), None);
    }

    #[tokio::test]
    async fn test_mock_buzzer_dropped_handle() {
        let (mut buzzer, handle) = MockBuzzer::new();

        drop(handle);

        // Beeping keeps working with nobody observing
        buzzer.beep(100, 2).await.unwrap();
    }

    #[tokio::test]
    async fn test_mock_buzzer_get_info() {
        let (buzzer, _handle) = MockBuzzer::with_name("Test Buzzer".to_string());

        let info = buzzer.get_info().await.unwrap();
        assert_eq!(info.name, "Test Buzzer");
        assert_eq!(info.model, "Mock Buzzer v1.0");
        assert_eq!(info.firmware_version, Some("1.0.0".to_string()));
    }
}
