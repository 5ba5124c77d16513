//! Mock keypad implementation for testing and development.
//!
//! This module provides a simulated keypad device that can be controlled
//! programmatically for testing without requiring physical hardware.

use crate::{
    Result,
    traits::{KeyPress, KeypadDevice},
    types::DeviceInfo,
};
use tokio::sync::mpsc;

/// Mock keypad device for testing and development.
///
/// This device simulates a matrix keypad by receiving key presses through
/// an internal channel. Tests and applications can press keys
/// programmatically using a `MockKeypadHandle`.
///
/// Polling semantics match a real matrix scan: `poll_key` returns
/// `Ok(None)` while no key is pending and never blocks waiting for one.
///
/// # Examples
///
/// ```
/// use latchkey_hardware::mock::MockKeypad;
/// use latchkey_hardware::traits::{KeyPress, KeypadDevice};
///
/// #[tokio::main]
/// async fn main() -> latchkey_hardware::Result<()> {
///     let (mut keypad, handle) = MockKeypad::new();
///
///     // Nothing pressed yet
///     assert_eq!(keypad.poll_key().await?, None);
///
///     // Simulate user input
///     handle.press(KeyPress::Digit(1)).await?;
///     handle.press(KeyPress::Digit(2)).await?;
///
///     // Keys are reported in press order, one per poll
///     assert_eq!(keypad.poll_key().await?, Some(KeyPress::Digit(1)));
///     assert_eq!(keypad.poll_key().await?, Some(KeyPress::Digit(2)));
///     assert_eq!(keypad.poll_key().await?, None);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockKeypad {
    /// Channel receiver for simulated key presses
    key_rx: mpsc::Receiver<KeyPress>,

    /// Device name
    name: String,
}

impl MockKeypad {
    /// Create a new mock keypad with the default name.
    ///
    /// Returns a tuple of (MockKeypad, MockKeypadHandle) where the handle
    /// can be used to press keys on the keypad.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::mock::MockKeypad;
    ///
    /// let (keypad, handle) = MockKeypad::new();
    /// ```
    pub fn new() -> (Self, MockKeypadHandle) {
        Self::with_name("Mock Keypad".to_string())
    }

    /// Create a new mock keypad with a custom name.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::mock::MockKeypad;
    ///
    /// let (keypad, handle) = MockKeypad::with_name("Test Keypad 1".to_string());
    /// ```
    pub fn with_name(name: String) -> (Self, MockKeypadHandle) {
        let (key_tx, key_rx) = mpsc::channel(32);

        let keypad = Self {
            key_rx,
            name: name.clone(),
        };

        let handle = MockKeypadHandle { key_tx, name };

        (keypad, handle)
    }
}

impl Default for MockKeypad {
    fn default() -> Self {
        Self::new().0
    }
}

impl KeypadDevice for MockKeypad {
    async fn poll_key(&mut self) -> Result<Option<KeyPress>> {
        match self.key_rx.try_recv() {
            Ok(key) => Ok(Some(key)),
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(mpsc::error::TryRecvError::Disconnected) => {
                Err(crate::HardwareError::disconnected(
                    "Keypad input channel closed",
                ))
            }
        }
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(self.name.clone(), "Mock Keypad v1.0").with_firmware_version("1.0.0"))
    }
}

/// Handle for controlling a mock keypad.
///
/// This handle allows programmatic control of the mock keypad by pressing
/// keys. It can be cloned and shared across tasks. Dropping every handle
/// closes the input channel, which the keypad reports as a disconnect.
///
/// # Examples
///
/// ```
/// use latchkey_hardware::mock::MockKeypad;
///
/// #[tokio::main]
/// async fn main() -> latchkey_hardware::Result<()> {
///     let (_keypad, handle) = MockKeypad::new();
///
///     // Simulate a complete passcode entry
///     handle.press_sequence("0123").await?;
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MockKeypadHandle {
    /// Channel sender for simulated key presses
    key_tx: mpsc::Sender<KeyPress>,

    /// Device name
    name: String,
}

impl MockKeypadHandle {
    /// Press a single key on the mock keypad.
    ///
    /// # Errors
    ///
    /// Returns an error if the keypad has been dropped and the channel is closed.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::mock::MockKeypad;
    /// use latchkey_hardware::traits::KeyPress;
    ///
    /// #[tokio::main]
    /// async fn main() -> latchkey_hardware::Result<()> {
    ///     let (_keypad, handle) = MockKeypad::new();
    ///
    ///     handle.press(KeyPress::Digit(5)).await?;
    ///     handle.press(KeyPress::Letter('C')).await?;
    ///
    ///     Ok(())
    /// }
    /// ```
    pub async fn press(&self, key: KeyPress) -> Result<()> {
        self.key_tx
            .send(key)
            .await
            .map_err(|_| crate::HardwareError::disconnected("Keypad input channel closed"))
    }

    /// Press a sequence of digit keys.
    ///
    /// This is a convenience method for pressing multiple digits at once.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any digit is greater than 9
    /// - The keypad has been dropped and the channel is closed
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::mock::MockKeypad;
    ///
    /// #[tokio::main]
    /// async fn main() -> latchkey_hardware::Result<()> {
    ///     let (_keypad, handle) = MockKeypad::new();
    ///
    ///     // Type "0123"
    ///     handle.press_digits(&[0, 1, 2, 3]).await?;
    ///
    ///     Ok(())
    /// }
    /// ```
    pub async fn press_digits(&self, digits: &[u8]) -> Result<()> {
        for &digit in digits {
            let key = KeyPress::digit(digit)?;
            self.press(key).await?;
        }
        Ok(())
    }

    /// Press a sequence of keys given by their keypad characters.
    ///
    /// Accepts the full keypad alphabet (`0`-`9`, `A`-`D`, `*`, `#`),
    /// so clear commands and ignored keys can be scripted inline:
    /// `"01C0123"` types two digits, clears, then the full passcode.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any character is not on the keypad
    /// - The keypad has been dropped and the channel is closed
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::mock::MockKeypad;
    ///
    /// #[tokio::main]
    /// async fn main() -> latchkey_hardware::Result<()> {
    ///     let (_keypad, handle) = MockKeypad::new();
    ///
    ///     handle.press_sequence("01C0123").await?;
    ///
    ///     Ok(())
    /// }
    /// ```
    pub async fn press_sequence(&self, keys: &str) -> Result<()> {
        for c in keys.chars() {
            let key = KeyPress::from_char(c)?;
            self.press(key).await?;
        }
        Ok(())
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
    async fn test_mock_keypad_empty_poll() {
        let (mut keypad, _handle) = MockKeypad::new();

        let key = keypad.poll_key().await.unwrap();
        assert_eq!(key, None);
    }

    #[tokio::test]
    async fn test_mock_keypad_basic_press() {
        let (mut keypad, handle) = MockKeypad::new();

        handle.press(KeyPress::Digit(5)).await.unwrap();

        let key = keypad.poll_key().await.unwrap();
        assert_eq!(key, Some(KeyPress::Digit(5)));
    }

    #[tokio::test]
    async fn test_mock_keypad_reports_each_key_once() {
        let (mut keypad, handle) = MockKeypad::new();

        handle.press(KeyPress::Star).await.unwrap();

        assert_eq!(keypad.poll_key().await.unwrap(), Some(KeyPress::Star));
        assert_eq!(keypad.poll_key().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_mock_keypad_press_order() {
        let (mut keypad, handle) = MockKeypad::new();

        handle.press(KeyPress::Digit(1)).await.unwrap();
        handle.press(KeyPress::Digit(2)).await.unwrap();
        handle.press(KeyPress::Letter('C')).await.unwrap();

        assert_eq!(keypad.poll_key().await.unwrap(), Some(KeyPress::Digit(1)));
        assert_eq!(keypad.poll_key().await.unwrap(), Some(KeyPress::Digit(2)));
        assert_eq!(
            keypad.poll_key().await.unwrap(),
            Some(KeyPress::Letter('C'))
        );
    }

    #[tokio::test]
    async fn test_mock_keypad_get_info() {
        let (keypad, _handle) = MockKeypad::with_name("Test Keypad".to_string());

        let info = keypad.get_info().await.unwrap();
        assert_eq!(info.name, "Test Keypad");
        assert_eq!(info.model, "Mock Keypad v1.0");
        assert_eq!(info.firmware_version, Some("1.0.0".to_string()));
    }

    #[tokio::test]
    async fn test_mock_keypad_handle_press_digits() {
        let (mut keypad, handle) = MockKeypad::new();

        handle.press_digits(&[0, 1, 2, 3]).await.unwrap();

        for expected in [0, 1, 2, 3] {
            let key = keypad.poll_key().await.unwrap();
            assert_eq!(key, Some(KeyPress::Digit(expected)));
        }
    }

    #[tokio::test]
    async fn test_mock_keypad_handle_rejects_invalid_digit() {
        let (_keypad, handle) = MockKeypad::new();

        let result = handle.press_digits(&[1, 10]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_keypad_handle_press_sequence() {
        let (mut keypad, handle) = MockKeypad::new();

        handle.press_sequence("9C*#").await.unwrap();

        assert_eq!(keypad.poll_key().await.unwrap(), Some(KeyPress::Digit(9)));
        assert_eq!(
            keypad.poll_key().await.unwrap(),
            Some(KeyPress::Letter('C'))
        );
        assert_eq!(keypad.poll_key().await.unwrap(), Some(KeyPress::Star));
        assert_eq!(keypad.poll_key().await.unwrap(), Some(KeyPress::Hash));
    }

    #[tokio::test]
    async fn test_mock_keypad_handle_rejects_unknown_char() {
        let (_keypad, handle) = MockKeypad::new();

        let result = handle.press_sequence("01x3").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_mock_keypad_handle_clone() {
        let (mut keypad, handle) = MockKeypad::new();

        let handle_clone = handle.clone();

        handle.press(KeyPress::Digit(1)).await.unwrap();
        handle_clone.press(KeyPress::Digit(2)).await.unwrap();

        assert_eq!(keypad.poll_key().await.unwrap(), Some(KeyPress::Digit(1)));
        assert_eq!(keypad.poll_key().await.unwrap(), Some(KeyPress::Digit(2)));
    }

    #[tokio::test]
    async fn test_mock_keypad_closed_channel() {
        let (mut keypad, handle) = MockKeypad::new();

        // Drop the handle, closing the channel
        drop(handle);

        // Polling should report a disconnect
        let result = keypad.poll_key().await;
        assert!(result.is_err());
        assert!(result.unwrap_err().is_disconnected());
    }

    #[tokio::test]
    async fn test_mock_keypad_drains_pending_keys_before_disconnect() {
        let (mut keypad, handle) = MockKeypad::new();

        handle.press(KeyPress::Digit(7)).await.unwrap();
        drop(handle);

        // Buffered keys are still delivered after the handle is gone
        assert_eq!(keypad.poll_key().await.unwrap(), Some(KeyPress::Digit(7)));
        assert!(keypad.poll_key().await.is_err());
    }
}
