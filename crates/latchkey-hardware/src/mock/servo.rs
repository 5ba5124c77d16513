//! Mock lock actuator implementation for testing and development.
//!
//! This module provides a simulated servo-driven lock that records every
//! actuation for test inspection without requiring physical hardware.

use crate::{
    Result,
    traits::LockActuator,
    types::{ActuatorPosition, DeviceInfo},
};
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// A single recorded actuation of the mock servo.
#[derive(Debug, Clone)]
pub struct ActuationEvent {
    /// Position the servo was driven to
    pub position: ActuatorPosition,

    /// When the actuation happened
    pub timestamp: DateTime<Utc>,
}

/// Mock lock actuator for testing and development.
///
/// This device simulates the servo that throws the deadbolt. Every call
/// to `actuate` is recorded and streamed to a `MockServoHandle`, so tests
/// can assert on exactly which movements the controller commanded and in
/// what order.
///
/// # Examples
///
/// ```
/// use latchkey_hardware::mock::MockServo;
/// use latchkey_hardware::traits::LockActuator;
/// use latchkey_hardware::types::ActuatorPosition;
///
/// #[tokio::main]
/// async fn main() -> latchkey_hardware::Result<()> {
///     let (mut servo, mut handle) = MockServo::new();
///
///     servo.actuate(ActuatorPosition::Open).await?;
///
///     assert_eq!(servo.current_position(), Some(ActuatorPosition::Open));
///     assert_eq!(handle.try_next_position(), Some(ActuatorPosition::Open));
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockServo {
    /// Channel sender for actuation events
    event_tx: mpsc::UnboundedSender<ActuationEvent>,

    /// Device name
    name: String,

    /// Last commanded position, if any
    current: Option<ActuatorPosition>,
}

impl MockServo {
    /// Create a new mock servo with the default name.
    ///
    /// Returns a tuple of (MockServo, MockServoHandle) where the handle
    /// can be used to observe actuations.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::mock::MockServo;
    ///
    /// let (servo, handle) = MockServo::new();
    /// ```
    pub fn new() -> (Self, MockServoHandle) {
        Self::with_name("Mock Servo".to_string())
    }

    /// Create a new mock servo with a custom name.
    pub fn with_name(name: String) -> (Self, MockServoHandle) {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let servo = Self {
            event_tx,
            name: name.clone(),
            current: None,
        };

        let handle = MockServoHandle { event_rx, name };

        (servo, handle)
    }

    /// Get the last commanded position.
    ///
    /// Returns `None` before the first actuation. This is useful for
    /// asserting on the mechanism's end state without draining events.
    pub fn current_position(&self) -> Option<ActuatorPosition> {
        self.current
    }
}

impl Default for MockServo {
    fn default() -> Self {
        Self::new().0
    }
}

impl LockActuator for MockServo {
    async fn actuate(&mut self, position: ActuatorPosition) -> Result<()> {
        self.current = Some(position);

        // A dropped handle must not fail the device; observation is optional.
        let _ = self.event_tx.send(ActuationEvent {
            position,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(self.name.clone(), "Mock Servo v1.0").with_firmware_version("1.0.0"))
    }
}

/// Handle for observing a mock servo.
///
/// This handle receives one `ActuationEvent` per `actuate` call, in call
/// order. The channel is unbounded, so a test can run an entire scenario
/// first and inspect the movements afterwards.
///
/// # Examples
///
/// ```
/// use latchkey_hardware::mock::MockServo;
/// use latchkey_hardware::traits::LockActuator;
/// use latchkey_hardware::types::ActuatorPosition;
///
/// #[tokio::main]
/// async fn main() -> latchkey_hardware::Result<()> {
///     let (mut servo, mut handle) = MockServo::new();
///
///     servo.actuate(ActuatorPosition::Locked).await?;
///     servo.actuate(ActuatorPosition::Open).await?;
///
///     let positions = handle.drain_positions();
///     assert_eq!(positions, vec![ActuatorPosition::Locked, ActuatorPosition::Open]);
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockServoHandle {
    /// Channel receiver for actuation events
    event_rx: mpsc::UnboundedReceiver<ActuationEvent>,

    /// Device name
    name: String,
}

impl MockServoHandle {
    /// Wait for the next actuation event.
    ///
    /// Returns `None` once the servo has been dropped and all recorded
    /// events have been consumed.
    pub async fn next_event(&mut self) -> Option<ActuationEvent> {
        self.event_rx.recv().await
    }

    /// Take the next recorded position without waiting.
    ///
    /// Returns `None` if no actuation is pending.
    pub fn try_next_position(&mut self) -> Option<ActuatorPosition> {
        self.event_rx.try_recv().ok().map(|event| event.position)
    }

    /// Drain all pending actuations into a position list, in call order.
    pub fn drain_positions(&mut self) -> Vec<ActuatorPosition> {
        let mut positions = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            positions.push(event.position);
        }
        positions
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
