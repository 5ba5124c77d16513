//! Common types shared across hardware device implementations.
//!
//! This module defines types used by multiple device traits, such as
//! device information and the lock actuator positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Generic device information.
///
/// Contains metadata about a hardware device such as name, model,
/// serial number, and firmware version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device name (e.g., "Mock Keypad", "SG90 Servo").
    pub name: String,

    /// Device model identifier.
    pub model: String,

    /// Optional device serial number.
    pub serial_number: Option<String>,

    /// Optional firmware version string.
    pub firmware_version: Option<String>,
}

impl DeviceInfo {
    /// Create a new DeviceInfo with required fields.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            serial_number: None,
            firmware_version: None,
        }
    }

    /// Set the serial number.
    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    /// Set the firmware version.
    pub fn with_firmware_version(mut self, firmware_version: impl Into<String>) -> Self {
        self.firmware_version = Some(firmware_version.into());
        self
    }
}

/// Positions the lock actuator can be driven to.
///
/// The reference mechanism is a hobby servo coupled to a deadbolt: one
/// fixed angle withdraws the bolt, another extends it. There are exactly
/// two commanded positions; the actuator never holds an intermediate
/// angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActuatorPosition {
    /// Bolt withdrawn, door can be opened.
    Open,

    /// Bolt extended, door locked.
    Locked,
}

impl ActuatorPosition {
    /// Servo angle for this position on the reference mechanism.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::types::ActuatorPosition;
    ///
    /// assert_eq!(ActuatorPosition::Open.angle_degrees(), 50);
    /// assert_eq!(ActuatorPosition::Locked.angle_degrees(), 110);
    /// ```
    #[must_use]
    pub fn angle_degrees(self) -> u8 {
        match self {
            Self::Open => 50,
            Self::Locked => 110,
        }
    }

    /// Returns `true` if this is the open position.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Returns `true` if this is the locked position.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked)
    }
}

impl fmt::Display for ActuatorPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Locked => write!(f, "Locked"),
        }
    }
}
