use crate::{
    Result,
    constants::{DEFAULT_PASSCODE, MAX_PASSCODE_LENGTH, MIN_PASSCODE_LENGTH},
    error::Error,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;

/// Numeric passcode (4-8 digits)
///
/// # Security
/// Entry comparison is constant-time over the passcode bytes to avoid
/// leaking match positions through timing. `Debug` and `Display` redact
/// the digits so passcodes never end up in logs; use [`Passcode::as_str`]
/// when the raw digits are genuinely needed.
#[derive(Clone, Eq, Serialize, Deserialize)]
pub struct Passcode(String);

impl Passcode {
    /// Create a new passcode with validation.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidPasscode` if:
    /// - The length is not between 4-8 digits
    /// - Any character is not an ASCII digit
    pub fn new(digits: &str) -> Result<Self> {
        let digits = digits.trim();

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidPasscode(
                "must contain only ASCII digits".to_string(),
            ));
        }

        let len = digits.len();
        if !(MIN_PASSCODE_LENGTH..=MAX_PASSCODE_LENGTH).contains(&len) {
            return Err(Error::InvalidPasscode(format!(
                "must be {MIN_PASSCODE_LENGTH}-{MAX_PASSCODE_LENGTH} digits, got {len}"
            )));
        }

        Ok(Passcode(digits.to_string()))
    }

    /// Get the raw digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    ///
    /// Also the entry-buffer capacity: an entry is evaluated once it
    /// reaches this length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Compare a completed entry against this passcode.
    ///
    /// Exact length, identical characters at every position. The content
    /// comparison is constant-time; a length mismatch returns `false`
    /// immediately (entry length is already public via the display mask).
    #[must_use]
    pub fn matches(&self, entry: &str) -> bool {
        self.0.as_bytes().ct_eq(entry.as_bytes()).into()
    }

    /// Redacted rendering, one `*` per digit.
    #[must_use]
    pub fn masked(&self) -> String {
        "*".repeat(self.0.len())
    }
}

impl fmt::Display for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

impl fmt::Debug for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Passcode({})", self.masked())
    }
}

impl std::str::FromStr for Passcode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Passcode::new(s)
    }
}

impl Default for Passcode {
    /// The reference build's passcode, `"0123"`.
    fn default() -> Self {
        Passcode(DEFAULT_PASSCODE.to_string())
    }
}

/// Constant-time comparison implementation for Passcode
///
/// This prevents timing attacks by ensuring comparison takes the same time
/// regardless of where the strings differ.
impl PartialEq for Passcode {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_bytes().ct_eq(other.0.as_bytes()).into()
    }
}

/// Hash implementation for Passcode
///
/// Implements standard hashing for use in hash-based collections.
impl std::hash::Hash for Passcode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Lock mechanism state
///
/// Owned exclusively by the lock controller and mutated only by the
/// toggle transition. The state starts `Locked`: the actuator is driven
/// to the locked position during boot, before any entry is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockState {
    Locked,
    Unlocked,
}

impl LockState {
    /// The state on the other side of a toggle.
    #[inline]
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            LockState::Locked => LockState::Unlocked,
            LockState::Unlocked => LockState::Locked,
        }
    }

    /// Returns `true` if the mechanism is locked.
    #[inline]
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, LockState::Locked)
    }

    /// Returns `true` if the mechanism is unlocked.
    #[inline]
    #[must_use]
    pub fn is_unlocked(self) -> bool {
        matches!(self, LockState::Unlocked)
    }
}

impl fmt::Display for LockState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LockState::Locked => write!(f, "Locked"),
            LockState::Unlocked => write!(f, "Unlocked"),
        }
    }
}

/// Result of evaluating a completed entry
///
/// Produced exactly once per full entry and consumed immediately by the
/// feedback path. A correct entry always toggles the lock, so the variant
/// encodes which direction the toggle went; there is no separate lock or
/// unlock intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryOutcome {
    /// Entry matched while locked; the door was driven open.
    Opened,
    /// Entry matched while unlocked; the door was driven back to locked.
    Relocked,
    /// Entry did not match; the state is unchanged.
    Rejected,
}

impl EntryOutcome {
    /// Returns `true` if the entry matched the passcode.
    #[inline]
    #[must_use]
    pub fn is_correct(self) -> bool {
        !matches!(self, EntryOutcome::Rejected)
    }

    /// Returns `true` if the entry was rejected.
    #[inline]
    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(self, EntryOutcome::Rejected)
    }
}

impl fmt::Display for EntryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EntryOutcome::Opened => write!(f, "Opened"),
            EntryOutcome::Relocked => write!(f, "Relocked"),
            EntryOutcome::Rejected => write!(f, "Rejected"),
        }
    }
}
