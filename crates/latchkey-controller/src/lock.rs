//! Lock state machine implementation.
//!
//! This module owns the decision logic of the door lock: whether a
//! completed entry matches the passcode, and what the lock does about it.
//!
//! # States
//!
//! The lock is always in one of two states:
//! - `Locked`: the deadbolt is thrown
//! - `Unlocked`: the deadbolt is retracted
//!
//! # Rules
//!
//! - The controller starts `Locked`.
//! - Every correct entry toggles the state, whichever state the lock is
//!   in. A correct entry while unlocked relocks the door.
//! - An incorrect entry never changes the state.
//!
//! # Examples
//!
//! ```
//! use latchkey_controller::LockController;
//! use latchkey_core::{EntryOutcome, LockState, Passcode};
//!
//! let passcode = Passcode::new("0123").unwrap();
//! let mut controller = LockController::new(passcode);
//! assert_eq!(controller.state(), LockState::Locked);
//!
//! assert_eq!(controller.evaluate("0123"), EntryOutcome::Opened);
//! assert_eq!(controller.state(), LockState::Unlocked);
//!
//! assert_eq!(controller.evaluate("9999"), EntryOutcome::Rejected);
//! assert_eq!(controller.state(), LockState::Unlocked);
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use latchkey_core::{EntryOutcome, LockState, Passcode};

/// Maximum number of lock transitions to keep in history.
///
/// A transition is two single-byte enums plus an `Instant`, so 100
/// entries cost a few kilobytes while covering 50 full open/relock
/// cycles, enough to reconstruct recent activity when debugging.
const MAX_HISTORY_SIZE: usize = 100;

/// Represents a single lock state change with timestamp.
///
/// # Serialization Note
///
/// The `at` field is not serialized as `Instant` is process-specific.
/// When deserializing, the timestamp will be set to the current time.
/// For persistent storage, use wall-clock time (SystemTime) in your
/// application layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockTransition {
    /// The state transitioned from.
    pub from: LockState,

    /// The state transitioned to.
    pub to: LockState,

    /// When the transition occurred.
    ///
    /// Note: This field is not serialized. Upon deserialization, it will
    /// be set to the time of deserialization, not the original transition
    /// time.
    #[serde(skip, default = "Instant::now")]
    pub at: Instant,
}

impl LockTransition {
    /// Create a new transition record stamped with the current time.
    pub fn new(from: LockState, to: LockState) -> Self {
        Self {
            from,
            to,
            at: Instant::now(),
        }
    }

    /// Get the duration since this transition occurred.
    pub fn elapsed(&self) -> Duration {
        self.at.elapsed()
    }
}

/// The door-lock decision engine.
///
/// Holds the configured passcode and the current lock state, evaluates
/// completed entries, and tracks recent transitions for diagnostics.
/// The controller only decides; driving the physical mechanism is the
/// session's job, keyed off the [`EntryOutcome`] this type returns.
///
/// # Thread Safety
///
/// This struct is not thread-safe; the session owns it on a single task.
/// To share one across tasks, wrap it in `tokio::sync::Mutex` or similar.
///
/// # Examples
///
/// ```
/// use latchkey_controller::LockController;
/// use latchkey_core::{EntryOutcome, Passcode};
///
/// let mut controller = LockController::new(Passcode::new("0123").unwrap());
///
/// // Open, then relock, each on a correct entry
/// assert_eq!(controller.evaluate("0123"), EntryOutcome::Opened);
/// assert_eq!(controller.evaluate("0123"), EntryOutcome::Relocked);
///
/// assert_eq!(controller.history().len(), 2);
/// ```
pub struct LockController {
    /// The configured passcode, fixed for the controller's lifetime.
    passcode: Passcode,

    /// Current state of the lock.
    state: LockState,

    /// History of lock transitions (limited to MAX_HISTORY_SIZE).
    history: VecDeque<LockTransition>,
}

impl LockController {
    /// Create a new controller in the `Locked` state.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_controller::LockController;
    /// use latchkey_core::{LockState, Passcode};
    ///
    /// let controller = LockController::new(Passcode::new("0123").unwrap());
    /// assert_eq!(controller.state(), LockState::Locked);
    /// assert!(controller.history().is_empty());
    /// ```
    pub fn new(passcode: Passcode) -> Self {
        Self {
            passcode,
            state: LockState::Locked,
            history: VecDeque::with_capacity(MAX_HISTORY_SIZE),
        }
    }

    /// Get the current state of the lock.
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Get the configured passcode.
    pub fn passcode(&self) -> &Passcode {
        &self.passcode
    }

    /// Evaluate a completed entry against the passcode.
    ///
    /// A correct entry toggles the lock and reports which way it went:
    /// [`EntryOutcome::Opened`] when the door was locked,
    /// [`EntryOutcome::Relocked`] when it was already open. An incorrect
    /// entry returns [`EntryOutcome::Rejected`] and leaves the state
    /// untouched.
    ///
    /// The comparison runs in constant time regardless of where the
    /// entry diverges from the passcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_controller::LockController;
    /// use latchkey_core::{EntryOutcome, Passcode};
    ///
    /// let mut controller = LockController::new(Passcode::new("0123").unwrap());
    ///
    /// assert_eq!(controller.evaluate("0129"), EntryOutcome::Rejected);
    /// assert_eq!(controller.evaluate("0123"), EntryOutcome::Opened);
    /// ```
    pub fn evaluate(&mut self, entry: &str) -> EntryOutcome {
        if !self.passcode.matches(entry) {
            return EntryOutcome::Rejected;
        }

        let transition = self.toggle();
        match transition.from {
            LockState::Locked => EntryOutcome::Opened,
            LockState::Unlocked => EntryOutcome::Relocked,
        }
    }

    /// Flip the lock state, recording the transition.
    ///
    /// Toggling is always valid; from either state the lock moves to the
    /// other one. Returns the transition record.
    pub fn toggle(&mut self) -> LockTransition {
        let transition = LockTransition::new(self.state, self.state.toggled());

        self.state = transition.to;
        self.add_to_history(transition.clone());

        transition
    }

    /// Get a reference to the lock transition history.
    ///
    /// Transitions are ordered from oldest to newest.
    pub fn history(&self) -> &VecDeque<LockTransition> {
        &self.history
    }

    /// Get the most recent transition, if any.
    pub fn last_transition(&self) -> Option<&LockTransition> {
        self.history.back()
    }

    /// Add a transition to history, maintaining the size limit.
    fn add_to_history(&mut self, transition: LockTransition) {
        self.history.push_back(transition);
        if self.history.len() > MAX_HISTORY_SIZE {
            self.history.pop_front();
        }
    }
}
