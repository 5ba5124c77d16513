//! Fixed-capacity passcode entry buffer.
//!
//! This module provides the buffer that accumulates digits as the user
//! types. The buffer holds at most as many digits as the configured
//! passcode; once full it silently refuses further input until reset,
//! so a stray extra keypress can never corrupt an entry.

use latchkey_core::Passcode;

/// Accumulates typed digits up to a fixed capacity.
///
/// The buffer fills one digit at a time and reports through the return
/// value of [`push`](EntryBuffer::push) whether a digit was recorded.
/// When full, pushes are silent no-ops; the session evaluates the entry
/// and resets the buffer before accepting more input.
///
/// # Examples
///
/// ```
/// use latchkey_controller::EntryBuffer;
///
/// let mut buffer = EntryBuffer::new(4);
///
/// assert!(buffer.push('0'));
/// assert!(buffer.push('1'));
/// assert_eq!(buffer.digits(), "01");
/// assert!(!buffer.is_full());
///
/// buffer.push('2');
/// buffer.push('3');
/// assert!(buffer.is_full());
///
/// // A fifth digit is refused, leaving the entry intact
/// assert!(!buffer.push('9'));
/// assert_eq!(buffer.digits(), "0123");
///
/// buffer.reset();
/// assert!(buffer.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct EntryBuffer {
    /// Digits typed so far, oldest first
    digits: String,

    /// Maximum number of digits the buffer accepts
    capacity: usize,
}

impl EntryBuffer {
    /// Create an empty buffer that accepts up to `capacity` digits.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "Entry buffer capacity must be positive");
        Self {
            digits: String::with_capacity(capacity),
            capacity,
        }
    }

    /// Create an empty buffer sized to hold exactly one entry of the
    /// given passcode.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_controller::EntryBuffer;
    /// use latchkey_core::Passcode;
    ///
    /// let passcode = Passcode::new("0123").unwrap();
    /// let buffer = EntryBuffer::for_passcode(&passcode);
    /// assert_eq!(buffer.capacity(), 4);
    /// ```
    #[must_use]
    pub fn for_passcode(passcode: &Passcode) -> Self {
        Self::new(passcode.len())
    }

    /// Append one digit, if there is room.
    ///
    /// Returns `true` if the digit was recorded, `false` if the buffer
    /// was already full and the digit was discarded. A refused push
    /// leaves the buffer contents unchanged.
    pub fn push(&mut self, digit: char) -> bool {
        debug_assert!(
            digit.is_ascii_digit(),
            "Entry buffer only stores digits, got '{}'",
            digit
        );

        if self.is_full() {
            return false;
        }

        self.digits.push(digit);
        true
    }

    /// Discard all typed digits.
    pub fn reset(&mut self) {
        self.digits.clear();
    }

    /// Check if the buffer holds a complete entry.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.digits.len() == self.capacity
    }

    /// Check if nothing has been typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of digits typed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Maximum number of digits the buffer accepts.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The digits typed so far, in entry order.
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }
}
