//! Key classification.
//!
//! Raw key presses from the keypad mean nothing on their own; this module
//! assigns each one its role in the entry flow. Digits feed the entry
//! buffer, the clear key restarts the entry, and every other key is
//! ignored outright.

use latchkey_core::constants::CLEAR_KEY;
use latchkey_hardware::KeyPress;

/// What a key press means to the entry flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// A digit to append to the current entry.
    Digit(char),

    /// Restart the current entry from scratch.
    Clear,

    /// No meaning in the entry flow; dropped without effect.
    Ignored,
}

/// Classify a key press by its role in the entry flow.
///
/// Digits `0`-`9` carry their character, the clear key (`C` on the
/// reference keypad) maps to [`KeyClass::Clear`], and everything else,
/// including `*`, `#`, and the remaining letter keys, is
/// [`KeyClass::Ignored`].
///
/// # Examples
///
/// ```
/// use latchkey_controller::{KeyClass, classify};
/// use latchkey_hardware::KeyPress;
///
/// assert_eq!(classify(KeyPress::Digit(7)), KeyClass::Digit('7'));
/// assert_eq!(classify(KeyPress::Letter('C')), KeyClass::Clear);
/// assert_eq!(classify(KeyPress::Star), KeyClass::Ignored);
/// ```
#[must_use]
pub fn classify(key: KeyPress) -> KeyClass {
    match key {
        KeyPress::Digit(_) => KeyClass::Digit(key.to_char()),
        KeyPress::Letter(CLEAR_KEY) => KeyClass::Clear,
        _ => KeyClass::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyPress::Digit(0), KeyClass::Digit('0'))]
    #[case(KeyPress::Digit(5), KeyClass::Digit('5'))]
    #[case(KeyPress::Digit(9), KeyClass::Digit('9'))]
    #[case(KeyPress::Letter('C'), KeyClass::Clear)]
    #[case(KeyPress::Letter('A'), KeyClass::Ignored)]
    #[case(KeyPress::Letter('B'), KeyClass::Ignored)]
    #[case(KeyPress::Letter('D'), KeyClass::Ignored)]
    #[case(KeyPress::Star, KeyClass::Ignored)]
    #[case(KeyPress::Hash, KeyClass::Ignored)]
    fn test_classify(#[case] key: KeyPress, #[case] expected: KeyClass) {
        assert_eq!(classify(key), expected);
    }

    #[test]
    fn test_every_digit_classifies_to_its_character() {
        for d in 0..=9u8 {
            let key = KeyPress::digit(d).unwrap();
            assert_eq!(classify(key), KeyClass::Digit(char::from(b'0' + d)));
        }
    }
}
