//! Screen rendering for the 16x2 character display.
//!
//! This module turns entry-flow events into display frames: the boot
//! banner, the entry prompt, the masking stars that echo typed digits,
//! and the two-line result screens. Layout mirrors the reference panel,
//! a 16-column 2-row LCD with the prompt centered on the top row and the
//! entry mask growing along the bottom row.
//!
//! Rendering is purely presentational. Nothing in the lock logic reads
//! the display back, so a rendering failure surfaces as a hardware error
//! but can never corrupt an entry or a lock decision.

use latchkey_core::EntryOutcome;
use latchkey_core::constants::{
    DISPLAY_COLUMNS, MASK_ROW, MASK_START_COLUMN, MSG_BANNER_BOTTOM, MSG_BANNER_TOP, MSG_CORRECT,
    MSG_DOOR_LOCKED, MSG_DOOR_OPENED, MSG_PROMPT, MSG_TRY_AGAIN, MSG_WRONG,
};
use latchkey_hardware::{DisplayDevice, Result};

/// Text alignment options for display lines.
///
/// These options control how text is positioned within the 16-character
/// line width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Text starts at column 0, padded with spaces on the right.
    Left,
    /// Text centered with equal padding on both sides (extra space on right if odd).
    Center,
    /// Text ends at the last column, padded with spaces on the left.
    Right,
}

/// Truncate text to a maximum number of characters.
///
/// # Examples
///
/// ```
/// use latchkey_controller::screen::truncate_text;
///
/// assert_eq!(truncate_text("ENTER PASSWORD", 5), "ENTER");
/// assert_eq!(truncate_text("OPEN", 10), "OPEN");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Align text within a fixed width, padding with spaces.
///
/// Text longer than `width` is truncated. The result is always exactly
/// `width` characters long.
///
/// # Examples
///
/// ```
/// use latchkey_controller::screen::{Alignment, align_text};
///
/// assert_eq!(align_text("HELLO", 10, Alignment::Left), "HELLO     ");
/// assert_eq!(align_text("HELLO", 10, Alignment::Center), "  HELLO   ");
/// assert_eq!(align_text("HELLO", 10, Alignment::Right), "     HELLO");
/// ```
pub fn align_text(text: &str, width: usize, alignment: Alignment) -> String {
    let char_count = text.chars().count();

    // If text is longer than width, truncate it
    if char_count >= width {
        return truncate_text(text, width);
    }

    let padding = width - char_count;

    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), text),
        Alignment::Center => {
            let left_pad = padding / 2;
            let right_pad = padding - left_pad;
            format!("{}{}{}", " ".repeat(left_pad), text, " ".repeat(right_pad))
        }
    }
}

/// Render the boot banner on both rows.
///
/// The top line is centered; on the reference 16-column panel that puts
/// "WELCOME TO" at column 3.
///
/// # Errors
///
/// Returns an error if the display reports a communication failure.
pub async fn render_banner<D: DisplayDevice>(display: &mut D) -> Result<()> {
    display
        .show_line(0, &align_text(MSG_BANNER_TOP, DISPLAY_COLUMNS, Alignment::Center))
        .await?;
    display
        .show_line(
            1,
            &align_text(MSG_BANNER_BOTTOM, DISPLAY_COLUMNS, Alignment::Center),
        )
        .await?;
    Ok(())
}

/// Render the entry prompt on the top row.
///
/// The bottom row is left alone; the entry mask owns it.
///
/// # Errors
///
/// Returns an error if the display reports a communication failure.
pub async fn render_prompt<D: DisplayDevice>(display: &mut D) -> Result<()> {
    display
        .show_line(0, &align_text(MSG_PROMPT, DISPLAY_COLUMNS, Alignment::Center))
        .await?;
    Ok(())
}

/// Echo one recorded digit as a masking star.
///
/// `index` is the zero-based position of the digit within the entry;
/// stars grow left to right from the mask start column on the bottom
/// row. The digit itself is never shown.
///
/// # Errors
///
/// Returns an error if the display reports a communication failure.
pub async fn render_mask_star<D: DisplayDevice>(display: &mut D, index: usize) -> Result<()> {
    display
        .show_char(MASK_ROW, MASK_START_COLUMN + index, '*')
        .await?;
    Ok(())
}

/// Render the two-line result screen for an evaluation outcome.
///
/// Result lines are left-aligned, matching the reference panel.
///
/// # Errors
///
/// Returns an error if the display reports a communication failure.
pub async fn render_outcome<D: DisplayDevice>(
    display: &mut D,
    outcome: EntryOutcome,
) -> Result<()> {
    let (top, bottom) = match outcome {
        EntryOutcome::Opened => (MSG_CORRECT, MSG_DOOR_OPENED),
        EntryOutcome::Relocked => (MSG_CORRECT, MSG_DOOR_LOCKED),
        EntryOutcome::Rejected => (MSG_WRONG, MSG_TRY_AGAIN),
    };

    display
        .show_line(0, &align_text(top, DISPLAY_COLUMNS, Alignment::Left))
        .await?;
    display
        .show_line(1, &align_text(bottom, DISPLAY_COLUMNS, Alignment::Left))
        .await?;
    Ok(())
}
