//! Mock character LCD implementation for testing and development.
//!
//! This module provides a simulated character display that keeps its
//! frame buffer in memory and publishes every frame for test inspection,
//! without requiring physical hardware.

use crate::{Result, traits::DisplayDevice, types::DeviceInfo};
use tokio::sync::watch;

/// Rows on the default mock display (16x2 character LCD).
pub const DEFAULT_ROWS: usize = 2;

/// Columns on the default mock display (16x2 character LCD).
pub const DEFAULT_COLUMNS: usize = 16;

/// Mock character LCD for testing and development.
///
/// This device simulates a small character display by keeping a cell
/// buffer in memory. After every mutation the full frame is published to
/// a `MockLcdHandle`, so tests can assert on exactly what the user would
/// see at any point in a scenario.
///
/// # Examples
///
/// ```
/// use latchkey_hardware::mock::MockLcd;
/// use latchkey_hardware::traits::DisplayDevice;
///
/// #[tokio::main]
/// async fn main() -> latchkey_hardware::Result<()> {
///     let (mut lcd, handle) = MockLcd::new();
///
///     lcd.show_line(0, "ENTER PASSWORD").await?;
///     lcd.show_char(1, 5, '*').await?;
///
///     let frame = handle.snapshot();
///     assert_eq!(frame[0], "ENTER PASSWORD  ");
///     assert_eq!(frame[1], "     *          ");
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockLcd {
    /// Display geometry
    rows: usize,
    columns: usize,

    /// Cell buffer, `cells[row][col]`, blank cells hold a space
    cells: Vec<Vec<char>>,

    /// Channel sender publishing the rendered frame after each mutation
    frame_tx: watch::Sender<Vec<String>>,

    /// Device name
    name: String,
}

impl MockLcd {
    /// Create a new 16x2 mock LCD with the default name.
    ///
    /// Returns a tuple of (MockLcd, MockLcdHandle) where the handle can
    /// be used to observe rendered frames.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::mock::MockLcd;
    ///
    /// let (lcd, handle) = MockLcd::new();
    /// ```
    pub fn new() -> (Self, MockLcdHandle) {
        Self::with_dimensions(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }

    /// Create a new mock LCD with custom geometry.
    ///
    /// # Examples
    ///
    /// ```
    /// use latchkey_hardware::mock::MockLcd;
    ///
    /// let (lcd, handle) = MockLcd::with_dimensions(4, 20);
    /// ```
    pub fn with_dimensions(rows: usize, columns: usize) -> (Self, MockLcdHandle) {
        let cells = vec![vec![' '; columns]; rows];
        let (frame_tx, frame_rx) = watch::channel(render_frame(&cells));

        let lcd = Self {
            rows,
            columns,
            cells,
            frame_tx,
            name: "Mock LCD".to_string(),
        };

        let handle = MockLcdHandle { frame_rx };

        (lcd, handle)
    }

    /// Get the number of rows on the display.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns on the display.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the current contents of one row.
    ///
    /// Returns `None` if the row is outside the display.
    pub fn line(&self, row: usize) -> Option<String> {
        self.cells.get(row).map(|cells| cells.iter().collect())
    }

    fn publish(&self) {
        // A dropped handle must not fail the device; observation is optional.
        let _ = self.frame_tx.send(render_frame(&self.cells));
    }
}

/// Render the cell buffer as one string per row.
fn render_frame(cells: &[Vec<char>]) -> Vec<String> {
    cells.iter().map(|row| row.iter().collect()).collect()
}

impl Default for MockLcd {
    fn default() -> Self {
        Self::new().0
    }
}

impl DisplayDevice for MockLcd {
    async fn show_line(&mut self, row: usize, text: &str) -> Result<()> {
        if row >= self.rows {
            return Err(crate::HardwareError::invalid_data(format!(
                "Row {} out of range (display has {} rows)",
                row, self.rows
            )));
        }

        let mut chars = text.chars();
        for cell in &mut self.cells[row] {
            *cell = chars.next().unwrap_or(' ');
        }

        self.publish();
        Ok(())
    }

    async fn show_char(&mut self, row: usize, col: usize, ch: char) -> Result<()> {
        if row >= self.rows {
            return Err(crate::HardwareError::invalid_data(format!(
                "Row {} out of range (display has {} rows)",
                row, self.rows
            )));
        }
        if col >= self.columns {
            return Err(crate::HardwareError::invalid_data(format!(
                "Column {} out of range (display has {} columns)",
                col, self.columns
            )));
        }

        self.cells[row][col] = ch;

        self.publish();
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        for row in &mut self.cells {
            row.fill(' ');
        }

        self.publish();
        Ok(())
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(self.name.clone(), "Mock LCD v1.0").with_firmware_version("1.0.0"))
    }
}

/// Handle for observing a mock LCD.
///
/// This handle always holds the latest rendered frame; intermediate
/// frames between two snapshots may be skipped, which matches how a
/// person reads a display. It can be cloned and shared across tasks.
///
/// # Examples
///
/// ```
/// use latchkey_hardware::mock::MockLcd;
/// use latchkey_hardware::traits::DisplayDevice;
///
/// #[tokio::main]
/// async fn main() -> latchkey_hardware::Result<()> {
///     let (mut lcd, handle) = MockLcd::new();
///
///     lcd.show_line(1, "DOOR OPENED").await?;
///
///     assert_eq!(handle.line(1), Some("DOOR OPENED     ".to_string()));
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MockLcdHandle {
    /// Channel receiver holding the latest rendered frame
    frame_rx: watch::Receiver<Vec<String>>,
}

impl MockLcdHandle {
    /// Get the latest rendered frame, one string per row.
    pub fn snapshot(&self) -> Vec<String> {
        self.frame_rx.borrow().clone()
    }

    /// Get the latest contents of one row.
    ///
    /// Returns `None` if the row is outside the display.
    pub fn line(&self, row: usize) -> Option<String> {
        self.frame_rx.borrow().get(row).cloned()
    }

    /// Wait for the next frame change and return the new frame.
    ///
    /// Returns `None` once the display has been dropped.
    pub async fn next_frame(&mut self) -> Option<Vec<String>> {
        self.frame_rx.changed().await.ok()?;
        Some(self.snapshot())
    }
}
