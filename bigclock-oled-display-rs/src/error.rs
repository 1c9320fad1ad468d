//! Error types for the OLED clock driver.

use core::fmt;

/// Errors that can occur during OLED display operations.
///
/// Bus write failures are deliberately **not** represented here: the
/// driver absorbs them (see [`OledDriver::dropped_writes()`]) so a flaky
/// bus never stops the clock. These variants cover misuse of the driver.
///
/// [`OledDriver::dropped_writes()`]: crate::OledDriver::dropped_writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OledError {
    /// A drawing operation was attempted before
    /// [`OledDriver::init()`](crate::OledDriver::init) was called.
    NotInitialized,
    /// Cursor outside the panel (column must be < 128, page < 4).
    InvalidCursor { x: u8, page: u8 },
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OledError::NotInitialized => write!(f, "display not initialised"),
            OledError::InvalidCursor { x, page } => {
                write!(f, "cursor out of range: column {}, page {}", x, page)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
            OledError::InvalidCursor { x, page } => {
                defmt::write!(f, "Invalid cursor (column {}, page {})", x, page)
            }
        }
    }
}
