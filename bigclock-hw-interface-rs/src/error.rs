//! Fatal startup errors.

use std::error::Error;
use std::fmt;

/// Conditions that abort the program before the clock starts.
#[derive(Debug)]
pub enum StartupError {
    /// The I2C device node could not be opened.
    Open {
        path: &'static str,
        source: Box<dyn Error + Send + Sync>,
    },
    /// The node is not an I2C adapter, or the adapter refused the display
    /// address (`I2C_SLAVE`).
    Bind {
        address: u8,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::Open { path, source } => {
                write!(f, "I2C open failed: {}: {}", path, source)
            }
            StartupError::Bind { address, source } => {
                write!(f, "I2C address bind failed: {:#04x}: {}", address, source)
            }
        }
    }
}

impl Error for StartupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StartupError::Open { source, .. } | StartupError::Bind { source, .. } => {
                Some(source.as_ref())
            }
        }
    }
}
