//! Single-byte SSD1306 I2C transport.
//!
//! Every byte goes out as its own two-byte I2C write: a control prefix
//! selecting command or data, followed by the payload. No batching, no
//! acknowledgement checking and no retry happen at this layer.

use display_interface::DisplayError;
use embedded_hal_async::i2c::I2c;

/// Control byte announcing a command payload.
pub const COMMAND_PREFIX: u8 = 0x00;

/// Control byte announcing a display RAM (pixel data) payload.
pub const DATA_PREFIX: u8 = 0x40;

/// Whether a byte configures the controller or lands in display RAM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteKind {
    Command,
    Data,
}

impl ByteKind {
    /// The control prefix sent ahead of a byte of this kind.
    pub const fn prefix(self) -> u8 {
        match self {
            ByteKind::Command => COMMAND_PREFIX,
            ByteKind::Data => DATA_PREFIX,
        }
    }
}

/// Owns the I2C peripheral and the controller's 7-bit address.
pub struct BusTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> BusTransport<I2C>
where
    I2C: I2c,
{
    /// Wrap an I2C peripheral. No bus traffic is generated.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x3C)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// The 7-bit address every write is sent to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Send one byte as a single `{prefix, byte}` write.
    ///
    /// Bus-level failures are folded into [`DisplayError::BusWriteError`];
    /// the caller decides whether to care.
    pub async fn send(&mut self, byte: u8, kind: ByteKind) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[kind.prefix(), byte])
            .await
            .map_err(|_| DisplayError::BusWriteError)
    }

    /// Give the I2C peripheral back to the caller.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
