//! Framebuffer-less SSD1306 driver.
//!
//! [`OledDriver`] talks to the controller one byte at a time through
//! [`BusTransport`]. There is no frame buffer: clearing writes zeros
//! straight into display RAM and text is streamed glyph by glyph, relying
//! on the controller's horizontal-addressing auto-increment.

use bigclock_fonts::{glyph, FontTable};
use embedded_hal_async::i2c::I2c;

use crate::commands::{
    init_bytes, lower_column, page_address, upper_column, SET_HIGHER_COLUMN, SET_LOWER_COLUMN,
};
use crate::error::OledError;
use crate::transport::{BusTransport, ByteKind};

/// Panel width in columns.
pub const COLUMNS: u8 = 128;

/// Panel height in 8-pixel pages (32 px).
pub const PAGES: u8 = 4;

/// Async driver for an SSD1306 128×32 OLED display over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] — sends the power-on command sequence.
/// 3. [`OledDriver::clear()`] / [`OledDriver::draw_text()`] — redraw.
/// 4. [`OledDriver::release()`] — hand the bus back.
///
/// # Bus failures
///
/// Writes are fire-and-forget. A failed write is counted in
/// [`dropped_writes()`](Self::dropped_writes) and the operation carries on
/// with the next byte. Only [`init()`](Self::init) logs its losses; callers
/// that redraw in a loop compare the counter per frame instead.
///
/// # Example
///
/// ```no_run
/// use bigclock_fonts::{get_font, FontStyle};
/// use bigclock_oled_display_rs::OledDriver;
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, 0x3C);
/// oled.init().await;
/// oled.clear().await.unwrap();
/// oled.draw_text(24, 1, "12:34:56", get_font(FontStyle::Bold)).await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    transport: BusTransport<I2C>,
    /// Set to `true` after `init()` has run.
    initialized: bool,
    /// Total bus writes that failed since construction (wrapping).
    dropped_writes: u32,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// No I2C traffic is generated. You **must** call [`init()`](Self::init)
    /// before any drawing operations.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            transport: BusTransport::new(i2c, address),
            initialized: false,
            dropped_writes: 0,
        }
    }

    /// Send the SSD1306 power-on sequence.
    ///
    /// Every byte of [`INIT_SEQUENCE`](crate::commands::INIT_SEQUENCE) is
    /// written as a separate command, in order. Marks the driver
    /// initialised even if some writes were dropped; the panel has no way
    /// to tell us whether it listened.
    pub async fn init(&mut self) {
        let before = self.dropped_writes;
        for byte in init_bytes() {
            self.command(byte).await;
        }
        self.initialized = true;

        let lost = self.dropped_writes.wrapping_sub(before);
        if lost > 0 {
            #[cfg(feature = "log")]
            log::warn!("init: {} bus writes dropped", lost);
            #[cfg(feature = "defmt")]
            defmt::warn!("init: {} bus writes dropped", lost);
        }
    }

    /// Blank all four pages.
    ///
    /// Each page gets its page/column address (3 commands) followed by
    /// 128 zero data bytes: 524 writes in total.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not been called.
    pub async fn clear(&mut self) -> Result<(), OledError> {
        self.ensure_initialized()?;

        for page in 0..PAGES {
            self.command(page_address(page)).await;
            self.command(SET_LOWER_COLUMN).await;
            self.command(SET_HIGHER_COLUMN).await;
            for _ in 0..COLUMNS {
                self.data(0x00).await;
            }
        }
        Ok(())
    }

    /// Point the controller's write cursor at column `x` of `page`.
    ///
    /// # Errors
    ///
    /// * [`OledError::NotInitialized`] before [`init()`](Self::init).
    /// * [`OledError::InvalidCursor`] if `x >= 128` or `page >= 4`; nothing
    ///   is sent in that case.
    pub async fn set_cursor(&mut self, x: u8, page: u8) -> Result<(), OledError> {
        self.ensure_initialized()?;
        if x >= COLUMNS || page >= PAGES {
            return Err(OledError::InvalidCursor { x, page });
        }

        self.command(page_address(page)).await;
        self.command(lower_column(x)).await;
        self.command(upper_column(x)).await;
        Ok(())
    }

    /// Stream the 10 column bytes of `c`'s glyph at the current cursor.
    pub async fn draw_glyph(&mut self, font: &FontTable, c: char) -> Result<(), OledError> {
        self.ensure_initialized()?;
        for &column in glyph(font, c) {
            self.data(column).await;
        }
        Ok(())
    }

    /// Draw `text` starting at column `x` of `page`.
    ///
    /// The cursor is set once; each following glyph lands next to the
    /// previous one through address auto-increment.
    pub async fn draw_text(
        &mut self,
        x: u8,
        page: u8,
        text: &str,
        font: &FontTable,
    ) -> Result<(), OledError> {
        self.set_cursor(x, page).await?;
        for c in text.chars() {
            self.draw_glyph(font, c).await?;
        }
        Ok(())
    }

    /// Check whether [`init()`](Self::init) has run.
    ///
    /// No I2C traffic is generated.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of bus writes that have failed since construction.
    pub fn dropped_writes(&self) -> u32 {
        self.dropped_writes
    }

    /// Consume the driver and return the I2C peripheral.
    pub fn release(self) -> I2C {
        self.transport.release()
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn ensure_initialized(&self) -> Result<(), OledError> {
        if self.initialized {
            Ok(())
        } else {
            Err(OledError::NotInitialized)
        }
    }

    async fn command(&mut self, byte: u8) {
        self.send(byte, ByteKind::Command).await;
    }

    async fn data(&mut self, byte: u8) {
        self.send(byte, ByteKind::Data).await;
    }

    async fn send(&mut self, byte: u8, kind: ByteKind) {
        if self.transport.send(byte, kind).await.is_err() {
            self.dropped_writes = self.dropped_writes.wrapping_add(1);
        }
    }
}
