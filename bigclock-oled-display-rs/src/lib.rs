//! Async big-digit clock driver for an SSD1306 (128×32) OLED over I2C.
//!
//! This crate talks to the controller without a frame buffer: every byte
//! is its own two-byte I2C write, the screen is blanked before each
//! redraw, and text is streamed glyph by glyph from a
//! [`bigclock_fonts`] table.
//!
//! - [`OledDriver`]: init sequence, clear, cursor and glyph output.
//! - [`ClockDisplay`]: application context holding the driver, the
//!   selected font and [`ClockConfig`], plus the refresh loop
//!   [`ClockDisplay::run`].
//!
//! # Quick Start
//!
//! ```ignore
//! use bigclock_fonts::{get_font, FontStyle};
//! use bigclock_oled_display_rs::{ClockConfig, ClockDisplay, OledDriver};
//!
//! let oled = OledDriver::new(i2c, 0x3C);
//! let mut clock = ClockDisplay::new(oled, get_font(FontStyle::Bold), ClockConfig::default());
//! clock.run(&mut wall_clock, &mut delay).await?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`] for embedded targets.
//! - **`log`** — logging through the [`log`] facade for hosted targets.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod commands;
pub mod driver;
pub mod error;
pub mod layout;
pub mod transport;

#[cfg(test)]
mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use clock::{ClockDisplay, ClockPhase, WallClock};
pub use driver::OledDriver;
pub use error::OledError;
pub use layout::{format_time, ClockConfig, ClockTime, ColonMode};
pub use transport::{BusTransport, ByteKind};
