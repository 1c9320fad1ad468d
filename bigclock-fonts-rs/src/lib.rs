//! Large-digit bitmap fonts for the bigclock OLED display.
//!
//! Every font is a fixed [`FontTable`] of [`GLYPH_COUNT`] glyphs, each
//! [`GLYPH_WIDTH`] bytes wide. One byte is one vertical strip of 8 pixels
//! with the least-significant bit at the top, which matches the SSD1306
//! page layout in horizontal addressing mode.
//!
//! ```text
//! index:  0 1 2 3 4 5 6 7 8 9  10  11
//! glyph:  0 1 2 3 4 5 6 7 8 9   :  (space)
//! ```
//!
//! # Quick start
//!
//! ```
//! use bigclock_fonts::{get_font, glyph, FontStyle};
//!
//! let font = get_font(FontStyle::from_selector(2));
//! let colon = glyph(font, ':');
//! assert_eq!(colon.len(), 10);
//! ```
//!
//! # `no_std` Compatibility
//!
//! All tables are `const` data; the crate performs no allocation. The
//! optional `defmt` feature derives [`defmt::Format`] on the public types.

#![no_std]

mod error;
mod glyph;
mod style;
mod tables;

pub use error::FontError;
pub use glyph::{glyph, glyph_index, COLON_INDEX, SPACE_INDEX};
pub use style::{get_font, FontStyle};

/// Width of one glyph in display columns (bytes).
pub const GLYPH_WIDTH: usize = 10;

/// Number of entries in every font table: digits 0–9, colon, space.
pub const GLYPH_COUNT: usize = 12;

/// One column-encoded glyph.
pub type Glyph = [u8; GLYPH_WIDTH];

/// A complete font: one [`Glyph`] per supported character.
pub type FontTable = [Glyph; GLYPH_COUNT];
