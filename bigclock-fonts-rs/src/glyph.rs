use crate::{FontTable, Glyph};

/// Table index of the colon glyph.
pub const COLON_INDEX: usize = 10;

/// Table index of the blank glyph used for spaces.
pub const SPACE_INDEX: usize = 11;

/// Map a character to its index in a [`FontTable`].
///
/// Digits map to 0–9, `:` to [`COLON_INDEX`] and a space to
/// [`SPACE_INDEX`]. Any other character falls back to index 0, so an
/// unexpected character renders as the digit zero rather than failing.
pub fn glyph_index(c: char) -> usize {
    match c {
        '0'..='9' => (c as u8 - b'0') as usize,
        ':' => COLON_INDEX,
        ' ' => SPACE_INDEX,
        _ => 0,
    }
}

/// Look up the glyph for `c` in `font`.
pub fn glyph(font: &FontTable, c: char) -> &Glyph {
    &font[glyph_index(c)]
}
