//! Glyph bitmaps for the four font styles.
//!
//! Each row is one glyph: 10 column bytes, bit 0 = top pixel, bit 7 =
//! bottom pixel. Row order follows [`glyph_index`](crate::glyph_index).

use crate::FontTable;

/// Heavy two-pixel strokes.
pub(crate) const FONT_BOLD: FontTable = [
    [0x00, 0x7E, 0xFF, 0xC3, 0xC3, 0xC3, 0xC3, 0xFF, 0x7E, 0x00], // 0
    [0x00, 0x00, 0xC4, 0xC6, 0xFF, 0xFF, 0xC0, 0xC0, 0x00, 0x00], // 1
    [0x00, 0xC6, 0xE7, 0xE3, 0xF3, 0xDB, 0xDF, 0xCE, 0x00, 0x00], // 2
    [0x00, 0x66, 0xE7, 0xC3, 0xDB, 0xDB, 0xFF, 0x7E, 0x00, 0x00], // 3
    [0x00, 0x1F, 0x1F, 0x18, 0x18, 0xFF, 0xFF, 0x18, 0x00, 0x00], // 4
    [0x00, 0x5F, 0xDF, 0xDB, 0xDB, 0xDB, 0xFB, 0x73, 0x00, 0x00], // 5
    [0x00, 0x7E, 0xFF, 0xDB, 0xDB, 0xDB, 0xFB, 0x72, 0x00, 0x00], // 6
    [0x00, 0x03, 0x03, 0xC3, 0xF3, 0x3B, 0x0F, 0x07, 0x00, 0x00], // 7
    [0x00, 0x76, 0xFF, 0xDB, 0xDB, 0xDB, 0xFF, 0x76, 0x00, 0x00], // 8
    [0x00, 0x4E, 0xDF, 0xDB, 0xDB, 0xDB, 0xFF, 0x7E, 0x00, 0x00], // 9
    [0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00], // :
    [0x00; 10],                                                   // space
];

/// Single-pixel strokes.
pub(crate) const FONT_THIN: FontTable = [
    [0x00, 0x00, 0x7E, 0x81, 0x81, 0x81, 0x81, 0x7E, 0x00, 0x00], // 0
    [0x00, 0x00, 0x00, 0x82, 0xFF, 0x80, 0x00, 0x00, 0x00, 0x00], // 1
    [0x00, 0x00, 0xC2, 0xA1, 0x91, 0x89, 0x89, 0x86, 0x00, 0x00], // 2
    [0x00, 0x00, 0x42, 0x81, 0x89, 0x89, 0x89, 0x76, 0x00, 0x00], // 3
    [0x00, 0x00, 0x18, 0x14, 0x12, 0x11, 0xFF, 0x10, 0x00, 0x00], // 4
    [0x00, 0x00, 0x4F, 0x89, 0x89, 0x89, 0x89, 0x71, 0x00, 0x00], // 5
    [0x00, 0x00, 0x7C, 0x8A, 0x89, 0x89, 0x89, 0x70, 0x00, 0x00], // 6
    [0x00, 0x00, 0x01, 0x01, 0xE1, 0x11, 0x09, 0x07, 0x00, 0x00], // 7
    [0x00, 0x00, 0x76, 0x89, 0x89, 0x89, 0x89, 0x76, 0x00, 0x00], // 8
    [0x00, 0x00, 0x0E, 0x91, 0x91, 0x91, 0x51, 0x3E, 0x00, 0x00], // 9
    [0x00, 0x00, 0x00, 0x00, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00], // :
    [0x00; 10],                                                   // space
];

/// Glyphs stretched over the whole cell, doubled vertical strokes.
pub(crate) const FONT_WIDE: FontTable = [
    [0xFF, 0xFF, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0xFF, 0xFF], // 0
    [0x00, 0x80, 0x82, 0x82, 0xFF, 0xFF, 0x80, 0x80, 0x80, 0x00], // 1
    [0xF9, 0xF9, 0x89, 0x89, 0x89, 0x89, 0x89, 0x89, 0x8F, 0x8F], // 2
    [0x81, 0x81, 0x89, 0x89, 0x89, 0x89, 0x89, 0x89, 0xFF, 0xFF], // 3
    [0x0F, 0x0F, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0xFF, 0xFF], // 4
    [0x8F, 0x8F, 0x89, 0x89, 0x89, 0x89, 0x89, 0x89, 0xF9, 0xF9], // 5
    [0xFF, 0xFF, 0x89, 0x89, 0x89, 0x89, 0x89, 0x89, 0xF9, 0xF9], // 6
    [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0xFF, 0xFF], // 7
    [0xFF, 0xFF, 0x89, 0x89, 0x89, 0x89, 0x89, 0x89, 0xFF, 0xFF], // 8
    [0x8F, 0x8F, 0x89, 0x89, 0x89, 0x89, 0x89, 0x89, 0xFF, 0xFF], // 9
    [0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00], // :
    [0x00; 10],                                                   // space
];

/// Single-pixel strokes leaning right.
pub(crate) const FONT_ITALIC: FontTable = [
    [0x00, 0xC0, 0xBC, 0x83, 0x81, 0xC1, 0x3D, 0x03, 0x00, 0x00], // 0
    [0x00, 0x00, 0x80, 0xC0, 0xB0, 0x0C, 0x03, 0x02, 0x00, 0x00], // 1
    [0x00, 0xC0, 0xA0, 0x92, 0x89, 0x89, 0x85, 0x42, 0x00, 0x00], // 2
    [0x00, 0x40, 0x82, 0x89, 0x89, 0x89, 0x75, 0x02, 0x00, 0x00], // 3
    [0x00, 0x18, 0x14, 0x12, 0xF1, 0x1F, 0x10, 0x10, 0x00, 0x00], // 4
    [0x00, 0x40, 0x88, 0x8F, 0x89, 0x89, 0x71, 0x01, 0x00, 0x00], // 5
    [0x00, 0x70, 0x8C, 0x8A, 0x89, 0x89, 0x71, 0x00, 0x00, 0x00], // 6
    [0x00, 0x00, 0x81, 0x61, 0x11, 0x09, 0x05, 0x03, 0x00, 0x00], // 7
    [0x00, 0x60, 0x96, 0x89, 0x89, 0x89, 0x69, 0x06, 0x00, 0x00], // 8
    [0x00, 0x00, 0x8E, 0x91, 0x91, 0x51, 0x31, 0x0E, 0x00, 0x00], // 9
    [0x00, 0x00, 0x00, 0x40, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00], // :
    [0x00; 10],                                                   // space
];
