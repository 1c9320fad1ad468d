//! SSD1306 command constants and the power-on initialisation sequence.
//!
//! The sequence is kept as data so it can be audited against the
//! datasheet line by line. [`OledDriver::init()`] interprets it by sending
//! each command and its arguments, in order, as command bytes.
//!
//! [`OledDriver::init()`]: crate::OledDriver::init

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
pub const SET_CONTRAST: u8 = 0x81;
/// Show display RAM contents (as opposed to forcing every pixel on).
pub const DISPLAY_RESUME_RAM: u8 = 0xA4;
pub const NORMAL_DISPLAY: u8 = 0xA6;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

pub const SET_MEMORY_MODE: u8 = 0x20;
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;
/// Lower column nibble is OR'd into this base.
pub const SET_LOWER_COLUMN: u8 = 0x00;
/// Upper column nibble is OR'd into this base.
pub const SET_HIGHER_COLUMN: u8 = 0x10;
/// Page number (0–7) is added to this base.
pub const SET_PAGE_ADDRESS: u8 = 0xB0;

// ---------------------------------------------------------------------------
// Hardware configuration
// ---------------------------------------------------------------------------

pub const SET_START_LINE: u8 = 0x40;
/// Column 127 mapped to SEG0 (horizontal mirror).
pub const SEGMENT_REMAP: u8 = 0xA1;
pub const SET_MULTIPLEX: u8 = 0xA8;
/// Scan from COM[N-1] to COM0 (vertical mirror).
pub const COM_SCAN_DEC: u8 = 0xC8;
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const SET_COM_PINS: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing and driving
// ---------------------------------------------------------------------------

pub const SET_CLOCK_DIVIDE: u8 = 0xD5;
pub const SET_PRECHARGE: u8 = 0xD9;
pub const SET_VCOMH_DESELECT: u8 = 0xDB;
pub const CHARGE_PUMP: u8 = 0x8D;
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// One command of the initialisation sequence and its argument bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitStep {
    pub command: u8,
    pub args: &'static [u8],
}

const fn step(command: u8, args: &'static [u8]) -> InitStep {
    InitStep { command, args }
}

/// Power-on sequence for a 128×32 panel, in datasheet order.
///
/// Reordering or dropping entries leaves the panel dark, mirrored or
/// garbled.
pub const INIT_SEQUENCE: [InitStep; 16] = [
    step(DISPLAY_OFF, &[]),
    step(SET_CLOCK_DIVIDE, &[0x80]),
    step(SET_MULTIPLEX, &[0x1F]), // 32 rows
    step(SET_DISPLAY_OFFSET, &[0x00]),
    step(SET_START_LINE, &[]),
    step(CHARGE_PUMP, &[CHARGE_PUMP_ENABLE]),
    step(SET_MEMORY_MODE, &[MEMORY_MODE_HORIZONTAL]),
    step(SEGMENT_REMAP, &[]),
    step(COM_SCAN_DEC, &[]),
    step(SET_COM_PINS, &[0x02]),
    step(SET_CONTRAST, &[0x8F]),
    step(SET_PRECHARGE, &[0xF1]),
    step(SET_VCOMH_DESELECT, &[0x40]),
    step(DISPLAY_RESUME_RAM, &[]),
    step(NORMAL_DISPLAY, &[]),
    step(DISPLAY_ON, &[]),
];

/// The initialisation sequence flattened into the command bytes that go
/// on the wire.
pub fn init_bytes() -> impl Iterator<Item = u8> {
    INIT_SEQUENCE
        .iter()
        .flat_map(|s| core::iter::once(s.command).chain(s.args.iter().copied()))
}

/// Page address command for `page`.
pub const fn page_address(page: u8) -> u8 {
    SET_PAGE_ADDRESS + page
}

/// Lower-nibble column address command for column `x`.
pub const fn lower_column(x: u8) -> u8 {
    SET_LOWER_COLUMN | (x & 0x0F)
}

/// Upper-nibble column address command for column `x`.
pub const fn upper_column(x: u8) -> u8 {
    SET_HIGHER_COLUMN | ((x >> 4) & 0x0F)
}
