//! Clock layout: configuration, time formatting and centring.

use core::fmt::Write;

use bigclock_fonts::GLYPH_WIDTH;
use heapless::String;

use crate::driver::COLUMNS;

/// Length of a formatted time string (`hh:mm:ss`).
pub const TIME_TEXT_LEN: usize = 8;

/// Fixed-capacity buffer holding one formatted time string.
pub type TimeText = String<TIME_TEXT_LEN>;

// ── ColonMode ────────────────────────────────────────────────────────────

/// How the separators between hours, minutes and seconds are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColonMode {
    /// Colon on every frame.
    #[default]
    Always,
    /// Colon on even seconds, blank on odd seconds.
    Blink,
}

impl ColonMode {
    /// Whether the colon is visible at `second`.
    pub fn shows_colon(self, second: u8) -> bool {
        match self {
            ColonMode::Always => true,
            ColonMode::Blink => second % 2 == 0,
        }
    }
}

// ── ClockConfig ──────────────────────────────────────────────────────────

/// Configuration for the clock layout and refresh loop.
///
/// [`ClockConfig::default()`] reproduces the stock layout: an 8-character
/// time string on page 1 of a 128-column panel, redrawn every 500 ms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    /// Panel width in columns. Default: 128.
    pub display_width: u8,
    /// Width of one glyph in columns. Default: 10.
    pub glyph_width: u8,
    /// Page (8-pixel row) the time is drawn on. Default: 1.
    pub text_page: u8,
    /// Pause between redraws in milliseconds. Default: 500.
    pub refresh_period_ms: u32,
    /// Separator behaviour. Default: [`ColonMode::Always`].
    pub colon: ColonMode,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            display_width: COLUMNS,
            glyph_width: GLYPH_WIDTH as u8,
            text_page: 1,
            refresh_period_ms: 500,
            colon: ColonMode::Always,
        }
    }
}

impl ClockConfig {
    /// Starting column that centres `len` glyphs horizontally.
    ///
    /// Formula: `(display_width - glyph_width * len) / 2`, truncating.
    /// Odd remainders leave the text one column left of true centre.
    /// Text wider than the panel starts at column 0.
    pub fn centered_x(&self, len: usize) -> u8 {
        let text_width = len.saturating_mul(self.glyph_width as usize);
        let free = (self.display_width as usize).saturating_sub(text_width);
        (free / 2) as u8
    }
}

// ── ClockTime ────────────────────────────────────────────────────────────

/// Wall-clock snapshot in 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockTime {
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// Format `time` as `hh:mm:ss`, or `hh mm ss` when `show_colon` is false.
///
/// Fields are zero-padded to two digits. Values above 99 do not fit the
/// buffer and are truncated.
pub fn format_time(time: &ClockTime, show_colon: bool) -> TimeText {
    let sep = if show_colon { ':' } else { ' ' };
    let mut buf = TimeText::new();
    // core::fmt::Write, no alloc needed.
    let _ = write!(
        buf,
        "{:02}{}{:02}{}{:02}",
        time.hour, sep, time.minute, sep, time.second
    );
    buf
}

// ── Tests ────────────────────────────────────────────────────────────────
