use crate::error::FontError;
use crate::tables::{FONT_BOLD, FONT_ITALIC, FONT_THIN, FONT_WIDE};
use crate::FontTable;

/// Selectable font styles, numbered as presented in the startup menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FontStyle {
    /// Two-pixel strokes. Also the fallback for any unknown selector.
    #[default]
    Bold = 0,
    /// Single-pixel strokes.
    Thin = 1,
    /// Glyphs stretched across the full 10-column cell.
    Wide = 2,
    /// Slanted single-pixel strokes.
    Italic = 3,
}

impl FontStyle {
    /// All styles in menu order.
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Bold,
        FontStyle::Thin,
        FontStyle::Wide,
        FontStyle::Italic,
    ];

    /// Resolve a user-supplied selector, falling back to [`FontStyle::Bold`]
    /// for anything outside 0–3.
    pub fn from_selector(selector: i64) -> Self {
        u8::try_from(selector)
            .ok()
            .and_then(|s| Self::try_from(s).ok())
            .unwrap_or_default()
    }

    /// Menu label for this style.
    pub fn label(self) -> &'static str {
        match self {
            FontStyle::Bold => "Bold",
            FontStyle::Thin => "Thin",
            FontStyle::Wide => "Wide",
            FontStyle::Italic => "Italic",
        }
    }
}

impl TryFrom<u8> for FontStyle {
    type Error = FontError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FontStyle::Bold),
            1 => Ok(FontStyle::Thin),
            2 => Ok(FontStyle::Wide),
            3 => Ok(FontStyle::Italic),
            other => Err(FontError::UnknownStyle(other)),
        }
    }
}

/// Return the glyph table for `style`.
///
/// The returned reference is `'static` and read-only; callers select a font
/// once and hold the reference for as long as they render.
pub fn get_font(style: FontStyle) -> &'static FontTable {
    match style {
        FontStyle::Bold => &FONT_BOLD,
        FontStyle::Thin => &FONT_THIN,
        FontStyle::Wide => &FONT_WIDE,
        FontStyle::Italic => &FONT_ITALIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GLYPH_COUNT, GLYPH_WIDTH};

    #[test]
    fn every_style_has_full_table() {
        for style in FontStyle::ALL {
            let font = get_font(style);
            assert_eq!(font.len(), GLYPH_COUNT);
            for g in font.iter() {
                assert_eq!(g.len(), GLYPH_WIDTH);
            }
        }
    }

    #[test]
    fn selectors_in_range_pick_matching_style() {
        assert_eq!(FontStyle::from_selector(0), FontStyle::Bold);
        assert_eq!(FontStyle::from_selector(1), FontStyle::Thin);
        assert_eq!(FontStyle::from_selector(2), FontStyle::Wide);
        assert_eq!(FontStyle::from_selector(3), FontStyle::Italic);
    }

    #[test]
    fn out_of_range_selector_falls_back_to_bold() {
        for selector in [-1, 4, 255, 256, i64::MIN, i64::MAX] {
            assert_eq!(FontStyle::from_selector(selector), FontStyle::Bold);
            assert_eq!(
                get_font(FontStyle::from_selector(selector)),
                get_font(FontStyle::Bold)
            );
        }
    }

    #[test]
    fn try_from_rejects_unknown_style() {
        assert_eq!(FontStyle::try_from(2), Ok(FontStyle::Wide));
        assert_eq!(FontStyle::try_from(4), Err(FontError::UnknownStyle(4)));
    }

    #[test]
    fn styles_are_distinct_tables() {
        for (i, a) in FontStyle::ALL.iter().enumerate() {
            for b in &FontStyle::ALL[i + 1..] {
                assert_ne!(get_font(*a), get_font(*b), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn discriminants_match_menu_numbers() {
        for (i, style) in FontStyle::ALL.iter().enumerate() {
            assert_eq!(*style as usize, i);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(FontStyle::Bold.label(), "Bold");
        assert_eq!(FontStyle::Italic.label(), "Italic");
    }
}
