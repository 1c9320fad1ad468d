/// Errors that can occur when selecting a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Style selector is outside the known styles (must be 0–3).
    UnknownStyle(u8),
}

impl core::fmt::Display for FontError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FontError::UnknownStyle(s) => write!(f, "unknown font style {} (must be 0-3)", s),
        }
    }
}
