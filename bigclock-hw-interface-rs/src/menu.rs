//! Startup font menu.

use std::io::{self, BufRead, Write};

use bigclock_fonts::FontStyle;

/// The prompt line, e.g. `Select font: [0] Bold  [1] Thin  [2] Wide  [3] Italic: `.
pub fn prompt_text() -> String {
    let options: Vec<String> = FontStyle::ALL
        .iter()
        .map(|s| format!("[{}] {}", *s as u8, s.label()))
        .collect();
    format!("Select font: {}: ", options.join("  "))
}

/// Interpret one line of user input.
///
/// Anything that is not an integer in 0–3 selects [`FontStyle::Bold`].
pub fn parse_font_choice(line: &str) -> FontStyle {
    line.trim()
        .parse::<i64>()
        .map(FontStyle::from_selector)
        .unwrap_or_default()
}

/// Print the prompt to `output` and read one line from `input`.
///
/// End of input selects the default style.
pub fn prompt_font_style<R, W>(input: &mut R, output: &mut W) -> io::Result<FontStyle>
where
    R: BufRead,
    W: Write,
{
    output.write_all(prompt_text().as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_font_choice(&line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_lists_every_style() {
        assert_eq!(
            prompt_text(),
            "Select font: [0] Bold  [1] Thin  [2] Wide  [3] Italic: "
        );
    }

    #[test]
    fn valid_choices() {
        assert_eq!(parse_font_choice("0"), FontStyle::Bold);
        assert_eq!(parse_font_choice("1\n"), FontStyle::Thin);
        assert_eq!(parse_font_choice("  2  \n"), FontStyle::Wide);
        assert_eq!(parse_font_choice("3\r\n"), FontStyle::Italic);
    }

    #[test]
    fn invalid_choices_fall_back_to_bold() {
        assert_eq!(parse_font_choice("7"), FontStyle::Bold);
        assert_eq!(parse_font_choice("-1"), FontStyle::Bold);
        assert_eq!(parse_font_choice("abc"), FontStyle::Bold);
        assert_eq!(parse_font_choice(""), FontStyle::Bold);
        assert_eq!(parse_font_choice("99999999999999999999"), FontStyle::Bold);
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut input = Cursor::new("2\n3\n");
        let mut output = Vec::new();
        let style = prompt_font_style(&mut input, &mut output).unwrap();

        assert_eq!(style, FontStyle::Wide);
        assert_eq!(String::from_utf8(output).unwrap(), prompt_text());
    }

    #[test]
    fn end_of_input_selects_bold() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt_font_style(&mut input, &mut output).unwrap(), FontStyle::Bold);
    }
}
