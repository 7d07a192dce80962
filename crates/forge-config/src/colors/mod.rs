//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB` and `#RRGGBBAA`, the formats a color picker
//! or a hand-written settings file will produce.

mod parse;

use forge_common::{Color, ConfigError};

use parse::{parse_hex, HEX_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && HEX_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(parse_color("#02030a").unwrap(), Color::from_rgb(2, 3, 10));
    }

    #[test]
    fn parse_short_hex_expands() {
        assert_eq!(parse_color("#f0a").unwrap(), Color::from_rgb(255, 0, 170));
    }

    #[test]
    fn parse_hex_with_alpha() {
        assert_eq!(
            parse_color("#ffd80380").unwrap(),
            Color::from_rgba(255, 216, 3, 128)
        );
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(parse_color("  #ffffff ").unwrap(), Color::from_rgb(255, 255, 255));
    }

    #[test]
    fn parse_rejects_names_and_bad_hex() {
        assert!(matches!(parse_color("teal"), Err(ConfigError::ParseError(_))));
        assert!(matches!(parse_color("#12345"), Err(ConfigError::ParseError(_))));
        assert!(matches!(parse_color("#gggggg"), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn validate_color_formats() {
        assert!(validate_color("#abc"));
        assert!(validate_color("#aabbcc"));
        assert!(validate_color("#aabbccdd"));
        assert!(!validate_color(""));
        assert!(!validate_color("aabbcc"));
        assert!(!validate_color("#aabbc"));
    }
}
