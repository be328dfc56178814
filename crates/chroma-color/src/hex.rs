//! Hex color string parsing and formatting.
//!
//! # Grammar
//!
//! ```text
//! ^#?([0-9A-Fa-f]{3,4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$
//! ```
//!
//! Three- and four-digit forms expand each digit by duplication
//! (`#1A2` -> `#11AA22FF`). The formatter emits uppercase and drops the
//! alpha pair when alpha is 1.

use crate::{ColorError, ColorResult};

/// Returns true when `s` matches the hex color grammar.
///
/// # Example
///
/// ```rust
/// use chroma_color::is_hex_color;
///
/// assert!(is_hex_color("#1A2"));
/// assert!(is_hex_color("aa88ee"));
/// assert!(is_hex_color("#FF0000E6"));
/// assert!(!is_hex_color("#12345"));
/// assert!(!is_hex_color("#GGHHII"));
/// ```
pub fn is_hex_color(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses a hex color string into RGBA bytes.
pub(crate) fn parse_hex(s: &str) -> ColorResult<[u8; 4]> {
    if !is_hex_color(s) {
        return Err(ColorError::InvalidHex(s.to_string()));
    }
    let digits = s.strip_prefix('#').unwrap_or(s);

    let expanded: Vec<u8> = if digits.len() <= 4 {
        digits.bytes().flat_map(|b| [b, b]).collect()
    } else {
        digits.bytes().collect()
    };

    let byte = |i: usize| -> u8 {
        let pair = std::str::from_utf8(&expanded[i * 2..i * 2 + 2]).unwrap_or("00");
        u8::from_str_radix(pair, 16).unwrap_or(0)
    };

    let alpha = if expanded.len() == 8 { byte(3) } else { 0xFF };
    Ok([byte(0), byte(1), byte(2), alpha])
}

/// Formats RGBA bytes as an uppercase hex string.
///
/// The alpha pair is omitted when alpha is 255.
pub(crate) fn format_hex(r: u8, g: u8, b: u8, a: u8) -> String {
    if a == 0xFF {
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    } else {
        format!("#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar() {
        assert!(is_hex_color("#abc"));
        assert!(is_hex_color("#abcd"));
        assert!(is_hex_color("#aabbcc"));
        assert!(is_hex_color("#aabbccdd"));
        assert!(is_hex_color("aabbcc"));
        assert!(!is_hex_color(""));
        assert!(!is_hex_color("#"));
        assert!(!is_hex_color("#ab"));
        assert!(!is_hex_color("#abcde"));
        assert!(!is_hex_color("#aabbccddee"));
    }

    #[test]
    fn test_short_forms_expand() {
        assert_eq!(parse_hex("#1A2").unwrap(), [0x11, 0xAA, 0x22, 0xFF]);
        assert_eq!(parse_hex("#1A2F").unwrap(), [0x11, 0xAA, 0x22, 0xFF]);
        assert_eq!(parse_hex("#1a28").unwrap(), [0x11, 0xAA, 0x22, 0x88]);
    }

    #[test]
    fn test_long_forms() {
        assert_eq!(parse_hex("aa88ee").unwrap(), [0xAA, 0x88, 0xEE, 0xFF]);
        assert_eq!(parse_hex("#FF0000E6").unwrap(), [0xFF, 0x00, 0x00, 0xE6]);
    }

    #[test]
    fn test_parse_rejects() {
        assert!(parse_hex("#xyz").is_err());
        assert!(parse_hex("12345").is_err());
    }

    #[test]
    fn test_format() {
        assert_eq!(format_hex(0x2B, 0x94, 0x9E, 0xFF), "#2B949E");
        assert_eq!(format_hex(0xFF, 0x00, 0x00, 0xE6), "#FF0000E6");
    }
}
