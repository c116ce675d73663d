//! Hex color token parser.
//!
//! Color tokens come from UIs and config files in loose forms: `#rrggbb`,
//! `rrggbb`, `#rgb`, or longer strings embedding such a run. The parser
//! extracts the first hexadecimal digit run of exactly 6 (preferred) or 3
//! digits, case-insensitive, and decodes it. A token with no such run
//! decodes to black; that is a defined fallback, never an error.

use crate::model::Rgb;
use tracing::debug;

/// Parse a color token into an RGB triple.
///
/// A 3-digit run is expanded by duplicating each digit (`a1c` becomes
/// `aa11cc`). When no hex run is found the result is black.
pub fn parse_color(token: &str) -> Rgb {
    let Some(run) = find_hex_run(token) else {
        debug!("No hex run in color token {:?}, falling back to black", token);
        return Rgb::BLACK;
    };

    let expanded: String = if run.len() == 3 {
        run.chars().flat_map(|c| [c, c]).collect()
    } else {
        run.to_string()
    };

    // All 6 characters are hex digits, so this cannot fail
    let value = u32::from_str_radix(&expanded, 16).unwrap_or(0);

    Rgb::new(
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    )
}

/// Find the leftmost run of exactly 6 or 3 hex digits, trying 6 before 3
/// at each position.
fn find_hex_run(token: &str) -> Option<&str> {
    let bytes = token.as_bytes();
    for start in 0..bytes.len() {
        let run = bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        if run >= 6 {
            return Some(&token[start..start + 6]);
        }
        if run >= 3 {
            return Some(&token[start..start + 3]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== 6-digit tests ====================

    #[test]
    fn test_parse_six_digit_with_hash() {
        assert_eq!(parse_color("#ff8000"), Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_parse_six_digit_bare() {
        assert_eq!(parse_color("db5182"), Rgb::new(219, 81, 130));
    }

    #[test]
    fn test_parse_uppercase() {
        assert_eq!(parse_color("#FF8000"), Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_parse_black_and_white() {
        assert_eq!(parse_color("#000000"), Rgb::new(0, 0, 0));
        assert_eq!(parse_color("#ffffff"), Rgb::new(255, 255, 255));
    }

    // ==================== 3-digit tests ====================

    #[test]
    fn test_parse_three_digit_duplicates() {
        assert_eq!(parse_color("#f00"), Rgb::new(255, 0, 0));
        assert_eq!(parse_color("a1c"), Rgb::new(0xaa, 0x11, 0xcc));
    }

    #[test]
    fn test_three_and_six_digit_agree() {
        assert_eq!(parse_color("#f00"), parse_color("#ff0000"));
        assert_eq!(parse_color("#0f0"), parse_color("#00ff00"));
    }

    // ==================== Embedded run tests ====================

    #[test]
    fn test_parse_embedded_run() {
        assert_eq!(parse_color("noise a1c!"), Rgb::new(0xaa, 0x11, 0xcc));
    }

    #[test]
    fn test_six_preferred_over_three() {
        // A 7-digit run yields its first 6 digits, not a 3-digit match
        assert_eq!(parse_color("1234567"), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_four_digit_run_yields_three() {
        assert_eq!(parse_color("1234"), Rgb::new(0x11, 0x22, 0x33));
    }

    // ==================== Fallback tests ====================

    #[test]
    fn test_no_match_is_black() {
        assert_eq!(parse_color("xyz"), Rgb::BLACK);
        assert_eq!(parse_color(""), Rgb::BLACK);
        assert_eq!(parse_color("#g0"), Rgb::BLACK);
    }

    #[test]
    fn test_non_ascii_token() {
        assert_eq!(parse_color("héllo ff8000"), Rgb::new(255, 128, 0));
    }
}
