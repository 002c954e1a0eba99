#![forbid(unsafe_code)]

//! Grayscale literal recognition and inversion
//!
//! A grayscale colour literal is exactly `#` followed by six hex digits whose
//! three 2-digit channel groups are numerically equal. Comparison is on the
//! channel value, not the literal characters, so `#AAaaAA` is grayscale 0xAA.
//! Everything else (wrong length, non-hex, unequal channels, no leading `#`)
//! is a non-colour.

/// Parses a literal as a grayscale colour, returning its channel value
///
/// Returns `None` for anything that is not a well-formed grayscale literal.
pub fn parse(literal: &str) -> Option<u8> {
    let hex = literal.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    (r == g && g == b).then_some(r)
}

/// Inverts a single channel value
pub fn invert(grayscale: u8) -> u8 {
    0xFF - grayscale
}

/// Formats a channel value as a canonical grayscale literal
///
/// The channel byte is zero-padded lowercase hex, repeated for all three
/// channels: `format(0x07)` is `"#070707"`.
pub fn format(grayscale: u8) -> String {
    format!("#{grayscale:02x}{grayscale:02x}{grayscale:02x}")
}
