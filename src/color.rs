//! Color-string validation and luminance classification.
//!
//! Colors travel through the resolver as CSS-compatible strings. This module
//! decides which strings are legal (hex forms plus a fixed named table),
//! normalizes the common upstream mistake of omitting the `#` prefix, and
//! computes WCAG relative luminance for light/dark classification.

/// True when `input` is a legal color string as-is.
pub fn is_color(input: &str) -> bool {
    parse_rgb(input).is_some()
}

/// Normalize a user-supplied color.
///
/// Accepts the string as-is when legal; otherwise retries with a `#` prefix
/// (upstream callers may omit it on hex colors). Returns `None` when neither
/// form is legal.
pub fn normalize_color(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if is_color(trimmed) {
        return Some(trimmed.to_string());
    }
    let prefixed = format!("#{trimmed}");
    is_color(&prefixed).then_some(prefixed)
}

/// Parse a color string into RGB components.
///
/// Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA` (alpha ignored), and a fixed
/// table of CSS color names.
pub fn parse_rgb(input: &str) -> Option<(u8, u8, u8)> {
    let normalized = input.trim().to_ascii_lowercase();
    if let Some(hex) = normalized.strip_prefix('#') {
        return parse_hex(hex);
    }

    let rgb = match normalized.as_str() {
        "black" => (0x00, 0x00, 0x00),
        "white" => (0xff, 0xff, 0xff),
        "red" => (0xff, 0x00, 0x00),
        "darkred" => (0x8b, 0x00, 0x00),
        "green" => (0x00, 0x80, 0x00),
        "darkgreen" => (0x00, 0x64, 0x00),
        "lime" => (0x00, 0xff, 0x00),
        "blue" => (0x00, 0x00, 0xff),
        "darkblue" => (0x00, 0x00, 0x8b),
        "navy" => (0x00, 0x00, 0x80),
        "yellow" => (0xff, 0xff, 0x00),
        "orange" => (0xff, 0xa5, 0x00),
        "purple" => (0x80, 0x00, 0x80),
        "magenta" | "fuchsia" => (0xff, 0x00, 0xff),
        "cyan" | "aqua" => (0x00, 0xff, 0xff),
        "teal" => (0x00, 0x80, 0x80),
        "gray" | "grey" => (0x80, 0x80, 0x80),
        "darkgray" | "darkgrey" => (0xa9, 0xa9, 0xa9),
        "lightgray" | "lightgrey" => (0xd3, 0xd3, 0xd3),
        "silver" => (0xc0, 0xc0, 0xc0),
        "maroon" => (0x80, 0x00, 0x00),
        "olive" => (0x80, 0x80, 0x00),
        "brown" => (0xa5, 0x2a, 0x2a),
        "pink" => (0xff, 0xc0, 0xcb),
        _ => return None,
    };
    Some(rgb)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some((r * 17, g * 17, b * 17))
        }
        // Alpha in 8-digit form does not participate in luminance.
        6 | 8 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// WCAG relative luminance of a color string, in `0.0..=1.0`.
///
/// Returns `None` when the string is not a legal color.
pub fn luminance(input: &str) -> Option<f64> {
    let (r, g, b) = parse_rgb(input)?;
    Some(0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b))
}

fn linearize(channel: u8) -> f64 {
    let srgb = f64::from(channel) / 255.0;
    if srgb <= 0.03928 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_forms_parse() {
        assert_eq!(parse_rgb("#010203"), Some((1, 2, 3)));
        assert_eq!(parse_rgb("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_rgb("#01020380"), Some((1, 2, 3)));
        assert_eq!(parse_rgb("#FFAA00"), Some((0xff, 0xaa, 0x00)));
    }

    #[test]
    fn named_colors_parse() {
        assert_eq!(parse_rgb("black"), Some((0, 0, 0)));
        assert_eq!(parse_rgb("White"), Some((255, 255, 255)));
        assert_eq!(parse_rgb("grey"), parse_rgb("gray"));
    }

    #[test]
    fn malformed_strings_rejected() {
        assert!(parse_rgb("").is_none());
        assert!(parse_rgb("#12345").is_none());
        assert!(parse_rgb("#gggggg").is_none());
        assert!(parse_rgb("not-a-color").is_none());
    }

    #[test]
    fn normalize_accepts_legal_colors_as_is() {
        assert_eq!(normalize_color("#ff4b4b").as_deref(), Some("#ff4b4b"));
        assert_eq!(normalize_color("orange").as_deref(), Some("orange"));
    }

    #[test]
    fn normalize_retries_with_hash_prefix() {
        assert_eq!(normalize_color("ff4b4b").as_deref(), Some("#ff4b4b"));
        assert_eq!(normalize_color("abc").as_deref(), Some("#abc"));
    }

    #[test]
    fn normalize_rejects_illegal_colors() {
        assert!(normalize_color("bogus").is_none());
        assert!(normalize_color("#12").is_none());
        assert!(normalize_color("").is_none());
        assert!(normalize_color("   ").is_none());
    }

    #[test]
    fn luminance_endpoints() {
        let white = luminance("#ffffff").expect("white");
        let black = luminance("#000000").expect("black");
        assert!((white - 1.0).abs() < 1e-9, "got {white}");
        assert!(black.abs() < 1e-9, "got {black}");
    }

    #[test]
    fn luminance_straddles_midpoint_on_boundary_grays() {
        // #bcbcbc sits just above the 0.5 classification threshold and
        // #bbbbbb just below it.
        let above = luminance("#bcbcbc").expect("above");
        let below = luminance("#bbbbbb").expect("below");
        assert!(above > 0.5, "got {above}");
        assert!(below < 0.5, "got {below}");
    }

    #[test]
    fn luminance_rejects_illegal_input() {
        assert!(luminance("nope").is_none());
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn valid_hex_normalizes_with_or_without_prefix(
                hex in proptest::string::string_regex("[0-9a-fA-F]{6}").expect("regex")
            ) {
                let prefixed = format!("#{hex}");
                prop_assert!(is_color(&prefixed));
                prop_assert_eq!(normalize_color(&prefixed).as_deref(), Some(prefixed.as_str()));
                prop_assert_eq!(normalize_color(&hex).as_deref(), Some(prefixed.as_str()));
            }

            #[test]
            fn non_color_words_never_normalize(
                word in proptest::string::string_regex("[g-m]{3,8}").expect("regex")
            ) {
                prop_assert_eq!(normalize_color(&word), None);
            }

            #[test]
            fn luminance_stays_in_unit_range(
                hex in proptest::string::string_regex("[0-9a-f]{6}").expect("regex")
            ) {
                let lum = luminance(&format!("#{hex}")).expect("legal color");
                prop_assert!((0.0..=1.0).contains(&lum));
            }
        }
    }
}
