//! UI helpers - pure presentation functions shared by the draw code

use ratatui::style::Color;

/// Parse a "#RRGGBB" hex string into a terminal color, falling back to
/// white for anything unparseable.
pub fn hex_to_color(hex: &str) -> Color {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Color::White;
    }
    match (
        u8::from_str_radix(&digits[0..2], 16),
        u8::from_str_radix(&digits[2..4], 16),
        u8::from_str_radix(&digits[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

/// Shorten long image references (data URIs especially) for display
pub fn decal_label(image: &str, max: usize) -> String {
    if image.starts_with("data:") {
        let kind = image
            .split(';')
            .next()
            .and_then(|s| s.strip_prefix("data:"))
            .unwrap_or("image");
        return format!("<{} data>", kind);
    }
    if image.chars().count() <= max {
        image.to_string()
    } else {
        let tail: String = image
            .chars()
            .rev()
            .take(max)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("…{tail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(hex_to_color("#0CAFFF"), Color::Rgb(0x0C, 0xAF, 0xFF));
        assert_eq!(hex_to_color("000000"), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn bad_hex_falls_back_to_white() {
        assert_eq!(hex_to_color("#xyzxyz"), Color::White);
        assert_eq!(hex_to_color("#fff"), Color::White);
    }

    #[test]
    fn data_uris_collapse_to_their_kind() {
        assert_eq!(
            decal_label("data:image/png;base64,QUJD", 20),
            "<image/png data>"
        );
    }

    #[test]
    fn short_paths_pass_through() {
        assert_eq!(decal_label("./shirt.png", 20), "./shirt.png");
    }
}
