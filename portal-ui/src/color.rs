use iced::Color;
pub const BLACK: Color = iced::Color::BLACK;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const GREY_4: Color = Color::from_rgb(
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
    0x42 as f32 / 255.0,
);
pub const GREY_3: Color = Color::from_rgb(
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
    0x71 as f32 / 255.0,
);
pub const GREY_2: Color = Color::from_rgb(
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
    0xCC as f32 / 255.0,
);
pub const GREY_1: Color = Color::from_rgb(
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
    0xE6 as f32 / 255.0,
);
pub const RED: Color = Color::from_rgb(
    0xF0 as f32 / 255.0,
    0x43 as f32 / 255.0,
    0x59 as f32 / 255.0,
);
/// Default accent of the portal when the site has no brand color.
pub const ACCENT: Color = Color::from_rgb(
    0x1D as f32 / 255.0,
    0x1D as f32 / 255.0,
    0x1D as f32 / 255.0,
);

/// Parses a `#rrggbb` or `#rgb` css color.
pub fn from_hex(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    let (r, g, b) = match digits.len() {
        6 => (
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        ),
        3 => {
            let expand = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
            (expand(0)?, expand(1)?, expand(2)?)
        }
        _ => return None,
    };
    Some(Color::from_rgb8(r, g, b))
}

/// Whether the color is the portal default accent, which gets an underlined
/// link instead of a colored one.
pub fn is_default_accent(hex: &str) -> bool {
    hex.trim().eq_ignore_ascii_case("#1d1d1d")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(from_hex("#1d1d1d"), Some(ACCENT));
        assert_eq!(from_hex("#fff"), Some(WHITE));
        assert_eq!(from_hex("  #FF0000 "), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(from_hex("1d1d1d"), None);
        assert_eq!(from_hex("#12345"), None);
        assert_eq!(from_hex("#zzzzzz"), None);
        assert_eq!(from_hex("#ééé"), None);
    }

    #[test]
    fn default_accent() {
        assert!(is_default_accent("#1D1D1D"));
        assert!(!is_default_accent("#ff1a75"));
    }
}
