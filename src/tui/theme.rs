use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub done: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x41, 0x96, 0xFB),
            dim: Color::Rgb(0x70, 0x70, 0x88),
            done: Color::Rgb(0x44, 0xCC, 0x77),
            warning: Color::Rgb(0xFF, 0xD7, 0x00),
        }
    }
}

impl Theme {
    /// Build the theme from config overrides; unparseable or missing values
    /// keep their defaults.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        apply(&mut theme.background, &ui.background);
        apply(&mut theme.text, &ui.text);
        apply(&mut theme.text_bright, &ui.text_bright);
        apply(&mut theme.highlight, &ui.highlight);
        apply(&mut theme.dim, &ui.dim);
        apply(&mut theme.done, &ui.done);
        apply(&mut theme.warning, &ui.warning);
        theme
    }
}

fn apply(slot: &mut Color, value: &Option<String>) {
    if let Some(color) = value.as_deref().and_then(parse_color) {
        *slot = color;
    }
}

/// Parse a `#RRGGBB` string into a Color
fn parse_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_hex() {
        assert_eq!(parse_color("#FB4196"), Some(Color::Rgb(0xFB, 0x41, 0x96)));
        assert_eq!(parse_color("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_color("FB4196"), None);
        assert_eq!(parse_color("#FB41"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
    }

    #[test]
    fn parse_rejects_multibyte_without_panicking() {
        // 6 bytes but not 6 ASCII hex digits — must not slice mid-char
        assert_eq!(parse_color("#aa\u{65E5}a"), None);
        assert_eq!(parse_color("#日本"), None);
    }

    #[test]
    fn config_overrides_apply() {
        let ui = UiConfig {
            highlight: Some("#FF0000".into()),
            dim: Some("bogus".into()),
            ..Default::default()
        };
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.highlight, Color::Rgb(0xFF, 0, 0));
        assert_eq!(theme.dim, Theme::default().dim);
    }
}
