//! Color theme.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolved colors used by the widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel
    pub panel_bg: Color,
    pub panel_fg: Color,
    pub panel_header_bg: Color,
    pub panel_header_fg: Color,
    pub folder_fg: Color,
    pub shared_fg: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,

    // Status bar
    pub status_bg: Color,
    pub status_fg: Color,

    // Dialogs
    pub dialog_bg: Color,
    pub dialog_border: Color,
    pub dialog_title: Color,
    pub dialog_text: Color,
    pub dialog_error: Color,
    pub dialog_help: Color,
    pub dialog_input_focused_bg: Color,
    pub dialog_input_focused_fg: Color,
    pub dialog_input_unfocused_fg: Color,
    pub dialog_button_focused_bg: Color,
    pub dialog_button_focused_fg: Color,
    pub dialog_button_unfocused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel_bg: Color::Rgb(0, 0, 128),
            panel_fg: Color::Rgb(192, 192, 192),
            panel_header_bg: Color::Rgb(0, 128, 128),
            panel_header_fg: Color::White,
            folder_fg: Color::White,
            shared_fg: Color::LightCyan,
            cursor_bg: Color::Rgb(0, 128, 128),
            cursor_fg: Color::Black,

            status_bg: Color::Rgb(0, 128, 128),
            status_fg: Color::Black,

            dialog_bg: Color::Rgb(64, 64, 64),
            dialog_border: Color::White,
            dialog_title: Color::LightYellow,
            dialog_text: Color::White,
            dialog_error: Color::LightRed,
            dialog_help: Color::Gray,
            dialog_input_focused_bg: Color::Rgb(0, 0, 128),
            dialog_input_focused_fg: Color::White,
            dialog_input_unfocused_fg: Color::Gray,
            dialog_button_focused_bg: Color::Rgb(0, 128, 128),
            dialog_button_focused_fg: Color::White,
            dialog_button_unfocused: Color::Gray,
        }
    }
}

/// Theme section of the config file: per-key color overrides.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color overrides keyed by field name, e.g. `dialog_bg = "#404040"`.
    #[serde(flatten)]
    pub colors: HashMap<String, String>,
}

impl Theme {
    /// Build the theme from config overrides on top of the defaults.
    /// Unknown keys and unparsable colors are ignored.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &config.colors {
            let Some(color) = parse_color(value) else {
                tracing::warn!(key = %key, value = %value, "invalid theme color");
                continue;
            };
            match key.as_str() {
                "panel_bg" => theme.panel_bg = color,
                "panel_fg" => theme.panel_fg = color,
                "panel_header_bg" => theme.panel_header_bg = color,
                "panel_header_fg" => theme.panel_header_fg = color,
                "folder_fg" => theme.folder_fg = color,
                "shared_fg" => theme.shared_fg = color,
                "cursor_bg" => theme.cursor_bg = color,
                "cursor_fg" => theme.cursor_fg = color,
                "status_bg" => theme.status_bg = color,
                "status_fg" => theme.status_fg = color,
                "dialog_bg" => theme.dialog_bg = color,
                "dialog_border" => theme.dialog_border = color,
                "dialog_title" => theme.dialog_title = color,
                "dialog_text" => theme.dialog_text = color,
                "dialog_error" => theme.dialog_error = color,
                "dialog_help" => theme.dialog_help = color,
                "dialog_input_focused_bg" => theme.dialog_input_focused_bg = color,
                "dialog_input_focused_fg" => theme.dialog_input_focused_fg = color,
                "dialog_input_unfocused_fg" => theme.dialog_input_unfocused_fg = color,
                "dialog_button_focused_bg" => theme.dialog_button_focused_bg = color,
                "dialog_button_focused_fg" => theme.dialog_button_focused_fg = color,
                "dialog_button_unfocused" => theme.dialog_button_unfocused = color,
                _ => tracing::warn!(key = %key, "unknown theme key"),
            }
        }
        theme
    }
}

/// Parse a color from a name or hex value.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    match s.as_str() {
        "black" => return Some(Color::Black),
        "red" => return Some(Color::Red),
        "green" => return Some(Color::Green),
        "yellow" => return Some(Color::Yellow),
        "blue" => return Some(Color::Blue),
        "magenta" => return Some(Color::Magenta),
        "cyan" => return Some(Color::Cyan),
        "white" => return Some(Color::White),
        "gray" | "grey" => return Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => return Some(Color::DarkGray),
        "light_red" | "lightred" => return Some(Color::LightRed),
        "light_green" | "lightgreen" => return Some(Color::LightGreen),
        "light_yellow" | "lightyellow" => return Some(Color::LightYellow),
        "light_blue" | "lightblue" => return Some(Color::LightBlue),
        "light_magenta" | "lightmagenta" => return Some(Color::LightMagenta),
        "light_cyan" | "lightcyan" => return Some(Color::LightCyan),
        "reset" => return Some(Color::Reset),
        _ => {}
    }

    // Hex color: #RRGGBB or RRGGBB
    let hex = s.strip_prefix('#').unwrap_or(&s);
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_hex() {
        assert_eq!(parse_color("blue"), Some(Color::Blue));
        assert_eq!(parse_color("#1e90ff"), Some(Color::Rgb(0x1e, 0x90, 0xff)));
        assert_eq!(parse_color("bogus"), None);
    }

    #[test]
    fn test_config_override_applies() {
        let mut config = ThemeConfig::default();
        config
            .colors
            .insert("dialog_bg".to_string(), "black".to_string());
        config
            .colors
            .insert("no_such_key".to_string(), "red".to_string());
        let theme = Theme::from_config(&config);
        assert_eq!(theme.dialog_bg, Color::Black);
        assert_eq!(theme.dialog_border, Theme::default().dialog_border);
    }
}
