//! One-line status bar at the bottom of the screen.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use super::Theme;

pub struct StatusBar<'a> {
    note: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(note: &'a str, theme: &'a Theme) -> Self {
        Self { note, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let style = Style::default().bg(self.theme.status_bg).fg(self.theme.status_fg);
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(style);
        }
        let text = if self.note.is_empty() {
            "F2 Actions  F3 Sort  F4 Reverse  F6 Move/Copy  Enter Open  Backspace Up  F10 Quit"
        } else {
            self.note
        };
        let clipped: String = text
            .chars()
            .take(area.width.saturating_sub(2) as usize)
            .collect();
        buf.set_string(area.x + 1, area.y, &clipped, style);
    }
}
