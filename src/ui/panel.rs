//! Main browsing panel: breadcrumb header, item list, footer count.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::api::ItemKind;
use crate::config::DisplayConfig;
use crate::state::panel::Panel;
use super::Theme;

pub struct PanelWidget<'a> {
    panel: &'a Panel,
    display: &'a DisplayConfig,
    theme: &'a Theme,
}

impl<'a> PanelWidget<'a> {
    pub fn new(panel: &'a Panel, display: &'a DisplayConfig, theme: &'a Theme) -> Self {
        Self {
            panel,
            display,
            theme,
        }
    }
}

impl Widget for PanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }

        let bg = Style::default().bg(self.theme.panel_bg).fg(self.theme.panel_fg);
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                buf[(x, y)].set_char(' ').set_style(bg);
            }
        }

        let header_style = Style::default()
            .bg(self.theme.panel_header_bg)
            .fg(self.theme.panel_header_fg)
            .add_modifier(Modifier::BOLD);
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(header_style);
        }
        let crumb = self
            .panel
            .collection
            .breadcrumbs
            .iter()
            .map(|entry| entry.name.as_str())
            .collect::<Vec<_>>()
            .join(" / ");
        let header = clip(&crumb, area.width.saturating_sub(2) as usize);
        buf.set_string(area.x + 1, area.y, &header, header_style);

        let list_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height - 2,
        };
        self.render_items(list_area, buf, bg);

        let footer_style = Style::default()
            .bg(self.theme.panel_header_bg)
            .fg(self.theme.panel_header_fg);
        let footer_y = area.y + area.height - 1;
        for x in area.x..area.x + area.width {
            buf[(x, footer_y)].set_char(' ').set_style(footer_style);
        }
        let footer = if self.panel.loading {
            "Loading…".to_string()
        } else {
            format!("{} items", self.panel.collection.total_count)
        };
        buf.set_string(area.x + 1, footer_y, &footer, footer_style);
    }
}

impl PanelWidget<'_> {
    fn render_items(&self, area: Rect, buf: &mut Buffer, bg: Style) {
        let items = &self.panel.collection.items;
        if items.is_empty() {
            let note = if self.panel.loading { "" } else { "Empty folder" };
            buf.set_string(area.x + 2, area.y, note, bg.add_modifier(Modifier::DIM));
            return;
        }

        let visible = area.height as usize;
        let offset = if self.panel.cursor >= visible {
            self.panel.cursor + 1 - visible
        } else {
            0
        };

        for (i, item) in items.iter().skip(offset).take(visible).enumerate() {
            let index = offset + i;
            let y = area.y + i as u16;
            let is_folder = item.kind == ItemKind::Folder;

            let mut style = if is_folder {
                bg.fg(self.theme.folder_fg).add_modifier(Modifier::BOLD)
            } else {
                bg
            };
            if index == self.panel.cursor {
                style = Style::default()
                    .bg(self.theme.cursor_bg)
                    .fg(self.theme.cursor_fg)
                    .add_modifier(Modifier::BOLD);
                for x in area.x..area.x + area.width {
                    buf[(x, y)].set_char(' ').set_style(style);
                }
            }

            let mut line = String::new();
            line.push_str(if is_folder { "/" } else { " " });
            line.push_str(&item.name);
            let line = clip(&line, area.width.saturating_sub(4) as usize);
            buf.set_string(area.x + 1, y, &line, style);

            if self.display.show_shared_marker && item.has_collaborations {
                let marker_x = area.x + 2 + line.chars().count() as u16;
                buf.set_string(marker_x, y, "⚑", style.fg(self.theme.shared_fg));
            }
        }
    }
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut s: String = text.chars().take(max.saturating_sub(1)).collect();
        s.push('…');
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_keeps_short_text() {
        assert_eq!(clip("docs", 10), "docs");
        assert_eq!(clip("a very long name", 8), "a very …");
    }
}
