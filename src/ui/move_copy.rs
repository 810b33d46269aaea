//! Move or Copy dialog widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::messages::Messages;
use crate::state::move_copy::{
    FOCUS_CANCEL, FOCUS_COPY, FOCUS_LIST, FOCUS_MOVE, FOCUS_NEW_FOLDER, MoveOrCopyDialog,
};
use super::Theme;
use super::dialog_helpers::{DialogRenderer, DialogStyles};

const DIALOG_WIDTH: u16 = 64;
const LIST_ROWS: usize = 8;
// border + description + breadcrumb + spacer + list + input + error + buttons + help
const DIALOG_HEIGHT: u16 = 2 + 1 + 1 + 1 + LIST_ROWS as u16 + 1 + 1 + 1 + 1;

const Y_DESCRIPTION: u16 = 1;
const Y_BREADCRUMB: u16 = 2;
const Y_LIST: u16 = 4;
const Y_INPUT: u16 = Y_LIST + LIST_ROWS as u16;
const Y_ERROR: u16 = Y_INPUT + 1;
const Y_BUTTONS: u16 = Y_ERROR + 1;

const INPUT_LABEL: &str = "Name: ";

pub struct MoveOrCopyDialogWidget<'a> {
    dialog: &'a MoveOrCopyDialog,
    messages: &'a Messages,
    theme: &'a Theme,
}

impl<'a> MoveOrCopyDialogWidget<'a> {
    pub fn new(dialog: &'a MoveOrCopyDialog, messages: &'a Messages, theme: &'a Theme) -> Self {
        Self {
            dialog,
            messages,
            theme,
        }
    }
}

impl Widget for MoveOrCopyDialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(dialog_area) =
            DialogRenderer::center_dialog(area, DIALOG_WIDTH, DIALOG_HEIGHT, 30)
        else {
            return;
        };

        let styles = DialogStyles::new(self.theme, self.theme.dialog_bg, self.theme.dialog_border);
        DialogRenderer::fill_background(dialog_area, buf, styles.bg);
        DialogRenderer::draw_border(dialog_area, buf, styles.border);

        let title = format!(" {} ", self.messages.dialog_title(&self.dialog.item.name));
        DialogRenderer::draw_title(dialog_area, buf, &title, styles.title);

        DialogRenderer::draw_list_row(
            dialog_area,
            buf,
            dialog_area.y + Y_DESCRIPTION,
            self.messages.dialog_description(),
            styles.label,
        );

        let crumb = breadcrumb_line(self.dialog, dialog_area.width.saturating_sub(4) as usize);
        DialogRenderer::draw_list_row(dialog_area, buf, dialog_area.y + Y_BREADCRUMB, &crumb, styles.help);

        self.render_folder_list(dialog_area, buf, &styles);

        // Inline new-folder input
        if let Some(input) = &self.dialog.new_folder {
            let input_y = dialog_area.y + Y_INPUT;
            buf.set_string(dialog_area.x + 2, input_y, INPUT_LABEL, styles.label);
            let field_x = dialog_area.x + 2 + INPUT_LABEL.len() as u16;
            let field_width =
                dialog_area.width.saturating_sub(4 + INPUT_LABEL.len() as u16) as usize;
            let input_style = if self.dialog.focus == FOCUS_NEW_FOLDER {
                styles.input_focused
            } else {
                styles.input_unfocused
            };
            DialogRenderer::draw_input_field(
                buf,
                field_x,
                input_y,
                field_width,
                &input.text,
                input_style,
            );
        }

        if let Some(message) = &self.dialog.error_message {
            DialogRenderer::draw_list_row(
                dialog_area,
                buf,
                dialog_area.y + Y_ERROR,
                message,
                styles.error,
            );
        }

        let move_label = if self.dialog.is_move_loading() {
            "[ Moving… ]"
        } else {
            "[ Move here ]"
        };
        let copy_label = if self.dialog.is_copy_loading() {
            "[ Copying… ]"
        } else {
            "[ Copy here ]"
        };
        DialogRenderer::draw_buttons(
            dialog_area,
            buf,
            Y_BUTTONS,
            &[
                (move_label, self.dialog.focus == FOCUS_MOVE),
                (copy_label, self.dialog.focus == FOCUS_COPY),
                ("[ New folder ]", self.dialog.focus == FOCUS_NEW_FOLDER),
                ("[ Cancel ]", self.dialog.focus == FOCUS_CANCEL),
            ],
            styles.button_focused,
            styles.button_unfocused,
        );

        let help = if self.dialog.new_folder.is_some() {
            "Enter=Create  Esc=Back"
        } else if self.dialog.in_search() {
            "Esc=Leave search"
        } else {
            "Enter=Open  Tab=Switch  /=Search  Esc=Cancel"
        };
        DialogRenderer::draw_help(dialog_area, buf, help, styles.help);
    }
}

impl MoveOrCopyDialogWidget<'_> {
    fn render_folder_list(&self, dialog_area: Rect, buf: &mut Buffer, styles: &DialogStyles) {
        let list_focused = self.dialog.focus == FOCUS_LIST;
        let selected_style = Style::default()
            .bg(self.theme.cursor_bg)
            .fg(self.theme.cursor_fg)
            .add_modifier(Modifier::BOLD);

        if self.dialog.in_search() {
            DialogRenderer::draw_list_row(
                dialog_area,
                buf,
                dialog_area.y + Y_LIST,
                "Searching… press Esc to go back",
                styles.help,
            );
            return;
        }
        if self.dialog.is_loading() {
            DialogRenderer::draw_list_row(
                dialog_area,
                buf,
                dialog_area.y + Y_LIST,
                "Loading…",
                styles.help,
            );
            return;
        }
        if self.dialog.rows.is_empty() {
            DialogRenderer::draw_list_row(
                dialog_area,
                buf,
                dialog_area.y + Y_LIST,
                "No subfolders",
                styles.help,
            );
            return;
        }

        let scroll_offset = scroll_window(self.dialog.selected, self.dialog.rows.len(), LIST_ROWS);
        for (i, row) in self
            .dialog
            .rows
            .iter()
            .skip(scroll_offset)
            .take(LIST_ROWS)
            .enumerate()
        {
            let row_index = scroll_offset + i;
            let row_y = dialog_area.y + Y_LIST + i as u16;
            let style = if list_focused && row_index == self.dialog.selected {
                selected_style
            } else if row.action_disabled {
                styles.help
            } else {
                styles.label
            };
            let mut text = if row.kind.is_folder() {
                format!("{}/", row.name)
            } else {
                row.name.clone()
            };
            if row.has_collaborations {
                text.push_str("  ⚑");
            }
            DialogRenderer::draw_list_row(dialog_area, buf, row_y, &text, style);
        }
    }
}

/// First visible index so the selection stays centered in the window.
fn scroll_window(selected: usize, total: usize, visible: usize) -> usize {
    if total <= visible {
        0
    } else if selected < visible / 2 {
        0
    } else if selected >= total - visible / 2 {
        total - visible
    } else {
        selected - visible / 2
    }
}

/// Breadcrumb trail, truncated from the start so the tail stays visible.
fn breadcrumb_line(dialog: &MoveOrCopyDialog, max_width: usize) -> String {
    let full = dialog
        .folders_path
        .iter()
        .map(|entry| entry.name.as_str())
        .collect::<Vec<_>>()
        .join(" / ");
    if full.chars().count() <= max_width {
        return full;
    }

    let keep = max_width.saturating_sub(2);
    let tail: String = full
        .chars()
        .skip(full.chars().count().saturating_sub(keep))
        .collect();
    format!("… {tail}")
}

/// Cursor position inside the inline new-folder input field.
pub fn move_copy_cursor_position(area: Rect, text: &str, cursor: usize) -> Option<(u16, u16)> {
    let dialog_area = DialogRenderer::center_dialog(area, DIALOG_WIDTH, DIALOG_HEIGHT, 30)?;
    let field_x = dialog_area.x + 2 + INPUT_LABEL.len() as u16;
    let field_width = dialog_area.width.saturating_sub(4 + INPUT_LABEL.len() as u16) as usize;

    let max_display = field_width.saturating_sub(1);
    let cursor_x = if text.chars().count() > max_display {
        field_x + max_display as u16
    } else {
        field_x + cursor.min(text.chars().count()) as u16
    };
    Some((cursor_x, dialog_area.y + Y_INPUT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_window_tracks_selection() {
        assert_eq!(scroll_window(0, 4, 8), 0);
        assert_eq!(scroll_window(3, 20, 8), 0);
        assert_eq!(scroll_window(10, 20, 8), 6);
        assert_eq!(scroll_window(19, 20, 8), 12);
    }
}
