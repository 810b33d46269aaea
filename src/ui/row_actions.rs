//! Per-row "more actions" menu.
//!
//! [`more_actions_renderer`] is a pure factory: it closes over a fixed set of
//! capability flags and callback references and returns a render function
//! that, given one row's item, produces a menu pre-bound to that item and
//! all flags/callbacks. The factory holds no state of its own.

use std::rc::Rc;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::api::Item;
use crate::config::ActionConfig;
use super::Theme;
use super::dialog_helpers::{DialogRenderer, DialogStyles};

/// Callback bound to a row item when a menu entry is activated.
pub type RowCallback = Rc<dyn Fn(&Item)>;

/// Which actions the menu may offer. Fixed per app instance.
#[derive(Clone, Copy, Debug)]
pub struct RowActionFlags {
    pub can_preview: bool,
    pub can_share: bool,
    pub can_move_or_copy: bool,
    pub can_download: bool,
    pub can_delete: bool,
    pub can_rename: bool,
}

impl From<&ActionConfig> for RowActionFlags {
    fn from(config: &ActionConfig) -> Self {
        Self {
            can_preview: config.can_preview,
            can_share: config.can_share,
            can_move_or_copy: config.can_move_or_copy,
            can_download: config.can_download,
            can_delete: config.can_delete,
            can_rename: config.can_rename,
        }
    }
}

/// One menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Open,
    Preview,
    Share,
    MoveOrCopy,
    Download,
    Rename,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Open => "Open",
            RowAction::Preview => "Preview",
            RowAction::Share => "Share…",
            RowAction::MoveOrCopy => "Move or copy…",
            RowAction::Download => "Download",
            RowAction::Rename => "Rename…",
            RowAction::Delete => "Delete",
        }
    }

    /// Shorter labels for compact layouts.
    pub fn short_label(self) -> &'static str {
        match self {
            RowAction::Open => "Open",
            RowAction::Preview => "View",
            RowAction::Share => "Share",
            RowAction::MoveOrCopy => "Move/copy",
            RowAction::Download => "Get",
            RowAction::Rename => "Rename",
            RowAction::Delete => "Delete",
        }
    }
}

/// Callback references the menu binds each entry to.
#[derive(Clone)]
pub struct RowActionHandlers {
    pub on_select: RowCallback,
    pub on_preview: RowCallback,
    pub on_share: RowCallback,
    pub on_move_or_copy: RowCallback,
    pub on_download: RowCallback,
    pub on_rename: RowCallback,
    pub on_delete: RowCallback,
}

/// A contextual menu bound to one item. Entries for disabled capabilities
/// are absent entirely.
pub struct RowActionsMenu {
    item: Item,
    entries: Vec<RowAction>,
    handlers: RowActionHandlers,
    compact: bool,
}

impl RowActionsMenu {
    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn entries(&self) -> &[RowAction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Invoke the callback for the given entry with the bound item.
    pub fn activate(&self, index: usize) {
        let Some(action) = self.entries.get(index) else {
            return;
        };
        let callback = match action {
            RowAction::Open => &self.handlers.on_select,
            RowAction::Preview => &self.handlers.on_preview,
            RowAction::Share => &self.handlers.on_share,
            RowAction::MoveOrCopy => &self.handlers.on_move_or_copy,
            RowAction::Download => &self.handlers.on_download,
            RowAction::Rename => &self.handlers.on_rename,
            RowAction::Delete => &self.handlers.on_delete,
        };
        callback(&self.item);
    }
}

/// Build the per-row menu factory. The returned function is the only thing
/// the table rendering layer sees.
pub fn more_actions_renderer(
    flags: RowActionFlags,
    handlers: RowActionHandlers,
    compact: bool,
) -> impl Fn(&Item) -> RowActionsMenu {
    move |item: &Item| {
        let mut entries = vec![RowAction::Open];
        if flags.can_preview {
            entries.push(RowAction::Preview);
        }
        if flags.can_share {
            entries.push(RowAction::Share);
        }
        if flags.can_move_or_copy {
            entries.push(RowAction::MoveOrCopy);
        }
        if flags.can_download {
            entries.push(RowAction::Download);
        }
        if flags.can_rename {
            entries.push(RowAction::Rename);
        }
        if flags.can_delete {
            entries.push(RowAction::Delete);
        }

        RowActionsMenu {
            item: item.clone(),
            entries,
            handlers: handlers.clone(),
            compact,
        }
    }
}

/// Widget for the open row menu.
pub struct RowActionsMenuWidget<'a> {
    menu: &'a RowActionsMenu,
    selected: usize,
    theme: &'a Theme,
}

impl<'a> RowActionsMenuWidget<'a> {
    pub fn new(menu: &'a RowActionsMenu, selected: usize, theme: &'a Theme) -> Self {
        Self {
            menu,
            selected,
            theme,
        }
    }
}

impl Widget for RowActionsMenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = if self.menu.is_compact() { 20 } else { 30 };
        let height = self.menu.len() as u16 + 3;

        let Some(dialog_area) = DialogRenderer::center_dialog(area, width, height, 16) else {
            return;
        };

        let styles = DialogStyles::new(self.theme, self.theme.dialog_bg, self.theme.dialog_border);
        DialogRenderer::fill_background(dialog_area, buf, styles.bg);
        DialogRenderer::draw_border(dialog_area, buf, styles.border);

        let name = self.menu.item().name.as_str();
        let max_title = dialog_area.width.saturating_sub(4) as usize;
        let title = if name.chars().count() > max_title {
            let short: String = name.chars().take(max_title.saturating_sub(1)).collect();
            format!(" {short}… ")
        } else {
            format!(" {name} ")
        };
        DialogRenderer::draw_title(dialog_area, buf, &title, styles.title);

        let selected_style = Style::default()
            .bg(self.theme.cursor_bg)
            .fg(self.theme.cursor_fg)
            .add_modifier(Modifier::BOLD);

        for (i, action) in self.menu.entries().iter().enumerate() {
            let row_y = dialog_area.y + 1 + i as u16;
            let style = if i == self.selected {
                selected_style
            } else {
                styles.label
            };
            let label = if self.menu.is_compact() {
                action.short_label()
            } else {
                action.label()
            };
            DialogRenderer::draw_list_row(dialog_area, buf, row_y, label, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ItemKind;
    use std::cell::RefCell;

    fn item(name: &str) -> Item {
        Item {
            id: "42".to_string(),
            name: name.to_string(),
            kind: ItemKind::File,
            has_collaborations: false,
        }
    }

    fn recording_handlers(log: &Rc<RefCell<Vec<String>>>) -> RowActionHandlers {
        let record = |tag: &'static str| -> RowCallback {
            let log = log.clone();
            Rc::new(move |item: &Item| {
                log.borrow_mut().push(format!("{tag}:{}", item.id));
            })
        };
        RowActionHandlers {
            on_select: record("select"),
            on_preview: record("preview"),
            on_share: record("share"),
            on_move_or_copy: record("move_or_copy"),
            on_download: record("download"),
            on_rename: record("rename"),
            on_delete: record("delete"),
        }
    }

    fn all_flags() -> RowActionFlags {
        RowActionFlags::from(&ActionConfig::default())
    }

    #[test]
    fn test_menu_offers_all_enabled_actions() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let render = more_actions_renderer(all_flags(), recording_handlers(&log), false);

        let menu = render(&item("notes.txt"));
        assert_eq!(
            menu.entries(),
            &[
                RowAction::Open,
                RowAction::Preview,
                RowAction::Share,
                RowAction::MoveOrCopy,
                RowAction::Download,
                RowAction::Rename,
                RowAction::Delete,
            ]
        );
    }

    #[test]
    fn test_disabled_capabilities_are_absent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let flags = RowActionFlags {
            can_preview: false,
            can_share: false,
            can_move_or_copy: true,
            can_download: false,
            can_delete: false,
            can_rename: false,
        };
        let render = more_actions_renderer(flags, recording_handlers(&log), false);

        let menu = render(&item("notes.txt"));
        assert_eq!(menu.entries(), &[RowAction::Open, RowAction::MoveOrCopy]);
    }

    #[test]
    fn test_activate_invokes_bound_callback_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let render = more_actions_renderer(all_flags(), recording_handlers(&log), false);

        let menu = render(&item("notes.txt"));
        let move_or_copy = menu
            .entries()
            .iter()
            .position(|a| *a == RowAction::MoveOrCopy)
            .unwrap();
        menu.activate(move_or_copy);
        assert_eq!(log.borrow().as_slice(), ["move_or_copy:42"]);
    }

    #[test]
    fn test_activate_out_of_range_is_ignored() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let render = more_actions_renderer(all_flags(), recording_handlers(&log), false);
        let menu = render(&item("notes.txt"));
        menu.activate(menu.len());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_each_menu_is_bound_to_its_own_item() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let render = more_actions_renderer(all_flags(), recording_handlers(&log), false);

        let first = render(&Item {
            id: "1".to_string(),
            ..item("a")
        });
        let second = render(&Item {
            id: "2".to_string(),
            ..item("b")
        });
        first.activate(0);
        second.activate(0);
        assert_eq!(log.borrow().as_slice(), ["select:1", "select:2"]);
    }
}
