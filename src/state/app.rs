//! Top-level application state and event plumbing.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use crate::api::{CloudClient, Item, ItemKind, PathEntry};
use crate::config::{Config, DisplayConfig};
use crate::messages::Messages;
use crate::ui::{
    RowAction, RowActionFlags, RowActionHandlers, RowActionsMenu, Theme, more_actions_renderer,
};
use super::background::{ApiTask, FetchTarget, TaskResult};
use super::mode::Mode;
use super::move_copy::{DialogCommand, MoveOrCopyDialog};
use super::panel::Panel;

/// Event emitted by a row menu callback, routed back through the app's
/// channel so the menu closures stay free of app borrows.
pub enum AppEvent {
    RowAction(RowAction, Item),
}

pub struct App {
    pub panel: Panel,
    pub mode: Mode,
    pub theme: Theme,
    pub messages: Messages,
    pub display: DisplayConfig,
    /// Account label for the status bar; empty when unset.
    pub account: String,
    pub status_note: String,
    pub should_quit: bool,
    client: Arc<dyn CloudClient>,
    tasks: Vec<ApiTask>,
    events_rx: Receiver<AppEvent>,
    /// Per-row menu factory, fixed at startup from the action flags.
    row_menu: Box<dyn Fn(&Item) -> RowActionsMenu>,
}

impl App {
    pub fn new(config: &Config, client: Arc<dyn CloudClient>) -> Self {
        let (events_tx, events_rx) = channel::<AppEvent>();

        let flags = RowActionFlags::from(&config.actions);
        let handlers = row_handlers(&events_tx);
        let row_menu = Box::new(more_actions_renderer(
            flags,
            handlers,
            config.display.compact,
        ));

        let root = PathEntry::new(
            config.api.root_folder_id.clone(),
            config.api.root_name.clone(),
        );

        Self {
            panel: Panel::new(root),
            mode: Mode::Normal,
            theme: Theme::from_config(&config.theme),
            messages: config.messages.clone(),
            display: config.display.clone(),
            account: config.api.account.clone(),
            status_note: String::new(),
            should_quit: false,
            client,
            tasks: Vec::new(),
            events_rx,
            row_menu,
        }
    }

    /// Fetch the panel's current folder.
    pub fn refresh_panel(&mut self, force: bool) {
        let folder_id = self.panel.folder_id.clone();
        self.fetch_panel_folder(&folder_id, force);
    }

    fn fetch_panel_folder(&mut self, folder_id: &str, force: bool) {
        let (request_id, query) = self.panel.start_fetch(folder_id, force);
        self.tasks.push(ApiTask::fetch_folder(
            self.client.clone(),
            FetchTarget::Panel,
            request_id,
            folder_id.to_string(),
            query,
        ));
    }

    /// Enter the selected item if it is a folder.
    pub fn enter_selected(&mut self) {
        let Some(item) = self.panel.selected_item() else {
            return;
        };
        if item.kind != ItemKind::Folder {
            self.status_note = format!("\"{}\" is not a folder", item.name);
            return;
        }
        let folder_id = item.id.clone();
        self.panel.cursor = 0;
        self.fetch_panel_folder(&folder_id, false);
    }

    /// Switch to the next sort field and refetch.
    pub fn cycle_sort(&mut self) {
        self.panel.cycle_sort();
        self.note_sort();
        self.refresh_panel(false);
    }

    /// Flip the sort direction and refetch.
    pub fn reverse_sort(&mut self) {
        self.panel.reverse_sort();
        self.note_sort();
        self.refresh_panel(false);
    }

    fn note_sort(&mut self) {
        self.status_note = format!(
            "Sort: {} {}",
            self.panel.sort_by.as_str(),
            self.panel.direction.as_str()
        );
    }

    /// Go up one level in the panel's breadcrumb.
    pub fn go_to_parent(&mut self) {
        let Some(parent) = self.panel.parent() else {
            return;
        };
        let folder_id = parent.id.clone();
        self.panel.cursor = 0;
        self.fetch_panel_folder(&folder_id, false);
    }

    /// Open the row action menu for the selected item.
    pub fn open_row_menu(&mut self) {
        let Some(item) = self.panel.selected_item() else {
            return;
        };
        let menu = (self.row_menu)(item);
        self.mode = Mode::RowActions { menu, selected: 0 };
    }

    /// Open the Move or Copy dialog for `item` and issue its first fetch.
    pub fn open_move_or_copy(&mut self, item: Item) {
        let (dialog, fetch) =
            MoveOrCopyDialog::open(&self.panel.collection, &self.panel.folder_id, item);
        self.mode = Mode::MoveOrCopy { dialog };
        self.run_dialog_command(fetch);
    }

    /// Execute a side effect requested by the dialog controller.
    pub fn run_dialog_command(&mut self, command: DialogCommand) {
        match command {
            DialogCommand::Fetch {
                request_id,
                folder_id,
                query,
            } => {
                self.tasks.push(ApiTask::fetch_folder(
                    self.client.clone(),
                    FetchTarget::Dialog,
                    request_id,
                    folder_id,
                    query,
                ));
            }
            DialogCommand::Transfer {
                request_id,
                op,
                kind,
                item_id,
                dest_folder_id,
            } => {
                self.tasks.push(ApiTask::transfer(
                    self.client.clone(),
                    request_id,
                    op,
                    kind,
                    item_id,
                    dest_folder_id,
                ));
            }
            DialogCommand::Close => {
                self.mode = Mode::Normal;
                self.refresh_panel(true);
            }
            DialogCommand::Noop => {}
        }
    }

    /// Collect finished background tasks and route their results.
    pub fn poll_tasks(&mut self) {
        let mut results = Vec::new();
        self.tasks.retain(|task| match task.try_recv() {
            Some(result) => {
                results.push(result);
                false
            }
            None => true,
        });

        for result in results {
            match result {
                TaskResult::Listed {
                    target: FetchTarget::Panel,
                    request_id,
                    result,
                } => {
                    self.panel.on_listed(request_id, result);
                }
                TaskResult::Listed {
                    target: FetchTarget::Dialog,
                    request_id,
                    result,
                } => {
                    if let Mode::MoveOrCopy { dialog } = &mut self.mode {
                        dialog.on_folder_listed(request_id, result);
                    }
                }
                TaskResult::TransferDone { request_id, result } => {
                    let command = if let Mode::MoveOrCopy { dialog } = &mut self.mode {
                        dialog.on_transfer_done(request_id, result, &self.messages)
                    } else {
                        DialogCommand::Noop
                    };
                    if command == DialogCommand::Close {
                        self.status_note = "Done".to_string();
                    }
                    self.run_dialog_command(command);
                }
            }
        }
    }

    /// Apply events emitted by row menu callbacks.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::RowAction(RowAction::Open, item) => {
                    if item.kind == ItemKind::Folder {
                        let folder_id = item.id.clone();
                        self.panel.cursor = 0;
                        self.fetch_panel_folder(&folder_id, false);
                    } else {
                        self.status_note = format!("No viewer for \"{}\"", item.name);
                    }
                }
                AppEvent::RowAction(RowAction::MoveOrCopy, item) => {
                    self.open_move_or_copy(item);
                }
                AppEvent::RowAction(action, item) => {
                    self.status_note = format!("{}: \"{}\"", action.label(), item.name);
                }
            }
        }
    }
}

/// Bind every menu entry to a callback that forwards the action and its
/// item over the app channel.
fn row_handlers(events_tx: &Sender<AppEvent>) -> RowActionHandlers {
    let send = |action: RowAction| {
        let tx = events_tx.clone();
        std::rc::Rc::new(move |item: &Item| {
            let _ = tx.send(AppEvent::RowAction(action, item.clone()));
        }) as std::rc::Rc<dyn Fn(&Item)>
    };

    RowActionHandlers {
        on_select: send(RowAction::Open),
        on_preview: send(RowAction::Preview),
        on_share: send(RowAction::Share),
        on_move_or_copy: send(RowAction::MoveOrCopy),
        on_download: send(RowAction::Download),
        on_rename: send(RowAction::Rename),
        on_delete: send(RowAction::Delete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResult, Collection, ListQuery};

    struct StubClient;

    impl CloudClient for StubClient {
        fn folder_items(&self, _folder_id: &str, _query: &ListQuery) -> ApiResult<Collection> {
            Ok(Collection {
                id: "0".to_string(),
                name: "All Files".to_string(),
                breadcrumbs: Vec::new(),
                items: Vec::new(),
                total_count: 0,
            })
        }
        fn move_file(&self, _item_id: &str, _dest: &str) -> ApiResult<()> {
            Ok(())
        }
        fn copy_file(&self, _item_id: &str, _dest: &str) -> ApiResult<()> {
            Ok(())
        }
        fn move_folder(&self, _item_id: &str, _dest: &str) -> ApiResult<()> {
            Ok(())
        }
        fn copy_folder(&self, _item_id: &str, _dest: &str) -> ApiResult<()> {
            Ok(())
        }
    }

    fn item(id: &str, kind: ItemKind) -> Item {
        Item {
            id: id.to_string(),
            name: format!("item-{id}"),
            kind,
            has_collaborations: false,
        }
    }

    #[test]
    fn test_row_action_event_opens_move_or_copy_dialog() {
        let config = Config::default();
        let mut app = App::new(&config, Arc::new(StubClient));

        let menu = (app.row_menu)(&item("f1", ItemKind::File));
        let index = menu
            .entries()
            .iter()
            .position(|a| *a == RowAction::MoveOrCopy)
            .unwrap();
        menu.activate(index);
        app.drain_events();

        match &app.mode {
            Mode::MoveOrCopy { dialog } => assert_eq!(dialog.item.id, "f1"),
            _ => panic!("expected move/copy mode"),
        }
    }

    #[test]
    fn test_unbound_actions_leave_a_status_note() {
        let config = Config::default();
        let mut app = App::new(&config, Arc::new(StubClient));

        let menu = (app.row_menu)(&item("f2", ItemKind::File));
        let index = menu
            .entries()
            .iter()
            .position(|a| *a == RowAction::Share)
            .unwrap();
        menu.activate(index);
        app.drain_events();

        assert!(app.status_note.contains("Share"));
        assert!(app.status_note.contains("item-f2"));
    }
}
