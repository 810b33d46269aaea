//! Move or Copy dialog controller.
//!
//! Owns the modal's state: the breadcrumb trail, the visible folder rows, the
//! in-flight operation and the last error. Every user operation returns a
//! [`DialogCommand`] describing the side effect for the caller to execute, so
//! the controller itself never touches the network and can be driven directly
//! in tests. Completions come back through `on_folder_listed` /
//! `on_transfer_done`; each request carries a sequence number and responses
//! with a stale number are dropped, so navigating away from a pending fetch
//! cannot clobber the state it left behind.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::api::{
    ApiError, Collection, Item, ItemKind, ListQuery, PathEntry, STATUS_BAD_REQUEST,
    STATUS_CONFLICT, STATUS_FORBIDDEN, STATUS_INTERNAL_SERVER_ERROR, STATUS_NOT_FOUND,
    STATUS_NOT_MODIFIED,
};
use crate::messages::Messages;

/// Marker used as the current folder while the dialog is in search mode.
pub const SEARCH_FOLDER_ID: &str = "search";

/// Listing page size for the dialog's folder tree.
const DIALOG_PAGE_LIMIT: u32 = 1000;

/// Focused element: 0 = folder list, 1 = Move, 2 = Copy, 3 = New folder, 4 = Cancel
pub const FOCUS_LIST: usize = 0;
pub const FOCUS_MOVE: usize = 1;
pub const FOCUS_COPY: usize = 2;
pub const FOCUS_NEW_FOLDER: usize = 3;
pub const FOCUS_CANCEL: usize = 4;
pub const FOCUS_COUNT: usize = 5;

/// What the dialog is currently doing. A move and a copy can never be in
/// flight at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogStatus {
    /// A folder listing is being fetched.
    Loading,
    /// Showing folders, waiting for user input.
    Browsing,
    /// A move request is in flight.
    MoveInFlight,
    /// A copy request is in flight.
    CopyInFlight,
}

/// Which transfer operation to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOp {
    Move,
    Copy,
}

impl TransferOp {
    pub fn as_str(self) -> &'static str {
        match self {
            TransferOp::Move => "move",
            TransferOp::Copy => "copy",
        }
    }
}

/// One selectable destination folder in the dialog list.
#[derive(Clone, Debug, PartialEq)]
pub struct FolderRow {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    pub has_collaborations: bool,
    pub action_disabled: bool,
}

/// Side effect requested by a controller operation. The caller (the app
/// layer) executes it; `Noop` means the operation was absorbed locally.
#[derive(Clone, Debug, PartialEq)]
pub enum DialogCommand {
    /// Fetch a folder listing in the background.
    Fetch {
        request_id: u64,
        folder_id: String,
        query: ListQuery,
    },
    /// Run a move or copy in the background.
    Transfer {
        request_id: u64,
        op: TransferOp,
        kind: ItemKind,
        item_id: String,
        dest_folder_id: String,
    },
    /// Close the dialog.
    Close,
    Noop,
}

/// State of the inline new-folder input.
#[derive(Clone, Debug, Default)]
pub struct NewFolderInput {
    pub text: String,
    pub cursor: usize,
}

/// Controller for the Move or Copy modal.
pub struct MoveOrCopyDialog {
    /// The item being moved or copied. Immutable for the dialog's lifetime.
    pub item: Item,
    /// Folder currently open in the dialog, or [`SEARCH_FOLDER_ID`].
    pub current_folder: String,
    /// Path from the drive root to the current folder. Appended to when
    /// entering a folder, never reordered.
    pub folders_path: Vec<PathEntry>,
    /// Folder-kind children of the current folder, in received order.
    pub rows: Vec<FolderRow>,
    pub status: DialogStatus,
    /// User-facing message for the last failed move/copy.
    pub error_message: Option<String>,
    /// HTTP status of the last failed move/copy.
    pub last_error_status: Option<u16>,
    /// Cursor within `rows`.
    pub selected: usize,
    /// Focused element, see the `FOCUS_*` constants.
    pub focus: usize,
    /// Inline input for client-side folder creation, when open.
    pub new_folder: Option<NewFolderInput>,
    /// Client-side created folders, keyed by parent folder id. Never sent to
    /// the API; discarded with the dialog.
    created: HashMap<String, Vec<FolderRow>>,
    next_request: u64,
    pending_fetch: Option<u64>,
    pending_transfer: Option<u64>,
}

impl MoveOrCopyDialog {
    /// Open the dialog from the browsing context: breadcrumb is the parent
    /// collection's path plus the collection itself, and the initial listing
    /// fetch for `current_folder_id` is issued immediately.
    pub fn open(
        current_collection: &Collection,
        current_folder_id: &str,
        item: Item,
    ) -> (Self, DialogCommand) {
        let mut folders_path = current_collection.breadcrumbs.clone();
        folders_path.push(PathEntry::new(
            current_collection.id.clone(),
            current_collection.name.clone(),
        ));

        let mut dialog = Self {
            item,
            current_folder: current_folder_id.to_string(),
            folders_path,
            rows: Vec::new(),
            status: DialogStatus::Loading,
            error_message: None,
            last_error_status: None,
            selected: 0,
            focus: FOCUS_LIST,
            new_folder: None,
            created: HashMap::new(),
            next_request: 0,
            pending_fetch: None,
            pending_transfer: None,
        };
        let fetch = dialog.fetch_current();
        (dialog, fetch)
    }

    /// Issue a fresh listing fetch for the current folder. Always forced:
    /// the dialog must see the latest server state, not a cached page.
    fn fetch_current(&mut self) -> DialogCommand {
        let request_id = self.next_request_id();
        self.pending_fetch = Some(request_id);
        self.status = DialogStatus::Loading;
        DialogCommand::Fetch {
            request_id,
            folder_id: self.current_folder.clone(),
            query: ListQuery::by_name(DIALOG_PAGE_LIMIT).forced(),
        }
    }

    fn next_request_id(&mut self) -> u64 {
        self.next_request += 1;
        self.next_request
    }

    /// Apply a completed listing fetch. Responses for anything but the most
    /// recent fetch are dropped.
    pub fn on_folder_listed(&mut self, request_id: u64, result: Result<Collection, ApiError>) {
        if self.pending_fetch != Some(request_id) {
            return;
        }
        self.pending_fetch = None;

        match result {
            Ok(collection) => {
                self.rows = collection
                    .items
                    .iter()
                    .filter(|item| item.kind.is_folder())
                    .map(|item| FolderRow {
                        id: item.id.clone(),
                        name: item.name.clone(),
                        kind: item.kind,
                        has_collaborations: item.has_collaborations,
                        action_disabled: false,
                    })
                    .collect();
                self.selected = 0;
                self.status = DialogStatus::Browsing;
            }
            Err(e) => {
                // Listing failures are not surfaced in the dialog; the user
                // retries by navigating again.
                tracing::error!(
                    folder = %self.current_folder,
                    status = ?e.status(),
                    error = %e,
                    "folder listing failed"
                );
                self.status = DialogStatus::Browsing;
            }
        }
    }

    /// Drill into a folder: it becomes the current folder and the breadcrumb
    /// tail, and its listing is fetched. Ignored while a transfer is in
    /// flight, so the destination cannot shift under the running operation.
    pub fn enter_folder(&mut self, folder: &FolderRow) -> DialogCommand {
        if matches!(
            self.status,
            DialogStatus::MoveInFlight | DialogStatus::CopyInFlight
        ) {
            return DialogCommand::Noop;
        }
        self.current_folder = folder.id.clone();
        self.folders_path
            .push(PathEntry::new(folder.id.clone(), folder.name.clone()));
        self.fetch_current()
    }

    /// Move the source item into `dest`. Ignored unless the dialog is idle
    /// in `Browsing`; a move and a copy can never run concurrently.
    pub fn move_item(&mut self, dest: &PathEntry) -> DialogCommand {
        self.start_transfer(TransferOp::Move, dest)
    }

    /// Copy the source item into `dest`. Same contract as [`Self::move_item`].
    pub fn copy_item(&mut self, dest: &PathEntry) -> DialogCommand {
        self.start_transfer(TransferOp::Copy, dest)
    }

    fn start_transfer(&mut self, op: TransferOp, dest: &PathEntry) -> DialogCommand {
        if self.status != DialogStatus::Browsing {
            return DialogCommand::Noop;
        }
        self.error_message = None;
        self.status = match op {
            TransferOp::Move => DialogStatus::MoveInFlight,
            TransferOp::Copy => DialogStatus::CopyInFlight,
        };
        let request_id = self.next_request_id();
        self.pending_transfer = Some(request_id);
        DialogCommand::Transfer {
            request_id,
            op,
            kind: self.item.kind,
            item_id: self.item.id.clone(),
            dest_folder_id: dest.id.clone(),
        }
    }

    /// Apply a completed move/copy. Success closes the dialog; failure maps
    /// the HTTP status to a user-facing message and leaves the dialog open
    /// for a retry.
    pub fn on_transfer_done(
        &mut self,
        request_id: u64,
        result: Result<(), ApiError>,
        messages: &Messages,
    ) -> DialogCommand {
        if self.pending_transfer != Some(request_id) {
            return DialogCommand::Noop;
        }
        self.pending_transfer = None;

        match result {
            Ok(()) => {
                self.status = DialogStatus::Browsing;
                DialogCommand::Close
            }
            Err(e) => {
                let status = e.status();
                tracing::warn!(
                    item = %self.item.id,
                    status = ?status,
                    error = %e,
                    "move/copy failed"
                );
                self.last_error_status = status;
                self.error_message = Some(failure_message(messages, status, &self.item.name));
                self.status = DialogStatus::Browsing;
                DialogCommand::Noop
            }
        }
    }

    /// Client-side folder creation: no API call is made. The synthesized
    /// folder is recorded under the current folder and immediately drilled
    /// into; it only ever contains other client-side creations.
    pub fn create_folder_submit(&mut self, name: &str) -> DialogCommand {
        if matches!(
            self.status,
            DialogStatus::MoveInFlight | DialogStatus::CopyInFlight
        ) {
            return DialogCommand::Noop;
        }
        // Navigating away from the folder whose fetch is still pending;
        // its response must not land in the created folder. The created
        // folder's contents are known locally, so nothing is loading.
        self.pending_fetch = None;
        self.status = DialogStatus::Browsing;
        let folder_id = timestamp_id();
        let row = FolderRow {
            id: folder_id.clone(),
            name: name.to_string(),
            kind: ItemKind::Folder,
            has_collaborations: false,
            action_disabled: false,
        };

        self.created
            .entry(self.current_folder.clone())
            .or_default()
            .push(row.clone());

        self.folders_path
            .push(PathEntry::new(folder_id.clone(), name.to_string()));
        self.current_folder = folder_id.clone();
        self.rows = self.created.get(&folder_id).cloned().unwrap_or_default();
        self.selected = 0;
        self.new_folder = None;
        DialogCommand::Noop
    }

    /// Switch the current folder marker to the search sentinel. A listing
    /// still in flight is fenced off; it belongs to the folder we left.
    pub fn search_submit(&mut self) {
        self.pending_fetch = None;
        if self.status == DialogStatus::Loading {
            self.status = DialogStatus::Browsing;
        }
        self.current_folder = SEARCH_FOLDER_ID.to_string();
    }

    /// Leave search mode, returning to `target`.
    pub fn exit_search(&mut self, target: &PathEntry) {
        self.current_folder = target.id.clone();
    }

    /// Close without side effects.
    pub fn cancel(&self) -> DialogCommand {
        DialogCommand::Close
    }

    pub fn in_search(&self) -> bool {
        self.current_folder == SEARCH_FOLDER_ID
    }

    pub fn is_loading(&self) -> bool {
        self.status == DialogStatus::Loading
    }

    pub fn is_move_loading(&self) -> bool {
        self.status == DialogStatus::MoveInFlight
    }

    pub fn is_copy_loading(&self) -> bool {
        self.status == DialogStatus::CopyInFlight
    }

    /// Destination the Move/Copy buttons act on: the folder currently open
    /// in the dialog (the breadcrumb tail).
    pub fn destination(&self) -> Option<&PathEntry> {
        self.folders_path.last()
    }

    pub fn selected_row(&self) -> Option<&FolderRow> {
        self.rows.get(self.selected)
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }
}

/// Map a failed move/copy to a user-facing message.
fn failure_message(messages: &Messages, status: Option<u16>, item_name: &str) -> String {
    match status {
        Some(STATUS_NOT_MODIFIED) => messages.generic_error().to_string(),
        Some(STATUS_BAD_REQUEST) => messages.bad_request().to_string(),
        Some(STATUS_FORBIDDEN) => messages.generic_error().to_string(),
        Some(STATUS_NOT_FOUND) => messages.generic_error().to_string(),
        Some(STATUS_CONFLICT) => messages.name_in_use(item_name),
        Some(STATUS_INTERNAL_SERVER_ERROR) => messages.generic_error().to_string(),
        _ => messages.generic_error().to_string(),
    }
}

/// Identifier for a client-side created folder, derived from the wall clock.
fn timestamp_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    millis.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, kind: ItemKind) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            has_collaborations: false,
        }
    }

    fn collection(id: &str, name: &str, items: Vec<Item>) -> Collection {
        Collection {
            id: id.to_string(),
            name: name.to_string(),
            breadcrumbs: Vec::new(),
            total_count: items.len() as u64,
            items,
        }
    }

    fn open_dialog() -> (MoveOrCopyDialog, DialogCommand) {
        let mut source = collection("123", "Documents", Vec::new());
        source.breadcrumbs = vec![PathEntry::new("0", "All Files")];
        MoveOrCopyDialog::open(&source, "123", item("42", "notes.txt", ItemKind::File))
    }

    /// Drive the dialog from open to Browsing with the given listing.
    fn open_browsing(items: Vec<Item>) -> MoveOrCopyDialog {
        let (mut dialog, fetch) = open_dialog();
        let DialogCommand::Fetch { request_id, .. } = fetch else {
            panic!("open must fetch");
        };
        dialog.on_folder_listed(request_id, Ok(collection("123", "Documents", items)));
        dialog
    }

    #[test]
    fn test_open_initializes_breadcrumb_and_fetches() {
        let (dialog, fetch) = open_dialog();
        assert_eq!(
            dialog.folders_path,
            vec![
                PathEntry::new("0", "All Files"),
                PathEntry::new("123", "Documents"),
            ]
        );
        assert_eq!(dialog.current_folder, "123");
        assert_eq!(dialog.status, DialogStatus::Loading);

        let DialogCommand::Fetch {
            folder_id, query, ..
        } = fetch
        else {
            panic!("open must fetch");
        };
        assert_eq!(folder_id, "123");
        assert_eq!(query.limit, 1000);
        assert_eq!(query.offset, 0);
        assert_eq!(query.sort_by, crate::api::SortField::Name);
        assert_eq!(query.direction, crate::api::SortOrder::Asc);
        assert!(query.force_fetch);
    }

    #[test]
    fn test_listing_keeps_only_folders_in_order() {
        let dialog = open_browsing(vec![
            item("1", "Reports", ItemKind::Folder),
            item("2", "notes.txt", ItemKind::File),
            item("3", "Archive", ItemKind::Folder),
        ]);

        assert_eq!(dialog.status, DialogStatus::Browsing);
        assert_eq!(dialog.rows.len(), 2);
        assert_eq!(dialog.rows[0].name, "Reports");
        assert_eq!(dialog.rows[1].name, "Archive");
        assert!(dialog.rows.iter().all(|r| !r.action_disabled));
        assert!(!dialog.is_move_loading());
        assert!(!dialog.is_copy_loading());
    }

    #[test]
    fn test_listing_failure_is_silent() {
        let (mut dialog, fetch) = open_dialog();
        let DialogCommand::Fetch { request_id, .. } = fetch else {
            panic!();
        };
        dialog.on_folder_listed(request_id, Err(ApiError::status_of(500)));
        assert_eq!(dialog.status, DialogStatus::Browsing);
        assert!(dialog.error_message.is_none());
        assert!(dialog.rows.is_empty());
    }

    #[test]
    fn test_stale_listing_response_is_dropped() {
        let mut dialog = open_browsing(vec![item("1", "Reports", ItemKind::Folder)]);

        let first = dialog.enter_folder(&FolderRow {
            id: "1".to_string(),
            name: "Reports".to_string(),
            kind: ItemKind::Folder,
            has_collaborations: false,
            action_disabled: false,
        });
        let DialogCommand::Fetch {
            request_id: stale, ..
        } = first
        else {
            panic!();
        };
        let second = dialog.enter_folder(&FolderRow {
            id: "9".to_string(),
            name: "Deep".to_string(),
            kind: ItemKind::Folder,
            has_collaborations: false,
            action_disabled: false,
        });
        let DialogCommand::Fetch {
            request_id: fresh, ..
        } = second
        else {
            panic!();
        };

        // The stale response arrives late and must not replace anything.
        dialog.on_folder_listed(
            stale,
            Ok(collection(
                "1",
                "Reports",
                vec![item("7", "Old", ItemKind::Folder)],
            )),
        );
        assert_eq!(dialog.status, DialogStatus::Loading);
        assert!(dialog.rows.iter().all(|r| r.name != "Old"));

        dialog.on_folder_listed(
            fresh,
            Ok(collection(
                "9",
                "Deep",
                vec![item("8", "New", ItemKind::Folder)],
            )),
        );
        assert_eq!(dialog.status, DialogStatus::Browsing);
        assert_eq!(dialog.rows[0].name, "New");
    }

    #[test]
    fn test_enter_folder_fetches_once_forced() {
        let mut dialog = open_browsing(vec![item("1", "Reports", ItemKind::Folder)]);
        let row = dialog.rows[0].clone();
        let cmd = dialog.enter_folder(&row);

        let DialogCommand::Fetch {
            folder_id, query, ..
        } = cmd
        else {
            panic!("enter_folder must fetch");
        };
        assert_eq!(folder_id, "1");
        assert!(query.force_fetch);
        assert_eq!(dialog.current_folder, "1");
        assert_eq!(dialog.folders_path.last(), Some(&PathEntry::new("1", "Reports")));
        assert_eq!(dialog.status, DialogStatus::Loading);
    }

    #[test]
    fn test_move_file_targets_dest_folder() {
        let mut dialog = open_browsing(Vec::new());
        let cmd = dialog.move_item(&PathEntry::new("999", "Target"));

        let DialogCommand::Transfer {
            op,
            kind,
            item_id,
            dest_folder_id,
            ..
        } = cmd
        else {
            panic!("move_item must transfer");
        };
        assert_eq!(op, TransferOp::Move);
        assert_eq!(kind, ItemKind::File);
        assert_eq!(item_id, "42");
        assert_eq!(dest_folder_id, "999");
        assert!(dialog.is_move_loading());
        assert!(!dialog.is_copy_loading());
    }

    #[test]
    fn test_copy_folder_kind_selects_folder_api() {
        let source = collection("123", "Documents", Vec::new());
        let (mut dialog, fetch) =
            MoveOrCopyDialog::open(&source, "123", item("7", "Reports", ItemKind::Folder));
        let DialogCommand::Fetch { request_id, .. } = fetch else {
            panic!();
        };
        dialog.on_folder_listed(request_id, Ok(collection("123", "Documents", Vec::new())));

        let cmd = dialog.copy_item(&PathEntry::new("5", "Dest"));
        let DialogCommand::Transfer { op, kind, .. } = cmd else {
            panic!();
        };
        assert_eq!(op, TransferOp::Copy);
        assert_eq!(kind, ItemKind::Folder);
        assert!(dialog.is_copy_loading());
    }

    #[test]
    fn test_no_concurrent_transfers() {
        let mut dialog = open_browsing(Vec::new());
        let first = dialog.move_item(&PathEntry::new("999", "Target"));
        assert!(matches!(first, DialogCommand::Transfer { .. }));

        // With a move in flight, both buttons are inert.
        assert_eq!(dialog.copy_item(&PathEntry::new("999", "Target")), DialogCommand::Noop);
        assert_eq!(dialog.move_item(&PathEntry::new("999", "Target")), DialogCommand::Noop);
        assert!(dialog.is_move_loading());
    }

    #[test]
    fn test_transfer_success_closes_once() {
        let messages = Messages::default();
        let mut dialog = open_browsing(Vec::new());
        let cmd = dialog.move_item(&PathEntry::new("999", "Target"));
        let DialogCommand::Transfer { request_id, .. } = cmd else {
            panic!();
        };

        let done = dialog.on_transfer_done(request_id, Ok(()), &messages);
        assert_eq!(done, DialogCommand::Close);
        assert!(!dialog.is_move_loading());
        assert!(!dialog.is_copy_loading());
        assert!(dialog.error_message.is_none());

        // A duplicate completion for the same request does nothing.
        let again = dialog.on_transfer_done(request_id, Ok(()), &messages);
        assert_eq!(again, DialogCommand::Noop);
    }

    #[test]
    fn test_conflict_maps_to_in_use_message() {
        let messages = Messages::default();
        let mut dialog = open_browsing(Vec::new());
        let cmd = dialog.move_item(&PathEntry::new("999", "Target"));
        let DialogCommand::Transfer { request_id, .. } = cmd else {
            panic!();
        };

        let done = dialog.on_transfer_done(request_id, Err(ApiError::status_of(409)), &messages);
        assert_eq!(done, DialogCommand::Noop); // dialog stays open
        assert_eq!(dialog.last_error_status, Some(409));
        assert_eq!(
            dialog.error_message.as_deref(),
            Some(messages.name_in_use("notes.txt").as_str())
        );
        assert!(!dialog.is_move_loading());
        assert!(!dialog.is_copy_loading());
        assert_eq!(dialog.status, DialogStatus::Browsing);
    }

    #[test]
    fn test_status_message_table() {
        let messages = Messages::default();
        let cases: &[(u16, &str)] = &[
            (304, messages.generic_error()),
            (403, messages.generic_error()),
            (404, messages.generic_error()),
            (500, messages.generic_error()),
            (418, messages.generic_error()),
        ];
        for &(status, expected) in cases {
            let mut dialog = open_browsing(Vec::new());
            let cmd = dialog.copy_item(&PathEntry::new("999", "Target"));
            let DialogCommand::Transfer { request_id, .. } = cmd else {
                panic!();
            };
            dialog.on_transfer_done(request_id, Err(ApiError::status_of(status)), &messages);
            assert_eq!(dialog.error_message.as_deref(), Some(expected), "status {status}");
        }

        let mut dialog = open_browsing(Vec::new());
        let cmd = dialog.copy_item(&PathEntry::new("999", "Target"));
        let DialogCommand::Transfer { request_id, .. } = cmd else {
            panic!();
        };
        dialog.on_transfer_done(request_id, Err(ApiError::status_of(400)), &messages);
        assert_eq!(dialog.error_message.as_deref(), Some(messages.bad_request()));

        // Failures without an HTTP status fall back to the generic message.
        let mut dialog = open_browsing(Vec::new());
        let cmd = dialog.copy_item(&PathEntry::new("999", "Target"));
        let DialogCommand::Transfer { request_id, .. } = cmd else {
            panic!();
        };
        dialog.on_transfer_done(
            request_id,
            Err(ApiError::Transport("connection reset".to_string())),
            &messages,
        );
        assert_eq!(dialog.error_message.as_deref(), Some(messages.generic_error()));
    }

    #[test]
    fn test_retry_after_failure_clears_error() {
        let messages = Messages::default();
        let mut dialog = open_browsing(Vec::new());
        let cmd = dialog.move_item(&PathEntry::new("999", "Target"));
        let DialogCommand::Transfer { request_id, .. } = cmd else {
            panic!();
        };
        dialog.on_transfer_done(request_id, Err(ApiError::status_of(409)), &messages);
        assert!(dialog.error_message.is_some());

        let retry = dialog.move_item(&PathEntry::new("999", "Target"));
        assert!(matches!(retry, DialogCommand::Transfer { .. }));
        assert!(dialog.error_message.is_none());
    }

    #[test]
    fn test_create_folder_is_local_and_drills_in() {
        let mut dialog = open_browsing(vec![item("1", "Reports", ItemKind::Folder)]);
        let before = dialog.folders_path.len();

        let cmd = dialog.create_folder_submit("Drafts");
        assert_eq!(cmd, DialogCommand::Noop); // no API call
        assert_eq!(dialog.folders_path.len(), before + 1);
        assert_eq!(dialog.folders_path.last().map(|p| p.name.as_str()), Some("Drafts"));
        assert_eq!(dialog.current_folder, dialog.folders_path.last().unwrap().id);
        assert!(dialog.rows.is_empty()); // brand new folder has no children
        assert_eq!(dialog.status, DialogStatus::Browsing);
    }

    #[test]
    fn test_created_folder_ignores_late_listing() {
        let (mut dialog, fetch) = open_dialog();
        let DialogCommand::Fetch { request_id, .. } = fetch else {
            panic!();
        };

        // Navigate into a synthesized folder while the open fetch is still
        // in flight, then let that response arrive late.
        dialog.create_folder_submit("Drafts");
        dialog.on_folder_listed(
            request_id,
            Ok(collection(
                "123",
                "Documents",
                vec![item("7", "Reports", ItemKind::Folder)],
            )),
        );

        assert!(dialog.rows.is_empty());
        assert_eq!(dialog.folders_path.last().map(|p| p.name.as_str()), Some("Drafts"));
        assert_eq!(dialog.status, DialogStatus::Browsing);
    }

    #[test]
    fn test_search_ignores_late_listing() {
        let (mut dialog, fetch) = open_dialog();
        let DialogCommand::Fetch { request_id, .. } = fetch else {
            panic!();
        };

        dialog.search_submit();
        dialog.on_folder_listed(
            request_id,
            Ok(collection(
                "123",
                "Documents",
                vec![item("7", "Reports", ItemKind::Folder)],
            )),
        );

        assert!(dialog.in_search());
        assert!(dialog.rows.is_empty());
    }

    #[test]
    fn test_enter_folder_inert_during_transfer() {
        let mut dialog = open_browsing(vec![item("1", "Reports", ItemKind::Folder)]);
        let cmd = dialog.move_item(&PathEntry::new("123", "Documents"));
        assert!(matches!(cmd, DialogCommand::Transfer { .. }));

        let row = dialog.rows[0].clone();
        let crumbs = dialog.folders_path.clone();
        assert_eq!(dialog.enter_folder(&row), DialogCommand::Noop);
        assert_eq!(dialog.current_folder, "123");
        assert_eq!(dialog.folders_path, crumbs);
        assert!(dialog.is_move_loading());
    }

    #[test]
    fn test_search_sentinel_round_trip() {
        let mut dialog = open_browsing(Vec::new());
        dialog.search_submit();
        assert!(dialog.in_search());
        assert_eq!(dialog.current_folder, SEARCH_FOLDER_ID);

        dialog.exit_search(&PathEntry::new("123", "Documents"));
        assert!(!dialog.in_search());
        assert_eq!(dialog.current_folder, "123");
    }

    #[test]
    fn test_cancel_closes_without_side_effects() {
        let dialog = open_browsing(vec![item("1", "Reports", ItemKind::Folder)]);
        assert_eq!(dialog.cancel(), DialogCommand::Close);
        assert_eq!(dialog.rows.len(), 1);
        assert!(dialog.error_message.is_none());
    }

    #[test]
    fn test_selection_moves_within_rows() {
        let mut dialog = open_browsing(vec![
            item("1", "A", ItemKind::Folder),
            item("2", "B", ItemKind::Folder),
        ]);
        assert_eq!(dialog.selected, 0);
        dialog.select_up();
        assert_eq!(dialog.selected, 0);
        dialog.select_down();
        assert_eq!(dialog.selected, 1);
        dialog.select_down();
        assert_eq!(dialog.selected, 1);
        assert_eq!(dialog.selected_row().map(|r| r.name.as_str()), Some("B"));
    }

    #[test]
    fn test_destination_is_breadcrumb_tail() {
        let mut dialog = open_browsing(vec![item("1", "Reports", ItemKind::Folder)]);
        assert_eq!(dialog.destination(), Some(&PathEntry::new("123", "Documents")));
        let row = dialog.rows[0].clone();
        dialog.enter_folder(&row);
        assert_eq!(dialog.destination(), Some(&PathEntry::new("1", "Reports")));
    }
}
