//! Main browsing panel state.

use crate::api::{ApiError, Collection, Item, ListQuery, PathEntry, SortField, SortOrder};

/// Listing page size for the browsing panel.
const PANEL_PAGE_LIMIT: u32 = 1000;

/// State of the single browsing panel: the folder currently open on the
/// drive, its listing, and the cursor within it.
pub struct Panel {
    /// Folder currently open. Kept alongside the collection because the
    /// collection lags behind while a fetch is in flight.
    pub folder_id: String,
    pub collection: Collection,
    pub cursor: usize,
    pub loading: bool,
    pub sort_by: SortField,
    pub direction: SortOrder,
    next_request: u64,
    pending_fetch: Option<u64>,
}

impl Panel {
    /// A panel rooted at the drive root, before the first fetch completes.
    pub fn new(root: PathEntry) -> Self {
        Self {
            folder_id: root.id.clone(),
            collection: Collection {
                id: root.id,
                name: root.name,
                breadcrumbs: Vec::new(),
                items: Vec::new(),
                total_count: 0,
            },
            cursor: 0,
            loading: false,
            sort_by: SortField::Name,
            direction: SortOrder::Asc,
            next_request: 0,
            pending_fetch: None,
        }
    }

    /// Advance to the next sort field, resetting to ascending.
    pub fn cycle_sort(&mut self) {
        self.sort_by = match self.sort_by {
            SortField::Name => SortField::Modified,
            SortField::Modified => SortField::Size,
            SortField::Size => SortField::Name,
        };
        self.direction = SortOrder::Asc;
    }

    pub fn reverse_sort(&mut self) {
        self.direction = match self.direction {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        };
    }

    /// Start a fetch of `folder_id`; returns the request id and query for
    /// the background task.
    pub fn start_fetch(&mut self, folder_id: &str, force: bool) -> (u64, ListQuery) {
        self.folder_id = folder_id.to_string();
        self.loading = true;
        self.next_request += 1;
        self.pending_fetch = Some(self.next_request);
        let query = ListQuery {
            limit: PANEL_PAGE_LIMIT,
            offset: 0,
            sort_by: self.sort_by,
            direction: self.direction,
            force_fetch: force,
        };
        (self.next_request, query)
    }

    /// Apply a completed listing fetch; stale responses are dropped.
    pub fn on_listed(&mut self, request_id: u64, result: Result<Collection, ApiError>) {
        if self.pending_fetch != Some(request_id) {
            return;
        }
        self.pending_fetch = None;
        self.loading = false;

        match result {
            Ok(collection) => {
                self.collection = collection;
                self.cursor = self.cursor.min(self.collection.items.len().saturating_sub(1));
            }
            Err(e) => {
                tracing::error!(
                    folder = %self.folder_id,
                    status = ?e.status(),
                    error = %e,
                    "panel listing failed"
                );
            }
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.collection.items.get(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.collection.items.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.collection.items.len().saturating_sub(1);
    }

    /// Parent folder of the current one, when not at the root.
    pub fn parent(&self) -> Option<&PathEntry> {
        self.collection.breadcrumbs.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ItemKind;

    fn listed(id: &str, names: &[&str]) -> Collection {
        Collection {
            id: id.to_string(),
            name: id.to_string(),
            breadcrumbs: Vec::new(),
            items: names
                .iter()
                .enumerate()
                .map(|(i, name)| Item {
                    id: i.to_string(),
                    name: name.to_string(),
                    kind: ItemKind::File,
                    has_collaborations: false,
                })
                .collect(),
            total_count: names.len() as u64,
        }
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut panel = Panel::new(PathEntry::new("0", "All Files"));
        let (id, _) = panel.start_fetch("0", false);
        panel.on_listed(id, Ok(listed("0", &["a", "b"])));

        panel.move_down();
        panel.move_down();
        assert_eq!(panel.cursor, 1);
        panel.move_up();
        panel.move_up();
        assert_eq!(panel.cursor, 0);
    }

    #[test]
    fn test_cursor_clamped_after_shorter_listing() {
        let mut panel = Panel::new(PathEntry::new("0", "All Files"));
        let (id, _) = panel.start_fetch("0", false);
        panel.on_listed(id, Ok(listed("0", &["a", "b", "c"])));
        panel.move_end();
        assert_eq!(panel.cursor, 2);

        let (id, _) = panel.start_fetch("0", true);
        panel.on_listed(id, Ok(listed("0", &["a"])));
        assert_eq!(panel.cursor, 0);
    }

    #[test]
    fn test_sort_toggle_changes_query() {
        let mut panel = Panel::new(PathEntry::new("0", "All Files"));
        let (_, query) = panel.start_fetch("0", false);
        assert_eq!(query.sort_by, SortField::Name);
        assert_eq!(query.direction, SortOrder::Asc);

        panel.cycle_sort();
        panel.reverse_sort();
        let (_, query) = panel.start_fetch("0", false);
        assert_eq!(query.sort_by, SortField::Modified);
        assert_eq!(query.direction, SortOrder::Desc);

        // Reversing then cycling resets to ascending on the new field.
        panel.cycle_sort();
        let (_, query) = panel.start_fetch("0", false);
        assert_eq!(query.sort_by, SortField::Size);
        assert_eq!(query.direction, SortOrder::Asc);
    }

    #[test]
    fn test_stale_panel_listing_dropped() {
        let mut panel = Panel::new(PathEntry::new("0", "All Files"));
        let (stale, _) = panel.start_fetch("0", false);
        let (fresh, _) = panel.start_fetch("5", false);

        panel.on_listed(stale, Ok(listed("0", &["old"])));
        assert!(panel.loading);
        assert!(panel.collection.items.is_empty());

        panel.on_listed(fresh, Ok(listed("5", &["new"])));
        assert!(!panel.loading);
        assert_eq!(panel.collection.items[0].name, "new");
    }

    #[test]
    fn test_listing_failure_keeps_previous_items() {
        let mut panel = Panel::new(PathEntry::new("0", "All Files"));
        let (id, _) = panel.start_fetch("0", false);
        panel.on_listed(id, Ok(listed("0", &["a"])));

        let (id, _) = panel.start_fetch("7", false);
        panel.on_listed(id, Err(ApiError::Transport("timeout".to_string())));
        assert!(!panel.loading);
        assert_eq!(panel.collection.items[0].name, "a");
    }
}
