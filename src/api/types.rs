//! Data types for the content API.
//!
//! These are immutable snapshots of what the drive returns; nothing here is
//! mutated locally except the dialog's `action_disabled` tag on folder rows.

use serde::Deserialize;

/// Kind of a drive item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    File,
}

impl ItemKind {
    pub fn is_folder(self) -> bool {
        matches!(self, ItemKind::Folder)
    }
}

/// A file or folder entry as returned by the listing endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// True when the item is shared with collaborators.
    #[serde(default)]
    pub has_collaborations: bool,
}

/// One step of the path from the drive root to a folder.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PathEntry {
    pub id: String,
    pub name: String,
}

impl PathEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A paginated folder listing: the folder's identity, its path from the
/// root (excluding itself), and one page of child entries.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "path")]
    pub breadcrumbs: Vec<PathEntry>,
    #[serde(rename = "entries")]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total_count: u64,
}

/// Field to sort a listing by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Name,
    Modified,
    Size,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Modified => "date",
            SortField::Size => "size",
        }
    }
}

/// Sort direction for a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Parameters for one page of a folder listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub limit: u32,
    pub offset: u32,
    pub sort_by: SortField,
    pub direction: SortOrder,
    /// Bypass and refresh any client-side listing cache.
    pub force_fetch: bool,
}

impl ListQuery {
    /// A page sorted by name ascending.
    pub fn by_name(limit: u32) -> Self {
        Self {
            limit,
            offset: 0,
            sort_by: SortField::Name,
            direction: SortOrder::Asc,
            force_fetch: false,
        }
    }

    pub fn forced(mut self) -> Self {
        self.force_fetch = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_decodes_listing_payload() {
        let json = r#"{
            "id": "123",
            "name": "Documents",
            "path": [{"id": "0", "name": "All Files"}],
            "total_count": 3,
            "entries": [
                {"id": "1", "name": "Reports", "type": "folder", "has_collaborations": true},
                {"id": "2", "name": "notes.txt", "type": "file"},
                {"id": "3", "name": "Archive", "type": "folder"}
            ]
        }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.id, "123");
        assert_eq!(collection.breadcrumbs, vec![PathEntry::new("0", "All Files")]);
        assert_eq!(collection.items.len(), 3);
        assert_eq!(collection.items[0].kind, ItemKind::Folder);
        assert!(collection.items[0].has_collaborations);
        assert_eq!(collection.items[1].kind, ItemKind::File);
        assert!(!collection.items[1].has_collaborations);
    }

    #[test]
    fn test_list_query_by_name_forced() {
        let query = ListQuery::by_name(1000).forced();
        assert_eq!(query.limit, 1000);
        assert_eq!(query.offset, 0);
        assert_eq!(query.sort_by.as_str(), "name");
        assert_eq!(query.direction.as_str(), "ASC");
        assert!(query.force_fetch);
    }
}
