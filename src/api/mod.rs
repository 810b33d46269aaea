//! Content API client for the remote drive.
//!
//! The client is a trait so the UI layer can be exercised against a scripted
//! in-memory implementation; the real backend is HTTP (`HttpClient`).

mod http;
mod types;

pub use http::HttpClient;
pub use types::{Collection, Item, ItemKind, ListQuery, PathEntry, SortField, SortOrder};

use thiserror::Error;

pub const STATUS_NOT_MODIFIED: u16 = 304;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_FORBIDDEN: u16 = 403;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_CONFLICT: u16 = 409;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// Error type for content API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code of the failure, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn status_of(status: u16) -> Self {
        ApiError::Status {
            status,
            body: String::new(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the drive exposes to this client.
///
/// Implementors must be callable from background threads; all calls are
/// synchronous and return explicit results (the event loop never blocks on
/// them directly, see `state::background`).
pub trait CloudClient: Send + Sync {
    /// List one page of a folder's immediate children.
    fn folder_items(&self, folder_id: &str, query: &ListQuery) -> ApiResult<Collection>;

    /// Move a file into another folder.
    fn move_file(&self, file_id: &str, dest_folder_id: &str) -> ApiResult<()>;

    /// Copy a file into another folder.
    fn copy_file(&self, file_id: &str, dest_folder_id: &str) -> ApiResult<()>;

    /// Move a folder into another folder.
    fn move_folder(&self, folder_id: &str, dest_folder_id: &str) -> ApiResult<()>;

    /// Copy a folder into another folder.
    fn copy_folder(&self, folder_id: &str, dest_folder_id: &str) -> ApiResult<()>;
}
