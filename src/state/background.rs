//! Background API calls.
//!
//! Every network operation runs on its own spawned thread and reports back
//! over a channel; the event loop polls with `try_recv` and never blocks.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, channel};
use std::thread::{self, JoinHandle};

use crate::api::{ApiError, CloudClient, Collection, ItemKind, ListQuery};
use super::move_copy::TransferOp;

/// Which part of the UI a listing fetch belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchTarget {
    /// The main browsing panel.
    Panel,
    /// The Move or Copy dialog's folder tree.
    Dialog,
}

/// Result of a completed background API call.
pub enum TaskResult {
    Listed {
        target: FetchTarget,
        request_id: u64,
        result: Result<Collection, ApiError>,
    },
    TransferDone {
        request_id: u64,
        result: Result<(), ApiError>,
    },
}

/// A background API call with its completion channel.
pub struct ApiTask {
    receiver: Receiver<TaskResult>,
    _handle: JoinHandle<()>,
}

impl ApiTask {
    /// Spawn a folder listing fetch.
    pub fn fetch_folder(
        client: Arc<dyn CloudClient>,
        target: FetchTarget,
        request_id: u64,
        folder_id: String,
        query: ListQuery,
    ) -> Self {
        let (tx, rx) = channel::<TaskResult>();

        let handle = thread::spawn(move || {
            let result = client.folder_items(&folder_id, &query);
            // Send errors only occur when the app dropped the task.
            let _ = tx.send(TaskResult::Listed {
                target,
                request_id,
                result,
            });
        });

        ApiTask {
            receiver: rx,
            _handle: handle,
        }
    }

    /// Spawn a move or copy, dispatched to the file or folder endpoint by
    /// the item's kind.
    pub fn transfer(
        client: Arc<dyn CloudClient>,
        request_id: u64,
        op: TransferOp,
        kind: ItemKind,
        item_id: String,
        dest_folder_id: String,
    ) -> Self {
        let (tx, rx) = channel::<TaskResult>();

        let handle = thread::spawn(move || {
            tracing::debug!(
                op = op.as_str(),
                item = %item_id,
                dest = %dest_folder_id,
                "transfer started"
            );
            let result = match (op, kind) {
                (TransferOp::Move, ItemKind::Folder) => {
                    client.move_folder(&item_id, &dest_folder_id)
                }
                (TransferOp::Move, ItemKind::File) => client.move_file(&item_id, &dest_folder_id),
                (TransferOp::Copy, ItemKind::Folder) => {
                    client.copy_folder(&item_id, &dest_folder_id)
                }
                (TransferOp::Copy, ItemKind::File) => client.copy_file(&item_id, &dest_folder_id),
            };
            let _ = tx.send(TaskResult::TransferDone { request_id, result });
        });

        ApiTask {
            receiver: rx,
            _handle: handle,
        }
    }

    /// Check for completion without blocking.
    pub fn try_recv(&self) -> Option<TaskResult> {
        self.receiver.try_recv().ok()
    }
}
