//! Application mode: which interaction layer owns the keyboard.

use crate::ui::RowActionsMenu;
use super::move_copy::MoveOrCopyDialog;

pub enum Mode {
    /// Browsing the panel.
    Normal,
    /// Contextual per-row action menu.
    RowActions {
        menu: RowActionsMenu,
        selected: usize,
    },
    /// Move or Copy modal.
    MoveOrCopy { dialog: MoveOrCopyDialog },
}
