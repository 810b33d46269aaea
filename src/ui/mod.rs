pub mod dialog_helpers;
pub mod move_copy;
pub mod panel;
pub mod row_actions;
pub mod status;
pub mod theme;

pub use move_copy::{MoveOrCopyDialogWidget, move_copy_cursor_position};
pub use panel::PanelWidget;
pub use row_actions::{
    RowAction, RowActionFlags, RowActionHandlers, RowActionsMenu, RowActionsMenuWidget,
    more_actions_renderer,
};
pub use status::StatusBar;
pub use theme::{Theme, ThemeConfig};
