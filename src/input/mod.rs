//! Input handling
//!
//! Keyboard input is dispatched on the current application mode.

mod dialogs;
mod normal;
mod text_field;

pub use text_field::TextField;

use crossterm::event::KeyEvent;

use crate::state::app::App;
use crate::state::mode::Mode;

/// Handle a key event based on current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match &app.mode {
        Mode::Normal => normal::handle_normal_mode(app, key),
        Mode::RowActions { .. } => dialogs::handle_row_menu_mode(app, key),
        Mode::MoveOrCopy { .. } => dialogs::handle_move_copy_mode(app, key),
    }
}
