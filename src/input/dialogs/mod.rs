//! Dialog key handlers.

mod move_copy;
mod row_menu;

pub use move_copy::handle_move_copy_mode;
pub use row_menu::handle_row_menu_mode;
