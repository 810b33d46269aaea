pub mod app;
pub mod background;
pub mod mode;
pub mod move_copy;
pub mod panel;

pub use app::{App, AppEvent};
pub use background::{ApiTask, FetchTarget, TaskResult};
pub use mode::Mode;
pub use move_copy::{DialogCommand, MoveOrCopyDialog};
pub use panel::Panel;
