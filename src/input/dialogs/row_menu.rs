//! Row action menu key handling.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::app::App;
use crate::state::mode::Mode;

pub fn handle_row_menu_mode(app: &mut App, key: KeyEvent) {
    let Mode::RowActions { menu, selected } = &mut app.mode else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Normal;
        }

        KeyCode::Up | KeyCode::Char('k') => {
            if *selected > 0 {
                *selected -= 1;
            }
        }

        KeyCode::Down | KeyCode::Char('j') => {
            if *selected + 1 < menu.len() {
                *selected += 1;
            }
        }

        KeyCode::Enter => {
            // The callback posts an event; it is applied once the menu
            // has been closed and the app drains its channel.
            menu.activate(*selected);
            app.mode = Mode::Normal;
            app.drain_events();
        }

        _ => {}
    }
}
