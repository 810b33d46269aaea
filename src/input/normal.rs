//! Normal mode key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::app::App;

pub fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        if let KeyCode::Char('r') = key.code {
            app.refresh_panel(true);
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::F(10) => {
            app.should_quit = true;
        }

        KeyCode::Up | KeyCode::Char('k') => app.panel.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.panel.move_down(),
        KeyCode::Home => app.panel.move_home(),
        KeyCode::End => app.panel.move_end(),

        KeyCode::Enter => app.enter_selected(),
        KeyCode::Backspace => app.go_to_parent(),

        KeyCode::F(2) | KeyCode::Char('a') => app.open_row_menu(),

        KeyCode::F(3) | KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::F(4) | KeyCode::Char('r') => app.reverse_sort(),

        KeyCode::F(6) | KeyCode::Char('m') => {
            if let Some(item) = app.panel.selected_item() {
                let item = item.clone();
                app.open_move_or_copy(item);
            }
        }

        _ => {}
    }
}
