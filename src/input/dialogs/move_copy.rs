//! Move or Copy dialog key handling.

use crossterm::event::{KeyCode, KeyEvent};

use crate::input::TextField;
use crate::state::app::App;
use crate::state::mode::Mode;
use crate::state::move_copy::{
    DialogCommand, FOCUS_CANCEL, FOCUS_COPY, FOCUS_COUNT, FOCUS_LIST, FOCUS_MOVE,
    FOCUS_NEW_FOLDER, MoveOrCopyDialog, NewFolderInput,
};

pub fn handle_move_copy_mode(app: &mut App, key: KeyEvent) {
    // The controller returns the side effect; it is executed once the
    // mutable borrow of the mode is released.
    let command = {
        let Mode::MoveOrCopy { dialog } = &mut app.mode else {
            return;
        };
        dialog_key(dialog, key)
    };
    app.run_dialog_command(command);
}

fn dialog_key(dialog: &mut MoveOrCopyDialog, key: KeyEvent) -> DialogCommand {
    if dialog.new_folder.is_some() {
        return new_folder_key(dialog, key);
    }

    match key.code {
        KeyCode::Esc => {
            // Esc leaves search first; a second press closes the dialog.
            if dialog.in_search() {
                if let Some(target) = dialog.folders_path.last().cloned() {
                    dialog.exit_search(&target);
                }
                DialogCommand::Noop
            } else {
                dialog.cancel()
            }
        }

        KeyCode::Char('/') => {
            dialog.search_submit();
            DialogCommand::Noop
        }

        KeyCode::Tab => {
            dialog.focus = (dialog.focus + 1) % FOCUS_COUNT;
            DialogCommand::Noop
        }
        KeyCode::BackTab => {
            dialog.focus = (dialog.focus + FOCUS_COUNT - 1) % FOCUS_COUNT;
            DialogCommand::Noop
        }

        KeyCode::Up => {
            dialog.focus = FOCUS_LIST;
            dialog.select_up();
            DialogCommand::Noop
        }
        KeyCode::Down => {
            dialog.focus = FOCUS_LIST;
            dialog.select_down();
            DialogCommand::Noop
        }

        KeyCode::Enter => match dialog.focus {
            FOCUS_LIST => {
                if let Some(row) = dialog.selected_row().cloned() {
                    dialog.enter_folder(&row)
                } else {
                    DialogCommand::Noop
                }
            }
            FOCUS_MOVE => {
                if let Some(dest) = dialog.destination().cloned() {
                    dialog.move_item(&dest)
                } else {
                    DialogCommand::Noop
                }
            }
            FOCUS_COPY => {
                if let Some(dest) = dialog.destination().cloned() {
                    dialog.copy_item(&dest)
                } else {
                    DialogCommand::Noop
                }
            }
            FOCUS_NEW_FOLDER => {
                dialog.new_folder = Some(NewFolderInput::default());
                DialogCommand::Noop
            }
            FOCUS_CANCEL => dialog.cancel(),
            _ => DialogCommand::Noop,
        },

        _ => DialogCommand::Noop,
    }
}

fn new_folder_key(dialog: &mut MoveOrCopyDialog, key: KeyEvent) -> DialogCommand {
    let Some(input) = &mut dialog.new_folder else {
        return DialogCommand::Noop;
    };

    match key.code {
        KeyCode::Esc => {
            dialog.new_folder = None;
        }

        KeyCode::Enter => {
            let name = input.text.trim().to_string();
            if !name.is_empty() {
                return dialog.create_folder_submit(&name);
            }
        }

        KeyCode::Backspace => TextField::backspace(&mut input.text, &mut input.cursor),
        KeyCode::Delete => TextField::delete(&mut input.text, input.cursor),
        KeyCode::Left => TextField::left(&mut input.cursor),
        KeyCode::Right => TextField::right(&input.text, &mut input.cursor),
        KeyCode::Home => TextField::home(&mut input.cursor),
        KeyCode::End => TextField::end(&input.text, &mut input.cursor),

        KeyCode::Char(c) => TextField::insert_char(&mut input.text, &mut input.cursor, c),

        _ => {}
    }
    DialogCommand::Noop
}
