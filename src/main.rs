//! Skiff - a terminal browser for a remote cloud drive

use std::io::{self, stdout};
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};

mod api;
mod config;
mod errors;
mod input;
mod logging;
mod messages;
mod state;
mod ui;

use api::HttpClient;
use config::Config;
use errors::AppResult;
use state::app::App;
use state::mode::Mode;
use ui::{
    MoveOrCopyDialogWidget, PanelWidget, RowActionsMenuWidget, StatusBar,
    move_copy_cursor_position,
};

/// Set up panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Initialize the terminal for TUI mode
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Main event loop
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            let size = frame.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(size);

            let panel = PanelWidget::new(&app.panel, &app.display, &app.theme);
            frame.render_widget(panel, chunks[0]);

            let note = if app.status_note.is_empty() && !app.account.is_empty() {
                format!("Account: {}", app.account)
            } else {
                app.status_note.clone()
            };
            frame.render_widget(StatusBar::new(&note, &app.theme), chunks[1]);

            match &app.mode {
                Mode::Normal => {}
                Mode::RowActions { menu, selected } => {
                    let widget = RowActionsMenuWidget::new(menu, *selected, &app.theme);
                    frame.render_widget(widget, size);
                }
                Mode::MoveOrCopy { dialog } => {
                    let widget = MoveOrCopyDialogWidget::new(dialog, &app.messages, &app.theme);
                    frame.render_widget(widget, size);

                    if let Some(input) = &dialog.new_folder
                        && let Some((cx, cy)) =
                            move_copy_cursor_position(size, &input.text, input.cursor)
                    {
                        frame.set_cursor_position((cx, cy));
                    }
                }
            }
        })?;

        app.poll_tasks();
        app.drain_events();

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn main() -> AppResult<()> {
    setup_panic_hook();

    let config = Config::load();

    if let Err(e) = logging::init() {
        // Logging is optional; the app runs without it.
        eprintln!("warning: could not set up logging: {e}");
    }

    let client = Arc::new(HttpClient::new(
        config.api.base_url.clone(),
        config.api.token.clone(),
    ));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(&config, client);
    app.refresh_panel(false);

    let result = run(&mut terminal, &mut app);

    restore_terminal()?;

    result?;
    Ok(())
}
