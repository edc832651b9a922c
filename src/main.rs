use std::io;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

mod app;
mod model;
mod ssh;
mod storage;
mod ui;

use app::App;
use model::{AppEvent, HostRecord, Outcome};
use ui::theme::Theme;

const TICK_RATE: Duration = Duration::from_millis(250);

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> ExitCode {
    let mut app = match App::load() {
        Ok(app) => app,
        Err(err) => {
            eprintln!("Error starting quickssh: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            restore_terminal(None);
            eprintln!("Error running program: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let theme = Theme::default();
    let result = run_app(&mut terminal, &mut app, &theme);
    restore_terminal(Some(&mut terminal));
    if let Some(message) = app.save_error.take() {
        eprintln!("{message}");
    }

    match result {
        Ok(Some(host)) => {
            connect(&mut app, &host);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error running program: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("create terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: Option<&mut Tui>) {
    disable_raw_mode().ok();
    match terminal {
        Some(terminal) => {
            execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
            terminal.show_cursor().ok();
        }
        None => {
            execute!(io::stdout(), LeaveAlternateScreen).ok();
        }
    }
}

/// Runs until the user quits or picks a host; the chosen host is returned so
/// the caller can launch ssh once the terminal is released.
fn run_app(terminal: &mut Tui, app: &mut App, theme: &Theme) -> Result<Option<HostRecord>> {
    let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
    app.handle_event(AppEvent::Resize(cols, rows));

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, app, theme))?;

        let event = if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) => AppEvent::Key(key),
                Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
                _ => continue,
            }
        } else {
            AppEvent::Tick
        };

        match app.handle_event(event) {
            Outcome::Continue => {}
            Outcome::Quit => return Ok(None),
            Outcome::Connect(host) => return Ok(Some(host)),
        }
    }
}

fn connect(app: &mut App, host: &HostRecord) {
    let target = ssh::connection_target(host);
    println!("Connecting to {target}");
    match ssh::launch(host) {
        Ok(status) if status.success() => {
            app.log_line(&format!("Session to {target} ended"));
        }
        Ok(status) => {
            let message = format!("ssh {target} exited with {status}");
            eprintln!("{message}");
            app.log_line(&message);
        }
        Err(err) => {
            let message = format!("Error running ssh: {err:#}");
            eprintln!("{message}");
            app.log_line(&message);
        }
    }
}
