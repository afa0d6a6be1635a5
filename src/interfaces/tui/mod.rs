//! Terminal User Interface (TUI) module
//!
//! Interactive URL shortener: paste a URL, get a short link, track clicks

use std::io::{self, Stderr};
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableBracketedPaste, EnableBracketedPaste},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

pub mod app;
pub mod clipboard;
pub mod constants;
pub mod event_handler;
mod input_handler;
pub mod theme;
mod ui;

use crate::config::AppConfig;
use crate::errors::MinilinkerError;
use app::App;
use ui::ui;

type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
pub async fn run_tui(config: &AppConfig) -> color_eyre::Result<()> {
    // 先加载数据，失败时终端还没被接管
    let mut app = App::new(config).await?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(10));

    install_panic_hook();
    let mut terminal = setup_terminal().map_err(|e| {
        let _ = restore_terminal();
        MinilinkerError::terminal(format!("Failed to set up terminal: {}", e))
    })?;
    info!("TUI started with {} links", app.service.len());

    let res = run_app(&mut terminal, &mut app, tick_rate).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("TUI exited with error: {}", err);
    }
    Ok(res?)
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableBracketedPaste)?;
    Terminal::new(CrosstermBackend::new(stderr))
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stderr(), LeaveAlternateScreen, DisableBracketedPaste)
}

/// panic 时先恢复终端，否则错误信息会被备用屏幕吞掉
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}

/// Main application loop
///
/// Polls with a timeout so transient messages expire even without input.
async fn run_app(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(tick_rate)? {
            let event = event::read()?;
            if event_handler::handle_event(app, event).await? {
                info!("TUI exiting");
                return Ok(());
            }
        }

        app.tick(Instant::now());
    }
}
