//! Terminal UI for gridline.

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Command, Direction, command_for, move_cursor};
pub use ui::draw;

use crate::audio::{AudioContext, AudioCues, TerminalBell};
use crate::celebration::Celebration;
use crate::settings::Settings;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridline_core::Game;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, error, info, instrument, warn};

/// Frame interval; input is polled for at most this long.
const TICK: Duration = Duration::from_millis(50);

/// Runs one interactive session until the user quits.
#[instrument(skip_all, fields(grid_size = settings.game().grid_size(), players = settings.game().player_count()))]
pub fn run_tui(settings: Settings) -> Result<()> {
    info!("Starting gridline TUI");

    let mut game = Game::new(*settings.game());
    let audio = Rc::new(RefCell::new(AudioCues::new(
        AudioContext::new(TerminalBell::stdout()),
        *settings.audio().enabled(),
    )));
    game.subscribe(audio.clone());

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let mut app = App::new(game, Rc::new(RefCell::new(Celebration::new(seed))));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = audio.borrow_mut().suspend() {
        warn!(error = %e, "Failed to suspend audio");
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Session ended");
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = command_for(key.code)
        {
            debug!(?command, "Key command");
            app.apply(command);
        }

        if app.should_quit() {
            return Ok(());
        }
        app.tick();
    }
}
