//! Terminal lifecycle and the main event loop.
//!
//! `run_tui` owns the raw-mode/alternate-screen setup and teardown; the
//! inner loop multiplexes market snapshots and keyboard input with crossbeam
//! `select!` and redraws after every event. Teardown lives in a drop guard
//! armed as soon as raw mode is on, so any exit from `run_tui` restores the
//! terminal, setup failures included.

use crossbeam_channel::{Receiver, select};
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use monitor_core::generator::MarketEvent;
use monitor_core::{MonitorError, Result};

use crate::app::App;
use crate::input::InputEvent;
use crate::ui;

/// Run the dashboard until the user quits or the feed shuts down.
pub fn run_tui(
    app: &mut App,
    market_rx: &Receiver<MarketEvent>,
    input_rx: &Receiver<InputEvent>,
) -> Result<()> {
    enable_raw_mode()?;
    let _restore = TerminalRestore;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    event_loop(&mut terminal, app, market_rx, input_rx)
}

/// Undoes `run_tui`'s terminal setup when dropped.
///
/// Restore errors are ignored: the guard also runs while unwinding and in
/// environments with no terminal attached, where the calls cannot succeed.
struct TerminalRestore;

impl Drop for TerminalRestore {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    market_rx: &Receiver<MarketEvent>,
    input_rx: &Receiver<InputEvent>,
) -> Result<()> {
    terminal.draw(|f| ui::draw(f, app))?;

    loop {
        select! {
            recv(market_rx) -> msg => match msg {
                Ok(MarketEvent::Snapshot(quotes)) => app.apply_snapshot(quotes),
                Ok(MarketEvent::Shutdown) => break,
                Err(e) => return Err(MonitorError::ChannelRecv(e.to_string())),
            },
            recv(input_rx) -> msg => match msg {
                Ok(InputEvent::Key(key)) => app.handle_key(key),
                Ok(InputEvent::Resize) => (),
                Err(e) => return Err(MonitorError::ChannelRecv(e.to_string())),
            },
        }
        if app.should_quit {
            break;
        }
        terminal.draw(|f| ui::draw(f, app))?;
    }
    Ok(())
}
