//! Keyboard reader thread.
//!
//! Terminal events cannot be multiplexed with crossbeam `select!` directly,
//! so a dedicated thread polls crossterm and forwards events over a channel.
//! The event loop then treats keyboard input and market snapshots uniformly.

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEvent};
use log::debug;
use std::thread;
use std::time::Duration;

/// How long one poll blocks before looping again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Event forwarded from the reader thread to the UI loop.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized; the dashboard needs a redraw.
    Resize,
}

/// Keyboard listener running on its own thread.
pub struct InputListener;

impl InputListener {
    /// Spawn the reader thread, forwarding every event to `input_tx`.
    ///
    /// The thread exits when the receiving side hangs up or the terminal
    /// event stream fails; it is reaped with the process.
    pub fn start(input_tx: Sender<InputEvent>) {
        thread::spawn(move || {
            loop {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {
                        let input = match event::read() {
                            Ok(Event::Key(key)) => InputEvent::Key(key),
                            Ok(Event::Resize(_, _)) => InputEvent::Resize,
                            Ok(_) => continue,
                            Err(e) => {
                                debug!("Input read error: {}", e);
                                break;
                            }
                        };
                        if input_tx.send(input).is_err() {
                            break;
                        }
                    }
                    Ok(false) => (),
                    Err(e) => {
                        debug!("Input poll error: {}", e);
                        break;
                    }
                }
            }
        });
    }
}
