use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::thread;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::types::Result;

/// The two terminal-fed event queues the loop listens on.
pub struct InputChannels {
    pub keys: UnboundedReceiver<KeyEvent>,
    pub resizes: UnboundedReceiver<(u16, u16)>,
}

/// Starts the background thread that blocks on terminal input and forwards
/// key presses and resizes. It lives as long as the process, or until the
/// loop drops its receivers.
pub fn spawn_input_reader() -> Result<InputChannels> {
    let (key_tx, keys) = mpsc::unbounded_channel();
    let (resize_tx, resizes) = mpsc::unbounded_channel();

    thread::Builder::new()
        .name("input-reader".into())
        .spawn(move || read_loop(key_tx, resize_tx))?;

    Ok(InputChannels { keys, resizes })
}

fn read_loop(key_tx: UnboundedSender<KeyEvent>, resize_tx: UnboundedSender<(u16, u16)>) {
    loop {
        let sent = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key_tx.send(key).is_ok(),
            Ok(Event::Resize(w, h)) => resize_tx.send((w, h)).is_ok(),
            Ok(_) => true,
            Err(e) => {
                warn!("terminal read failed: {}", e);
                false
            }
        };
        if !sent {
            debug!("input reader stopping");
            return;
        }
    }
}
