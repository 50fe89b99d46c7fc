//  ____  ____                ____
// |  _ \|  _ \ __ _ ___ ___ / ___| ___ _ __
// | |_) | |_) / _` / __/ __| |  _ / _ \ '_ \
// |  _ <|  __/ (_| \__ \__ \ |_| |  __/ | | |
// |_| \_\_|   \__,_|___/___/\____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use arboard::Clipboard;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

pub fn copy_to_clipboard(secret: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    Ok(())
}

/// Single-slot delayed task. Scheduling always cancels and replaces the
/// pending task; dropping the timer cancels it too. Only one task can be
/// pending at a time.
#[derive(Default)]
pub struct SlotTimer {
    cancel: Option<Sender<()>>,
}

impl SlotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The task runs only if the full delay elapses; a cancel message
            // or a dropped sender aborts it.
            if rx.recv_timeout(delay) == Err(RecvTimeoutError::Timeout) {
                task();
            }
        });
        self.cancel = Some(tx);
    }

    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }
}

/// Schedule a clipboard wipe for `secret` after `delay_secs`. The clipboard
/// is cleared only if it still holds the copied secret; anything the user
/// copied in the meantime is left alone.
pub fn clear_after(timer: &mut SlotTimer, secret: String, delay_secs: u64) {
    timer.schedule(Duration::from_secs(delay_secs), move || {
        let mut ctx = match Clipboard::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                eprintln!("Clipboard init failed: {}", e);
                return;
            }
        };
        let current = ctx.get_text().unwrap_or_default();
        if current == secret {
            if let Err(e) = ctx.set_text("") {
                eprintln!("Failed to clear clipboard: {}", e);
            }
        }
    });
}
