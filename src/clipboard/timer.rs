//! One-shot delayed callback with cancellation.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Runs a callback once after a delay on a background thread.
///
/// Dropping the handle (or calling `cancel`) before the delay elapses
/// stops the callback from running.
pub struct DelayedReset {
    cancel: Option<Sender<()>>,
    handle: Option<JoinHandle<bool>>,
}

impl DelayedReset {
    /// Schedule `callback` to run after `delay`.
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || match rx.recv_timeout(delay) {
            Err(RecvTimeoutError::Timeout) => {
                callback();
                true
            }
            // Cancelled explicitly or the handle went away.
            Ok(()) | Err(RecvTimeoutError::Disconnected) => false,
        });

        Self {
            cancel: Some(tx),
            handle: Some(handle),
        }
    }

    /// Block until the timer finishes. Returns `true` if the callback ran.
    pub fn wait(mut self) -> bool {
        self.join()
    }

    /// Stop the timer. Returns `true` if the callback had already run.
    pub fn cancel(mut self) -> bool {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
        self.join()
    }

    fn join(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => handle.join().unwrap_or(false),
            None => false,
        }
    }
}

impl Drop for DelayedReset {
    fn drop(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
        self.join();
    }
}
