//! Cancellable color cycler.
//!
//! The original overlay drove color replacement with `setInterval` and no
//! way to cancel it. Here the timer is an explicit background task with a
//! stop handle, taking the color generator and the apply callback as
//! injected closures rather than process-wide globals.
//!
//! The document types are not `Send`, so the apply callback is the seam
//! between the cycler thread and whatever owns the tree.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A repeating background task that generates a color every interval and
/// hands it to the apply callback.
///
/// Stops when [`ColorCycler::stop`] is called or the handle is dropped.
///
/// # Example
///
/// ```rust
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use chat_overlay::color::random_hex_color;
/// use chat_overlay::cycler::ColorCycler;
///
/// let (tx, rx) = mpsc::channel();
/// let cycler = ColorCycler::spawn(
///     Duration::from_millis(1),
///     || random_hex_color(&mut rand::rng()),
///     move |color| { let _ = tx.send(color.to_string()); },
/// );
/// let first = rx.recv().unwrap();
/// cycler.stop();
/// assert!(first.starts_with('#'));
/// ```
#[derive(Debug)]
pub struct ColorCycler {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ColorCycler {
    /// Spawn the cycler thread.
    ///
    /// Every `interval`, `generate` produces a color and `apply` receives
    /// it. The first tick fires one interval after spawning.
    pub fn spawn<G, A>(interval: Duration, mut generate: G, mut apply: A) -> Self
    where
        G: FnMut() -> String + Send + 'static,
        A: FnMut(&str) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);

        let handle = thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::Relaxed) {
                break;
            }
            let color = generate();
            apply(&color);
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Signal the cycler to stop and wait for the thread to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ColorCycler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
