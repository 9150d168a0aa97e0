use crossbeam_utils::Backoff;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, Thread};

/// One-shot wake handle for a blocked thread.
///
/// A writer that finds the buffer full parks on its own `Signal`; the reader
/// that later drains the writer's value calls [`notify`](Signal::notify) to
/// release it.
pub(crate) struct Signal {
    notified: AtomicBool,
    thread: Thread,
}

impl Signal {
    /// Creates a signal owned by the calling thread.
    pub(crate) fn new() -> Self {
        Self {
            notified: AtomicBool::new(false),
            thread: thread::current(),
        }
    }

    /// Blocks the owning thread until notified.
    ///
    /// Spins briefly before parking. Unparks may be spurious, so the flag is
    /// re-checked on every wakeup.
    pub(crate) fn wait(&self) {
        let backoff = Backoff::new();
        while !self.notified.load(Ordering::Acquire) {
            if backoff.is_completed() {
                thread::park();
            } else {
                backoff.snooze();
            }
        }
    }

    /// Releases the owning thread.
    pub(crate) fn notify(&self) {
        self.notified.store(true, Ordering::Release);
        self.thread.unpark();
    }
}
