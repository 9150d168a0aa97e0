use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{TryGetError, TryPutError};
use crate::selector::Selector;
use crate::signal::Signal;

/// Reader-queue compaction threshold: after this many selector-carrying
/// gets, entries already satisfied by another channel are swept out.
const MAX_STALE: usize = 256;

/// Buffer capacity of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    /// The buffer grows without bound; `put` never blocks.
    Unbounded,
    /// At most this many buffered values. Zero makes the channel a
    /// rendezvous point: every put must meet a get.
    Bounded(usize),
}

impl Capacity {
    fn admits(self, len: usize) -> bool {
        match self {
            Capacity::Unbounded => true,
            Capacity::Bounded(cap) => len < cap,
        }
    }
}

struct Queues<T> {
    pending: VecDeque<T>,
    waiting_writers: VecDeque<(Arc<Signal>, T)>,
    waiting_readers: VecDeque<Arc<Selector<T>>>,
    stale: usize,
}

impl<T> Queues<T> {
    /// A reader only queues itself on an empty buffer, so both queues
    /// populated at once means the hand-off logic is broken. The panic
    /// poisons the channel mutex, leaving the channel unusable.
    fn assert_handoff_invariant(&self) {
        assert!(
            self.waiting_readers.is_empty() || self.pending.is_empty(),
            "channel state corrupted: blocked readers alongside buffered values"
        );
    }

    /// Moves the first blocked writer's value into the buffer and releases
    /// that writer. Called after a get frees one slot.
    fn admit_waiting_writer(&mut self) {
        if let Some((signal, value)) = self.waiting_writers.pop_front() {
            self.pending.push_back(value);
            signal.notify();
        }
    }
}

struct Inner<T> {
    capacity: Capacity,
    queues: Mutex<Queues<T>>,
}

/// A thread-safe FIFO with optional bounded capacity and blocking put/get.
///
/// Cloning a `Channel` produces another handle to the same underlying queue,
/// so any number of threads can put and get concurrently. Values move in
/// strict per-channel FIFO order, and blocked writers and readers are served
/// in arrival order.
///
/// # Example
///
/// ```rust
/// use gochan::bounded;
///
/// let c = bounded(1);
/// c.put(1);
/// assert!(c.try_put(2).is_err()); // buffer full
/// assert_eq!(c.get(), 1);
/// assert!(c.try_put(2).is_ok());
/// ```
pub struct Channel<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Channel<T> {
    /// Creates a channel with the given capacity.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            inner: Arc::new(Inner {
                capacity,
                queues: Mutex::new(Queues {
                    pending: VecDeque::new(),
                    waiting_writers: VecDeque::new(),
                    waiting_readers: VecDeque::new(),
                    stale: 0,
                }),
            }),
        }
    }

    /// Returns the channel's capacity.
    pub fn capacity(&self) -> Capacity {
        self.inner.capacity
    }

    /// Returns the number of buffered values.
    ///
    /// The count is a snapshot; other threads may change it immediately.
    pub fn len(&self) -> usize {
        self.inner.queues.lock().unwrap().pending.len()
    }

    /// Returns true if nothing is buffered and no writer is blocked.
    pub fn is_empty(&self) -> bool {
        let q = self.inner.queues.lock().unwrap();
        q.pending.is_empty() && q.waiting_writers.is_empty()
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        let q = self.inner.queues.lock().unwrap();
        !self.inner.capacity.admits(q.pending.len())
    }

    /// Puts a value into the channel, blocking while the buffer is full.
    ///
    /// A waiting reader is handed the value directly; otherwise the value is
    /// buffered if there is room, or the calling thread blocks until a
    /// reader drains its value.
    pub fn put(&self, mut value: T) {
        let handle = {
            let mut q = self.inner.queues.lock().unwrap();
            q.assert_handoff_invariant();
            while let Some(reader) = q.waiting_readers.pop_front() {
                match reader.offer(value) {
                    Ok(()) => return,
                    // Already satisfied by another channel; drop the entry.
                    Err(rejected) => value = rejected,
                }
            }
            if self.inner.capacity.admits(q.pending.len()) {
                q.pending.push_back(value);
                return;
            }
            let handle = Arc::new(Signal::new());
            q.waiting_writers.push_back((Arc::clone(&handle), value));
            handle
        };
        // Lock released; wait for a reader to drain our value.
        handle.wait();
    }

    /// Attempts to put without blocking.
    ///
    /// Fails with [`TryPutError::Full`] when the buffer is full and no
    /// reader is waiting, handing the value back.
    pub fn try_put(&self, mut value: T) -> Result<(), TryPutError<T>> {
        let mut q = self.inner.queues.lock().unwrap();
        q.assert_handoff_invariant();
        while let Some(reader) = q.waiting_readers.pop_front() {
            match reader.offer(value) {
                Ok(()) => return Ok(()),
                Err(rejected) => value = rejected,
            }
        }
        if self.inner.capacity.admits(q.pending.len()) {
            q.pending.push_back(value);
            return Ok(());
        }
        Err(TryPutError::Full(value))
    }

    /// Gets a value from the channel, blocking while nothing is available.
    pub fn get(&self) -> T {
        let selector = {
            let mut q = self.inner.queues.lock().unwrap();
            if let Some(value) = q.pending.pop_front() {
                q.admit_waiting_writer();
                return value;
            }
            if let Some((signal, value)) = q.waiting_writers.pop_front() {
                // Rendezvous: take the value straight from a blocked writer.
                signal.notify();
                return value;
            }
            let selector = Arc::new(Selector::new());
            q.waiting_readers.push_back(Arc::clone(&selector));
            selector
        };
        // Lock released; block until a writer hands us a value.
        selector.get()
    }

    /// Attempts to get without blocking.
    ///
    /// Fails with [`TryGetError::Empty`] when nothing is buffered and no
    /// writer is waiting.
    pub fn try_get(&self) -> Result<T, TryGetError> {
        let mut q = self.inner.queues.lock().unwrap();
        if let Some(value) = q.pending.pop_front() {
            q.admit_waiting_writer();
            return Ok(value);
        }
        if let Some((signal, value)) = q.waiting_writers.pop_front() {
            signal.notify();
            return Ok(value);
        }
        Err(TryGetError::Empty)
    }

    /// Runs one get attempt on behalf of a shared selector.
    ///
    /// This is the fan-in hook used by
    /// [`channel_select`](crate::channel_select): the selector either
    /// receives a value immediately or is queued as a waiting reader. The
    /// call itself never blocks and never returns a value; retrieval happens
    /// through the selector.
    ///
    /// A value popped for a selector that has already accepted elsewhere is
    /// pushed back where it came from, keeping FIFO order intact.
    pub fn get_with(&self, selector: &Arc<Selector<T>>) {
        let mut q = self.inner.queues.lock().unwrap();

        // Channels that keep losing selects accumulate dead entries in the
        // reader queue; sweep them out every MAX_STALE selector-carrying
        // gets.
        q.stale += 1;
        if q.stale > MAX_STALE {
            q.waiting_readers.retain(|reader| !reader.is_stale());
            q.stale = 0;
        }

        if let Some(value) = q.pending.pop_front() {
            match selector.offer(value) {
                Ok(()) => q.admit_waiting_writer(),
                Err(value) => q.pending.push_front(value),
            }
        } else if let Some((signal, value)) = q.waiting_writers.pop_front() {
            match selector.offer(value) {
                Ok(()) => signal.notify(),
                Err(value) => q.waiting_writers.push_front((signal, value)),
            }
        } else {
            q.waiting_readers.push_back(Arc::clone(selector));
        }
    }
}
