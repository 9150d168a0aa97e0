use std::sync::Mutex;

use crate::signal::Signal;

/// A single-assignment rendezvous box.
///
/// A selector accepts at most one value over its lifetime: the first
/// [`offer`](Selector::offer) wins, every later offer is refused and hands
/// the value back to the caller. The thread that created the selector
/// retrieves the winning value with [`get`](Selector::get), blocking until it
/// arrives.
///
/// A solitary [`Channel::get`](crate::Channel::get) uses a private selector
/// as its blocking mechanism. [`channel_select`](crate::channel_select)
/// shares one selector across every channel it waits on; single assignment
/// is what makes delivery exactly-once there.
pub struct Selector<T> {
    slot: Mutex<Slot<T>>,
    signal: Signal,
}

struct Slot<T> {
    set: bool,
    value: Option<T>,
}

impl<T> Selector<T> {
    /// Creates an empty selector owned by the calling thread.
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot {
                set: false,
                value: None,
            }),
            signal: Signal::new(),
        }
    }

    /// Offers a value to the selector.
    ///
    /// The first offer is accepted and wakes the waiting thread. Every later
    /// offer is a no-op that returns the value back through `Err`, so the
    /// caller can requeue it wherever it came from.
    pub fn offer(&self, value: T) -> Result<(), T> {
        let mut slot = self.slot.lock().unwrap();
        if slot.set {
            return Err(value);
        }
        slot.set = true;
        slot.value = Some(value);
        drop(slot);
        self.signal.notify();
        Ok(())
    }

    /// Blocks until a value has been offered, then takes it.
    ///
    /// Must be called by the thread that created the selector, at most once.
    ///
    /// # Panics
    ///
    /// Panics if the value has already been taken by an earlier call.
    pub fn get(&self) -> T {
        self.signal.wait();
        let mut slot = self.slot.lock().unwrap();
        slot.value.take().expect("selector value already taken")
    }

    /// Returns true once an offer has been accepted.
    ///
    /// Housekeeping only: channels use this to sweep dead entries out of
    /// their reader queues. Do not use it to pre-check an offer, that would
    /// race; offer and inspect the result instead.
    pub fn is_stale(&self) -> bool {
        self.slot.lock().unwrap().set
    }
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::new()
    }
}
