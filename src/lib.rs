//! Go-style channels for coordinating threads.
//!
//! A [`Channel`] is a thread-safe FIFO with optional bounded capacity and
//! blocking or non-blocking put and get. Values are handed straight from a
//! blocked writer to a blocked reader whenever possible and buffered
//! otherwise; capacity zero gives Go's synchronous channel, where every put
//! rendezvouses with a get.
//!
//! [`channel_select`] waits on any number of channels at once and returns the
//! first value any of them produces, consuming exactly one value overall. It
//! is layered on the [`Selector`], a single-assignment rendezvous box that at
//! most one channel can win.
//!
//! # Example
//!
//! ```rust
//! use gochan::{bounded, unbounded};
//! use std::thread;
//!
//! let work = bounded::<u32>(0); // rendezvous channel
//! let done = unbounded::<&str>();
//!
//! let (tx, fin) = (work.clone(), done.clone());
//! thread::spawn(move || {
//!     tx.put(7);
//!     fin.put("sent");
//! });
//!
//! assert_eq!(work.get(), 7);
//! assert_eq!(done.get(), "sent");
//! ```
//!
//! Waiting on several channels at once:
//!
//! ```rust
//! use gochan::{unbounded, channel_select};
//!
//! let a = unbounded();
//! let b = unbounded();
//! b.put("from b");
//!
//! assert_eq!(channel_select(&[a, b]), "from b");
//! ```

#![warn(missing_docs)]

mod channel;
mod error;
mod select;
mod selector;
mod signal;

pub use channel::{Capacity, Channel};
pub use error::{TryGetError, TryPutError};
pub use select::{channel_select, try_channel_select};
pub use selector::Selector;

/// Creates a channel of unbounded capacity.
///
/// Puts never block; gets block while the channel is empty.
pub fn unbounded<T>() -> Channel<T> {
    Channel::new(Capacity::Unbounded)
}

/// Creates a channel holding at most `cap` buffered values.
///
/// `cap == 0` creates a rendezvous channel: every put blocks until a get
/// takes the value directly.
pub fn bounded<T>(cap: usize) -> Channel<T> {
    Channel::new(Capacity::Bounded(cap))
}
