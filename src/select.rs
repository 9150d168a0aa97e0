use std::sync::Arc;

use crate::channel::Channel;
use crate::error::TryGetError;
use crate::selector::Selector;

/// Takes the first value available from any of the given channels, blocking
/// until one of them produces a value.
///
/// One shared [`Selector`] is registered on every channel in slice order, so
/// earlier channels get first claim on anything already available. Once all
/// channels are empty, which one wins is a scheduling race, not a priority:
/// callers worried about starving later channels should permute the slice
/// between calls.
///
/// Exactly one value is consumed across all channels per call. Channels that
/// lose the race keep the spent selector in their reader queue until their
/// periodic compaction discards it.
///
/// # Panics
///
/// Panics if `channels` is empty.
///
/// # Example
///
/// ```rust
/// use gochan::{unbounded, channel_select};
/// use std::thread;
///
/// let a = unbounded::<i32>();
/// let b = unbounded::<i32>();
///
/// let tx = b.clone();
/// thread::spawn(move || tx.put(20));
///
/// assert_eq!(channel_select(&[a, b]), 20);
/// ```
pub fn channel_select<T>(channels: &[Channel<T>]) -> T {
    assert!(
        !channels.is_empty(),
        "channel_select on an empty channel list"
    );
    let selector = Arc::new(Selector::new());
    for channel in channels {
        channel.get_with(&selector);
    }
    selector.get()
}

/// Tries each channel's non-blocking get in slice order and returns the
/// first value found.
///
/// Fails with [`TryGetError::Empty`] only when every channel is empty.
///
/// # Panics
///
/// Panics if `channels` is empty.
pub fn try_channel_select<T>(channels: &[Channel<T>]) -> Result<T, TryGetError> {
    assert!(
        !channels.is_empty(),
        "try_channel_select on an empty channel list"
    );
    for channel in channels {
        if let Ok(value) = channel.try_get() {
            return Ok(value);
        }
    }
    Err(TryGetError::Empty)
}
