//! Errors reported when building a [`ButtonContext`](crate::ButtonContext).
//!
//! Everything after construction degrades silently: unknown ids read as "not pressed",
//! out-of-range slots are ignored and a full queue drops its oldest event.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The context was declared with zero button slots.
    NoButtonSlots,
    /// The context was declared with a zero-capacity event queue.
    NoQueueStorage,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoButtonSlots => write!(f, "no button slots"),
            Error::NoQueueStorage => write!(f, "no event queue storage"),
        }
    }
}
