//! # pollbutton types
//!
//! Plain data exchanged between the polling engine in `pollbutton` and whatever consumes
//! its output.
//!
//! - [`event`] - the event record pushed to the queue, and its kind
//! - [`timing`] - per-button timing parameters
//!
//! Everything here is `Copy`, `no_std` and serde-serializable, so an event can be forwarded
//! over a link with `postcard` and a timing profile can be loaded from a config file.

#![no_std]

pub mod event;
pub mod timing;

pub use event::{ButtonEvent, EventKind};
pub use timing::ButtonTiming;
