//! Polled button engine.
//!
//! `pollbutton` turns noisy boolean reads into a stream of semantic events: press, release,
//! multi-click, long press start and auto-repeat while held. It is written for controllers
//! with a single polling loop and no heap: all storage lives inside [`ButtonContext`], whose
//! slot count and queue capacity are const generics.
//!
//! Each call of [`ButtonContext::update`] runs every configured button through
//!
//! 1. the [`debounce`] filter, which promotes a raw level to a logical press/release,
//! 2. the [`click`] accumulator, which groups short presses into a click series,
//! 3. the [`hold`] timer, which detects long presses and produces repeats,
//!
//! and every resulting event goes through one emission path in [`queue`]: dropped if the
//! button is suppressed, offered to the button's [`EventHook`], otherwise pushed to a ring
//! buffer that overwrites its oldest entry when full.
//!
//! ```ignore
//! let level = Cell::new(false);
//! let mut read = || level.get();
//! let mut ctx: ButtonContext<'_, 1, 16> = ButtonContext::new()?;
//! ctx.configure(0, Some(ButtonConfig::new(1, &mut read).timing(ButtonTiming::default())));
//! loop {
//!     ctx.update(clock_us());
//!     while let Some(event) = ctx.pop_event() {
//!         // ...
//!     }
//! }
//! ```

#![no_std]

// Logging macros, must stay the first module
mod fmt;

pub mod button;
pub mod click;
pub mod config;
pub mod context;
pub mod debounce;
pub mod error;
pub mod event;
pub mod hold;
pub mod input;
pub mod queue;

pub use config::ButtonConfig;
pub use context::ButtonContext;
pub use error::Error;
pub use event::{ButtonEvent, EventExt, EventKind};
pub use input::{ButtonInput, EventHook, PinInput};
pub use pollbutton_types as types;
pub use pollbutton_types::ButtonTiming;

/// Default capacity of the event queue.
pub const DEFAULT_EVENT_QUEUE_SIZE: usize = 16;
