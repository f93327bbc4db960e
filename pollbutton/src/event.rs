use embassy_time::{Duration, Instant};
pub use pollbutton_types::event::{ButtonEvent, EventKind};

/// Time helpers for [`ButtonEvent`] on the engine side.
///
/// The raw `timestamp` stays the exact microsecond value passed to
/// [`ButtonContext::update`](crate::ButtonContext::update). These conversions are rounded to
/// the embassy-time tick rate.
pub trait EventExt {
    /// The event timestamp as an [`Instant`].
    fn instant(&self) -> Instant;

    /// Time elapsed between the event and `now_us`, zero if `now_us` is earlier.
    fn age(&self, now_us: u64) -> Duration;
}

impl EventExt for ButtonEvent {
    fn instant(&self) -> Instant {
        Instant::from_micros(self.timestamp)
    }

    fn age(&self, now_us: u64) -> Duration {
        Duration::from_micros(now_us.saturating_sub(self.timestamp))
    }
}
