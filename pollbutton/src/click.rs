//! Click accumulation.
//!
//! Short presses whose releases are less than the click timeout apart form one series. The
//! series is closed once the button stays released past the timeout, yielding a single click
//! count stamped with the last release of the series.

/// Click bookkeeping of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClickState {
    /// No series in progress
    #[default]
    Idle,
    /// A series of `count` short presses, the last released at `last_release` (microseconds)
    Accumulating { count: u8, last_release: u64 },
    /// The current hold already produced a `LongStart`
    LongPressSignaled,
}

impl ClickState {
    pub fn is_long_press(&self) -> bool {
        matches!(self, ClickState::LongPressSignaled)
    }

    /// Number of clicks accumulated so far.
    pub fn count(&self) -> u8 {
        match self {
            ClickState::Accumulating { count, .. } => *count,
            _ => 0,
        }
    }

    /// Record a short press released at `now_us`, restarting the timeout window.
    pub fn register_click(&mut self, now_us: u64) {
        let count = self.count().saturating_add(1);
        *self = ClickState::Accumulating {
            count,
            last_release: now_us,
        };
    }

    /// Close the series if the button stayed released for longer than `timeout_us`.
    ///
    /// Returns the click count and the timestamp of the last release of the series.
    pub fn poll(&mut self, now_us: u64, timeout_us: u64) -> Option<(u8, u64)> {
        if let ClickState::Accumulating { count, last_release } = *self {
            if now_us.saturating_sub(last_release) > timeout_us {
                *self = ClickState::Idle;
                return Some((count, last_release));
            }
        }
        None
    }
}
