//! Long press and auto-repeat detection while a button is held.

use crate::click::ClickState;

/// Output of [`HoldTimer::poll`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HoldEvent {
    /// The hold just crossed the long-press threshold
    LongStart,
    /// A repeat period elapsed, carrying the 1-based repeat index
    LongHold(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldTimer {
    /// Microseconds
    press_start: u64,
    last_repeat: u64,
    /// Repeat index of the current hold, saturating
    repeats: u8,
}

impl Default for HoldTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl HoldTimer {
    pub const fn new() -> Self {
        Self {
            press_start: 0,
            last_repeat: 0,
            repeats: 0,
        }
    }

    /// Start timing a new press.
    pub fn start(&mut self, now_us: u64) {
        self.press_start = now_us;
        self.last_repeat = now_us;
        self.repeats = 0;
    }

    pub fn press_start(&self) -> u64 {
        self.press_start
    }

    /// How long the current press has lasted at `now_us`, in microseconds.
    pub fn held_for(&self, now_us: u64) -> u64 {
        now_us.saturating_sub(self.press_start)
    }

    pub fn repeats(&self) -> u8 {
        self.repeats
    }

    pub fn reset_repeats(&mut self) {
        self.repeats = 0;
    }

    /// Advance the timer of a held button.
    ///
    /// The first tick past `long_press_us` marks `click` as [`ClickState::LongPressSignaled`]
    /// and yields `LongStart`. Later ticks yield `LongHold` every time more than
    /// `repeat_period_us` elapsed since the previous one.
    pub fn poll(
        &mut self,
        now_us: u64,
        click: &mut ClickState,
        long_press_us: u64,
        repeat_period_us: Option<u64>,
    ) -> Option<HoldEvent> {
        if self.held_for(now_us) <= long_press_us {
            return None;
        }

        if !click.is_long_press() {
            *click = ClickState::LongPressSignaled;
            self.repeats = 0;
            self.last_repeat = now_us;
            return Some(HoldEvent::LongStart);
        }

        let period = repeat_period_us?;
        if now_us.saturating_sub(self.last_repeat) > period {
            self.repeats = self.repeats.saturating_add(1);
            self.last_repeat = now_us;
            return Some(HoldEvent::LongHold(self.repeats));
        }
        None
    }
}
