use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// Timing parameters of a button, all in milliseconds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct ButtonTiming {
    /// The level must stay unchanged for longer than this before a transition is accepted
    pub debounce_ms: u16,
    /// Maximum gap between two clicks of the same series
    pub click_timeout_ms: u16,
    /// Hold time after which a press becomes a long press
    pub long_press_ms: u16,
    /// Period of repeat events during a long press, 0 disables repeating
    pub repeat_period_ms: u16,
}

impl Default for ButtonTiming {
    fn default() -> Self {
        Self {
            debounce_ms: 20,
            click_timeout_ms: 250,
            long_press_ms: 500,
            repeat_period_ms: 100,
        }
    }
}

impl ButtonTiming {
    pub const fn new(debounce_ms: u16, click_timeout_ms: u16, long_press_ms: u16, repeat_period_ms: u16) -> Self {
        Self {
            debounce_ms,
            click_timeout_ms,
            long_press_ms,
            repeat_period_ms,
        }
    }

    pub const fn with_debounce_ms(mut self, debounce_ms: u16) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub const fn with_click_timeout_ms(mut self, click_timeout_ms: u16) -> Self {
        self.click_timeout_ms = click_timeout_ms;
        self
    }

    pub const fn with_long_press_ms(mut self, long_press_ms: u16) -> Self {
        self.long_press_ms = long_press_ms;
        self
    }

    pub const fn with_repeat_period_ms(mut self, repeat_period_ms: u16) -> Self {
        self.repeat_period_ms = repeat_period_ms;
        self
    }

    /// Whether long presses emit periodic `LongHold` events.
    pub const fn repeats(&self) -> bool {
        self.repeat_period_ms > 0
    }
}
