pub use pollbutton_types::timing::ButtonTiming;

use crate::input::{ButtonInput, EventHook};

/// Everything a slot needs to poll one button.
///
/// The config borrows its capabilities for the lifetime of the
/// [`ButtonContext`](crate::ButtonContext) it is handed to.
pub struct ButtonConfig<'a> {
    /// Id carried by every event of this button, and used to look it up
    pub id: u8,
    /// A low level means pressed
    pub active_low: bool,
    pub timing: ButtonTiming,
    pub(crate) input: &'a mut dyn ButtonInput,
    pub(crate) hook: Option<&'a mut dyn EventHook>,
}

impl<'a> ButtonConfig<'a> {
    /// Active-high button with default timing and no hook.
    pub fn new(id: u8, input: &'a mut dyn ButtonInput) -> Self {
        Self {
            id,
            active_low: false,
            timing: ButtonTiming::default(),
            input,
            hook: None,
        }
    }

    pub fn active_low(mut self) -> Self {
        self.active_low = true;
        self
    }

    pub fn timing(mut self, timing: ButtonTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Intercept this button's events before they are queued.
    pub fn hook(mut self, hook: &'a mut dyn EventHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Read the input and correct it for polarity: `true` means pressed.
    pub(crate) fn read_pressed(&mut self) -> bool {
        self.input.read() != self.active_low
    }
}

/// [`ButtonTiming`] windows in microseconds, the unit of the engine clock.
pub(crate) trait TimingExt {
    fn debounce_us(&self) -> u64;
    fn click_timeout_us(&self) -> u64;
    fn long_press_us(&self) -> u64;
    /// `None` when repeating is disabled
    fn repeat_period_us(&self) -> Option<u64>;
}

impl TimingExt for ButtonTiming {
    fn debounce_us(&self) -> u64 {
        self.debounce_ms as u64 * 1000
    }

    fn click_timeout_us(&self) -> u64 {
        self.click_timeout_ms as u64 * 1000
    }

    fn long_press_us(&self) -> u64 {
        self.long_press_ms as u64 * 1000
    }

    fn repeat_period_us(&self) -> Option<u64> {
        self.repeats().then(|| self.repeat_period_ms as u64 * 1000)
    }
}
