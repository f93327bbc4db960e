//! Glitch filter between the raw level and the logical press state.
//!
//! Any change of the raw level restarts the debounce window. The logical state follows the
//! raw level only after the raw level has stayed unchanged for longer than the window.

/// Result of one debounce step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// The logical state became pressed
    Pressed,
    /// The logical state became released
    Released,
    /// No logical transition on this tick
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Last observed level, already corrected for polarity
    raw: bool,
    /// Debounced, application-visible state
    logical: bool,
    /// Time of the last raw change, in microseconds
    last_edge: u64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            raw: false,
            logical: false,
            last_edge: 0,
        }
    }

    /// Debounced press state.
    pub fn pressed(&self) -> bool {
        self.logical
    }

    /// Last raw level seen.
    pub fn raw(&self) -> bool {
        self.raw
    }

    /// Feed one read taken at `now_us` into the filter.
    pub fn update(&mut self, raw: bool, now_us: u64, window_us: u64) -> DebounceState {
        if raw != self.raw {
            self.raw = raw;
            self.last_edge = now_us;
        }

        if now_us.saturating_sub(self.last_edge) <= window_us || self.logical == self.raw {
            return DebounceState::Ignored;
        }

        self.logical = self.raw;
        if self.logical {
            DebounceState::Pressed
        } else {
            DebounceState::Released
        }
    }
}
