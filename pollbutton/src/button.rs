//! Per-button state machine.
//!
//! [`ButtonState`] ties the debounce filter, the click accumulator and the hold timer
//! together, and routes everything they produce through the event sink.

use crate::click::ClickState;
use crate::config::{ButtonConfig, TimingExt};
use crate::debounce::{DebounceState, Debouncer};
use crate::event::{ButtonEvent, EventKind};
use crate::hold::{HoldEvent, HoldTimer};
use crate::queue::{EventQueue, emit};

/// Mutable state of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    debouncer: Debouncer,
    click: ClickState,
    hold: HoldTimer,
    /// Events are dropped until the next debounced press
    suppressed: bool,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            debouncer: Debouncer::new(),
            click: ClickState::Idle,
            hold: HoldTimer::new(),
            suppressed: false,
        }
    }

    /// Debounced press state, regardless of suppression.
    pub fn pressed(&self) -> bool {
        self.debouncer.pressed()
    }

    pub fn suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn click(&self) -> ClickState {
        self.click
    }

    /// Pressed and not suppressed.
    pub fn is_active(&self) -> bool {
        self.debouncer.pressed() && !self.suppressed
    }

    /// Microseconds the current press has lasted, zero if the button is not active.
    pub fn hold_duration(&self, now_us: u64) -> u64 {
        if self.is_active() {
            self.hold.held_for(now_us)
        } else {
            0
        }
    }

    /// Silence the button until its next press.
    ///
    /// Events already queued are kept.
    pub fn suppress(&mut self) {
        self.click = ClickState::Idle;
        self.hold.reset_repeats();
        self.suppressed = true;
    }

    /// Advance the state machine by one tick taken at `now_us` microseconds.
    pub fn poll<const Q: usize>(&mut self, config: &mut ButtonConfig<'_>, queue: &mut EventQueue<Q>, now_us: u64) {
        let raw = config.read_pressed();
        match self.debouncer.update(raw, now_us, config.timing.debounce_us()) {
            DebounceState::Pressed => self.on_press(config, queue, now_us),
            DebounceState::Released => self.on_release(config, queue, now_us),
            DebounceState::Ignored => {}
        }

        if self.debouncer.pressed() {
            let long_press = config.timing.long_press_us();
            let repeat_period = config.timing.repeat_period_us();
            match self.hold.poll(now_us, &mut self.click, long_press, repeat_period) {
                Some(HoldEvent::LongStart) => {
                    debug!("Button {} long press started", config.id);
                    self.emit(config, queue, EventKind::LongStart, 0, now_us);
                }
                Some(HoldEvent::LongHold(index)) => {
                    self.emit(config, queue, EventKind::LongHold, index, now_us);
                }
                None => {}
            }
        } else if let Some((count, last_release)) = self.click.poll(now_us, config.timing.click_timeout_us()) {
            debug!("Button {} click series closed: {} click(s)", config.id, count);
            self.hold.reset_repeats();
            self.emit(config, queue, EventKind::Click, count, last_release);
        }
    }

    fn on_press<const Q: usize>(&mut self, config: &mut ButtonConfig<'_>, queue: &mut EventQueue<Q>, now_us: u64) {
        debug!("Button {} pressed", config.id);
        self.hold.start(now_us);
        self.suppressed = false;
        self.emit(config, queue, EventKind::Down, 0, now_us);
    }

    fn on_release<const Q: usize>(&mut self, config: &mut ButtonConfig<'_>, queue: &mut EventQueue<Q>, now_us: u64) {
        debug!("Button {} released", config.id);
        self.emit(config, queue, EventKind::Up, 0, now_us);

        if self.suppressed {
            if self.click.is_long_press() {
                self.click = ClickState::Idle;
            }
            return;
        }

        // A hold reaching the long-press threshold never counts as a click
        if self.hold.held_for(now_us) < config.timing.long_press_us() {
            self.click.register_click(now_us);
        } else {
            self.click = ClickState::Idle;
        }
    }

    fn emit<const Q: usize>(
        &self,
        config: &mut ButtonConfig<'_>,
        queue: &mut EventQueue<Q>,
        kind: EventKind,
        count: u8,
        timestamp_us: u64,
    ) {
        let event = ButtonEvent::new(config.id, kind, count, timestamp_us);
        emit(queue, config.hook.as_deref_mut(), self.suppressed, event);
    }
}
