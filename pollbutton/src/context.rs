//! The button registry.
//!
//! [`ButtonContext`] owns `N` button slots and a queue of `Q` events. The caller polls it
//! from one place with a monotonic clock and drains events from another; both must be
//! serialized on the same thread of control.

use embassy_time::Duration;

use crate::DEFAULT_EVENT_QUEUE_SIZE;
use crate::button::ButtonState;
use crate::config::ButtonConfig;
use crate::error::Error;
use crate::event::ButtonEvent;
use crate::queue::EventQueue;

/// One entry of the registry. A slot without config is never polled.
pub struct ButtonSlot<'a> {
    config: Option<ButtonConfig<'a>>,
    state: ButtonState,
}

impl<'a> ButtonSlot<'a> {
    const fn empty() -> Self {
        Self {
            config: None,
            state: ButtonState::new(),
        }
    }

    pub fn id(&self) -> Option<u8> {
        self.config.as_ref().map(|c| c.id)
    }

    pub fn state(&self) -> &ButtonState {
        &self.state
    }
}

pub struct ButtonContext<'a, const N: usize, const Q: usize = DEFAULT_EVENT_QUEUE_SIZE> {
    slots: [ButtonSlot<'a>; N],
    queue: EventQueue<Q>,
}

impl<'a, const N: usize, const Q: usize> ButtonContext<'a, N, Q> {
    /// Create a context with every slot unconfigured.
    pub fn new() -> Result<Self, Error> {
        if N == 0 {
            return Err(Error::NoButtonSlots);
        }
        if Q == 0 {
            return Err(Error::NoQueueStorage);
        }
        Ok(Self {
            slots: core::array::from_fn(|_| ButtonSlot::empty()),
            queue: EventQueue::new(),
        })
    }

    /// Install `config` in slot `index` and reset the slot's state.
    ///
    /// `None` disables the slot. An out-of-range index is ignored.
    pub fn configure(&mut self, index: usize, config: Option<ButtonConfig<'a>>) {
        let Some(slot) = self.slots.get_mut(index) else {
            warn!("Ignoring config for slot {}, only {} slots available", index, N);
            return;
        };
        match &config {
            Some(c) => info!("Slot {}: button {} configured, {:?}", index, c.id, c.timing),
            None => info!("Slot {}: disabled", index),
        }
        slot.config = config;
        slot.state = ButtonState::new();
    }

    /// Whether slot `index` is polled.
    pub fn is_configured(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.config.is_some())
    }

    pub fn slots(&self) -> &[ButtonSlot<'a>] {
        &self.slots
    }

    /// Run one tick of every configured button.
    ///
    /// `now_us` is the caller's monotonic clock in microseconds. Events are stamped with it
    /// unchanged.
    pub fn update(&mut self, now_us: u64) {
        for slot in self.slots.iter_mut() {
            if let Some(config) = slot.config.as_mut() {
                slot.state.poll(config, &mut self.queue, now_us);
            }
        }
    }

    /// Pop the oldest queued event.
    pub fn pop_event(&mut self) -> Option<ButtonEvent> {
        self.queue.pop()
    }

    /// Pop events until the queue is empty.
    pub fn drain(&mut self) -> impl Iterator<Item = ButtonEvent> + '_ {
        core::iter::from_fn(move || self.queue.pop())
    }

    /// Discard all queued events.
    pub fn flush(&mut self) {
        self.queue.flush();
    }

    /// Number of queued events.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        Q
    }

    /// Number of events lost to queue overflow.
    pub fn dropped_count(&self) -> u32 {
        self.queue.dropped()
    }

    /// Whether button `id` is pressed. A suppressed button never is.
    pub fn is_pressed(&self, id: u8) -> bool {
        self.find(id).is_some_and(|s| s.state.is_active())
    }

    /// How long button `id` has been pressed at `now_us`, zero if it is not pressed.
    ///
    /// The result is expressed in embassy-time ticks, so it is rounded to the tick rate.
    pub fn hold_duration(&self, id: u8, now_us: u64) -> Duration {
        self.find(id)
            .map(|s| Duration::from_micros(s.state.hold_duration(now_us)))
            .unwrap_or(Duration::from_ticks(0))
    }

    /// Drop every further event of button `id` until its next press.
    pub fn suppress(&mut self, id: u8) {
        if let Some(slot) = self.find_mut(id) {
            debug!("Button {} suppressed", id);
            slot.state.suppress();
        }
    }

    fn find(&self, id: u8) -> Option<&ButtonSlot<'a>> {
        self.slots.iter().find(|s| s.id() == Some(id))
    }

    fn find_mut(&mut self, id: u8) -> Option<&mut ButtonSlot<'a>> {
        self.slots.iter_mut().find(|s| s.id() == Some(id))
    }
}
