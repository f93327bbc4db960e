//! Event sink: the single emission path shared by every part of the button state machine.
//!
//! Events of a suppressed button are dropped. Otherwise the button's [`EventHook`] sees the
//! event first and may consume it. Whatever is left is pushed into [`EventQueue`], a fixed
//! ring buffer which drops its oldest entry to make room for a new one.

use heapless::Deque;

use crate::event::ButtonEvent;
use crate::input::EventHook;

/// Fixed capacity FIFO of button events with overwrite-oldest eviction.
pub struct EventQueue<const Q: usize> {
    events: Deque<ButtonEvent, Q>,
    /// Number of events evicted to make room, saturating
    dropped: u32,
}

impl<const Q: usize> Default for EventQueue<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const Q: usize> EventQueue<Q> {
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
            dropped: 0,
        }
    }

    /// Push an event, evicting the oldest one if the queue is full.
    pub fn push(&mut self, event: ButtonEvent) {
        if self.events.is_full() {
            if let Some(oldest) = self.events.pop_front() {
                self.dropped = self.dropped.saturating_add(1);
                warn!("Event queue is full, dropping oldest event {:?}", oldest);
            }
        }
        if self.events.push_back(event).is_err() {
            // Only reachable with a zero-capacity queue
            self.dropped = self.dropped.saturating_add(1);
        }
    }

    /// Oldest queued event, if any.
    pub fn pop(&mut self) -> Option<ButtonEvent> {
        self.events.pop_front()
    }

    /// Discard every queued event. Discarded events are not counted as dropped.
    pub fn flush(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        Q
    }

    /// Number of events lost to overflow since creation.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

/// Route one event of a button to its destination.
pub(crate) fn emit<const Q: usize>(
    queue: &mut EventQueue<Q>,
    hook: Option<&mut (dyn EventHook + '_)>,
    suppressed: bool,
    event: ButtonEvent,
) {
    if suppressed {
        return;
    }

    if let Some(hook) = hook {
        if hook.intercept(&event) {
            trace!("Event intercepted: {:?}", event);
            return;
        }
    }

    trace!("Queue event: {:?}", event);
    queue.push(event);
}
