//! Capabilities a button borrows from the outside world.
//!
//! [`ButtonInput`] reads the raw electrical level, [`EventHook`] gets a synchronous look at
//! every event before it is queued. Both are implemented for plain closures, and
//! [`PinInput`] plugs any `embedded-hal` input pin in directly.

use embedded_hal::digital::InputPin;

use crate::event::ButtonEvent;

/// Source of the raw level of one button.
///
/// Returns the electrical level as read, polarity is handled by
/// [`ButtonConfig::active_low`](crate::ButtonConfig::active_low).
pub trait ButtonInput {
    fn read(&mut self) -> bool;
}

impl<F: FnMut() -> bool> ButtonInput for F {
    fn read(&mut self) -> bool {
        self()
    }
}

/// Synchronous interception of events.
///
/// Return `true` when the event is fully handled, it is then not queued.
pub trait EventHook {
    fn intercept(&mut self, event: &ButtonEvent) -> bool;
}

impl<F: FnMut(&ButtonEvent) -> bool> EventHook for F {
    fn intercept(&mut self, event: &ButtonEvent) -> bool {
        self(event)
    }
}

/// [`ButtonInput`] over an `embedded-hal` input pin.
///
/// A failed read counts as a low level.
pub struct PinInput<P: InputPin> {
    pin: P,
}

impl<P: InputPin> PinInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> ButtonInput for PinInput<P> {
    fn read(&mut self) -> bool {
        self.pin.is_high().ok().unwrap_or_default()
    }
}
