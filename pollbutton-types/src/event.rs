use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// What happened to a button.
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Debounced press
    Down,
    /// Debounced release
    Up,
    /// A click series was closed, `count` carries the number of clicks
    Click,
    /// The press exceeded the long-press threshold
    LongStart,
    /// Periodic repeat while a long press is held, `count` carries the repeat index
    LongHold,
}

/// The event record delivered to consumers.
///
/// The layout is a stable contract: button id, kind, count byte, timestamp in microseconds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, MaxSize, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    /// Id of the button which produced the event
    pub id: u8,
    pub kind: EventKind,
    /// Click tally for `Click`, repeat index for `LongHold`, 0 otherwise
    pub count: u8,
    /// Monotonic timestamp in microseconds
    pub timestamp: u64,
}

impl ButtonEvent {
    pub const fn new(id: u8, kind: EventKind, count: u8, timestamp: u64) -> Self {
        Self {
            id,
            kind,
            count,
            timestamp,
        }
    }

    /// Whether this is a closed click series of exactly `clicks` clicks.
    pub fn is_click(&self, clicks: u8) -> bool {
        self.kind == EventKind::Click && self.count == clicks
    }

    pub fn is_down(&self) -> bool {
        self.kind == EventKind::Down
    }

    pub fn is_up(&self) -> bool {
        self.kind == EventKind::Up
    }
}
