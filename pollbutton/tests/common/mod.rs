use core::cell::Cell;

use pollbutton::{ButtonContext, ButtonEvent, EventKind};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Manually advanced microsecond clock
pub struct Clock {
    now_us: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self { now_us: 0 }
    }

    /// Current time in microseconds.
    pub fn now(&self) -> u64 {
        self.now_us
    }

    pub fn advance(&mut self, ms: u64) {
        self.now_us += ms * 1000;
    }

    pub fn advance_us(&mut self, us: u64) {
        self.now_us += us;
    }
}

/// Advance the clock by `ms` and run one tick.
pub fn step<const N: usize, const Q: usize>(ctx: &mut ButtonContext<'_, N, Q>, clock: &mut Clock, ms: u64) {
    clock.advance(ms);
    ctx.update(clock.now());
}

/// Change the level and run one tick at the current time.
pub fn set_level<const N: usize, const Q: usize>(
    ctx: &mut ButtonContext<'_, N, Q>,
    clock: &Clock,
    level: &Cell<bool>,
    value: bool,
) {
    level.set(value);
    ctx.update(clock.now());
}

/// A short press held for `hold_ms`, released and debounced for `hold_ms`.
pub fn tap<const N: usize, const Q: usize>(
    ctx: &mut ButtonContext<'_, N, Q>,
    clock: &mut Clock,
    level: &Cell<bool>,
    hold_ms: u64,
) {
    set_level(ctx, clock, level, true);
    step(ctx, clock, hold_ms);
    set_level(ctx, clock, level, false);
    step(ctx, clock, hold_ms);
}

pub fn collect<const N: usize, const Q: usize>(ctx: &mut ButtonContext<'_, N, Q>) -> Vec<ButtonEvent> {
    ctx.drain().collect()
}

pub fn kinds(events: &[ButtonEvent]) -> Vec<(EventKind, u8)> {
    events.iter().map(|e| (e.kind, e.count)).collect()
}

pub fn count_kind(events: &[ButtonEvent], kind: EventKind) -> usize {
    events.iter().filter(|e| e.kind == kind).count()
}
