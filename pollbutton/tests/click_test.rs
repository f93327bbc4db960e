pub mod common;

use core::cell::Cell;

use pollbutton::{ButtonConfig, ButtonContext, ButtonTiming, EventKind};

use crate::common::{Clock, collect, count_kind, kinds, set_level, step, tap};

const TIMING: ButtonTiming = ButtonTiming::new(10, 200, 500, 0);

#[test]
fn test_single_click() {
    let level = Cell::new(false);
    let mut read = || level.get();
    let mut ctx: ButtonContext<'_, 1, 16> = ButtonContext::new().unwrap();
    ctx.configure(0, Some(ButtonConfig::new(1, &mut read).timing(TIMING)));
    let mut clock = Clock::new();

    tap(&mut ctx, &mut clock, &level, 15);
    let release_us = clock.now();
    step(&mut ctx, &mut clock, 250);

    let events = collect(&mut ctx);
    assert_eq!(
        kinds(&events),
        vec![(EventKind::Down, 0), (EventKind::Up, 0), (EventKind::Click, 1)]
    );
    assert_eq!(events[0].timestamp, 15_000);
    assert_eq!(events[1].timestamp, release_us);
    assert_eq!(events[2].timestamp, release_us);
    assert!(events.iter().all(|e| e.id == 1));
}

#[test]
fn test_timestamps_are_caller_microseconds() {
    // Neither the start nor the cadence is a whole number of 32768 Hz ticks
    const START_US: u64 = 1_000_007;
    const TICK_US: u64 = 1_003;
    let at = |tick: u64| START_US + tick * TICK_US;

    let level = Cell::new(false);
    let mut read = || level.get();
    let mut ctx: ButtonContext<'_, 1, 16> = ButtonContext::new().unwrap();
    ctx.configure(0, Some(ButtonConfig::new(1, &mut read).timing(ButtonTiming::new(5, 50, 500, 0))));

    for tick in 0..200 {
        level.set((10..80).contains(&tick));
        ctx.update(at(tick));
    }

    let events = collect(&mut ctx);
    assert_eq!(
        kinds(&events),
        vec![(EventKind::Down, 0), (EventKind::Up, 0), (EventKind::Click, 1)]
    );
    // 5 ticks is the first count strictly past the 5 ms debounce window
    assert_eq!(events[0].timestamp, at(15));
    assert_eq!(events[1].timestamp, at(85));
    assert_eq!(events[2].timestamp, at(85));
}

#[test]
fn test_multi_click_counts() {
    for n in 1..=5u8 {
        let level = Cell::new(false);
        let mut read = || level.get();
        let mut ctx: ButtonContext<'_, 1, 32> = ButtonContext::new().unwrap();
        ctx.configure(0, Some(ButtonConfig::new(1, &mut read).timing(TIMING)));
        let mut clock = Clock::new();

        let mut last_release_us = 0;
        for _ in 0..n {
            tap(&mut ctx, &mut clock, &level, 15);
            last_release_us = clock.now();
            // Gap shorter than the click timeout
            step(&mut ctx, &mut clock, 100);
        }
        step(&mut ctx, &mut clock, 250);

        let events = collect(&mut ctx);
        assert_eq!(count_kind(&events, EventKind::Down), n as usize);
        assert_eq!(count_kind(&events, EventKind::Up), n as usize);
        assert_eq!(count_kind(&events, EventKind::Click), 1, "n = {}", n);

        let click = events.last().unwrap();
        assert!(click.is_click(n));
        // Stamped with the n-th release, not with the timeout expiry
        assert_eq!(click.timestamp, last_release_us);
    }
}

#[test]
fn test_slow_clicks_are_separate_series() {
    let level = Cell::new(false);
    let mut read = || level.get();
    let mut ctx: ButtonContext<'_, 1, 16> = ButtonContext::new().unwrap();
    ctx.configure(0, Some(ButtonConfig::new(1, &mut read).timing(TIMING)));
    let mut clock = Clock::new();

    tap(&mut ctx, &mut clock, &level, 15);
    step(&mut ctx, &mut clock, 300);
    tap(&mut ctx, &mut clock, &level, 15);
    step(&mut ctx, &mut clock, 300);

    let events = collect(&mut ctx);
    let clicks: Vec<u8> = events
        .iter()
        .filter(|e| e.kind == EventKind::Click)
        .map(|e| e.count)
        .collect();
    assert_eq!(clicks, vec![1, 1]);
}

#[test]
fn test_bouncing_contact_is_one_click() {
    let level = Cell::new(false);
    let mut read = || level.get();
    let mut ctx: ButtonContext<'_, 1, 16> = ButtonContext::new().unwrap();
    ctx.configure(0, Some(ButtonConfig::new(1, &mut read).timing(TIMING)));
    let mut clock = Clock::new();

    // Chatter on press
    for value in [true, false, true, false, true] {
        set_level(&mut ctx, &clock, &level, value);
        step(&mut ctx, &mut clock, 2);
    }
    step(&mut ctx, &mut clock, 20);
    // Chatter on release
    for value in [false, true, false] {
        set_level(&mut ctx, &clock, &level, value);
        step(&mut ctx, &mut clock, 2);
    }
    step(&mut ctx, &mut clock, 20);
    step(&mut ctx, &mut clock, 300);

    assert_eq!(
        kinds(&collect(&mut ctx)),
        vec![(EventKind::Down, 0), (EventKind::Up, 0), (EventKind::Click, 1)]
    );
}

#[test]
fn test_active_low_button() {
    // Pulled up at rest
    let level = Cell::new(true);
    let mut read = || level.get();
    let mut ctx: ButtonContext<'_, 1, 16> = ButtonContext::new().unwrap();
    ctx.configure(0, Some(ButtonConfig::new(9, &mut read).active_low().timing(TIMING)));
    let mut clock = Clock::new();

    step(&mut ctx, &mut clock, 100);
    assert!(ctx.is_empty());

    set_level(&mut ctx, &clock, &level, false);
    step(&mut ctx, &mut clock, 15);
    assert!(ctx.is_pressed(9));
    set_level(&mut ctx, &clock, &level, true);
    step(&mut ctx, &mut clock, 15);
    step(&mut ctx, &mut clock, 250);

    let events = collect(&mut ctx);
    assert_eq!(
        kinds(&events),
        vec![(EventKind::Down, 0), (EventKind::Up, 0), (EventKind::Click, 1)]
    );
    assert!(events.iter().all(|e| e.id == 9));
}

#[test]
fn test_buttons_accumulate_independently() {
    let left = Cell::new(false);
    let right = Cell::new(false);
    let mut read_left = || left.get();
    let mut read_right = || right.get();
    let mut ctx: ButtonContext<'_, 2, 32> = ButtonContext::new().unwrap();
    ctx.configure(0, Some(ButtonConfig::new(10, &mut read_left).timing(TIMING)));
    ctx.configure(1, Some(ButtonConfig::new(30, &mut read_right).timing(TIMING)));
    let mut clock = Clock::new();

    tap(&mut ctx, &mut clock, &left, 15);
    tap(&mut ctx, &mut clock, &right, 15);
    step(&mut ctx, &mut clock, 50);
    tap(&mut ctx, &mut clock, &left, 15);
    step(&mut ctx, &mut clock, 300);

    let events = collect(&mut ctx);
    let left_clicks: Vec<u8> = events
        .iter()
        .filter(|e| e.id == 10 && e.kind == EventKind::Click)
        .map(|e| e.count)
        .collect();
    let right_clicks: Vec<u8> = events
        .iter()
        .filter(|e| e.id == 30 && e.kind == EventKind::Click)
        .map(|e| e.count)
        .collect();
    assert_eq!(left_clicks, vec![2]);
    assert_eq!(right_clicks, vec![1]);
}
