use sylph_time::ManualClock;
use sylph_timers::{CallbackHandle, TimerRegistry};

#[test]
fn one_shot_fires_once_then_retires() {
    let clock = ManualClock::new();
    let mut registry = TimerRegistry::new(clock.clone());
    let handle = CallbackHandle::new(|| {});

    let id = registry.create(5, &handle, false).unwrap();
    assert_eq!(registry.len(), 1);

    clock.advance(5);
    let mut fired: Vec<CallbackHandle> = Vec::new();
    registry.process_tick(&mut fired);

    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0], handle);
    assert!(registry.is_empty());

    // Already retired; cancelling now is a normal miss.
    assert!(!registry.remove(&id));
}

#[test]
fn no_firing_before_the_deadline() {
    let clock = ManualClock::new();
    let mut registry = TimerRegistry::new(clock.clone());
    let handle = CallbackHandle::new(|| {});

    registry.create(100, &handle, false).unwrap();

    let mut fired: Vec<CallbackHandle> = Vec::new();
    for _ in 0..99 {
        clock.advance(1);
        registry.process_tick(&mut fired);
    }
    assert!(fired.is_empty());
    assert_eq!(registry.len(), 1);

    clock.advance(1);
    registry.process_tick(&mut fired);
    assert_eq!(fired.len(), 1);
}

#[test]
fn late_poll_still_fires_exactly_once() {
    let clock = ManualClock::new();
    let mut registry = TimerRegistry::new(clock.clone());
    let handle = CallbackHandle::new(|| {});

    registry.create(3, &handle, false).unwrap();

    // The host loop stalled well past the deadline.
    clock.advance(10);
    let mut fired: Vec<CallbackHandle> = Vec::new();
    registry.process_tick(&mut fired);
    registry.process_tick(&mut fired);

    assert_eq!(fired.len(), 1);
    assert!(registry.is_empty());
}
