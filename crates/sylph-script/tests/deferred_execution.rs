use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sylph_script::{CallbackQueue, ScriptTimers};
use sylph_time::ManualClock;
use sylph_timers::CallbackHandle;

#[test]
fn callbacks_run_only_when_serviced() {
    let clock = ManualClock::new();
    let mut timers = ScriptTimers::new(clock.clone());
    let mut queue = CallbackQueue::new();

    let hits = Rc::new(Cell::new(0u32));
    let counter = hits.clone();
    let handle = CallbackHandle::new(move || counter.set(counter.get() + 1));

    timers.set_interval(&handle, 10).unwrap();

    clock.advance(1);
    timers.process_tick(&mut queue);
    assert_eq!(hits.get(), 0);
    assert_eq!(queue.pending(), 1);

    assert_eq!(queue.service(), 1);
    assert_eq!(hits.get(), 1);
}

#[test]
fn a_callback_may_schedule_and_cancel_timers() {
    let clock = ManualClock::new();
    let timers = Rc::new(RefCell::new(ScriptTimers::new(clock.clone())));
    let mut queue = CallbackQueue::new();

    let chained_hits = Rc::new(Cell::new(0u32));

    // The first callback arms a follow-up one-shot when it runs. By the time the queue services
    // it, the registry scan is long over, so the re-entrant call is safe.
    let chain_timers = timers.clone();
    let chain_counter = chained_hits.clone();
    let first = CallbackHandle::new(move || {
        let counter = chain_counter.clone();
        let follow_up = CallbackHandle::new(move || counter.set(counter.get() + 1));
        chain_timers
            .borrow_mut()
            .set_timeout(&follow_up, 10)
            .unwrap();
    });

    timers.borrow_mut().set_timeout(&first, 10).unwrap();

    clock.advance(1);
    timers.borrow_mut().process_tick(&mut queue);
    assert_eq!(queue.service(), 1);

    // The follow-up armed during servicing fires on the next tick.
    clock.advance(1);
    timers.borrow_mut().process_tick(&mut queue);
    assert_eq!(queue.service(), 1);
    assert_eq!(chained_hits.get(), 1);
}
