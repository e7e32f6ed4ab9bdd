#![cfg(not(feature = "hydrate"))]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn after_runs_immediately_outside_the_browser() {
    let hit = Rc::new(Cell::new(false));
    let flag = hit.clone();
    after(1_500, move || flag.set(true));
    assert!(hit.get());
}

#[test]
fn ticker_stops() {
    let ticker = Ticker::start(1_000, || {});
    assert!(ticker.is_running());
    let clone = ticker.clone();
    clone.stop();
    assert!(!ticker.is_running());
}

#[test]
fn ticker_never_fires_outside_the_browser() {
    let hits = Rc::new(Cell::new(0));
    let counter = hits.clone();
    let ticker = Ticker::start(1, move || counter.set(counter.get() + 1));
    ticker.stop();
    assert_eq!(hits.get(), 0);
}

#[test]
fn bumping_generation_invalidates_captured_value() {
    let generation = Generation::new();
    let captured = generation.current();
    assert!(generation.is_current(captured));

    let shared = generation.clone();
    assert_eq!(shared.bump(), captured + 1);
    assert!(!generation.is_current(captured));
    assert!(generation.is_current(captured + 1));
}
