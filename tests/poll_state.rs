// tests/poll_state.rs

//! Tests for the pure per-tick decision core: baseline behaviour, forced
//! first builds, change detection, and marker monotonicity.

use std::time::{Duration, UNIX_EPOCH};

use proptest::prelude::*;

use texwatch::engine::{BuildState, Tick};
use texwatch::watch::{has_changed, Marker};

fn marker_at(secs: u64) -> Marker {
    Marker::from(UNIX_EPOCH + Duration::from_secs(secs))
}

#[test]
fn cold_start_establishes_baseline_without_dispatch() {
    let mut state = BuildState::new(false);

    let t0 = marker_at(1_000);
    assert_eq!(state.observe(t0), Tick::Baseline);
    assert_eq!(state.last(), Some(t0));

    // Same marker again on the next tick: nothing to do.
    assert_eq!(state.observe(t0), Tick::Idle);
}

#[test]
fn build_first_dispatches_on_first_tick() {
    let mut state = BuildState::new(true);

    // Any real mtime is newer than the zero sentinel.
    assert_eq!(state.observe(marker_at(1_000)), Tick::Dispatch);
}

#[test]
fn build_first_with_zero_marker_stays_idle() {
    // Directory mode with no matching files observes the zero sentinel; even
    // a forced first build has nothing to act on.
    let mut state = BuildState::new(true);
    assert_eq!(state.observe(Marker::ZERO), Tick::Idle);
    assert_eq!(state.observe(Marker::ZERO), Tick::Idle);
}

#[test]
fn dispatch_only_on_strictly_newer_marker() {
    let mut state = BuildState::new(false);

    let t0 = marker_at(1_000);
    state.observe(t0);

    assert_eq!(state.observe(marker_at(999)), Tick::Idle);
    assert_eq!(state.observe(t0), Tick::Idle);
    assert_eq!(state.observe(marker_at(1_001)), Tick::Dispatch);
}

#[test]
fn marker_does_not_advance_until_told() {
    let mut state = BuildState::new(false);

    let t0 = marker_at(1_000);
    let t1 = marker_at(1_010);
    state.observe(t0);

    // Observing a change does not advance the stored marker; a second
    // observation of the same change still wants a dispatch.
    assert_eq!(state.observe(t1), Tick::Dispatch);
    assert_eq!(state.observe(t1), Tick::Dispatch);

    state.advance(t1);
    assert_eq!(state.observe(t1), Tick::Idle);
}

#[test]
fn two_changes_within_a_tick_collapse_to_the_later_marker() {
    let mut state = BuildState::new(false);
    state.observe(marker_at(1_000));

    // Two writes landed between polls; the detector only ever sees the later
    // mtime, and one advance covers both.
    let later = marker_at(1_002);
    assert_eq!(state.observe(later), Tick::Dispatch);
    state.advance(later);

    assert_eq!(state.observe(later), Tick::Idle);
    assert_eq!(state.last(), Some(later));
}

#[test]
fn advance_never_moves_backwards() {
    let mut state = BuildState::new(false);

    let t1 = marker_at(2_000);
    state.advance(t1);
    state.advance(marker_at(1_500));

    assert_eq!(state.last(), Some(t1));
}

#[test]
fn has_changed_is_strict() {
    assert!(!has_changed(Marker::ZERO, Marker::ZERO));
    assert!(!has_changed(marker_at(5), marker_at(5)));
    assert!(!has_changed(marker_at(4), marker_at(5)));
    assert!(has_changed(marker_at(6), marker_at(5)));
}

fn arb_marker() -> impl Strategy<Value = Marker> {
    // Stay well inside SystemTime's representable range.
    (0u64..4_000_000_000).prop_map(marker_at)
}

proptest! {
    /// The stored marker is non-decreasing over any sequence of observations
    /// and advances.
    #[test]
    fn stored_marker_is_monotonic(
        build_first in any::<bool>(),
        markers in prop::collection::vec(arb_marker(), 1..50),
    ) {
        let mut state = BuildState::new(build_first);
        let mut previous: Option<Marker> = state.last();

        for current in markers {
            if state.observe(current) == Tick::Dispatch {
                state.advance(current);
            }

            let now = state.last();
            if let (Some(prev), Some(now)) = (previous, now) {
                prop_assert!(now >= prev);
            }
            previous = now;
        }
    }

    /// A dispatch is decided only for a marker strictly newer than the
    /// stored one.
    #[test]
    fn dispatch_implies_strictly_newer(
        markers in prop::collection::vec(arb_marker(), 1..50),
    ) {
        let mut state = BuildState::new(false);

        for current in markers {
            let last = state.last();
            let tick = state.observe(current);

            if tick == Tick::Dispatch {
                prop_assert!(Some(current) > last);
                state.advance(current);
            }
        }
    }
}
