// File: crates/linechart-core/tests/active.rs
// Purpose: Validate active-point derivation, hand-off dedupe, and follower
//          placement.

use std::cell::RefCell;
use std::rc::Rc;

use linechart_core::active::{follower_position, ActivePointTracker, Follower, FrameInput};
use linechart_core::reactive::{handoff, HandoffEvent};
use linechart_core::{build_path, AxisMinMax, ChartConfig, Curve, DataPoint, Path, PathParams};

fn sample_path() -> (Path, AxisMinMax) {
    let data: Vec<DataPoint> = [0.0, 10.0, 20.0, 30.0]
        .iter()
        .map(|&x| DataPoint::new(x, x / 3.0))
        .collect();
    let axis = AxisMinMax::of_points(&data, false, None, None);
    let path = build_path(&PathParams {
        data: &data,
        width: 100.0,
        height: 100.0,
        end_spacing: 0.0,
        is_filled: false,
        curve: Curve::Linear,
        axis,
    });
    (path, axis)
}

fn input<'a>(path: &'a Path, axis: &'a AxisMinMax, x: f32, active: bool, now: f64) -> FrameInput<'a> {
    FrameInput {
        path,
        axis,
        width: 100.0,
        end_spacing: 0.0,
        touch_x: x,
        touch_active: active,
        now_ms: now,
    }
}

fn point_changes(events: &[HandoffEvent]) -> Vec<Option<DataPoint>> {
    events
        .iter()
        .filter_map(|e| match e {
            HandoffEvent::PointChanged(p) => Some(*p),
            _ => None,
        })
        .collect()
}

#[test]
fn callback_fires_once_per_index_change() {
    let (path, axis) = sample_path();
    let (tx, rx) = handoff(32);
    let mut tracker = ActivePointTracker::new(&ChartConfig::default());

    // Three frames at a constant index, then one that moves it.
    for (i, x) in [70.0, 71.0, 73.0, 90.0].iter().enumerate() {
        tracker.update(&input(&path, &axis, *x, true, i as f64 * 16.0), None, &tx);
    }

    let changes = point_changes(&rx.drain());
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].map(|p| p.x), Some(20.0));
    assert_eq!(changes[1].map(|p| p.x), Some(30.0));
}

#[test]
fn first_definition_requests_one_refresh() {
    let (path, axis) = sample_path();
    let (tx, rx) = handoff(32);
    let mut tracker = ActivePointTracker::new(&ChartConfig::default());

    tracker.update(&input(&path, &axis, 50.0, true, 0.0), None, &tx);
    tracker.update(&input(&path, &axis, 60.0, true, 16.0), None, &tx);
    tracker.update(&input(&path, &axis, 90.0, true, 32.0), None, &tx);

    let refreshes = rx
        .drain()
        .iter()
        .filter(|e| matches!(e, HandoffEvent::Refresh))
        .count();
    assert_eq!(refreshes, 1);
}

#[test]
fn focus_and_blur_edges_are_single_events() {
    let (path, axis) = sample_path();
    let (tx, rx) = handoff(32);
    let mut tracker = ActivePointTracker::new(&ChartConfig::default());

    tracker.update(&input(&path, &axis, 40.0, true, 0.0), None, &tx);
    tracker.update(&input(&path, &axis, 41.0, true, 16.0), None, &tx);
    tracker.update(&input(&path, &axis, 41.0, false, 32.0), None, &tx);
    tracker.update(&input(&path, &axis, 41.0, false, 48.0), None, &tx);

    let events = rx.drain();
    let focuses = events.iter().filter(|e| matches!(e, HandoffEvent::Focus)).count();
    let blurs = events.iter().filter(|e| matches!(e, HandoffEvent::Blur)).count();
    assert_eq!(focuses, 1);
    assert_eq!(blurs, 1);

    // Release reports "no active point" exactly once.
    let changes = point_changes(&events);
    assert_eq!(changes.last(), Some(&None));
}

#[test]
fn visibility_fades_with_touch_transitions() {
    let (path, axis) = sample_path();
    let (tx, _rx) = handoff(32);
    let mut tracker = ActivePointTracker::new(&ChartConfig::default());

    tracker.update(&input(&path, &axis, 70.0, true, 0.0), None, &tx);
    let mid = tracker.sample(50.0).expect("visible while fading in");
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    assert_eq!(tracker.sample(100.0).map(|s| s.opacity), Some(1.0));

    // Release at t=200: fades out over the same timing, keeping the last
    // placement sampled until it settles.
    tracker.update(&input(&path, &axis, 70.0, false, 200.0), None, &tx);
    let fading = tracker.sample(250.0).expect("still visible mid-fade");
    assert!(fading.opacity > 0.0 && fading.opacity < 1.0);
    assert_eq!(fading.point.x, 20.0);
    assert!(tracker.sample(320.0).is_none());
}

#[test]
fn initial_point_reported_before_any_movement() {
    let (path, axis) = sample_path();
    let (tx, _rx) = handoff(32);
    let config = ChartConfig { initial_active_point: Some(2), ..ChartConfig::default() };
    let mut tracker = ActivePointTracker::new(&config);

    tracker.update(&input(&path, &axis, 0.0, true, 0.0), None, &tx);
    assert_eq!(tracker.active_index(), Some(2));
}

#[test]
fn always_show_keeps_the_point_without_touch() {
    let (path, axis) = sample_path();
    let (tx, _rx) = handoff(32);
    let config = ChartConfig {
        always_show_active_point: true,
        initial_active_point: Some(1),
        ..ChartConfig::default()
    };
    let mut tracker = ActivePointTracker::new(&config);

    tracker.update(&input(&path, &axis, 0.0, false, 0.0), None, &tx);
    let sample = tracker.sample(0.0).expect("visible without touch");
    assert_eq!(sample.index, 1);
    assert_eq!(sample.opacity, 1.0);
}

#[test]
fn snapshot_follower_receives_one_copy_per_change() {
    let (path, axis) = sample_path();
    let (tx, _rx) = handoff(32);
    let mut tracker = ActivePointTracker::new(&ChartConfig::default());

    let seen: Rc<RefCell<Vec<Option<DataPoint>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let follower = Follower::Snapshot(Box::new(move |p| sink.borrow_mut().push(p)));

    for (i, x) in [70.0, 71.0, 90.0].iter().enumerate() {
        tracker.update(
            &input(&path, &axis, *x, true, i as f64 * 16.0),
            Some(&follower),
            &tx,
        );
    }
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn reactive_follower_reads_the_live_cell() {
    let (path, axis) = sample_path();
    let (tx, _rx) = handoff(32);
    let mut tracker = ActivePointTracker::new(&ChartConfig::default());

    let wired = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&wired);
    let follower = Follower::Reactive(Box::new(move |cell| {
        *sink.borrow_mut() = Some(cell);
    }));
    tracker.wire_follower(Some(&follower));

    tracker.update(&input(&path, &axis, 90.0, true, 0.0), Some(&follower), &tx);

    let cell = wired.borrow().clone().expect("wired once at configuration");
    assert_eq!(cell.get().map(|p| p.x), Some(30.0));
}

#[test]
fn follower_flips_sides_near_the_edge() {
    // Plenty of room: sits to the right of the line.
    assert_eq!(follower_position(10.0, 30.0, 100.0, false), 25.0);
    // Would overflow: flips to the left.
    assert_eq!(follower_position(80.0, 30.0, 100.0, false), 35.0);
}

#[test]
fn follower_placement_mirrors_under_rtl() {
    assert_eq!(follower_position(20.0, 30.0, 100.0, true), -35.0);
    assert_eq!(follower_position(90.0, 30.0, 100.0, true), -25.0);
}
