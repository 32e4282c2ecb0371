// File: crates/linechart-core/tests/axis.rs
// Purpose: Validate axis bounds, zero-start clamping, and host overrides.

use linechart_core::{AxisMinMax, DataPoint};

fn pts(xy: &[(f64, f64)]) -> Vec<DataPoint> {
    xy.iter().map(|&(x, y)| DataPoint::new(x, y)).collect()
}

#[test]
fn bounds_cover_every_point() {
    let data = pts(&[(0.0, 1.0), (5.0, 3.0), (2.0, -4.0), (9.0, 0.5)]);
    let axis = AxisMinMax::of_points(&data, false, None, None);

    for p in &data {
        assert!(axis.min_x <= p.x && p.x <= axis.max_x);
        assert!(axis.min_y <= p.y && p.y <= axis.max_y);
    }
    assert_eq!(axis.min_x, 0.0);
    assert_eq!(axis.max_x, 9.0);
    assert_eq!(axis.min_y, -4.0);
    assert_eq!(axis.max_y, 3.0);
}

#[test]
fn zero_start_lowers_positive_minimum() {
    let data = pts(&[(0.0, 2.0), (1.0, 5.0)]);
    let axis = AxisMinMax::of_points(&data, true, None, None);
    assert_eq!(axis.min_y, 0.0);
    assert_eq!(axis.max_y, 5.0);
}

#[test]
fn zero_start_never_raises_negative_minimum() {
    let data = pts(&[(0.0, -3.0), (1.0, 5.0)]);
    let axis = AxisMinMax::of_points(&data, true, None, None);
    assert_eq!(axis.min_y, -3.0);
}

fn wide_x(_min: f64, _max: f64) -> (f64, f64) {
    (-10.0, 10.0)
}

fn shifted_y(min: f64, max: f64) -> (f64, f64) {
    (min - 1.0, max + 1.0)
}

#[test]
fn override_wins_outright() {
    let data = pts(&[(0.0, 2.0), (5.0, 4.0)]);
    let axis = AxisMinMax::of_points(&data, true, Some(wide_x), Some(shifted_y));

    assert_eq!((axis.min_x, axis.max_x), (-10.0, 10.0));
    // The y override receives the natural extrema and bypasses the
    // zero-start clamp entirely.
    assert_eq!((axis.min_y, axis.max_y), (1.0, 5.0));
}

#[test]
fn empty_input_degrades_to_zero_bound() {
    let axis = AxisMinMax::of_points(&[], false, None, None);
    assert_eq!(axis, AxisMinMax::zero());
}

#[test]
fn non_finite_points_are_ignored() {
    let mut data = pts(&[(0.0, 1.0), (4.0, 2.0)]);
    data.push(DataPoint::new(f64::NAN, 100.0));
    data.push(DataPoint::new(2.0, f64::INFINITY));

    let axis = AxisMinMax::of_points(&data, false, None, None);
    assert_eq!(axis.max_y, 2.0);
    assert_eq!(axis.max_x, 4.0);
}

#[test]
fn ranged_band_extends_y_bounds() {
    let data = vec![
        DataPoint::ranged(0.0, 3.0, -1.0),
        DataPoint::ranged(1.0, 5.0, 2.0),
    ];
    let axis = AxisMinMax::of_points(&data, false, None, None);
    assert_eq!(axis.min_y, -1.0);
    assert_eq!(axis.max_y, 5.0);
}

#[test]
fn single_point_collapses_to_degenerate_bound() {
    let data = pts(&[(3.0, 7.0)]);
    let axis = AxisMinMax::of_points(&data, false, None, None);
    assert_eq!((axis.min_x, axis.max_x), (3.0, 3.0));
    assert_eq!((axis.min_y, axis.max_y), (7.0, 7.0));
}
