// File: crates/linechart-core/src/axis.rs
// Summary: Axis domain bounds (min/max over all series) with host overrides.

use crate::types::{AxisOverride, DataPoint};

/// Domain bounds derived once per data change.
/// Invariant: `min_x <= max_x` and `min_y <= max_y`; both collapse to a
/// single value only when every input is equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisMinMax {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl AxisMinMax {
    pub const fn zero() -> Self {
        Self { min_x: 0.0, max_x: 0.0, min_y: 0.0, max_y: 0.0 }
    }

    /// Compute bounds over every finite point, `y2` included.
    /// An override wins outright for its axis; the zero-start flag only
    /// ever lowers `min_y`. An empty (or fully malformed) input degrades
    /// to the zero bound.
    pub fn of_points(
        points: &[DataPoint],
        always_start_y_axis_from_zero: bool,
        x_override: Option<AxisOverride>,
        y_override: Option<AxisOverride>,
    ) -> Self {
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for p in points.iter().filter(|p| p.is_finite()) {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
            if let Some(y2) = p.y2 {
                min_y = min_y.min(y2);
                max_y = max_y.max(y2);
            }
        }

        if !min_x.is_finite() || !max_x.is_finite() || !min_y.is_finite() || !max_y.is_finite() {
            return Self::zero();
        }

        let (min_x, max_x) = match x_override {
            Some(f) => f(min_x, max_x),
            None => (min_x, max_x),
        };

        let (min_y, max_y) = match y_override {
            Some(f) => f(min_y, max_y),
            None => {
                if always_start_y_axis_from_zero && min_y > 0.0 {
                    (0.0, max_y)
                } else {
                    (min_y, max_y)
                }
            }
        };

        Self { min_x, max_x, min_y, max_y }
    }
}
