// File: crates/linechart-core/src/path.rs
// Summary: Path geometry: draw commands, domain projections, SVG emission.

use std::fmt::Write as _;

use crate::axis::AxisMinMax;
use crate::scale::LinearScale;
use crate::types::{Curve, DataPoint};

/// One vector draw command in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    CubicTo { x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32 },
    Close,
}

/// Immutable geometry for one line: the ordered command list, the
/// domain→pixel projections that produced it, and the points it retained.
/// Replaced wholesale when data changes, never mutated in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
    x_scale: LinearScale,
    y_scale: LinearScale,
    data: Vec<DataPoint>,
    sorted_x: bool,
}

impl Path {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The finite points the build kept, in input order.
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    /// Whether the retained points are non-decreasing in x; the locator
    /// binary-searches only when this holds.
    pub fn is_sorted_x(&self) -> bool {
        self.sorted_x
    }

    /// Project a domain x value to its pixel x.
    #[inline]
    pub fn x(&self, v: f64) -> f32 {
        self.x_scale.to_px(v)
    }

    /// Project a domain y value to its pixel y (inverted: larger is higher).
    #[inline]
    pub fn y(&self, v: f64) -> f32 {
        self.y_scale.to_px(v)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn last_point(&self) -> Option<DataPoint> {
        self.data.last().copied()
    }

    /// Render the command list as SVG path data.
    pub fn to_svg(&self) -> String {
        let mut d = String::with_capacity(self.commands.len() * 16);
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { x, y } => write!(d, "M{x:.2},{y:.2}").unwrap(),
                PathCommand::LineTo { x, y } => write!(d, "L{x:.2},{y:.2}").unwrap(),
                PathCommand::CubicTo { x1, y1, x2, y2, x, y } => {
                    write!(d, "C{x1:.2},{y1:.2},{x2:.2},{y2:.2},{x:.2},{y:.2}").unwrap()
                }
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}

/// Inputs for one path build.
#[derive(Clone, Copy, Debug)]
pub struct PathParams<'a> {
    pub data: &'a [DataPoint],
    pub width: f32,
    pub height: f32,
    /// Pixels reserved at the trailing edge; the x range ends short of it.
    pub end_spacing: f32,
    pub is_filled: bool,
    pub curve: Curve,
    pub axis: AxisMinMax,
}

/// Build a path from a point series. Non-finite points are skipped, a
/// single surviving point yields one move command, and rebuilding from
/// unchanged inputs is bytewise identical.
pub fn build_path(params: &PathParams) -> Path {
    let PathParams { data, width, height, end_spacing, is_filled, curve, axis } = *params;

    let x_scale = LinearScale::new((axis.min_x, axis.max_x), (0.0, width - end_spacing));
    let y_scale = LinearScale::new((axis.min_y, axis.max_y), (height, 0.0));

    let pts: Vec<DataPoint> = data.iter().filter(|p| p.is_finite()).copied().collect();
    let sorted_x = pts.windows(2).all(|w| w[0].x <= w[1].x);

    let mut commands = Vec::with_capacity(pts.len() * 2 + 3);
    if !pts.is_empty() {
        let upper: Vec<(f64, f64)> = pts.iter().map(|p| (p.x, p.y)).collect();
        emit_forward(&mut commands, &upper, curve, &x_scale, &y_scale);

        let ranged = pts[0].y2.is_some();
        if ranged && pts.len() > 1 {
            // Lower band boundary runs backward so the commands enclose
            // the region between y and y2.
            let lower: Vec<(f64, f64)> =
                pts.iter().map(|p| (p.x, p.y2.unwrap_or(p.y))).collect();
            emit_backward(&mut commands, &lower, curve, &x_scale, &y_scale);
            commands.push(PathCommand::Close);
        } else if is_filled && pts.len() > 1 {
            let base = y_scale.to_px(axis.min_y);
            let last = x_scale.to_px(pts[pts.len() - 1].x);
            let first = x_scale.to_px(pts[0].x);
            commands.push(PathCommand::LineTo { x: last, y: base });
            commands.push(PathCommand::LineTo { x: first, y: base });
            commands.push(PathCommand::Close);
        }
    }

    Path { commands, x_scale, y_scale, data: pts, sorted_x }
}

// ---- boundary emission ------------------------------------------------------

/// Cubic control points for one segment, in pixel space.
#[derive(Clone, Copy)]
struct Ctrl {
    c1: (f32, f32),
    c2: (f32, f32),
}

/// Project points and derive per-segment control points (None = straight).
fn boundary(
    pts: &[(f64, f64)],
    curve: Curve,
    xs: &LinearScale,
    ys: &LinearScale,
) -> (Vec<(f32, f32)>, Vec<Option<Ctrl>>) {
    let px: Vec<(f32, f32)> =
        pts.iter().map(|&(x, y)| (xs.to_px(x), ys.to_px(y))).collect();
    if pts.len() < 2 {
        return (px, Vec::new());
    }

    let ctrls = match curve {
        Curve::Linear => vec![None; pts.len() - 1],
        Curve::Monotone => {
            let tangents = monotone_tangents(pts);
            (0..pts.len() - 1)
                .map(|i| {
                    let (x0, y0) = pts[i];
                    let (x1, y1) = pts[i + 1];
                    let h = x1 - x0;
                    if h.abs() < 1e-12 {
                        return None;
                    }
                    let c1 = (x0 + h / 3.0, y0 + tangents[i] * h / 3.0);
                    let c2 = (x1 - h / 3.0, y1 - tangents[i + 1] * h / 3.0);
                    Some(Ctrl {
                        c1: (xs.to_px(c1.0), ys.to_px(c1.1)),
                        c2: (xs.to_px(c2.0), ys.to_px(c2.1)),
                    })
                })
                .collect()
        }
    };
    (px, ctrls)
}

fn emit_forward(
    commands: &mut Vec<PathCommand>,
    pts: &[(f64, f64)],
    curve: Curve,
    xs: &LinearScale,
    ys: &LinearScale,
) {
    let (px, ctrls) = boundary(pts, curve, xs, ys);
    let Some(&(x0, y0)) = px.first() else { return };
    commands.push(PathCommand::MoveTo { x: x0, y: y0 });
    for (i, &(x, y)) in px.iter().enumerate().skip(1) {
        match ctrls[i - 1] {
            None => commands.push(PathCommand::LineTo { x, y }),
            Some(Ctrl { c1, c2 }) => commands.push(PathCommand::CubicTo {
                x1: c1.0,
                y1: c1.1,
                x2: c2.0,
                y2: c2.1,
                x,
                y,
            }),
        }
    }
}

/// Emit a boundary in reverse, joining from the current pen position.
/// Each forward cubic traverses backward with its control points swapped.
fn emit_backward(
    commands: &mut Vec<PathCommand>,
    pts: &[(f64, f64)],
    curve: Curve,
    xs: &LinearScale,
    ys: &LinearScale,
) {
    let (px, ctrls) = boundary(pts, curve, xs, ys);
    let Some(&(xn, yn)) = px.last() else { return };
    commands.push(PathCommand::LineTo { x: xn, y: yn });
    for i in (0..px.len() - 1).rev() {
        let (x, y) = px[i];
        match ctrls[i] {
            None => commands.push(PathCommand::LineTo { x, y }),
            Some(Ctrl { c1, c2 }) => commands.push(PathCommand::CubicTo {
                x1: c2.0,
                y1: c2.1,
                x2: c1.0,
                y2: c1.1,
                x,
                y,
            }),
        }
    }
}

/// Fritsch-Carlson tangents: averaged secant slopes, zeroed at local
/// extrema and limited so the interpolant never overshoots its knots.
fn monotone_tangents(pts: &[(f64, f64)]) -> Vec<f64> {
    let n = pts.len();
    debug_assert!(n >= 2);

    let mut slopes = vec![0.0; n - 1];
    for i in 0..n - 1 {
        let h = pts[i + 1].0 - pts[i].0;
        slopes[i] = if h.abs() < 1e-12 { 0.0 } else { (pts[i + 1].1 - pts[i].1) / h };
    }

    let mut m = vec![0.0; n];
    m[0] = slopes[0];
    m[n - 1] = slopes[n - 2];
    for i in 1..n - 1 {
        m[i] = if slopes[i - 1] * slopes[i] <= 0.0 {
            0.0
        } else {
            (slopes[i - 1] + slopes[i]) / 2.0
        };
    }

    for i in 0..n - 1 {
        if slopes[i] == 0.0 {
            m[i] = 0.0;
            m[i + 1] = 0.0;
            continue;
        }
        let a = m[i] / slopes[i];
        let b = m[i + 1] / slopes[i];
        let s = a * a + b * b;
        if s > 9.0 {
            let t = 3.0 / s.sqrt();
            m[i] = t * a * slopes[i];
            m[i + 1] = t * b * slopes[i];
        }
    }
    m
}
