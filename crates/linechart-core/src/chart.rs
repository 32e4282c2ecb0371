// File: crates/linechart-core/src/chart.rs
// Summary: Chart orchestrator: lines, axis snapshot, tracker, transitions.

use crate::active::{ActivePointCell, ActivePointTracker, FrameInput};
use crate::animation::Transition;
use crate::axis::AxisMinMax;
use crate::gradient::{gradient_stops, GradientStop};
use crate::path::{build_path, Path, PathParams};
use crate::reactive::{handoff, HandoffEvent, HandoffReceiver, HandoffSender};
use crate::types::{ActivePointConfig, ChartConfig, DataPoint, Line, LineColor};

/// Bound on undelivered host events before the sender drops.
const HANDOFF_CAPACITY: usize = 32;

type PointCallback = Box<dyn Fn(Option<DataPoint>)>;
type EdgeCallback = Box<dyn Fn()>;

struct LineState {
    line: Line,
    path: Path,
    stops: Vec<GradientStop>,
    transition: Transition,
}

/// Owns every line's geometry plus the interaction state, and recomputes
/// all derived values on explicit scheduler ticks. Nothing here blocks the
/// primary context; host-visible effects queue through the bounded
/// hand-off and are delivered by `pump_host`.
pub struct Chart {
    width: f32,
    height: f32,
    config: ChartConfig,
    axis: AxisMinMax,
    lines: Vec<LineState>,
    active_line: usize,
    tracker: ActivePointTracker,
    touch_x: f32,
    touch_active: bool,
    handoff_tx: HandoffSender,
    handoff_rx: HandoffReceiver,
    point_change: Option<PointCallback>,
    point_focus: Option<EdgeCallback>,
    point_lose_focus: Option<EdgeCallback>,
}

impl Chart {
    pub fn new(lines: Vec<Line>, width: f32, height: f32, config: ChartConfig) -> Self {
        let (handoff_tx, handoff_rx) = handoff(HANDOFF_CAPACITY);
        let axis = axis_for(lines.iter(), &config);
        let lines = lines
            .into_iter()
            .map(|line| {
                let path = build_line_path(&line, width, height, &config, axis);
                let stops =
                    gradient_stops(&line.color, line.leading_fade, line.trailing_fade);
                LineState { line, path, stops, transition: Transition::new(config.animation) }
            })
            .collect();

        let mut chart = Self {
            width,
            height,
            config,
            axis,
            lines,
            active_line: 0,
            tracker: ActivePointTracker::new(&config),
            touch_x: 0.0,
            touch_active: false,
            handoff_tx,
            handoff_rx,
            point_change: None,
            point_focus: None,
            point_lose_focus: None,
        };
        chart.wire_active_follower();
        chart
    }

    pub fn axis(&self) -> AxisMinMax {
        self.axis
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_path(&self, index: usize) -> Option<&Path> {
        self.lines.get(index).map(|s| &s.path)
    }

    /// Which line drives the active point and callbacks.
    pub fn set_active_line(&mut self, index: usize) {
        if index < self.lines.len() && index != self.active_line {
            self.active_line = index;
            self.tracker.rewire();
            self.wire_active_follower();
        }
    }

    /// Replace one line's data; geometry rebuilds for every line since the
    /// shared axis may move. Swaps animate when animation is configured.
    pub fn set_line_data(&mut self, index: usize, data: Vec<DataPoint>, now_ms: f64) {
        let Some(state) = self.lines.get_mut(index) else {
            log::debug!("set_line_data: no line at index {index}");
            return;
        };
        state.line.data = data;
        self.refresh_geometry(now_ms, true);
    }

    /// New canvas dimensions; rebuilds immediately, no transition.
    pub fn resize(&mut self, width: f32, height: f32, now_ms: f64) {
        self.width = width;
        self.height = height;
        self.refresh_geometry(now_ms, false);
    }

    /// Continuous touch position update, pixel offset from the left edge.
    pub fn touch_move(&mut self, x_px: f32) {
        self.touch_x = x_px;
        self.touch_active = true;
    }

    /// Pointer released; tracking resets to inactive.
    pub fn touch_end(&mut self) {
        self.touch_active = false;
    }

    /// Measured follower width reported by the host after layout.
    pub fn set_follower_width(&mut self, width: f32) {
        self.tracker.set_follower_width(width);
    }

    /// Live cell for hosts that read the active point directly.
    pub fn active_point_cell(&self) -> ActivePointCell {
        self.tracker.cell()
    }

    pub fn on_point_change(&mut self, f: impl Fn(Option<DataPoint>) + 'static) {
        self.point_change = Some(Box::new(f));
    }

    pub fn on_point_focus(&mut self, f: impl Fn() + 'static) {
        self.point_focus = Some(Box::new(f));
    }

    pub fn on_point_lose_focus(&mut self, f: impl Fn() + 'static) {
        self.point_lose_focus = Some(Box::new(f));
    }

    /// One scheduler tick of the high-frequency context: advance
    /// transitions (installing midpoint swaps) and recompute the tracker.
    pub fn tick(&mut self, now_ms: f64) {
        for state in &mut self.lines {
            if let Some(path) = state.transition.tick(now_ms) {
                state.path = path;
            }
        }

        let Some(state) = self.lines.get(self.active_line) else {
            return;
        };
        let input = FrameInput {
            path: &state.path,
            axis: &self.axis,
            width: self.width,
            end_spacing: self.config.end_spacing,
            touch_x: self.touch_x,
            touch_active: self.touch_active,
            now_ms,
        };
        self.tracker.update(&input, state.line.follower.as_ref(), &self.handoff_tx);
    }

    /// Drain queued hand-off events on the primary context, invoking the
    /// registered callbacks. Returns true when a one-time refresh was
    /// requested (the active point first became defined).
    pub fn pump_host(&mut self) -> bool {
        let mut needs_refresh = false;
        for event in self.handoff_rx.drain() {
            match event {
                HandoffEvent::PointChanged(p) => {
                    if let Some(cb) = &self.point_change {
                        cb(p);
                    }
                }
                HandoffEvent::Refresh => needs_refresh = true,
                HandoffEvent::Focus => {
                    if let Some(cb) = &self.point_focus {
                        cb();
                    }
                }
                HandoffEvent::Blur => {
                    if let Some(cb) = &self.point_lose_focus {
                        cb();
                    }
                }
            }
        }
        needs_refresh
    }

    /// Immutable render snapshot for the host's vector layer.
    pub fn frame(&self, now_ms: f64) -> ChartFrame<'_> {
        let lines = self.lines.iter().map(line_frame).collect();

        let active = self.lines.get(self.active_line).and_then(|state| {
            let config = state.line.active_point.as_ref()?;
            let sample = self.tracker.sample(now_ms)?;
            Some(ActivePointFrame {
                index: sample.index,
                point: sample.point,
                x: state.path.x(sample.point.x),
                y: state.path.y(sample.point.y),
                follower_x: sample.follower_x,
                opacity: sample.opacity,
                color: active_point_color(config, &state.line.color),
                config,
            })
        });

        ChartFrame { lines, active }
    }

    fn wire_active_follower(&mut self) {
        if let Some(state) = self.lines.get(self.active_line) {
            self.tracker.wire_follower(state.line.follower.as_ref());
        }
    }

    fn refresh_geometry(&mut self, now_ms: f64, animate: bool) {
        self.axis = axis_for(self.lines.iter().map(|s| &s.line), &self.config);
        for state in &mut self.lines {
            let next =
                build_line_path(&state.line, self.width, self.height, &self.config, self.axis);
            state.stops =
                gradient_stops(&state.line.color, state.line.leading_fade, state.line.trailing_fade);
            if next == state.path {
                continue;
            }
            if animate {
                if let Some(path) = state.transition.begin(next, now_ms) {
                    state.path = path;
                }
            } else {
                state.path = next;
            }
        }
    }
}

/// Per-line render snapshot.
pub struct LineFrame<'a> {
    pub path: &'a Path,
    pub stops: &'a [GradientStop],
    pub stroke_width: f32,
    pub dash_array: Option<&'a [f32]>,
    /// Transition opacity for the whole line group.
    pub opacity: f64,
    /// Fill with the gradient (area charts and ranged bands).
    pub filled: bool,
    pub fill_opacity: f64,
    pub end_point: Option<EndPointFrame<'a>>,
}

/// End-point marker, radius already scaled by its reveal progress.
pub struct EndPointFrame<'a> {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: &'a str,
}

/// Active-point marker and follower placement for the active line.
pub struct ActivePointFrame<'a> {
    pub index: usize,
    pub point: DataPoint,
    pub x: f32,
    pub y: f32,
    pub follower_x: f32,
    pub opacity: f64,
    pub color: String,
    pub config: &'a ActivePointConfig,
}

/// One rendered frame of the whole chart.
pub struct ChartFrame<'a> {
    pub lines: Vec<LineFrame<'a>>,
    pub active: Option<ActivePointFrame<'a>>,
}

fn line_frame(state: &LineState) -> LineFrame<'_> {
    let filled = state.line.is_area_chart || state.line.is_ranged();
    let end_point = state.line.end_point.as_ref().and_then(|cfg| {
        let p = state.path.last_point()?;
        let reveal = if cfg.animated { state.transition.end_point_reveal() } else { 1.0 };
        Some(EndPointFrame {
            x: state.path.x(p.x),
            y: state.path.y(p.y),
            radius: cfg.radius * reveal as f32,
            color: cfg.color.as_str(),
        })
    });

    LineFrame {
        path: &state.path,
        stops: &state.stops,
        stroke_width: state.line.width,
        dash_array: state.line.dash_array.as_deref(),
        opacity: state.transition.opacity(),
        filled,
        fill_opacity: state.line.fill_opacity,
        end_point,
    }
}

fn active_point_color(config: &ActivePointConfig, line_color: &LineColor) -> String {
    if let Some(color) = &config.color {
        return color.clone();
    }
    match line_color {
        LineColor::Solid(c) => c.clone(),
        LineColor::Gradient(_) => "black".to_string(),
    }
}

fn axis_for<'a>(lines: impl Iterator<Item = &'a Line>, config: &ChartConfig) -> AxisMinMax {
    let mut all: Vec<DataPoint> = Vec::new();
    for line in lines {
        all.extend_from_slice(&line.data);
    }
    AxisMinMax::of_points(
        &all,
        config.always_start_y_axis_from_zero,
        config.calculate_x_axis_min_max,
        config.calculate_y_axis_min_max,
    )
}

fn build_line_path(
    line: &Line,
    width: f32,
    height: f32,
    config: &ChartConfig,
    axis: AxisMinMax,
) -> Path {
    build_path(&PathParams {
        data: &line.data,
        width,
        height,
        end_spacing: config.end_spacing,
        is_filled: line.is_area_chart,
        curve: line.curve,
        axis,
    })
}
