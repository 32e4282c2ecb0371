// File: crates/linechart-core/src/active.rs
// Summary: Active-point tracking, follower placement, and host hand-off.

use std::cell::Cell;
use std::rc::Rc;

use crate::animation::{Easing, Tween};
use crate::axis::AxisMinMax;
use crate::locate::nearest_x_index;
use crate::path::Path;
use crate::reactive::{HandoffEvent, HandoffSender};
use crate::scale::interpolate;
use crate::types::{ChartConfig, DataPoint};

/// Horizontal gap between the follower and the vertical line through the
/// active point.
pub const FOLLOWER_MARGIN: f32 = 15.0;
/// Assumed follower width until the host reports a measured one.
pub const DEFAULT_FOLLOWER_WIDTH: f32 = 100.0;
/// Timing for follower translation and visibility (ms).
pub const FOLLOWER_TIMING_MS: f64 = 100.0;

/// Live cell read by reactive followers; the tracker updates it every
/// frame, no hand-off required.
#[derive(Clone, Debug, Default)]
pub struct ActivePointCell(Rc<Cell<Option<DataPoint>>>);

impl ActivePointCell {
    pub fn get(&self) -> Option<DataPoint> {
        self.0.get()
    }

    pub(crate) fn set(&self, point: Option<DataPoint>) {
        self.0.set(point);
    }
}

/// How a line's follower consumes the active point, chosen once at
/// configuration time.
pub enum Follower {
    /// Receives a plain copy once per index change.
    Snapshot(Box<dyn Fn(Option<DataPoint>)>),
    /// Wired once with the live cell and reads it whenever it likes.
    Reactive(Box<dyn Fn(ActivePointCell)>),
}

/// Per-frame inputs the tracker derives its state from.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub path: &'a Path,
    pub axis: &'a AxisMinMax,
    pub width: f32,
    pub end_spacing: f32,
    pub touch_x: f32,
    pub touch_active: bool,
    pub now_ms: f64,
}

/// Follower/marker state sampled for one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveSample {
    pub index: usize,
    pub point: DataPoint,
    pub follower_x: f32,
    pub opacity: f64,
}

/// Continuously-recomputed active point state: nearest index under the
/// touch, once-per-change host notification, and follower motion.
pub struct ActivePointTracker {
    cell: ActivePointCell,
    active_index: Option<usize>,
    emitted_index: Option<usize>,
    last_index: usize,
    last_point: Option<DataPoint>,
    was_defined: bool,
    touch_active: bool,
    follower_width: f32,
    follower_x: Tween,
    opacity: Tween,
    wired_reactive: bool,
    initial_active_point: Option<usize>,
    always_show: bool,
    hide_on_blur: bool,
    rtl: bool,
}

impl ActivePointTracker {
    pub fn new(config: &ChartConfig) -> Self {
        let initial_opacity = if config.always_show_active_point { 1.0 } else { 0.0 };
        Self {
            cell: ActivePointCell::default(),
            active_index: None,
            emitted_index: None,
            last_index: 0,
            last_point: None,
            was_defined: false,
            touch_active: false,
            follower_width: DEFAULT_FOLLOWER_WIDTH,
            follower_x: Tween::fixed(0.0),
            opacity: Tween::fixed(initial_opacity),
            wired_reactive: false,
            initial_active_point: config.initial_active_point,
            always_show: config.always_show_active_point,
            hide_on_blur: config.hide_active_point_on_blur,
            rtl: config.rtl,
        }
    }

    /// Hand a reactive follower the live cell, once.
    pub fn wire_follower(&mut self, follower: Option<&Follower>) {
        if self.wired_reactive {
            return;
        }
        if let Some(Follower::Reactive(f)) = follower {
            f(self.cell.clone());
            self.wired_reactive = true;
        }
    }

    /// Forget previous wiring, e.g. after the active line changed.
    pub fn rewire(&mut self) {
        self.wired_reactive = false;
    }

    /// Measured follower width fed back by the host after layout.
    pub fn set_follower_width(&mut self, width: f32) {
        self.follower_width = width.max(0.0);
    }

    pub fn cell(&self) -> ActivePointCell {
        self.cell.clone()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_point(&self) -> Option<DataPoint> {
        self.cell.get()
    }

    /// Recompute everything derived from the current touch position.
    /// Host-visible effects (callbacks, refresh) go through the bounded
    /// hand-off, at most once per logical event.
    pub fn update(
        &mut self,
        input: &FrameInput,
        follower: Option<&Follower>,
        handoff: &HandoffSender,
    ) {
        if input.touch_active && !self.touch_active {
            handoff.send_or_drop(HandoffEvent::Focus);
            self.opacity.retarget(input.now_ms, 1.0, FOLLOWER_TIMING_MS, Easing::Linear);
        } else if !input.touch_active && self.touch_active {
            handoff.send_or_drop(HandoffEvent::Blur);
            if self.hide_on_blur && !self.always_show {
                self.opacity.retarget(input.now_ms, 0.0, FOLLOWER_TIMING_MS, Easing::Linear);
            }
        }
        self.touch_active = input.touch_active;

        let data = input.path.data();
        let new_index = if data.is_empty() {
            None
        } else if input.touch_active {
            Some(self.index_for_touch(input, data))
        } else if self.always_show {
            self.active_index
                .or(self.initial_active_point)
                .map(|i| i.min(data.len() - 1))
        } else {
            None
        };

        self.active_index = new_index;
        let point = new_index.and_then(|i| data.get(i).copied());
        self.cell.set(point);
        if let (Some(i), Some(p)) = (new_index, point) {
            self.last_index = i;
            self.last_point = Some(p);
        }

        // First definition forces a one-time host refresh so plain
        // (non-reactive) consumers can catch up.
        if point.is_some() && !self.was_defined {
            handoff.send_or_drop(HandoffEvent::Refresh);
        }
        self.was_defined = point.is_some();

        if new_index != self.emitted_index {
            log::trace!("active index {:?} -> {:?}", self.emitted_index, new_index);
            handoff.send_or_drop(HandoffEvent::PointChanged(point));
            if let Some(Follower::Snapshot(f)) = follower {
                f(point);
            }
            self.emitted_index = new_index;
        }

        if let Some(p) = point {
            let px = input.path.x(p.x);
            let target = follower_position(px, self.follower_width, input.width, self.rtl);
            if (target - self.follower_x.target() as f32).abs() > f32::EPSILON {
                self.follower_x.retarget(
                    input.now_ms,
                    target as f64,
                    FOLLOWER_TIMING_MS,
                    Easing::Linear,
                );
            }
        }
    }

    /// Sample follower placement and visibility for the current frame.
    /// After release the last placement stays sampled until the fade-out
    /// settles, so the marker does not vanish mid-animation.
    pub fn sample(&self, now_ms: f64) -> Option<ActiveSample> {
        let opacity = self.opacity.value_at(now_ms).clamp(0.0, 1.0);
        let (index, point) = match (self.active_index, self.cell.get()) {
            (Some(i), Some(p)) => (i, p),
            _ => {
                if opacity <= 1e-3 {
                    return None;
                }
                (self.last_index, self.last_point?)
            }
        };
        Some(ActiveSample {
            index,
            point,
            follower_x: self.follower_x.value_at(now_ms) as f32,
            opacity,
        })
    }

    fn index_for_touch(&self, input: &FrameInput, data: &[DataPoint]) -> usize {
        // Touch offsets are truncated toward zero; a zero offset reports
        // the configured initial point while no movement has been seen.
        let tx = (input.touch_x as f64).trunc();
        if tx == 0.0 {
            if let Some(initial) = self.initial_active_point {
                return initial.min(data.len() - 1);
            }
        }

        let denom = (input.width - input.end_spacing) as f64;
        let percentage = if denom.abs() < 1e-6 { 0.0 } else { tx / denom * 100.0 };
        let domain_x =
            interpolate(percentage, (0.0, 100.0), (input.axis.min_x, input.axis.max_x));
        let idx = nearest_x_index(data, domain_x, input.path.is_sorted_x());
        idx.min(data.len() - 1)
    }
}

/// Pixel translate-x for the follower, offset from the vertical line
/// through the active point and flipped to the other side when the default
/// side would overflow the chart. Spacing and flipping mirror under RTL.
pub fn follower_position(point_x: f32, follower_width: f32, chart_width: f32, rtl: bool) -> f32 {
    if rtl {
        if point_x < follower_width + FOLLOWER_MARGIN {
            return point_x - chart_width + (follower_width + FOLLOWER_MARGIN);
        }
        return point_x - chart_width - FOLLOWER_MARGIN;
    }
    if chart_width - point_x < follower_width + FOLLOWER_MARGIN {
        return point_x - follower_width - FOLLOWER_MARGIN;
    }
    point_x + FOLLOWER_MARGIN
}
