// File: crates/linechart-core/src/types.rs
// Summary: Data model and per-line/chart configuration with library defaults.

use crate::active::Follower;

/// Default pixel gap reserved at the trailing edge of the chart.
pub const DEFAULT_END_SPACING: f32 = 20.0;

/// A single sample in domain space.
/// `y2` is present only for ranged series (a filled band between `y` and `y2`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub y2: Option<f64>,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, y2: None }
    }

    pub const fn ranged(x: f64, y: f64, y2: f64) -> Self {
        Self { x, y, y2: Some(y2) }
    }

    /// True when every coordinate is a usable number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.y2.map_or(true, f64::is_finite)
    }
}

/// Stroke color: a single color, or an ordered list rendered as a gradient
/// running from the path's end back to its start.
#[derive(Clone, Debug, PartialEq)]
pub enum LineColor {
    Solid(String),
    Gradient(Vec<String>),
}

impl LineColor {
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid(color.into())
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Self::Gradient(_))
    }
}

/// Edge fade for the leading or trailing end of a line: either a bare
/// opacity, or an opacity with an explicit span percentage controlling how
/// far into the line the fade reaches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fade {
    Opacity(f64),
    Tapered { opacity: f64, percentage: f64 },
}

/// How consecutive points are joined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    Linear,
    /// Monotone cubic segments; control points never overshoot local extrema.
    Monotone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationType {
    Fade,
}

/// Timed-transition settings applied when a line's data changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub duration_ms: f64,
    pub animation_type: AnimationType,
}

impl AnimationConfig {
    pub const fn fade(duration_ms: f64) -> Self {
        Self { duration_ms, animation_type: AnimationType::Fade }
    }
}

/// Appearance of the marker tracking the active point.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivePointConfig {
    /// Falls back to the line's solid color when unset.
    pub color: Option<String>,
    pub border_color: String,
    pub border_width: f32,
    pub radius: f32,
    pub show_vertical_line: bool,
    pub show_active_point_circle: bool,
    pub vertical_line_color: String,
    pub vertical_line_opacity: f64,
    pub vertical_line_width: f32,
    pub vertical_line_dash_array: Vec<f32>,
    pub animate_transition: bool,
}

impl Default for ActivePointConfig {
    fn default() -> Self {
        Self {
            color: None,
            border_color: "black".to_string(),
            border_width: 2.0,
            radius: 4.0,
            show_vertical_line: false,
            show_active_point_circle: true,
            vertical_line_color: "gray".to_string(),
            vertical_line_opacity: 1.0,
            vertical_line_width: 1.0,
            vertical_line_dash_array: vec![0.0],
            animate_transition: false,
        }
    }
}

/// Appearance of the marker drawn at the last data point.
#[derive(Clone, Debug, PartialEq)]
pub struct EndPointConfig {
    pub color: String,
    pub radius: f32,
    pub animated: bool,
}

impl Default for EndPointConfig {
    fn default() -> Self {
        Self { color: "black".to_string(), radius: 4.0, animated: false }
    }
}

/// A named series plus everything needed to render it.
pub struct Line {
    pub data: Vec<DataPoint>,
    pub color: LineColor,
    pub width: f32,
    pub dash_array: Option<Vec<f32>>,
    pub is_area_chart: bool,
    pub fill_opacity: f64,
    pub curve: Curve,
    /// Identity key; changing it forces a rebuild even for equal data.
    pub key: Option<String>,
    pub leading_fade: Option<Fade>,
    pub trailing_fade: Option<Fade>,
    pub active_point: Option<ActivePointConfig>,
    pub end_point: Option<EndPointConfig>,
    pub follower: Option<Follower>,
}

impl Line {
    pub fn new(data: Vec<DataPoint>) -> Self {
        Self {
            data,
            color: LineColor::solid("black"),
            width: 2.0,
            dash_array: None,
            is_area_chart: false,
            fill_opacity: 1.0,
            curve: Curve::Linear,
            key: None,
            leading_fade: None,
            trailing_fade: None,
            active_point: None,
            end_point: None,
            follower: None,
        }
    }

    pub fn with_color(mut self, color: LineColor) -> Self {
        self.color = color;
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn area(mut self) -> Self {
        self.is_area_chart = true;
        self
    }

    pub fn with_active_point(mut self, config: ActivePointConfig) -> Self {
        self.active_point = Some(config);
        self
    }

    pub fn with_end_point(mut self, config: EndPointConfig) -> Self {
        self.end_point = Some(config);
        self
    }

    /// Install a snapshot follower. A reactive follower, once set, takes
    /// precedence and is not overwritten.
    pub fn with_snapshot_follower(
        mut self,
        f: impl Fn(Option<DataPoint>) + 'static,
    ) -> Self {
        if !matches!(self.follower, Some(Follower::Reactive(_))) {
            self.follower = Some(Follower::Snapshot(Box::new(f)));
        }
        self
    }

    pub fn with_reactive_follower(
        mut self,
        f: impl Fn(crate::active::ActivePointCell) + 'static,
    ) -> Self {
        self.follower = Some(Follower::Reactive(Box::new(f)));
        self
    }

    /// True when the series carries a `y2` band.
    pub fn is_ranged(&self) -> bool {
        self.data.first().map_or(false, |p| p.y2.is_some())
    }
}

/// Per-axis override: receives the natural extrema, returns the pair to use.
pub type AxisOverride = fn(f64, f64) -> (f64, f64);

/// Chart-wide settings supplied by the host.
#[derive(Clone, Copy, Debug)]
pub struct ChartConfig {
    pub always_start_y_axis_from_zero: bool,
    pub end_spacing: f32,
    pub calculate_x_axis_min_max: Option<AxisOverride>,
    pub calculate_y_axis_min_max: Option<AxisOverride>,
    pub animation: Option<AnimationConfig>,
    /// Index reported while no touch offset has been seen yet.
    pub initial_active_point: Option<usize>,
    pub always_show_active_point: bool,
    pub hide_active_point_on_blur: bool,
    /// Mirrors follower spacing and overflow flipping.
    pub rtl: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            always_start_y_axis_from_zero: false,
            end_spacing: DEFAULT_END_SPACING,
            calculate_x_axis_min_max: None,
            calculate_y_axis_min_max: None,
            animation: None,
            initial_active_point: None,
            always_show_active_point: false,
            hide_active_point_on_blur: true,
            rtl: false,
        }
    }
}
