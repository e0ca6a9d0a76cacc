//! Data-space to screen-space mapping, padding and axis ticks.
//!
//! Screen coordinates are pixels relative to the top-left corner of the plot area,
//! with y growing downward. The chart interior is inset by the same padding on all
//! four sides:
//!
//! ```text
//! (0,0)                                          (width, 0)
//!    +------------------------------------------------+
//!    |   (pad,pad)              (width-pad, pad)      |
//!    |        +-----------------------------+         |
//!    |        |                             |         |
//!    |        +-----------------------------+         |
//!    |   (pad, height-pad)    (width-pad, height-pad) |
//!    +------------------------------------------------+
//! (0, height)                                (width, height)
//! ```

use serde::{Deserialize, Serialize};

use crate::data::records::Record;

/// Tick interval count used when none is configured.
pub const DEFAULT_GUIDES: usize = 10;

/// Plot width divided by this gives the base font size.
const FONT_SIZE_DIVISOR: f64 = 80.0;

/// Fixed minimal padding added on top of the label-derived padding.
const PADDING_CONSTANT: f64 = 5.0;

/// A record mapped into screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub label_index: usize,
}

/// Axis range overrides and tick counts.
///
/// `horizontal_guides` controls the y axis (horizontal guide marks),
/// `vertical_guides` the x axis. `Some(0)` means "one interval per record gap".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub min_x: Option<f64>,
    pub max_x: Option<f64>,
    pub min_y: Option<f64>,
    pub max_y: Option<f64>,
    pub horizontal_guides: Option<usize>,
    pub vertical_guides: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_x: None,
            max_x: None,
            min_y: None,
            max_y: None,
            horizontal_guides: Some(DEFAULT_GUIDES),
            vertical_guides: Some(DEFAULT_GUIDES),
        }
    }
}

/// Data-space range of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    /// Resolve the bounds of an axis from its values and optional overrides.
    ///
    /// Automatic bounds are `floor(min)..ceil(max)` of the finite values, or `0..1`
    /// when there are none.
    pub fn resolve<I>(values: I, min_override: Option<f64>, max_override: Option<f64>) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            lo = lo.min(v);
            hi = hi.max(v);
        }
        let (auto_min, auto_max) = if lo.is_finite() {
            (lo.floor(), hi.ceil())
        } else {
            (0.0, 1.0)
        };
        Self {
            min: min_override.filter(|v| v.is_finite()).unwrap_or(auto_min),
            max: max_override.filter(|v| v.is_finite()).unwrap_or(auto_max),
        }
    }

    /// `true` when the range cannot be normalized (single value or inverted).
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }

    /// Fraction of `v` along the range, `None` on a degenerate axis.
    pub fn normalize(&self, v: f64) -> Option<f64> {
        if self.is_degenerate() {
            None
        } else {
            Some((v - self.min) / (self.max - self.min))
        }
    }

    /// Whether `v` can be drawn on this axis. A degenerate axis accepts every value
    /// and centers it.
    pub fn contains(&self, v: f64) -> bool {
        self.is_degenerate() || (v >= self.min && v <= self.max)
    }

    /// Value at `fraction` along the range.
    pub fn lerp(&self, fraction: f64) -> f64 {
        self.min + (self.max - self.min) * fraction
    }
}

/// The chart interior in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartRect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width() / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.top + self.height() / 2.0
    }
}

/// A tick along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Fraction along the axis, `0.0..=1.0`.
    pub fraction: f64,
    /// Screen coordinate along the axis (x for the x axis, y for the y axis).
    pub position: f64,
    pub value: f64,
    /// `value` formatted with one decimal place.
    pub label: String,
    /// Whether a guide mark is drawn at this tick (all but the axis start).
    pub guide: bool,
}

/// Everything derived from a record set and plot dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLayout {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub padding: f64,
    pub chart: ChartRect,
    pub x_bounds: AxisBounds,
    pub y_bounds: AxisBounds,
    /// Sorted by `index`; records with non-finite coordinates or outside overridden
    /// bounds are omitted.
    pub points: Vec<ScreenPoint>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

impl PlotLayout {
    /// The natural origin: bottom-left corner of the chart interior.
    pub fn default_origin(&self) -> (f64, f64) {
        (self.chart.left, self.chart.bottom)
    }

    /// Look up a screen point by record index.
    pub fn point(&self, index: usize) -> Option<&ScreenPoint> {
        self.points
            .binary_search_by_key(&index, |p| p.index)
            .ok()
            .map(|i| &self.points[i])
    }
}

/// Compute the full layout for `records` in a `width` x `height` plot.
pub fn layout(records: &[Record], width: f64, height: f64, cfg: &LayoutConfig) -> PlotLayout {
    let x_bounds = AxisBounds::resolve(records.iter().map(|r| r.x), cfg.min_x, cfg.max_x);
    let y_bounds = AxisBounds::resolve(records.iter().map(|r| r.y), cfg.min_y, cfg.max_y);

    let font_size = width / FONT_SIZE_DIVISOR;
    let padding = padding_for(font_size, &x_bounds, &y_bounds);
    let chart_width = (width - 2.0 * padding).max(0.0);
    let chart_height = (height - 2.0 * padding).max(0.0);
    let chart = ChartRect {
        left: padding,
        top: padding,
        right: padding + chart_width,
        bottom: padding + chart_height,
    };

    let mut points: Vec<ScreenPoint> = records
        .iter()
        .filter(|r| r.x.is_finite() && r.y.is_finite())
        .filter(|r| x_bounds.contains(r.x) && y_bounds.contains(r.y))
        .map(|r| ScreenPoint {
            index: r.index,
            x: map_x(&chart, &x_bounds, r.x),
            y: map_y(&chart, &y_bounds, r.y),
            label: r.label.clone(),
            label_index: r.label_index,
        })
        .collect();
    points.sort_by_key(|p| p.index);

    let x_count = resolve_guides(cfg.vertical_guides, records.len());
    let y_count = resolve_guides(cfg.horizontal_guides, records.len());
    let x_ticks = ticks(x_count, &x_bounds, |f| chart.left + f * chart.width());
    let y_ticks = ticks(y_count, &y_bounds, |f| chart.bottom - f * chart.height());

    PlotLayout {
        width,
        height,
        font_size,
        padding,
        chart,
        x_bounds,
        y_bounds,
        points,
        x_ticks,
        y_ticks,
    }
}

/// Number of tick intervals for an axis: configured, default, or `records - 1` for `Some(0)`.
pub fn resolve_guides(configured: Option<usize>, record_count: usize) -> usize {
    match configured {
        None => DEFAULT_GUIDES,
        Some(0) => record_count.saturating_sub(1),
        Some(n) => n,
    }
}

fn padding_for(font_size: f64, x: &AxisBounds, y: &AxisBounds) -> f64 {
    let largest = [x.min, x.max, y.min, y.max]
        .into_iter()
        .fold(0.0_f64, |acc, v| if v.abs() > acc.abs() { v } else { acc });
    let digits = format!("{:.0}", largest).len() + 1;
    (font_size + digits as f64) * 3.0 + PADDING_CONSTANT
}

fn map_x(chart: &ChartRect, bounds: &AxisBounds, v: f64) -> f64 {
    match bounds.normalize(v) {
        Some(t) => chart.left + t * chart.width(),
        None => chart.center_x(),
    }
}

fn map_y(chart: &ChartRect, bounds: &AxisBounds, v: f64) -> f64 {
    match bounds.normalize(v) {
        Some(t) => chart.bottom - t * chart.height(),
        None => chart.center_y(),
    }
}

fn ticks(count: usize, bounds: &AxisBounds, position: impl Fn(f64) -> f64) -> Vec<Tick> {
    if count == 0 {
        return vec![tick(0.0, bounds, &position)];
    }
    (0..=count)
        .map(|i| tick(i as f64 / count as f64, bounds, &position))
        .collect()
}

fn tick(fraction: f64, bounds: &AxisBounds, position: &impl Fn(f64) -> f64) -> Tick {
    let value = bounds.lerp(fraction);
    Tick {
        fraction,
        position: position(fraction),
        value,
        label: format!("{:.1}", value),
        guide: fraction > 0.0,
    }
}
