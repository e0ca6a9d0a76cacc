//! PlotController: owns the dataset, its layout and the interaction state.
//!
//! The controller is the only place where state changes. Renderers read a
//! [`PlotView`] and hand [`InteractionEvent`]s back through [`PlotController::handle`].

use crate::config::{ScatterPlotConfig, SelectionCallback};
use crate::data::interaction::{InteractionEvent, InteractionState, NeighborLine, Origin, Quadrant};
use crate::data::layout::{layout, ChartRect, LayoutConfig, PlotLayout, ScreenPoint, Tick};
use crate::data::point_look::{MarkerShape, Palette, PointLook};
use crate::data::records::{parse_report, ParseReport, Record};

/// A screen point together with its classification and look.
#[derive(Debug, Clone, Copy)]
pub struct StyledPoint<'a> {
    pub point: &'a ScreenPoint,
    pub quadrant: Quadrant,
    pub look: PointLook,
}

/// One legend entry per distinct label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry<'a> {
    pub label: &'a str,
    pub shape: MarkerShape,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone)]
pub struct PlotView<'a> {
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub chart: ChartRect,
    pub origin: Origin,
    pub points: Vec<StyledPoint<'a>>,
    pub x_ticks: &'a [Tick],
    pub y_ticks: &'a [Tick],
    pub neighbor_lines: Vec<NeighborLine>,
    pub legend: Vec<LegendEntry<'a>>,
}

pub struct PlotController {
    layout_config: LayoutConfig,
    palette: Palette,
    on_select: Option<SelectionCallback>,
    dataset: ParseReport,
    layout: PlotLayout,
    state: InteractionState,
}

impl PlotController {
    /// Create an empty controller sized to `cfg.width` x `cfg.height`.
    ///
    /// Takes the selection callback out of `cfg`.
    pub fn new(cfg: &mut ScatterPlotConfig) -> Self {
        let layout_config = cfg.layout.clone();
        let dataset = ParseReport::default();
        let layout = layout(
            &dataset.records,
            cfg.width as f64,
            cfg.height as f64,
            &layout_config,
        );
        Self {
            layout_config,
            palette: cfg.palette.clone(),
            on_select: cfg.on_select.take(),
            dataset,
            layout,
            state: InteractionState::default(),
        }
    }

    pub fn set_on_select(&mut self, f: impl FnMut(Option<&Record>) + 'static) {
        self.on_select = Some(Box::new(f));
    }

    /// Parse `text` and replace the dataset with the result.
    pub fn load_text(&mut self, text: &str) {
        self.set_dataset(parse_report(text));
    }

    /// Replace the dataset wholesale. Interaction state is always reset.
    pub fn set_dataset(&mut self, dataset: ParseReport) {
        tracing::debug!(
            records = dataset.records.len(),
            rejected = dataset.rejected.len(),
            "replacing dataset"
        );
        self.dataset = dataset;
        self.layout = layout(
            &self.dataset.records,
            self.layout.width,
            self.layout.height,
            &self.layout_config,
        );
        self.handle(InteractionEvent::DatasetReplaced);
    }

    /// Recompute the layout for new plot dimensions. No-op if unchanged.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width == self.layout.width && height == self.layout.height {
            return;
        }
        self.layout = layout(&self.dataset.records, width, height, &self.layout_config);
        self.handle(InteractionEvent::Relayout);
    }

    /// Replace the axis configuration and recompute the layout.
    pub fn set_layout_config(&mut self, layout_config: LayoutConfig) {
        self.layout_config = layout_config;
        self.layout = layout(
            &self.dataset.records,
            self.layout.width,
            self.layout.height,
            &self.layout_config,
        );
        self.handle(InteractionEvent::Relayout);
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Apply an interaction event, notifying the selection callback when the
    /// clicked point changes.
    pub fn handle(&mut self, event: InteractionEvent) {
        let next = self.state.apply(&event, &self.layout.points);
        let clicked_changed = next.clicked_index() != self.state.clicked_index();
        self.state = next;
        if clicked_changed {
            tracing::debug!(clicked = ?self.state.clicked_index(), "selection changed");
            if let Some(cb) = self.on_select.as_mut() {
                let record = self
                    .state
                    .clicked_index()
                    .and_then(|i| self.dataset.records.iter().find(|r| r.index == i));
                cb(record);
            }
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    pub fn records(&self) -> &[Record] {
        &self.dataset.records
    }

    /// The last parse result, including rejected lines.
    pub fn dataset(&self) -> &ParseReport {
        &self.dataset
    }

    pub fn origin(&self) -> Origin {
        self.state.origin(&self.layout)
    }

    pub fn clicked_record(&self) -> Option<&Record> {
        let index = self.state.clicked_index()?;
        self.dataset.records.iter().find(|r| r.index == index)
    }

    /// Build the renderer view for the current state.
    pub fn view(&self) -> PlotView<'_> {
        let origin = self.origin();
        let points = self
            .layout
            .points
            .iter()
            .map(|p| {
                let quadrant = Quadrant::of(p, origin);
                StyledPoint {
                    point: p,
                    quadrant,
                    look: PointLook::resolve(
                        &self.palette,
                        quadrant,
                        p.label_index,
                        self.state.is_highlighted(p.index),
                        self.state.hovered_index() == Some(p.index),
                        self.state.clicked_index() == Some(p.index),
                    ),
                }
            })
            .collect();
        let legend = self
            .dataset
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| LegendEntry {
                label: label.as_str(),
                shape: MarkerShape::for_label(i),
            })
            .collect();
        PlotView {
            width: self.layout.width,
            height: self.layout.height,
            font_size: self.layout.font_size,
            chart: self.layout.chart,
            origin,
            points,
            x_ticks: &self.layout.x_ticks,
            y_ticks: &self.layout.y_ticks,
            neighbor_lines: self.state.neighbor_lines(&self.layout),
            legend,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
