//! Scatterplot crate root: re-exports and module wiring.
//!
//! Renders labelled `(x, y)` records as an interactive egui scatter plot:
//! - hover a point to enlarge it
//! - left-click a point to move the quadrant origin onto it (click again to reset)
//! - right-click a point to highlight its 5 nearest neighbors
//!
//! Modules:
//! - `data`: parsing, screen layout, neighbor search, interaction state, point looks
//! - `controller`: owner of dataset, layout and interaction state
//! - `render` / `legend`: egui painting and pointer hit-testing
//! - `sink`: channel for delivering datasets from loader threads
//! - `config`: runtime configuration and file-loadable settings
//! - `app`: embeddable panel and standalone window

pub mod app;
pub mod config;
pub mod controller;
pub mod data;
mod legend;
pub mod logging;
pub mod render;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_scatterplot, run_scatterplot_with_sources, ScatterPlotApp, ScatterPlotPanel};
pub use config::{ConfigError, PlotSettings, ScatterPlotConfig};
pub use controller::{PlotController, PlotView};
pub use data::interaction::{InteractionEvent, InteractionState, Origin, Quadrant};
pub use data::layout::{layout, LayoutConfig, PlotLayout, ScreenPoint};
pub use data::neighbors::{nearest, NEIGHBOR_COUNT};
pub use data::point_look::{MarkerShape, Palette, PointLook};
pub use data::records::{parse, parse_report, ParseReport, Record};
pub use sink::{channel_dataset, DatasetCommand, DatasetSink};
