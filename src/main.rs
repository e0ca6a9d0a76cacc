//! Scatter plot viewer.
//!
//! Usage:
//!   scatterplot [--config settings.yaml] data1.csv [data2.csv ...]
//!
//! Each CSV line is `x,y,label` with no header. With more than one file the
//! "Swap dataset" button cycles through them.

use std::path::PathBuf;

use scatterplot::{channel_dataset, run_scatterplot_with_sources, PlotSettings, ScatterPlotConfig};

fn main() -> eframe::Result<()> {
    scatterplot::logging::init();

    let mut config_path: Option<PathBuf> = None;
    let mut sources: Vec<PathBuf> = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = args.next().map(PathBuf::from);
        } else {
            sources.push(PathBuf::from(arg));
        }
    }

    let mut cfg = ScatterPlotConfig::default();
    if let Some(path) = config_path {
        match PlotSettings::load(&path) {
            Ok(settings) => settings.apply_to(&mut cfg),
            Err(e) => tracing::error!(%e, "ignoring settings file"),
        }
    }
    if sources.is_empty() {
        tracing::warn!("no CSV files given; use \"Open CSV…\" to load one");
    }

    let (sink, rx) = channel_dataset();
    run_scatterplot_with_sources(rx, sink, sources, cfg)
}
