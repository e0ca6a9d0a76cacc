//! Top-level entry points for running the scatter plot as a native window.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use eframe::egui;

use super::ScatterPlotApp;
use crate::config::ScatterPlotConfig;
use crate::sink::{DatasetCommand, DatasetSink};

/// Window chrome (control bar, readout, margins) around the plot, in logical pixels.
const CHROME: egui::Vec2 = egui::vec2(32.0, 96.0);

/// Launch the plot in a native window, fed only through `rx`.
///
/// The call blocks until the window is closed.
pub fn run_scatterplot(
    rx: Receiver<DatasetCommand>,
    mut cfg: ScatterPlotConfig,
) -> eframe::Result<()> {
    let app = ScatterPlotApp::new(&mut cfg, rx);
    run_app(app, cfg)
}

/// Launch the plot with a list of CSV files to cycle through.
///
/// The first file is loaded immediately; `sink` must belong to the same channel as `rx`.
pub fn run_scatterplot_with_sources(
    rx: Receiver<DatasetCommand>,
    sink: DatasetSink,
    sources: Vec<PathBuf>,
    mut cfg: ScatterPlotConfig,
) -> eframe::Result<()> {
    let app = ScatterPlotApp::new(&mut cfg, rx).with_sources(sink, sources);
    run_app(app, cfg)
}

fn run_app(app: ScatterPlotApp, mut cfg: ScatterPlotConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(cfg.width, cfg.height) + CHROME);
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    )
}
