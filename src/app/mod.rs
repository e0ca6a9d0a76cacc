//! Application module: the embeddable plot panel and the standalone window.
//!
//! | Sub-module          | Responsibility |
//! | ------------------- | -------------- |
//! | (this module)       | [`ScatterPlotPanel`]: dataset channel draining, sizing and per-frame rendering |
//! | [`scatterplot_app`] | Standalone [`ScatterPlotApp`] (eframe) with dataset swapping and file picking |
//! | [`run`]             | Top-level [`run_scatterplot()`] entry points |

mod run;
mod scatterplot_app;

pub use run::{run_scatterplot, run_scatterplot_with_sources};
pub use scatterplot_app::ScatterPlotApp;

use std::sync::mpsc::Receiver;

use eframe::egui;

use crate::config::ScatterPlotConfig;
use crate::controller::PlotController;
use crate::render::show_plot;
use crate::sink::DatasetCommand;

/// The central widget: owns the plot controller and draws it every frame.
///
/// Can be embedded in any egui application via [`ScatterPlotPanel::ui`].
pub struct ScatterPlotPanel {
    controller: PlotController,
    rx: Option<Receiver<DatasetCommand>>,
    size: egui::Vec2,
    fit_to_window: bool,
    /// Where the current dataset came from.
    source: Option<String>,
    /// Last loading error, cleared by the next successful load.
    error: Option<String>,
    /// Generation of the most recent tagged load; older tagged commands are dropped.
    generation: Option<u64>,
}

impl ScatterPlotPanel {
    /// Create a panel; takes the selection callback out of `cfg`.
    pub fn new(cfg: &mut ScatterPlotConfig) -> Self {
        Self {
            controller: PlotController::new(cfg),
            rx: None,
            size: egui::vec2(cfg.width, cfg.height),
            fit_to_window: cfg.fit_to_window,
            source: None,
            error: None,
            generation: None,
        }
    }

    pub fn set_rx(&mut self, rx: Receiver<DatasetCommand>) {
        self.rx = Some(rx);
    }

    /// Only accept tagged commands from `generation` from now on.
    pub fn expect_generation(&mut self, generation: u64) {
        self.generation = Some(generation);
    }

    pub fn controller(&self) -> &PlotController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PlotController {
        &mut self.controller
    }

    /// Apply every pending dataset command. Returns `true` if anything arrived.
    pub fn drain_commands(&mut self) -> bool {
        let Some(rx) = &self.rx else {
            return false;
        };
        let commands: Vec<DatasetCommand> = rx.try_iter().collect();
        let any = !commands.is_empty();
        for cmd in commands {
            if let (Some(tag), Some(expected)) = (cmd.generation(), self.generation) {
                if tag != expected {
                    tracing::debug!(tag, expected, "dropping stale dataset command");
                    continue;
                }
            }
            match cmd {
                DatasetCommand::Replace {
                    source, dataset, ..
                } => {
                    tracing::info!(source = ?source, records = dataset.records.len(), "dataset received");
                    self.controller.set_dataset(dataset);
                    self.source = source;
                    self.error = None;
                }
                DatasetCommand::LoadFailed { source, error, .. } => {
                    tracing::error!(source = ?source, %error, "dataset load failed");
                    self.error = Some(match source {
                        Some(s) => format!("{s}: {error}"),
                        None => error,
                    });
                }
            }
        }
        any
    }

    /// One-line summary of the loaded dataset (or the last error).
    pub fn status_line(&self) -> String {
        if let Some(err) = &self.error {
            return format!("Load failed: {err}");
        }
        let dataset = self.controller.dataset();
        let mut s = match &self.source {
            Some(src) => format!("{src}: "),
            None => String::new(),
        };
        s.push_str(&format!(
            "{} records, {} labels",
            dataset.records.len(),
            dataset.labels.len()
        ));
        if !dataset.rejected.is_empty() {
            s.push_str(&format!(", {} rejected lines", dataset.rejected.len()));
        }
        s
    }

    /// Coordinate readout of the clicked point, if any.
    pub fn readout(&self) -> Option<String> {
        self.controller
            .clicked_record()
            .map(|r| format!("Clicked point {} : ({}, {})", r.index, r.x, r.y))
    }

    /// Drain pending datasets, lay out for the available size and draw the plot.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        if self.drain_commands() {
            ui.ctx().request_repaint();
        }

        let size = if self.fit_to_window {
            ui.available_size().max(egui::vec2(1.0, 1.0))
        } else {
            self.size
        };
        self.controller.resize(size.x as f64, size.y as f64);

        let events = {
            let view = self.controller.view();
            show_plot(ui, size, &view, self.controller.palette())
        };
        for event in events {
            self.controller.handle(event);
        }
    }
}
