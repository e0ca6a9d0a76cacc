//! Standalone eframe application around [`ScatterPlotPanel`].

use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;

use eframe::egui;

use super::ScatterPlotPanel;
use crate::config::ScatterPlotConfig;
use crate::sink::{DatasetCommand, DatasetSink};

/// Window with the plot, a dataset switcher and a coordinate readout.
pub struct ScatterPlotApp {
    pub panel: ScatterPlotPanel,
    sink: Option<DatasetSink>,
    sources: Vec<PathBuf>,
    current: usize,
    /// Generation of the last load started from this window.
    load_generation: u64,
}

impl ScatterPlotApp {
    pub fn new(cfg: &mut ScatterPlotConfig, rx: Receiver<DatasetCommand>) -> Self {
        let mut panel = ScatterPlotPanel::new(cfg);
        panel.set_rx(rx);
        Self {
            panel,
            sink: None,
            sources: Vec::new(),
            current: 0,
            load_generation: 0,
        }
    }

    /// Attach CSV files to cycle through with the "Swap dataset" button and start
    /// loading the first one.
    pub fn with_sources(mut self, sink: DatasetSink, sources: Vec<PathBuf>) -> Self {
        let first = sources.first().cloned();
        self.sink = Some(sink);
        self.sources = sources;
        self.current = 0;
        if let Some(path) = first {
            self.start_load(path);
        }
        self
    }

    /// Load `path` in the background; results of earlier loads are discarded.
    fn start_load(&mut self, path: PathBuf) {
        let Some(sink) = &self.sink else {
            return;
        };
        self.load_generation += 1;
        let sink = sink.tagged(self.load_generation);
        self.panel.expect_generation(self.load_generation);
        spawn_load(sink, path);
    }

    fn swap_dataset(&mut self) {
        if self.sources.len() < 2 {
            return;
        }
        self.current = (self.current + 1) % self.sources.len();
        self.start_load(self.sources[self.current].clone());
    }

    fn open_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("CSV", &["csv", "txt"])
            .pick_file();
        if let Some(path) = picked {
            self.sources.push(path.clone());
            self.current = self.sources.len() - 1;
            self.start_load(path);
        }
    }
}

impl eframe::App for ScatterPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let can_swap = self.sources.len() > 1;
                if ui
                    .add_enabled(can_swap, egui::Button::new("Swap dataset"))
                    .clicked()
                {
                    self.swap_dataset();
                }
                if ui
                    .add_enabled(self.sink.is_some(), egui::Button::new("Open CSV…"))
                    .clicked()
                {
                    self.open_file();
                }
                ui.separator();
                ui.label(self.panel.status_line());
            });
        });

        egui::TopBottomPanel::bottom("readout").show(ctx, |ui| {
            ui.label(self.panel.readout().unwrap_or_default());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.ui(ui);
        });
    }
}

/// Read `path` on a background thread and deliver the result through `sink`.
fn spawn_load(sink: DatasetSink, path: PathBuf) {
    std::thread::spawn(move || {
        let source = Some(display_name(&path));
        let sent = match std::fs::read_to_string(&path) {
            Ok(text) => sink.send_text(source, &text),
            Err(e) => sink.send_error(source, e.to_string()),
        };
        if sent.is_err() {
            tracing::warn!(path = %path.display(), "plot closed before dataset was delivered");
        }
    });
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
