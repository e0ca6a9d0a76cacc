//! Configuration for the scatter plot.
//!
//! [`ScatterPlotConfig`] is the runtime configuration handed to the plot. Its
//! serializable subset, [`PlotSettings`], can be read from YAML or JSON files and
//! applied on top of a config.

use std::path::{Path, PathBuf};

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::layout::LayoutConfig;
use crate::data::point_look::Palette;
use crate::data::records::Record;

/// Invoked with the clicked record whenever the clicked point changes, `None` when
/// the click is cleared.
pub type SelectionCallback = Box<dyn FnMut(Option<&Record>) + 'static>;

// ─────────────────────────────────────────────────────────────────────────────
// ScatterPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the scatter plot.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `width`/`height` | Plot size in logical pixels |
/// | `layout`         | Axis bound overrides and tick counts |
/// | `palette`        | Quadrant, highlight and outline colors |
/// | `on_select`      | Clicked-point notification |
pub struct ScatterPlotConfig {
    /// Plot width in logical pixels.
    pub width: f32,
    /// Plot height in logical pixels.
    pub height: f32,
    /// When `true` the plot fills the available space and `width`/`height` only
    /// size the initial window.
    pub fit_to_window: bool,
    /// Axis bound overrides and tick counts.
    pub layout: LayoutConfig,
    /// Point colors.
    pub palette: Palette,

    /// Native window title.
    pub title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    /// Clicked-point notification.
    pub on_select: Option<SelectionCallback>,
}

impl Clone for ScatterPlotConfig {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            fit_to_window: self.fit_to_window,
            layout: self.layout.clone(),
            palette: self.palette.clone(),
            title: self.title.clone(),
            native_options: self.native_options.clone(),
            on_select: None, // cannot clone closure
        }
    }
}

impl Default for ScatterPlotConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            fit_to_window: true,
            layout: LayoutConfig::default(),
            palette: Palette::default(),
            title: "Scatter Plot".to_string(),
            native_options: None,
            on_select: None,
        }
    }
}

impl ScatterPlotConfig {
    /// Builder-style setter for the selection callback.
    pub fn with_on_select(mut self, f: impl FnMut(Option<&Record>) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serializable settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializable version of [`Palette`], colors as `[r, g, b]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub upper_left: [u8; 3],
    pub upper_right: [u8; 3],
    pub lower_left: [u8; 3],
    pub lower_right: [u8; 3],
    pub highlight: [u8; 3],
    pub outline: [u8; 3],
    pub legend: [u8; 3],
}

impl Default for PaletteSettings {
    fn default() -> Self {
        (&Palette::default()).into()
    }
}

fn rgb(c: Color32) -> [u8; 3] {
    [c.r(), c.g(), c.b()]
}

fn color([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

impl From<&Palette> for PaletteSettings {
    fn from(p: &Palette) -> Self {
        Self {
            upper_left: rgb(p.upper_left),
            upper_right: rgb(p.upper_right),
            lower_left: rgb(p.lower_left),
            lower_right: rgb(p.lower_right),
            highlight: rgb(p.highlight),
            outline: rgb(p.outline),
            legend: rgb(p.legend),
        }
    }
}

impl PaletteSettings {
    pub fn into_palette(self) -> Palette {
        Palette {
            upper_left: color(self.upper_left),
            upper_right: color(self.upper_right),
            lower_left: color(self.lower_left),
            lower_right: color(self.lower_right),
            highlight: color(self.highlight),
            outline: color(self.outline),
            legend: color(self.legend),
        }
    }
}

/// The file-loadable part of [`ScatterPlotConfig`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub fit_to_window: bool,
    pub layout: LayoutConfig,
    pub palette: PaletteSettings,
}

impl Default for PlotSettings {
    fn default() -> Self {
        (&ScatterPlotConfig::default()).into()
    }
}

impl From<&ScatterPlotConfig> for PlotSettings {
    fn from(c: &ScatterPlotConfig) -> Self {
        Self {
            title: c.title.clone(),
            width: c.width,
            height: c.height,
            fit_to_window: c.fit_to_window,
            layout: c.layout.clone(),
            palette: (&c.palette).into(),
        }
    }
}

impl PlotSettings {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load settings from a file; `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }

    /// Apply stored settings to a config, leaving its callback and window options alone.
    pub fn apply_to(self, c: &mut ScatterPlotConfig) {
        c.title = self.title;
        c.width = self.width;
        c.height = self.height;
        c.fit_to_window = self.fit_to_window;
        c.layout = self.layout;
        c.palette = self.palette.into_palette();
    }
}
