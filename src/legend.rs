//! Legend: one marker + label pair per distinct label along the bottom edge.

use eframe::egui::{self, vec2, Align2, Color32, FontId};

use crate::controller::PlotView;
use crate::data::point_look::{Palette, MARKER_RADIUS};
use crate::render::{paint_marker, PlotTransform};

/// Distance of the legend row from the bottom edge of the plot.
const BOTTOM_OFFSET: f64 = 8.0;
const LABEL_GAP: f32 = 10.0;
const ENTRY_GAP: f32 = 20.0;

pub(crate) fn paint_legend(
    painter: &egui::Painter,
    transform: &PlotTransform,
    view: &PlotView<'_>,
    palette: &Palette,
    font: &FontId,
) {
    let legend_font = FontId::proportional(font.size + 5.0);
    let mut pos = transform.to_screen(view.chart.left, view.height - BOTTOM_OFFSET);
    for entry in &view.legend {
        paint_marker(painter, pos, entry.shape, MARKER_RADIUS + 1.0, palette.legend, None);
        let text_rect = painter.text(
            pos + vec2(LABEL_GAP, 0.0),
            Align2::LEFT_CENTER,
            entry.label,
            legend_font.clone(),
            Color32::from_gray(0x80),
        );
        pos.x = text_rect.right() + ENTRY_GAP;
    }
}
