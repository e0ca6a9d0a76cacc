//! PlotRenderer: paints a [`PlotView`] with egui and turns pointer input on
//! markers into [`InteractionEvent`]s.
//!
//! The renderer never touches interaction state; callers feed the returned events
//! to [`PlotController::handle`](crate::controller::PlotController::handle).

use eframe::egui::{
    self, pos2, vec2, Align2, Color32, CursorIcon, FontId, Pos2, Rect, Sense, Shape, Stroke,
};

use crate::controller::PlotView;
use crate::data::interaction::InteractionEvent;
use crate::data::point_look::{MarkerShape, Palette};
use crate::legend;

const AXIS_COLOR: Color32 = Color32::from_gray(0x99);
const GUIDE_COLOR: Color32 = Color32::from_gray(0xcc);
const LABEL_COLOR: Color32 = Color32::from_gray(0x80);
const BORDER_COLOR: Color32 = Color32::BLACK;
/// Half length of a guide mark, in pixels.
const GUIDE_HALF: f32 = 3.0;
/// Extra pick radius around a marker, in pixels.
const PICK_SLACK: f32 = 2.0;
const MIN_FONT_SIZE: f32 = 8.0;

/// Maps plot-local coordinates to egui screen positions inside `rect`.
#[derive(Debug, Clone, Copy)]
pub struct PlotTransform {
    rect: Rect,
}

impl PlotTransform {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        self.rect.min + vec2(x as f32, y as f32)
    }
}

/// Allocate `size` in `ui`, paint `view` into it and return the resulting events.
pub fn show_plot(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    view: &PlotView<'_>,
    palette: &Palette,
) -> Vec<InteractionEvent> {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let transform = PlotTransform::new(rect);
    let painter = ui.painter_at(rect);
    let font = FontId::proportional((view.font_size as f32).max(MIN_FONT_SIZE));

    painter.rect_filled(rect, 0.0, Color32::WHITE);
    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(1.5, BORDER_COLOR),
        egui::StrokeKind::Inside,
    );

    paint_axes(&painter, &transform, view);
    paint_ticks(&painter, &transform, view, &font);

    for line in &view.neighbor_lines {
        painter.line_segment(
            [
                transform.to_screen(line.from.0, line.from.1),
                transform.to_screen(line.to.0, line.to.1),
            ],
            Stroke::new(1.0, GUIDE_COLOR),
        );
    }

    for p in &view.points {
        let center = transform.to_screen(p.point.x, p.point.y);
        let outline = p.look.outlined.then_some(palette.outline);
        paint_marker(&painter, center, p.look.shape, p.look.radius, p.look.color, outline);
    }

    legend::paint_legend(&painter, &transform, view, palette, &font);

    pointer_events(ui, &response, &transform, view)
}

fn paint_axes(painter: &egui::Painter, transform: &PlotTransform, view: &PlotView<'_>) {
    let stroke = Stroke::new(0.5, AXIS_COLOR);
    let chart = view.chart;
    painter.line_segment(
        [
            transform.to_screen(chart.left, view.origin.y),
            transform.to_screen(chart.right, view.origin.y),
        ],
        stroke,
    );
    painter.line_segment(
        [
            transform.to_screen(view.origin.x, chart.top),
            transform.to_screen(view.origin.x, chart.bottom),
        ],
        stroke,
    );
}

fn paint_ticks(
    painter: &egui::Painter,
    transform: &PlotTransform,
    view: &PlotView<'_>,
    font: &FontId,
) {
    let stroke = Stroke::new(1.0, GUIDE_COLOR);
    let chart = view.chart;
    let gap = font.size as f64;

    for tick in view.x_ticks {
        let bottom = transform.to_screen(tick.position, chart.bottom);
        if tick.guide {
            painter.line_segment(
                [bottom - vec2(0.0, GUIDE_HALF), bottom + vec2(0.0, GUIDE_HALF)],
                stroke,
            );
        }
        painter.text(
            transform.to_screen(tick.position, chart.bottom + gap),
            Align2::CENTER_TOP,
            &tick.label,
            font.clone(),
            LABEL_COLOR,
        );
    }

    for tick in view.y_ticks {
        let left = transform.to_screen(chart.left, tick.position);
        if tick.guide {
            painter.line_segment(
                [left - vec2(GUIDE_HALF, 0.0), left + vec2(GUIDE_HALF, 0.0)],
                stroke,
            );
        }
        painter.text(
            transform.to_screen(chart.left - gap, tick.position),
            Align2::RIGHT_CENTER,
            &tick.label,
            font.clone(),
            LABEL_COLOR,
        );
    }
}

/// Paint one marker centered at `center`.
pub(crate) fn paint_marker(
    painter: &egui::Painter,
    center: Pos2,
    shape: MarkerShape,
    radius: f32,
    fill: Color32,
    outline: Option<Color32>,
) {
    let stroke = outline.map_or(Stroke::NONE, |c| Stroke::new(1.0, c));
    match shape {
        MarkerShape::Circle => {
            painter.circle(center, radius, fill, stroke);
        }
        MarkerShape::Square => {
            let rect = Rect::from_center_size(center, vec2(2.0 * radius, 2.0 * radius));
            painter.rect(rect, 0.0, fill, stroke, egui::StrokeKind::Middle);
        }
        MarkerShape::Diamond => {
            // same area as the square, rotated by 45 degrees
            let r = radius * std::f32::consts::SQRT_2;
            let corners = vec![
                pos2(center.x, center.y - r),
                pos2(center.x + r, center.y),
                pos2(center.x, center.y + r),
                pos2(center.x - r, center.y),
            ];
            painter.add(Shape::convex_polygon(corners, fill, stroke));
        }
    }
}

/// Topmost marker under `pointer`, as a record index.
fn pick(view: &PlotView<'_>, transform: &PlotTransform, pointer: Pos2) -> Option<usize> {
    view.points
        .iter()
        .rev()
        .find(|p| {
            let center = transform.to_screen(p.point.x, p.point.y);
            center.distance(pointer) <= p.look.radius + PICK_SLACK
        })
        .map(|p| p.point.index)
}

fn pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    transform: &PlotTransform,
    view: &PlotView<'_>,
) -> Vec<InteractionEvent> {
    let mut events = Vec::new();
    let hit = response
        .hover_pos()
        .and_then(|pos| pick(view, transform, pos));
    let previous = view
        .points
        .iter()
        .find(|p| p.look.hovered)
        .map(|p| p.point.index);

    if hit != previous {
        if let Some(index) = previous {
            events.push(InteractionEvent::HoverLeave(index));
        }
        if let Some(index) = hit {
            events.push(InteractionEvent::HoverEnter(index));
        }
    }

    if let Some(index) = hit {
        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        if response.clicked() {
            events.push(InteractionEvent::LeftClick(index));
        }
        if response.secondary_clicked() {
            events.push(InteractionEvent::RightClick(index));
        }
    }
    events
}
