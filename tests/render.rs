use eframe::egui::{self, pos2, vec2, RawInput, Rect};
use scatterplot::data::interaction::InteractionEvent;
use scatterplot::render::show_plot;
use scatterplot::{PlotController, ScatterPlotConfig};

fn frame_input() -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))),
        ..RawInput::default()
    }
}

fn render_once(controller: &PlotController) -> (Vec<InteractionEvent>, usize) {
    let ctx = egui::Context::default();
    let mut events = Vec::new();
    let output = ctx.run(frame_input(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let view = controller.view();
            events = show_plot(ui, vec2(500.0, 300.0), &view, controller.palette());
        });
    });
    (events, output.shapes.len())
}

#[test]
fn paints_every_marker_shape_without_pointer_events() {
    let mut cfg = ScatterPlotConfig::default();
    let mut controller = PlotController::new(&mut cfg);
    // three labels: circle, square and diamond markers
    controller.load_text("0,0,a\n10,10,b\n2,8,c\n8,2,a");
    controller.handle(InteractionEvent::LeftClick(1));
    controller.handle(InteractionEvent::RightClick(0));

    let (events, shapes) = render_once(&controller);
    assert!(events.is_empty());
    // background, border, axes, ticks, neighbor lines, markers and legend
    assert!(shapes > controller.records().len());
}

#[test]
fn paints_an_empty_dataset() {
    let mut cfg = ScatterPlotConfig::default();
    let controller = PlotController::new(&mut cfg);
    let (events, shapes) = render_once(&controller);
    assert!(events.is_empty());
    assert!(shapes > 0);
}
