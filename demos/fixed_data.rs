//! Example: display a fixed, in-memory dataset
//!
//! What it demonstrates
//! - Feeding raw `x,y,label` text through a `DatasetSink`.
//! - Overriding the axis bounds and reacting to point selection via `on_select`.
//!
//! How to run
//! ```bash
//! cargo run --example fixed_data
//! ```

use scatterplot::{channel_dataset, run_scatterplot, ScatterPlotConfig};

const DATA: &str = "\
-12,20,a
-23,23,a
50,-12,b
1,54,c
2,2,c
19,-7,b
-52,19,a
30,-22,b
11,34,c
55,-55,b
32,12,c
50,51,c
";

fn main() -> eframe::Result<()> {
    scatterplot::logging::init();

    let (sink, rx) = channel_dataset();
    if sink.send_text(Some("fixed".to_string()), DATA).is_err() {
        tracing::error!("plot receiver dropped before start");
    }

    let mut cfg = ScatterPlotConfig::default().with_on_select(|record| match record {
        Some(r) => println!("selected #{} ({}, {}) [{}]", r.index, r.x, r.y, r.label),
        None => println!("selection cleared"),
    });
    cfg.title = "Fixed data".to_string();
    cfg.layout.min_x = Some(-60.0);
    cfg.layout.max_x = Some(60.0);

    run_scatterplot(rx, cfg)
}
