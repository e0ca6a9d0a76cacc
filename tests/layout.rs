use scatterplot::data::layout::*;
use scatterplot::data::records::{parse, Record};

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

fn record(index: usize, x: f64, y: f64) -> Record {
    Record {
        index,
        x,
        y,
        label: "a".to_string(),
        label_index: 0,
    }
}

#[test]
fn padding_follows_font_size_and_digits() {
    let records = parse("0,0,a\n10,20,b");
    let l = layout(&records, 800.0, 400.0, &LayoutConfig::default());
    // font 800/80 = 10, largest bound "20" -> 2 digits + 1
    assert!(approx(l.font_size, 10.0));
    assert!(approx(l.padding, (10.0 + 3.0) * 3.0 + 5.0));
    assert!(approx(l.chart.left, 44.0));
    assert!(approx(l.chart.top, 44.0));
    assert!(approx(l.chart.right, 756.0));
    assert!(approx(l.chart.bottom, 356.0));
}

#[test]
fn padding_counts_sign_of_negative_bounds() {
    let records = parse("-150,0,a\n10,20,b");
    let l = layout(&records, 800.0, 400.0, &LayoutConfig::default());
    // "-150" -> 4 characters + 1
    assert!(approx(l.padding, (10.0 + 5.0) * 3.0 + 5.0));
}

#[test]
fn extremes_land_on_chart_corners() {
    let records = parse("0,0,a\n10,20,b");
    let l = layout(&records, 800.0, 400.0, &LayoutConfig::default());
    let (p0, p1) = (&l.points[0], &l.points[1]);
    assert!(approx(p0.x, l.chart.left) && approx(p0.y, l.chart.bottom));
    assert!(approx(p1.x, l.chart.right) && approx(p1.y, l.chart.top));
}

#[test]
fn bounds_are_rounded_outward() {
    let records = parse("0.3,-1.2,a\n9.2,4.01,a");
    let l = layout(&records, 500.0, 300.0, &LayoutConfig::default());
    assert_eq!(l.x_bounds, AxisBounds { min: 0.0, max: 10.0 });
    assert_eq!(l.y_bounds, AxisBounds { min: -2.0, max: 5.0 });
}

#[test]
fn overrides_replace_automatic_bounds() {
    let records = parse("1,1,a\n5,5,a");
    let cfg = LayoutConfig {
        min_x: Some(0.0),
        max_y: Some(10.0),
        ..LayoutConfig::default()
    };
    let l = layout(&records, 500.0, 300.0, &cfg);
    assert_eq!(l.x_bounds, AxisBounds { min: 0.0, max: 5.0 });
    assert_eq!(l.y_bounds, AxisBounds { min: 1.0, max: 10.0 });
}

#[test]
fn records_outside_overridden_bounds_are_omitted() {
    let records = parse("-52,19,a\n55,-55,b\n10,0,a");
    let cfg = LayoutConfig {
        min_x: Some(0.0),
        ..LayoutConfig::default()
    };
    let l = layout(&records, 500.0, 300.0, &cfg);
    assert_eq!(l.x_bounds, AxisBounds { min: 0.0, max: 55.0 });
    let indices: Vec<usize> = l.points.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![1, 2]);
    assert!(l.point(0).is_none());
    for p in &l.points {
        assert!(p.x >= l.padding - EPS && p.x <= 500.0 - l.padding + EPS);
        assert!(p.y >= l.padding - EPS && p.y <= 300.0 - l.padding + EPS);
    }
}

#[test]
fn points_on_overridden_bounds_are_kept() {
    let records = parse("0,0,a\n5,5,a");
    let cfg = LayoutConfig {
        min_x: Some(0.0),
        max_x: Some(5.0),
        ..LayoutConfig::default()
    };
    let l = layout(&records, 500.0, 300.0, &cfg);
    assert_eq!(l.points.len(), 2);
    assert!(approx(l.points[0].x, l.chart.left));
    assert!(approx(l.points[1].x, l.chart.right));
}

#[test]
fn every_point_stays_inside_the_chart() {
    let mut text = String::new();
    for i in 0..50 {
        let x = ((i * 37) % 101) as f64 * 1.7 - 60.0;
        let y = ((i * 53) % 89) as f64 * -0.9 + 12.5;
        text.push_str(&format!("{x},{y},l{}\n", i % 4));
    }
    let records = parse(&text);
    for (w, h) in [(500.0, 300.0), (1200.0, 200.0), (300.0, 900.0)] {
        let l = layout(&records, w, h, &LayoutConfig::default());
        assert_eq!(l.points.len(), records.len());
        for p in &l.points {
            assert!(p.x >= l.padding - EPS && p.x <= w - l.padding + EPS, "x {} out of range", p.x);
            assert!(p.y >= l.padding - EPS && p.y <= h - l.padding + EPS, "y {} out of range", p.y);
        }
    }
}

#[test]
fn screen_x_is_monotonic_in_data_x() {
    let records = parse("3,1,a\n-7,2,a\n12.5,3,a\n0,4,a\n12.4,5,a");
    let l = layout(&records, 640.0, 480.0, &LayoutConfig::default());
    for a in &records {
        for b in &records {
            if a.x > b.x {
                let pa = l.point(a.index).unwrap();
                let pb = l.point(b.index).unwrap();
                assert!(pa.x >= pb.x);
                // y is flipped but still monotonic (non-increasing on screen)
            }
            if a.y > b.y {
                assert!(l.point(a.index).unwrap().y <= l.point(b.index).unwrap().y);
            }
        }
    }
}

#[test]
fn degenerate_axis_collapses_to_center_line() {
    let records = parse("4,1,a\n4,7,a\n4,3,a");
    let l = layout(&records, 500.0, 300.0, &LayoutConfig::default());
    assert!(l.x_bounds.is_degenerate());
    for p in &l.points {
        assert!(p.x.is_finite());
        assert!(approx(p.x, l.chart.center_x()));
        assert!(p.y >= l.chart.top - EPS && p.y <= l.chart.bottom + EPS);
    }
}

#[test]
fn inverted_override_is_treated_as_degenerate() {
    let records = parse("1,1,a\n2,2,a");
    let cfg = LayoutConfig {
        min_y: Some(5.0),
        max_y: Some(-5.0),
        ..LayoutConfig::default()
    };
    let l = layout(&records, 500.0, 300.0, &cfg);
    for p in &l.points {
        assert!(approx(p.y, l.chart.center_y()));
    }
}

#[test]
fn non_finite_records_are_omitted() {
    let records = vec![record(0, 1.0, 1.0), record(1, f64::NAN, 2.0), record(2, 3.0, 3.0)];
    let l = layout(&records, 500.0, 300.0, &LayoutConfig::default());
    assert_eq!(l.x_bounds, AxisBounds { min: 1.0, max: 3.0 });
    let indices: Vec<usize> = l.points.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 2]);
    assert!(l.point(1).is_none());
    assert_eq!(l.point(2).map(|p| p.index), Some(2));
}

#[test]
fn empty_dataset_has_unit_bounds_and_no_points() {
    let l = layout(&[], 500.0, 300.0, &LayoutConfig::default());
    assert!(l.points.is_empty());
    assert_eq!(l.x_bounds, AxisBounds { min: 0.0, max: 1.0 });
    assert_eq!(l.default_origin(), (l.padding, 300.0 - l.padding));
}

#[test]
fn default_ticks_span_the_axis() {
    let records = parse("0,0,a\n10,20,b");
    let l = layout(&records, 800.0, 400.0, &LayoutConfig::default());
    assert_eq!(l.x_ticks.len(), DEFAULT_GUIDES + 1);
    assert_eq!(l.y_ticks.len(), DEFAULT_GUIDES + 1);

    let first = &l.x_ticks[0];
    assert!(!first.guide);
    assert_eq!(first.label, "0.0");
    assert!(approx(first.position, l.chart.left));

    let last = l.x_ticks.last().unwrap();
    assert!(last.guide);
    assert_eq!(last.label, "10.0");
    assert!(approx(last.position, l.chart.right));

    assert_eq!(l.y_ticks[1].label, "2.0");
    assert!(approx(l.y_ticks[0].position, l.chart.bottom));
    assert!(approx(l.y_ticks.last().unwrap().position, l.chart.top));
}

#[test]
fn tick_labels_use_one_decimal() {
    let records = parse("0,0,a\n1,1,a");
    let cfg = LayoutConfig {
        vertical_guides: Some(5),
        ..LayoutConfig::default()
    };
    let l = layout(&records, 500.0, 300.0, &cfg);
    let labels: Vec<&str> = l.x_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
}

#[test]
fn zero_guides_fall_back_to_record_count() {
    assert_eq!(resolve_guides(None, 7), DEFAULT_GUIDES);
    assert_eq!(resolve_guides(Some(3), 7), 3);
    assert_eq!(resolve_guides(Some(0), 7), 6);
    assert_eq!(resolve_guides(Some(0), 0), 0);

    let records = parse("0,0,a\n1,1,a\n2,2,a");
    let cfg = LayoutConfig {
        horizontal_guides: Some(0),
        vertical_guides: Some(0),
        ..LayoutConfig::default()
    };
    let l = layout(&records, 500.0, 300.0, &cfg);
    assert_eq!(l.x_ticks.len(), 3);

    let single = parse("5,5,a");
    let l = layout(&single, 500.0, 300.0, &cfg);
    assert_eq!(l.x_ticks.len(), 1);
    assert!(!l.x_ticks[0].guide);
}
