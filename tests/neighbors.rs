use scatterplot::data::layout::ScreenPoint;
use scatterplot::data::neighbors::*;

fn pt(index: usize, x: f64, y: f64) -> ScreenPoint {
    ScreenPoint {
        index,
        x,
        y,
        label: String::new(),
        label_index: 0,
    }
}

fn indices(points: &[&ScreenPoint]) -> Vec<usize> {
    points.iter().map(|p| p.index).collect()
}

#[test]
fn points_on_a_line_sort_by_distance_with_stable_ties() {
    let points: Vec<ScreenPoint> = (0..6).map(|i| pt(i, i as f64, 0.0)).collect();
    let result = nearest(&points[2], &points, NEIGHBOR_COUNT);
    assert_eq!(indices(&result), vec![1, 3, 0, 4, 5]);
}

#[test]
fn tie_order_follows_input_order() {
    // same distances, reversed input order
    let points = vec![pt(10, 3.0, 0.0), pt(11, 1.0, 0.0), pt(12, 2.0, 0.0)];
    let result = nearest(&points[2], &points, 5);
    assert_eq!(indices(&result), vec![10, 11]);
}

#[test]
fn focal_is_excluded_by_index_not_position() {
    let points = vec![pt(0, 5.0, 5.0), pt(1, 5.0, 5.0), pt(2, 9.0, 5.0)];
    let result = nearest_with_distance(&points[0], &points, 5);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].0.index, 1);
    assert_eq!(result[0].1, 0.0);
    assert_eq!(result[1].0.index, 2);
    assert_eq!(result[1].1, 4.0);
}

#[test]
fn returns_at_most_k() {
    let points: Vec<ScreenPoint> = (0..20).map(|i| pt(i, (i * 3) as f64, (i % 4) as f64)).collect();
    assert_eq!(nearest(&points[7], &points, NEIGHBOR_COUNT).len(), 5);
    assert_eq!(nearest(&points[7], &points, 2).len(), 2);
}

#[test]
fn fewer_points_than_k() {
    let points = vec![pt(0, 0.0, 0.0), pt(1, 3.0, 4.0), pt(2, 1.0, 1.0)];
    let result = nearest_with_distance(&points[0], &points, NEIGHBOR_COUNT);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].0.index, 2);
    assert!((result[1].1 - 5.0).abs() < 1e-12);
}

#[test]
fn lone_point_has_no_neighbors() {
    let points = vec![pt(0, 1.0, 1.0)];
    assert!(nearest(&points[0], &points, NEIGHBOR_COUNT).is_empty());
    assert!(nearest(&pt(3, 0.0, 0.0), &[], NEIGHBOR_COUNT).is_empty());
}

#[test]
fn distance_is_euclidean_in_screen_space() {
    let d = distance(&pt(0, 0.0, 0.0), &pt(1, 3.0, 4.0));
    assert!((d - 5.0).abs() < 1e-12);
}
