//! Nearest-neighbor search in screen space.

use crate::data::layout::ScreenPoint;

/// Number of neighbors highlighted on right-click.
pub const NEIGHBOR_COUNT: usize = 5;

/// Euclidean distance between two screen points.
pub fn distance(a: &ScreenPoint, b: &ScreenPoint) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// The `k` points closest to `focal`, nearest first.
///
/// The focal point is excluded by `index`, so a distinct record sitting on the same
/// pixel is still a neighbor. Equal distances keep the order of `points`.
pub fn nearest<'a>(focal: &ScreenPoint, points: &'a [ScreenPoint], k: usize) -> Vec<&'a ScreenPoint> {
    nearest_with_distance(focal, points, k)
        .into_iter()
        .map(|(p, _)| p)
        .collect()
}

/// Like [`nearest`], also returning each neighbor's distance.
pub fn nearest_with_distance<'a>(
    focal: &ScreenPoint,
    points: &'a [ScreenPoint],
    k: usize,
) -> Vec<(&'a ScreenPoint, f64)> {
    let mut pairs: Vec<(&ScreenPoint, f64)> = points
        .iter()
        .filter(|p| p.index != focal.index)
        .map(|p| (p, distance(focal, p)))
        .collect();
    // sort_by is stable
    pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
    pairs.truncate(k);
    pairs
}
