//! Interaction state: hover, origin re-anchoring and neighbor highlighting.
//!
//! [`InteractionState`] is an immutable value. Every pointer or dataset event
//! produces a new state through [`InteractionState::apply`], so transitions can be
//! tested without any rendering.

use crate::data::layout::{PlotLayout, ScreenPoint};
use crate::data::neighbors::{nearest, NEIGHBOR_COUNT};

/// Events that drive the state machine. Indices are record indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    HoverEnter(usize),
    HoverLeave(usize),
    LeftClick(usize),
    RightClick(usize),
    /// The record set was replaced (even by identical data).
    DatasetReplaced,
    /// Screen points were recomputed for new plot dimensions.
    Relayout,
}

/// Reference point for quadrant classification, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

/// Quadrant of a point relative to the origin, as seen on screen.
///
/// A point on the vertical origin line counts as right, a point on the horizontal
/// origin line counts as lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    /// Classify screen position `(x, y)` against `origin`. Screen y grows downward.
    pub fn classify(x: f64, y: f64, origin: Origin) -> Self {
        let left = x < origin.x;
        let upper = y < origin.y;
        match (left, upper) {
            (true, false) => Quadrant::LowerLeft,
            (true, true) => Quadrant::UpperLeft,
            (false, true) => Quadrant::UpperRight,
            (false, false) => Quadrant::LowerRight,
        }
    }

    pub fn of(point: &ScreenPoint, origin: Origin) -> Self {
        Self::classify(point.x, point.y, origin)
    }
}

/// A line from the right-clicked point to one of its highlighted neighbors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub neighbor: usize,
}

/// Hover, click and highlight state of the plot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered_index: Option<usize>,
    clicked_index: Option<usize>,
    right_clicked_index: Option<usize>,
    /// Nearest first.
    highlighted_indices: Vec<usize>,
}

impl InteractionState {
    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_index
    }

    pub fn clicked_index(&self) -> Option<usize> {
        self.clicked_index
    }

    pub fn right_clicked_index(&self) -> Option<usize> {
        self.right_clicked_index
    }

    /// Indices of the highlighted neighbors, nearest first.
    pub fn highlighted_indices(&self) -> &[usize] {
        &self.highlighted_indices
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted_indices.contains(&index)
    }

    /// Produce the state that follows `event`, given the current screen points.
    ///
    /// Events naming an index that is not among `points` leave the state unchanged.
    pub fn apply(&self, event: &InteractionEvent, points: &[ScreenPoint]) -> Self {
        let known = |index: usize| points.iter().any(|p| p.index == index);
        match *event {
            InteractionEvent::HoverEnter(index) if known(index) => Self {
                hovered_index: Some(index),
                ..self.clone()
            },
            InteractionEvent::HoverLeave(index) => {
                // A late leave for a point that is no longer hovered must not clear
                // the hover of its successor.
                if self.hovered_index == Some(index) {
                    Self {
                        hovered_index: None,
                        ..self.clone()
                    }
                } else {
                    self.clone()
                }
            }
            InteractionEvent::LeftClick(index) if known(index) => {
                let clicked_index = if self.clicked_index == Some(index) {
                    None
                } else {
                    Some(index)
                };
                Self {
                    clicked_index,
                    ..self.clone()
                }
            }
            InteractionEvent::RightClick(index) if known(index) => {
                if self.right_clicked_index == Some(index) {
                    Self {
                        right_clicked_index: None,
                        highlighted_indices: Vec::new(),
                        ..self.clone()
                    }
                } else {
                    Self {
                        right_clicked_index: Some(index),
                        highlighted_indices: neighbors_of(index, points),
                        ..self.clone()
                    }
                }
            }
            InteractionEvent::DatasetReplaced => Self::default(),
            InteractionEvent::Relayout => match self.right_clicked_index {
                Some(index) if known(index) => Self {
                    highlighted_indices: neighbors_of(index, points),
                    ..self.clone()
                },
                Some(_) => Self {
                    right_clicked_index: None,
                    highlighted_indices: Vec::new(),
                    ..self.clone()
                },
                None => self.clone(),
            },
            InteractionEvent::HoverEnter(index)
            | InteractionEvent::LeftClick(index)
            | InteractionEvent::RightClick(index) => {
                tracing::warn!(index, ?event, "ignoring event for unknown point");
                self.clone()
            }
        }
    }

    /// The current origin: the clicked point's position, or the layout's natural origin.
    pub fn origin(&self, layout: &PlotLayout) -> Origin {
        let (x, y) = self
            .clicked_index
            .and_then(|i| layout.point(i))
            .map(|p| (p.x, p.y))
            .unwrap_or_else(|| layout.default_origin());
        Origin { x, y }
    }

    /// Line segments from the right-clicked point to each highlighted neighbor.
    pub fn neighbor_lines(&self, layout: &PlotLayout) -> Vec<NeighborLine> {
        let Some(focal) = self.right_clicked_index.and_then(|i| layout.point(i)) else {
            return Vec::new();
        };
        self.highlighted_indices
            .iter()
            .filter_map(|&i| layout.point(i))
            .map(|p| NeighborLine {
                from: (focal.x, focal.y),
                to: (p.x, p.y),
                neighbor: p.index,
            })
            .collect()
    }
}

fn neighbors_of(index: usize, points: &[ScreenPoint]) -> Vec<usize> {
    match points.iter().find(|p| p.index == index) {
        Some(focal) => nearest(focal, points, NEIGHBOR_COUNT)
            .into_iter()
            .map(|p| p.index)
            .collect(),
        None => Vec::new(),
    }
}
