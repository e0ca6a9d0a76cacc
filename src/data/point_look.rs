//! PointLook: visual styling of a single scatter marker.

use eframe::egui::Color32;

use crate::data::interaction::Quadrant;

/// Marker radius of a point that is not hovered.
pub const MARKER_RADIUS: f32 = 3.0;
/// Marker radius of the hovered point.
pub const HOVERED_MARKER_RADIUS: f32 = 4.5;

/// Marker shape, chosen per label category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Circle,
    Square,
    /// A square rotated by 45 degrees.
    Diamond,
}

impl MarkerShape {
    const CYCLE: [MarkerShape; 3] = [MarkerShape::Circle, MarkerShape::Square, MarkerShape::Diamond];

    /// Shape for a label category; cycles for more than three labels.
    pub fn for_label(label_index: usize) -> Self {
        Self::CYCLE[label_index % Self::CYCLE.len()]
    }
}

/// Colors used to paint points.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub upper_left: Color32,
    pub upper_right: Color32,
    pub lower_left: Color32,
    pub lower_right: Color32,
    /// Overrides the quadrant color of highlighted neighbors.
    pub highlight: Color32,
    /// Outline of the clicked point.
    pub outline: Color32,
    /// Marker fill used in the legend.
    pub legend: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            upper_left: Color32::from_rgb(0, 0, 255),
            upper_right: Color32::from_rgb(0, 128, 0),
            lower_left: Color32::from_rgb(255, 165, 0),
            lower_right: Color32::from_rgb(255, 0, 0),
            highlight: Color32::BLACK,
            outline: Color32::BLACK,
            legend: Color32::from_rgb(255, 0, 0),
        }
    }
}

impl Palette {
    pub fn quadrant_color(&self, quadrant: Quadrant) -> Color32 {
        match quadrant {
            Quadrant::UpperLeft => self.upper_left,
            Quadrant::UpperRight => self.upper_right,
            Quadrant::LowerLeft => self.lower_left,
            Quadrant::LowerRight => self.lower_right,
        }
    }
}

/// Resolved appearance of one point for the current interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLook {
    pub color: Color32,
    pub shape: MarkerShape,
    pub radius: f32,
    pub highlighted: bool,
    pub hovered: bool,
    pub outlined: bool,
}

impl PointLook {
    /// Combine quadrant, highlight, hover and click state into a look.
    pub fn resolve(
        palette: &Palette,
        quadrant: Quadrant,
        label_index: usize,
        highlighted: bool,
        hovered: bool,
        clicked: bool,
    ) -> Self {
        Self {
            color: if highlighted {
                palette.highlight
            } else {
                palette.quadrant_color(quadrant)
            },
            shape: MarkerShape::for_label(label_index),
            radius: if hovered {
                HOVERED_MARKER_RADIUS
            } else {
                MARKER_RADIUS
            },
            highlighted,
            hovered,
            outlined: clicked,
        }
    }
}
