//! Widget geometry: bounding boxes, sides and border placement math.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Snapshot of a widget's on-screen rectangle.
///
/// Always recomputed from layout on demand; layout can shift between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BoundingBox {
    /// Create a bounding box from its edges.
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Create a bounding box from an origin and a size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, x + width, y, y + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Horizontal midpoint.
    pub fn mid_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Closed-interval containment: points on any edge are inside.
    pub fn contains(&self, point: Point) -> bool {
        self.contains_x(point.x) && point.y >= self.top && point.y <= self.bottom
    }

    /// Closed-interval horizontal containment.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.left && x <= self.right
    }

    /// Convert to a kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom)
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x0, rect.x1, rect.y0, rect.y1)
    }
}

/// Horizontal side a border enters from or exits toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Side of `x` relative to the box midpoint. A tie resolves to `Left`.
    pub fn of(x: f64, bounds: &BoundingBox) -> Self {
        if x > bounds.mid_x() {
            Side::Right
        } else {
            Side::Left
        }
    }
}

/// Border width for a target label: a fraction of the text width, floored.
///
/// A failed measurement (`None` or a non-finite width) yields the floor.
pub fn border_width(text_width: Option<f64>, fraction: f64, floor: f64) -> f64 {
    match text_width {
        Some(width) if width.is_finite() => (width * fraction).max(floor),
        _ => floor,
    }
}

/// Offset that centers a border of `border_width` under a target of
/// `target_width`, relative to the target's left edge.
///
/// Negative when the border is wider than the target.
pub fn center_offset(target_width: f64, border_width: f64) -> f64 {
    (target_width - border_width) / 2.0
}

/// Index of the first option whose horizontal extent contains `x`.
///
/// Options are laid out left to right and do not overlap.
pub fn find_hovered_option(options: &[BoundingBox], x: f64) -> Option<usize> {
    options.iter().position(|option| option.contains_x(x))
}

/// Index of the option whose midpoint is closest to `x`.
pub fn nearest_option(options: &[BoundingBox], x: f64) -> Option<usize> {
    options
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let da = (a.mid_x() - x).abs();
            let db = (b.mid_x() - x).abs();
            da.total_cmp(&db)
        })
        .map(|(index, _)| index)
}

/// Horizontal translation applied to the border elements.
///
/// Always expressed as a transform so the transition stays composited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderTransform {
    /// Parked outside the widget on `side`.
    OffScreen { side: Side, container_width: f64 },
    /// Visible, shifted by this many pixels from the widget's left edge.
    Offset(f64),
}

impl BorderTransform {
    /// CSS `transform` value.
    pub fn to_css(&self) -> String {
        match *self {
            BorderTransform::OffScreen {
                side: Side::Left, ..
            } => "translateX(-100%)".to_string(),
            BorderTransform::OffScreen {
                side: Side::Right,
                container_width,
            } => format!("translateX({}px)", container_width),
            BorderTransform::Offset(offset) => format!("translateX({}px)", offset),
        }
    }
}
