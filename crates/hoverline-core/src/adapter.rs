//! The contract a widget implements to get hover-border behavior.

use crate::geometry::BoundingBox;
use crate::widget::WidgetKind;

/// Style properties the animator writes on border elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Transform,
    Width,
    Transition,
}

impl StyleProperty {
    /// CSS property name.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Width => "width",
            Self::Transition => "transition",
        }
    }
}

/// An element whose inline style the animator mutates.
pub trait BorderElement {
    fn set_style(&self, property: StyleProperty, value: &str);

    /// Flush pending style writes so the next change animates from them.
    fn commit(&self) {}
}

/// The top and bottom border elements of a widget.
///
/// Owned by the widget; the animator only borrows them.
#[derive(Clone, Copy)]
pub struct BorderHandles<'a> {
    pub top: &'a dyn BorderElement,
    pub bottom: &'a dyn BorderElement,
}

impl BorderHandles<'_> {
    /// Apply the same style to both elements.
    pub fn set_style(&self, property: StyleProperty, value: &str) {
        self.top.set_style(property, value);
        self.bottom.set_style(property, value);
    }

    pub fn commit(&self) {
        self.top.commit();
        self.bottom.commit();
    }
}

/// What the border is currently centered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    /// The widget as a whole.
    Whole,
    /// One option of a multi-target widget.
    Option(usize),
}

/// Geometry and element access a widget exposes to the animator.
///
/// `None` returns mean the element is not rendered (yet, or anymore);
/// the animator treats that as a transient no-op.
pub trait WidgetAdapter {
    fn kind(&self) -> WidgetKind;

    /// Outer rectangle of the widget.
    fn outer_bounds(&self) -> Option<BoundingBox>;

    fn border_handles(&self) -> Option<BorderHandles<'_>>;

    /// Option rectangles, left to right. Empty for single-target widgets.
    fn option_bounds(&self) -> Vec<BoundingBox> {
        Vec::new()
    }

    /// Number of options, `None` for single-target widgets.
    fn option_count(&self) -> Option<usize> {
        None
    }

    /// Semantic value of the option at `index`.
    fn option_value(&self, _index: usize) -> Option<String> {
        None
    }

    /// Rendered width of the target's label, `None` if it cannot be measured.
    fn text_pixel_width(&self, target: HoverTarget) -> Option<f64>;

    /// Bounds of a target, falling back to the outer bounds.
    fn target_bounds(&self, target: HoverTarget) -> Option<BoundingBox> {
        match target {
            HoverTarget::Whole => self.outer_bounds(),
            HoverTarget::Option(index) => self
                .option_bounds()
                .get(index)
                .copied()
                .or_else(|| self.outer_bounds()),
        }
    }
}
