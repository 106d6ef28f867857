//! DOM-backed widget adapter.

use hoverline_core::{
    BorderElement, BorderHandles, BoundingBox, HoverTarget, StyleProperty, WidgetAdapter,
    WidgetError, WidgetKind, WidgetResult,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::measure;

/// Selector for the border element above the widget.
pub const BORDER_TOP_SELECTOR: &str = ".hover-border-top";
/// Selector for the border element below the widget.
pub const BORDER_BOTTOM_SELECTOR: &str = ".hover-border-bottom";
/// Attribute carrying an option's semantic value.
pub const OPTION_ATTRIBUTE: &str = "data-option";
/// Selector for an optional label element used for text measurement.
pub const LABEL_SELECTOR: &str = "[data-label]";

/// A border element in the document.
pub struct DomBorder(HtmlElement);

impl BorderElement for DomBorder {
    fn set_style(&self, property: StyleProperty, value: &str) {
        if let Err(e) = self.0.style().set_property(property.css_name(), value) {
            log::trace!("Failed to set {}: {:?}", property.css_name(), e);
        }
    }

    fn commit(&self) {
        // Reading layout flushes pending styles
        let _ = self.0.offset_width();
    }
}

/// A widget rooted at one element, with its border and option elements.
pub struct DomWidget {
    kind: WidgetKind,
    root: Element,
    top: DomBorder,
    bottom: DomBorder,
    options: Vec<Element>,
}

impl DomWidget {
    /// Bind to `root`, looking up the border and option elements inside it.
    pub fn bind(root: Element, kind: WidgetKind) -> WidgetResult<Self> {
        let top = find_border(&root, BORDER_TOP_SELECTOR)?;
        let bottom = find_border(&root, BORDER_BOTTOM_SELECTOR)?;

        let mut options = Vec::new();
        if kind.is_multi_target() {
            let selector = format!("[{}]", OPTION_ATTRIBUTE);
            if let Ok(list) = root.query_selector_all(&selector) {
                for i in 0..list.length() {
                    if let Some(option) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        options.push(option);
                    }
                }
            }
        }

        Ok(Self {
            kind,
            root,
            top,
            bottom,
            options,
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn option_elements(&self) -> &[Element] {
        &self.options
    }

    fn is_rendered(&self) -> bool {
        self.root.is_connected()
    }

    fn label_element(&self) -> Element {
        self.root
            .query_selector(LABEL_SELECTOR)
            .ok()
            .flatten()
            .unwrap_or_else(|| self.root.clone())
    }
}

impl WidgetAdapter for DomWidget {
    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn outer_bounds(&self) -> Option<BoundingBox> {
        self.is_rendered().then(|| bounds_of(&self.root))
    }

    fn border_handles(&self) -> Option<BorderHandles<'_>> {
        self.is_rendered().then(|| BorderHandles {
            top: &self.top,
            bottom: &self.bottom,
        })
    }

    fn option_bounds(&self) -> Vec<BoundingBox> {
        if !self.is_rendered() {
            return Vec::new();
        }
        self.options.iter().map(bounds_of).collect()
    }

    fn option_count(&self) -> Option<usize> {
        self.kind.is_multi_target().then_some(self.options.len())
    }

    fn option_value(&self, index: usize) -> Option<String> {
        let option = self.options.get(index)?;
        option
            .get_attribute(OPTION_ATTRIBUTE)
            .filter(|value| !value.is_empty())
            .or_else(|| option.text_content().map(|text| text.trim().to_string()))
    }

    fn text_pixel_width(&self, target: HoverTarget) -> Option<f64> {
        if !self.is_rendered() {
            return None;
        }
        match target {
            HoverTarget::Whole => measure::text_width(&self.label_element()),
            HoverTarget::Option(index) => measure::text_width(self.options.get(index)?),
        }
    }
}

fn find_border(root: &Element, selector: &str) -> WidgetResult<DomBorder> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(DomBorder)
        .ok_or_else(|| WidgetError::MissingElement(selector.to_string()))
}

fn bounds_of(element: &Element) -> BoundingBox {
    let rect = element.get_bounding_client_rect();
    BoundingBox::new(rect.left(), rect.right(), rect.top(), rect.bottom())
}
