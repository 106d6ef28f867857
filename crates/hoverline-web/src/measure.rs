//! Off-screen text measurement.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Font properties copied from the target onto the measuring span.
const FONT_PROPERTIES: [&str; 6] = [
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "letter-spacing",
    "text-transform",
];

/// Rendered width of `target`'s text in its computed font.
///
/// Returns `None` when the document is unavailable or the span cannot be
/// attached; callers fall back to the minimum border width.
pub fn text_width(target: &Element) -> Option<f64> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let body = document.body()?;
    let computed = window.get_computed_style(target).ok()??;

    let span: HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
    let style = span.style();
    for property in FONT_PROPERTIES {
        if let Ok(value) = computed.get_property_value(property) {
            let _ = style.set_property(property, &value);
        }
    }
    let _ = style.set_property("position", "absolute");
    let _ = style.set_property("visibility", "hidden");
    let _ = style.set_property("white-space", "nowrap");
    let _ = style.set_property("left", "-9999px");

    let text = target.text_content().unwrap_or_default();
    span.set_text_content(Some(text.trim()));

    if body.append_child(&span).is_err() {
        log::trace!("Measuring span could not be attached");
        return None;
    }
    let width = span.get_bounding_client_rect().width();
    span.remove();
    Some(width)
}
