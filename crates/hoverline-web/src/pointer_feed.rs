//! The single global pointer-move listener.

use hoverline_core::PointerSignal;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{MouseEvent, Window};

/// Feeds window `mousemove` events into a `PointerSignal`.
///
/// The listener is removed when the feed is dropped.
pub struct PointerFeed {
    window: Window,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl PointerFeed {
    /// Attach one listener to the window.
    pub fn attach(signal: PointerSignal) -> Option<Self> {
        let window = web_sys::window()?;
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            signal.record_move(f64::from(event.client_x()), f64::from(event.client_y()));
        });
        if let Err(e) = window
            .add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
        {
            log::warn!("Failed to attach pointer listener: {:?}", e);
            return None;
        }
        Some(Self { window, listener })
    }
}

impl Drop for PointerFeed {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "mousemove",
            self.listener.as_ref().unchecked_ref(),
        );
    }
}
