//! Browser lifecycle for one mounted widget.
//!
//! Owns everything the widget registered with the browser: the poll
//! interval, the enter/leave/click listeners and any outstanding animation
//! timeouts. Disposal releases all of them.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use hoverline_core::{
    HoverBorderAnimator, SelectionMode, SelectionModel, SelectionValue, TimeoutRequest,
    ValueStore, WidgetAdapter, WidgetKind,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::{DomWidget, OPTION_ATTRIBUTE};

type SharedAnimator = Rc<RefCell<HoverBorderAnimator<DomWidget>>>;
type PendingTimeouts = Rc<RefCell<HashSet<i32>>>;

/// Attribute set on active options.
const ACTIVE_ATTRIBUTE: &str = "data-active";

/// A widget attached to the page.
pub struct MountedWidget {
    animator: SharedAnimator,
    selection: Option<Rc<RefCell<SelectionModel>>>,
    root: Element,
    interval: Option<i32>,
    pending: PendingTimeouts,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    poll_callback: Option<Closure<dyn FnMut()>>,
}

impl MountedWidget {
    /// Start the animator and register its interval and listeners.
    ///
    /// `store_key` enables selection persistence for multi-target widgets.
    pub fn mount(
        mut animator: HoverBorderAnimator<DomWidget>,
        store: Option<Rc<dyn ValueStore>>,
        store_key: Option<String>,
    ) -> Self {
        animator.start();
        let kind = animator.adapter().kind();
        let root = animator.adapter().root().clone();
        let poll_interval = animator.config().poll_interval_ms;

        let selection = kind.is_multi_target().then(|| {
            let mode = if kind == WidgetKind::MultiSelect {
                SelectionMode::Multi
            } else {
                SelectionMode::Single
            };
            let values = (0..animator.adapter().option_elements().len())
                .filter_map(|i| animator.adapter().option_value(i))
                .collect();
            Rc::new(RefCell::new(SelectionModel::new(mode, values)))
        });

        let animator = Rc::new(RefCell::new(animator));
        let pending: PendingTimeouts = Rc::new(RefCell::new(HashSet::new()));

        let mut widget = Self {
            animator,
            selection,
            root,
            interval: None,
            pending,
            listeners: Vec::new(),
            poll_callback: None,
        };

        if let (Some(selection), Some(store), Some(key)) =
            (&widget.selection, &store, &store_key)
        {
            match selection.borrow_mut().restore(store.as_ref(), key) {
                Ok(true) => log::debug!("Restored selection for {}", key),
                Ok(false) => {}
                Err(e) => log::warn!("Failed to restore selection for {}: {}", key, e),
            }
            let options = widget.animator.borrow().adapter().option_elements().to_vec();
            mark_active(&options, &selection.borrow());
        }

        widget.start_polling(poll_interval);
        widget.listen_hover();
        widget.listen_clicks(store, store_key);
        widget
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Current selection value, if the widget has options.
    pub fn value(&self) -> Option<SelectionValue> {
        self.selection.as_ref().map(|s| s.borrow().value())
    }

    /// Select the option at `index`, as a click would.
    pub fn select(&self, index: usize) -> bool {
        let Some(selection) = &self.selection else {
            return false;
        };
        let changed = selection.borrow_mut().select(index);
        if changed {
            let options = self.animator.borrow().adapter().option_elements().to_vec();
            mark_active(&options, &selection.borrow());
        }
        changed
    }

    /// Stop polling, remove listeners and cancel pending timeouts.
    pub fn dispose(&mut self) {
        self.animator.borrow_mut().dispose();
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(id) = self.interval.take() {
            window.clear_interval_with_handle(id);
        }
        for id in self.pending.borrow_mut().drain() {
            window.clear_timeout_with_handle(id);
        }
        for (event, listener) in self.listeners.drain(..) {
            let _ = self
                .root
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
        self.poll_callback = None;
    }

    fn start_polling(&mut self, interval_ms: u64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let animator = Rc::downgrade(&self.animator);
        let pending = self.pending.clone();
        let poll = Closure::<dyn FnMut()>::new(move || {
            let Some(strong) = animator.upgrade() else {
                return;
            };
            let request = strong.borrow_mut().poll();
            if let Some(request) = request {
                schedule_timeout(Rc::downgrade(&strong), pending.clone(), request);
            }
        });
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            poll.as_ref().unchecked_ref(),
            millis_to_i32(interval_ms),
        ) {
            Ok(id) => {
                self.interval = Some(id);
                self.poll_callback = Some(poll);
            }
            Err(e) => log::warn!("Failed to start hover polling: {:?}", e),
        }
    }

    fn listen_hover(&mut self) {
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let animator = Rc::downgrade(&self.animator);
            let pending = self.pending.clone();
            let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let Some(strong) = animator.upgrade() else {
                    return;
                };
                // mouseenter fires before the window sees the matching mousemove
                let position = event
                    .dyn_ref::<MouseEvent>()
                    .map(|mouse| (f64::from(mouse.client_x()), f64::from(mouse.client_y())));
                let mut hover = strong.borrow_mut();
                let request = match (entering, position) {
                    (true, Some((x, y))) => hover.pointer_entered_at(x, y),
                    (true, None) => hover.pointer_entered(),
                    (false, Some((x, y))) => hover.pointer_left_at(x, y),
                    (false, None) => hover.pointer_left(),
                };
                drop(hover);
                if let Some(request) = request {
                    schedule_timeout(Rc::downgrade(&strong), pending.clone(), request);
                }
            });
            self.add_listener(event, listener);
        }
    }

    fn listen_clicks(&mut self, store: Option<Rc<dyn ValueStore>>, store_key: Option<String>) {
        let Some(selection) = self.selection.clone() else {
            return;
        };
        let options = self.animator.borrow().adapter().option_elements().to_vec();
        let selector = format!("[{}]", OPTION_ATTRIBUTE);
        let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(hit) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(&selector).ok().flatten())
            else {
                return;
            };
            let Some(index) = options.iter().position(|option| *option == hit) else {
                return;
            };
            if !selection.borrow_mut().select(index) {
                return;
            }
            mark_active(&options, &selection.borrow());
            if let (Some(store), Some(key)) = (&store, &store_key) {
                if let Err(e) = selection.borrow().persist(store.as_ref(), key) {
                    log::warn!("Failed to persist selection for {}: {}", key, e);
                }
            }
        });
        self.add_listener("click", listener);
    }

    fn add_listener(&mut self, event: &'static str, listener: Closure<dyn FnMut(Event)>) {
        match self
            .root
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        {
            Ok(()) => self.listeners.push((event, listener)),
            Err(e) => log::warn!("Failed to listen for {}: {:?}", event, e),
        }
    }
}

impl Drop for MountedWidget {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Schedule a fire-and-forget animation timeout.
///
/// The callback holds only a weak reference, and disposal clears every
/// handle still in `pending`.
fn schedule_timeout(
    animator: Weak<RefCell<HoverBorderAnimator<DomWidget>>>,
    pending: PendingTimeouts,
    request: TimeoutRequest,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let handle = Rc::new(Cell::new(0));
    let callback = {
        let handle = handle.clone();
        let pending = pending.clone();
        Closure::once_into_js(move || {
            pending.borrow_mut().remove(&handle.get());
            let Some(strong) = animator.upgrade() else {
                return;
            };
            let next = strong.borrow_mut().animation_elapsed(request.generation);
            if let Some(next) = next {
                schedule_timeout(Rc::downgrade(&strong), pending, next);
            }
        })
    };
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        millis_to_i32(request.delay_ms),
    ) {
        Ok(id) => {
            handle.set(id);
            pending.borrow_mut().insert(id);
        }
        Err(e) => log::warn!("Failed to schedule animation timeout: {:?}", e),
    }
}

fn mark_active(options: &[Element], selection: &SelectionModel) {
    for (i, option) in options.iter().enumerate() {
        let result = if selection.is_active(i) {
            option.set_attribute(ACTIVE_ATTRIBUTE, "true")
        } else {
            option.remove_attribute(ACTIVE_ATTRIBUTE)
        };
        if let Err(e) = result {
            log::trace!("Failed to mark option {}: {:?}", i, e);
        }
    }
}

fn millis_to_i32(millis: u64) -> i32 {
    i32::try_from(millis).unwrap_or(i32::MAX)
}
