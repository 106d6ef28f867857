//! Headless widgets and a deterministic host loop.
//!
//! Used by the native demo and by tests: layout is fixed, border elements
//! record the styles written to them, and time only moves when told to.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::adapter::{BorderElement, BorderHandles, HoverTarget, StyleProperty, WidgetAdapter};
use crate::animator::{HoverBorderAnimator, HoverPhase, TimeoutRequest};
use crate::clock::{Clock, ManualClock};
use crate::geometry::BoundingBox;
use crate::timers::TimerQueue;
use crate::widget::WidgetKind;

/// Border element that remembers the latest value of each style property.
#[derive(Debug, Default)]
pub struct RecordingElement {
    styles: RefCell<HashMap<StyleProperty, String>>,
    writes: Cell<usize>,
    commits: Cell<usize>,
}

impl RecordingElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written for `property`.
    pub fn style(&self, property: StyleProperty) -> Option<String> {
        self.styles.borrow().get(&property).cloned()
    }

    /// Total number of style writes.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn commit_count(&self) -> usize {
        self.commits.get()
    }
}

impl BorderElement for RecordingElement {
    fn set_style(&self, property: StyleProperty, value: &str) {
        self.styles.borrow_mut().insert(property, value.to_string());
        self.writes.set(self.writes.get() + 1);
    }

    fn commit(&self) {
        self.commits.set(self.commits.get() + 1);
    }
}

/// One option of a headless multi-target widget.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessOption {
    pub value: String,
    pub bounds: BoundingBox,
    pub text_width: Option<f64>,
}

/// A widget with fixed geometry and recording border elements.
#[derive(Debug)]
pub struct HeadlessWidget {
    kind: WidgetKind,
    bounds: BoundingBox,
    label_width: Option<f64>,
    options: Vec<HeadlessOption>,
    top: RecordingElement,
    bottom: RecordingElement,
    rendered: bool,
}

impl HeadlessWidget {
    /// A single-target widget.
    pub fn new(kind: WidgetKind, bounds: BoundingBox, label_width: Option<f64>) -> Self {
        Self {
            kind,
            bounds,
            label_width,
            options: Vec::new(),
            top: RecordingElement::new(),
            bottom: RecordingElement::new(),
            rendered: true,
        }
    }

    /// A multi-target widget whose options split `bounds` evenly.
    pub fn with_options(
        kind: WidgetKind,
        bounds: BoundingBox,
        values: &[&str],
        text_width: Option<f64>,
    ) -> Self {
        let mut widget = Self::new(kind, bounds, None);
        if values.is_empty() {
            return widget;
        }
        let slot = bounds.width() / values.len() as f64;
        widget.options = values
            .iter()
            .enumerate()
            .map(|(i, value)| HeadlessOption {
                value: value.to_string(),
                bounds: BoundingBox::from_origin_size(
                    bounds.left + slot * i as f64,
                    bounds.top,
                    slot,
                    bounds.height(),
                ),
                text_width,
            })
            .collect();
        widget
    }

    /// A multi-target widget with explicit option layout, gaps allowed.
    pub fn with_option_bounds(
        kind: WidgetKind,
        bounds: BoundingBox,
        options: Vec<HeadlessOption>,
    ) -> Self {
        let mut widget = Self::new(kind, bounds, None);
        widget.options = options;
        widget
    }

    pub fn top(&self) -> &RecordingElement {
        &self.top
    }

    pub fn bottom(&self) -> &RecordingElement {
        &self.bottom
    }

    pub fn options(&self) -> &[HeadlessOption] {
        &self.options
    }

    /// Move the widget, as a layout shift would.
    pub fn set_bounds(&mut self, bounds: BoundingBox) {
        let dx = bounds.left - self.bounds.left;
        let dy = bounds.top - self.bounds.top;
        for option in &mut self.options {
            option.bounds = BoundingBox::new(
                option.bounds.left + dx,
                option.bounds.right + dx,
                option.bounds.top + dy,
                option.bounds.bottom + dy,
            );
        }
        self.bounds = bounds;
    }

    /// Detach from the (virtual) document: geometry and handles disappear.
    pub fn unmount(&mut self) {
        self.rendered = false;
    }

    pub fn remount(&mut self) {
        self.rendered = true;
    }
}

impl WidgetAdapter for HeadlessWidget {
    fn kind(&self) -> WidgetKind {
        self.kind
    }

    fn outer_bounds(&self) -> Option<BoundingBox> {
        self.rendered.then_some(self.bounds)
    }

    fn border_handles(&self) -> Option<BorderHandles<'_>> {
        self.rendered.then_some(BorderHandles {
            top: &self.top,
            bottom: &self.bottom,
        })
    }

    fn option_bounds(&self) -> Vec<BoundingBox> {
        if !self.rendered {
            return Vec::new();
        }
        self.options.iter().map(|option| option.bounds).collect()
    }

    fn option_count(&self) -> Option<usize> {
        self.kind.is_multi_target().then_some(self.options.len())
    }

    fn option_value(&self, index: usize) -> Option<String> {
        self.options.get(index).map(|option| option.value.clone())
    }

    fn text_pixel_width(&self, target: HoverTarget) -> Option<f64> {
        if !self.rendered {
            return None;
        }
        match target {
            HoverTarget::Whole => self.label_width,
            HoverTarget::Option(index) => self.options.get(index).and_then(|o| o.text_width),
        }
    }
}

/// Drives one animator the way a browser event loop would: fixed-interval
/// polls plus fire-and-forget animation timeouts, on a manual clock.
pub struct HeadlessRunner<A: WidgetAdapter> {
    animator: HoverBorderAnimator<A>,
    clock: Rc<ManualClock>,
    timers: TimerQueue,
    next_poll: u64,
}

impl<A: WidgetAdapter> HeadlessRunner<A> {
    /// Start the animator and schedule its first poll one interval from now.
    pub fn new(mut animator: HoverBorderAnimator<A>, clock: Rc<ManualClock>) -> Self {
        animator.start();
        let next_poll = clock.now_millis() + animator.config().poll_interval_ms;
        Self {
            animator,
            clock,
            timers: TimerQueue::new(),
            next_poll,
        }
    }

    pub fn animator(&self) -> &HoverBorderAnimator<A> {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut HoverBorderAnimator<A> {
        &mut self.animator
    }

    pub fn phase(&self) -> HoverPhase {
        self.animator.phase()
    }

    pub fn now(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Deliver a native pointer-enter event.
    pub fn pointer_entered(&mut self) {
        let request = self.animator.pointer_entered();
        self.schedule(request);
    }

    /// Deliver a native pointer-leave event.
    pub fn pointer_left(&mut self) {
        let request = self.animator.pointer_left();
        self.schedule(request);
    }

    /// Advance time, running every poll and timer that falls due, in order.
    ///
    /// A timer and a poll due at the same instant run timer first.
    pub fn advance(&mut self, millis: u64) {
        let target = self.clock.now_millis().saturating_add(millis);
        loop {
            let next_timer = self.timers.next_due().unwrap_or(u64::MAX);
            let next = next_timer.min(self.next_poll);
            if next > target {
                break;
            }
            self.clock.set(next);

            for generation in self.timers.pop_due(next) {
                let request = self.animator.animation_elapsed(generation);
                self.schedule(request);
            }
            if self.next_poll <= next {
                let request = self.animator.poll();
                self.schedule(request);
                self.next_poll += self.animator.config().poll_interval_ms;
            }
        }
        self.clock.set(target);
    }

    /// Dispose the animator and drop every pending timeout.
    pub fn dispose(&mut self) {
        self.animator.dispose();
        self.timers.clear();
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn schedule(&mut self, request: Option<TimeoutRequest>) {
        if let Some(request) = request {
            self.timers.schedule(self.clock.now_millis(), request);
        }
    }
}
