//! Hover-border animation engine.
//!
//! One `HoverBorderAnimator` drives the highlight border of one widget:
//! - slides it in from the side the pointer approached from
//! - keeps it centered under the hovered option of multi-target widgets
//! - slides it back out toward the side it entered from
//!
//! Animations are never interrupted. Any transition attempted while one is
//! in flight is dropped, and the pointer is re-sampled once it completes.
//!
//! The animator does not own timers. Every transition that starts a slide
//! returns a [`TimeoutRequest`]; the host schedules it and calls
//! [`HoverBorderAnimator::animation_elapsed`] when it fires.

mod state;

pub use state::{HoverPhase, HoverState};

use crate::adapter::{BorderHandles, HoverTarget, StyleProperty, WidgetAdapter};
use crate::config::HoverConfig;
use crate::error::{WidgetError, WidgetResult};
use crate::geometry::{
    BorderTransform, BoundingBox, Side, border_width, center_offset, find_hovered_option,
    nearest_option,
};
use crate::pointer::PointerSignal;

/// A timeout the host must schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutRequest {
    pub delay_ms: u64,
    /// Passed back to `animation_elapsed`; stale generations are ignored.
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Running,
    Disposed,
}

/// Per-widget hover-border state machine.
pub struct HoverBorderAnimator<A: WidgetAdapter> {
    adapter: A,
    pointer: PointerSignal,
    config: HoverConfig,
    state: HoverState,
    lifecycle: Lifecycle,
    generation: u64,
}

impl<A: WidgetAdapter> HoverBorderAnimator<A> {
    /// Create an animator and park the border off-screen on the left,
    /// without a transition.
    ///
    /// Fails if the configuration is invalid or a multi-target widget has
    /// no options.
    pub fn new(adapter: A, pointer: PointerSignal, config: HoverConfig) -> WidgetResult<Self> {
        config.validate()?;

        let kind = adapter.kind();
        if kind.is_multi_target() && adapter.option_count().unwrap_or(0) == 0 {
            return Err(WidgetError::EmptyOptions { kind });
        }

        let animator = Self {
            adapter,
            pointer,
            config,
            state: HoverState::default(),
            lifecycle: Lifecycle::Created,
            generation: 0,
        };
        animator.park_instantly(Side::Left);
        Ok(animator)
    }

    /// Enable the border transition and begin reacting to the pointer.
    pub fn start(&mut self) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }
        self.lifecycle = Lifecycle::Running;
        if let Some(handles) = self.adapter.border_handles() {
            handles.set_style(StyleProperty::Transition, &self.config.transition_css());
        }
        log::debug!("{} hover animator started", self.adapter.kind());
    }

    /// Stop reacting. Pending timeouts become stale.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.lifecycle = Lifecycle::Disposed;
        self.generation += 1;
        self.state.is_animating = false;
        log::debug!("{} hover animator disposed", self.adapter.kind());
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn is_disposed(&self) -> bool {
        self.lifecycle == Lifecycle::Disposed
    }

    pub fn phase(&self) -> HoverPhase {
        self.state.phase
    }

    pub fn state(&self) -> &HoverState {
        &self.state
    }

    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn pointer(&self) -> &PointerSignal {
        &self.pointer
    }

    /// Value of the option the border is currently under, if any.
    pub fn hovered_value(&self) -> Option<String> {
        match self.state.target {
            Some(HoverTarget::Option(index)) if self.state.phase.is_visible() => {
                self.adapter.option_value(index)
            }
            _ => None,
        }
    }

    /// Fixed-interval poll tick: re-sample the pointer against the widget.
    pub fn poll(&mut self) -> Option<TimeoutRequest> {
        if !self.is_running() {
            return None;
        }
        let now = self.pointer.now_millis();
        if let Some(last) = self.state.last_poll_millis {
            if now.saturating_sub(last) < self.config.poll_spacing_ms() {
                return None;
            }
        }
        self.state.last_poll_millis = Some(now);
        self.evaluate()
    }

    /// Native pointer-enter event.
    pub fn pointer_entered(&mut self) -> Option<TimeoutRequest> {
        if !self.is_running() {
            return None;
        }
        let outer = self.outer_bounds()?;
        self.on_inside(outer)
    }

    /// Pointer-enter event carrying its own coordinates.
    ///
    /// Records the position first, so direction and target do not depend on
    /// a move sample that may predate the enter.
    pub fn pointer_entered_at(&mut self, x: f64, y: f64) -> Option<TimeoutRequest> {
        if !self.is_running() {
            return None;
        }
        self.pointer.record_move(x, y);
        self.pointer_entered()
    }

    /// Pointer-leave event carrying its own coordinates.
    pub fn pointer_left_at(&mut self, x: f64, y: f64) -> Option<TimeoutRequest> {
        if !self.is_running() {
            return None;
        }
        self.pointer.record_move(x, y);
        self.pointer_left()
    }

    /// Native pointer-leave event.
    pub fn pointer_left(&mut self) -> Option<TimeoutRequest> {
        if !self.is_running() {
            return None;
        }
        let outer = self.outer_bounds()?;
        self.on_outside(outer)
    }

    /// The animation timer for `generation` fired.
    pub fn animation_elapsed(&mut self, generation: u64) -> Option<TimeoutRequest> {
        if !self.is_running() || generation != self.generation || !self.state.is_animating {
            log::trace!("Ignoring stale animation timer {}", generation);
            return None;
        }
        self.state.is_animating = false;

        match self.state.phase {
            HoverPhase::EnteringAnimating => {
                self.state.phase = HoverPhase::Settled;
                log::debug!("{} hover settled", self.adapter.kind());
                // The pointer may have moved while sliding in
                self.evaluate()
            }
            HoverPhase::ExitingAnimating => {
                self.state.phase = HoverPhase::Idle;
                self.state.target = None;
                log::debug!("{} hover idle", self.adapter.kind());
                None
            }
            HoverPhase::Idle | HoverPhase::Settled => None,
        }
    }

    fn evaluate(&mut self) -> Option<TimeoutRequest> {
        let outer = self.outer_bounds()?;
        if self.pointer.is_inside(&outer) {
            self.on_inside(outer)
        } else {
            self.on_outside(outer)
        }
    }

    fn on_inside(&mut self, outer: BoundingBox) -> Option<TimeoutRequest> {
        self.state.is_pointer_inside = true;
        if self.state.is_animating {
            log::trace!("{} enter dropped while animating", self.adapter.kind());
            return None;
        }
        match self.state.phase {
            HoverPhase::Idle => self.begin_enter(outer),
            HoverPhase::Settled => {
                self.track_option(outer);
                None
            }
            HoverPhase::EnteringAnimating | HoverPhase::ExitingAnimating => None,
        }
    }

    fn on_outside(&mut self, outer: BoundingBox) -> Option<TimeoutRequest> {
        self.state.is_pointer_inside = false;
        if self.state.is_animating {
            log::trace!("{} exit dropped while animating", self.adapter.kind());
            return None;
        }
        match self.state.phase {
            HoverPhase::Settled => self.begin_exit(outer),
            _ => None,
        }
    }

    fn begin_enter(&mut self, outer: BoundingBox) -> Option<TimeoutRequest> {
        let handles = self.handles()?;
        let direction = self.pointer.relative_side(&outer);
        let target = self.entry_target();
        let (width, offset) = self.placement(&outer, target);

        // Jump to the entry side with no transition, then slide to center
        handles.set_style(StyleProperty::Transition, "none");
        handles.set_style(StyleProperty::Width, &px(width));
        handles.set_style(
            StyleProperty::Transform,
            &BorderTransform::OffScreen {
                side: direction,
                container_width: outer.width(),
            }
            .to_css(),
        );
        handles.commit();
        handles.set_style(StyleProperty::Transition, &self.config.transition_css());
        handles.set_style(
            StyleProperty::Transform,
            &BorderTransform::Offset(offset).to_css(),
        );

        self.state.entry_direction = Some(direction);
        self.state.target = Some(target);
        log::debug!(
            "{} hover entering from {:?} toward {:?}",
            self.adapter.kind(),
            direction,
            target
        );
        Some(self.begin_animation(HoverPhase::EnteringAnimating))
    }

    fn begin_exit(&mut self, outer: BoundingBox) -> Option<TimeoutRequest> {
        let handles = self.handles()?;
        let direction = self.state.entry_direction.unwrap_or_default();
        handles.set_style(
            StyleProperty::Transform,
            &BorderTransform::OffScreen {
                side: direction,
                container_width: outer.width(),
            }
            .to_css(),
        );
        log::debug!(
            "{} hover exiting toward {:?}",
            self.adapter.kind(),
            direction
        );
        Some(self.begin_animation(HoverPhase::ExitingAnimating))
    }

    /// Follow the pointer across options without an enter/exit cycle.
    fn track_option(&mut self, outer: BoundingBox) {
        if !self.adapter.kind().is_multi_target() {
            return;
        }
        let x = self.pointer.current_position().x;
        let Some(index) = find_hovered_option(&self.adapter.option_bounds(), x) else {
            // In a gap between options: stay where we are
            return;
        };
        let target = HoverTarget::Option(index);
        if self.state.target == Some(target) {
            return;
        }
        let Some(handles) = self.handles() else {
            return;
        };
        let (width, offset) = self.placement(&outer, target);
        handles.set_style(StyleProperty::Width, &px(width));
        handles.set_style(
            StyleProperty::Transform,
            &BorderTransform::Offset(offset).to_css(),
        );
        self.state.target = Some(target);
        log::trace!("{} border moved to option {}", self.adapter.kind(), index);
    }

    fn begin_animation(&mut self, phase: HoverPhase) -> TimeoutRequest {
        self.state.phase = phase;
        self.state.is_animating = true;
        self.generation += 1;
        TimeoutRequest {
            delay_ms: self.config.animation_duration_ms,
            generation: self.generation,
        }
    }

    fn entry_target(&self) -> HoverTarget {
        if !self.adapter.kind().is_multi_target() {
            return HoverTarget::Whole;
        }
        let options = self.adapter.option_bounds();
        let x = self.pointer.current_position().x;
        find_hovered_option(&options, x)
            .or_else(|| nearest_option(&options, x))
            .map_or(HoverTarget::Whole, HoverTarget::Option)
    }

    /// Border width and its offset from the widget's left edge.
    fn placement(&self, outer: &BoundingBox, target: HoverTarget) -> (f64, f64) {
        let width = border_width(
            self.adapter.text_pixel_width(target),
            self.config.border_width_fraction,
            self.config.min_border_width_px,
        );
        let bounds = self.adapter.target_bounds(target).unwrap_or(*outer);
        let offset = bounds.left - outer.left + center_offset(bounds.width(), width);
        (width, offset)
    }

    fn park_instantly(&self, side: Side) {
        let Some(handles) = self.handles() else {
            return;
        };
        let container_width = self.adapter.outer_bounds().map_or(0.0, |b| b.width());
        handles.set_style(StyleProperty::Transition, "none");
        handles.set_style(
            StyleProperty::Transform,
            &BorderTransform::OffScreen {
                side,
                container_width,
            }
            .to_css(),
        );
    }

    fn outer_bounds(&self) -> Option<BoundingBox> {
        let bounds = self.adapter.outer_bounds();
        if bounds.is_none() {
            log::trace!("{} widget not rendered, skipping", self.adapter.kind());
        }
        bounds
    }

    fn handles(&self) -> Option<BorderHandles<'_>> {
        let handles = self.adapter.border_handles();
        if handles.is_none() {
            log::trace!("{} border handles missing, skipping", self.adapter.kind());
        }
        handles
    }
}

fn px(value: f64) -> String {
    format!("{}px", value)
}
