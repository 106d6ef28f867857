//! Hover state definitions.

use crate::adapter::HoverTarget;
use crate::geometry::Side;

/// Phase of the hover-border state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverPhase {
    /// Border parked off-screen, pointer not hovering.
    #[default]
    Idle,
    /// Slide-in in progress.
    EnteringAnimating,
    /// Border visible and centered, nothing animating.
    Settled,
    /// Slide-out in progress.
    ExitingAnimating,
}

impl HoverPhase {
    /// Check if a slide animation is in flight.
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::EnteringAnimating | Self::ExitingAnimating)
    }

    /// Check if the border is on screen (or sliding).
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Per-widget hover bookkeeping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HoverState {
    pub phase: HoverPhase,
    /// Last inside/outside classification.
    pub is_pointer_inside: bool,
    /// True exactly while an animation timer is outstanding.
    pub is_animating: bool,
    /// Side the border last entered from; also its exit side.
    pub entry_direction: Option<Side>,
    /// Time of the last accepted poll tick.
    pub last_poll_millis: Option<u64>,
    /// What the border is centered under during this episode.
    pub target: Option<HoverTarget>,
}
