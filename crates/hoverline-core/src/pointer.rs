//! Shared pointer position service.
//!
//! One `PointerSignal` is fed by a single global pointer-move listener and
//! read by every widget, so no widget attaches its own listener.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::clock::SharedClock;
use crate::geometry::{BoundingBox, Side};

/// Latest pointer coordinates and when they were recorded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
    pub last_update_millis: u64,
}

impl PointerPosition {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Handle to the shared pointer position.
///
/// Clones share the same underlying position. Reads always return a copy.
#[derive(Clone)]
pub struct PointerSignal {
    position: Rc<Cell<PointerPosition>>,
    clock: SharedClock,
}

impl PointerSignal {
    /// Create a signal stamped by `clock`. Starts at `{0, 0, 0}`.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            position: Rc::new(Cell::new(PointerPosition::default())),
            clock,
        }
    }

    /// Record a pointer move. Called once per global move event.
    pub fn record_move(&self, x: f64, y: f64) {
        self.position.set(PointerPosition {
            x,
            y,
            last_update_millis: self.clock.now_millis(),
        });
    }

    /// Latest position snapshot.
    pub fn current_position(&self) -> PointerPosition {
        self.position.get()
    }

    /// Whether the pointer lies within `bounds`, edges included.
    pub fn is_inside(&self, bounds: &BoundingBox) -> bool {
        bounds.contains(self.current_position().point())
    }

    /// Which half of `bounds` the pointer is on.
    pub fn relative_side(&self, bounds: &BoundingBox) -> Side {
        Side::of(self.current_position().x, bounds)
    }

    pub fn millis_since_last_move(&self) -> u64 {
        self.now_millis()
            .saturating_sub(self.current_position().last_update_millis)
    }

    /// Current time on the signal's clock.
    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Number of live handles sharing this position.
    pub fn reader_count(&self) -> usize {
        Rc::strong_count(&self.position)
    }
}

impl fmt::Debug for PointerSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSignal")
            .field("position", &self.current_position())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn signal() -> (Rc<ManualClock>, PointerSignal) {
        let clock = Rc::new(ManualClock::new());
        let signal = PointerSignal::new(clock.clone());
        (clock, signal)
    }

    #[test]
    fn test_initial_position_is_origin() {
        let (_, signal) = signal();
        assert_eq!(signal.current_position(), PointerPosition::default());
    }

    #[test]
    fn test_record_move_stamps_time() {
        let (clock, signal) = signal();
        clock.advance(40);
        signal.record_move(12.0, 7.0);
        let pos = signal.current_position();
        assert!((pos.x - 12.0).abs() < f64::EPSILON);
        assert!((pos.y - 7.0).abs() < f64::EPSILON);
        assert_eq!(pos.last_update_millis, 40);

        clock.advance(25);
        assert_eq!(signal.millis_since_last_move(), 25);
    }

    #[test]
    fn test_clones_share_position() {
        let (_, signal) = signal();
        let reader = signal.clone();
        assert_eq!(signal.reader_count(), 2);

        signal.record_move(3.0, 4.0);
        assert!((reader.current_position().x - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let (_, signal) = signal();
        signal.record_move(1.0, 1.0);
        let snapshot = signal.current_position();
        signal.record_move(9.0, 9.0);
        assert!((snapshot.x - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inside_and_side() {
        let (_, signal) = signal();
        let bounds = BoundingBox::new(0.0, 100.0, 0.0, 20.0);

        signal.record_move(100.0, 20.0);
        assert!(signal.is_inside(&bounds));
        assert_eq!(signal.relative_side(&bounds), Side::Right);

        signal.record_move(50.0, 10.0);
        assert_eq!(signal.relative_side(&bounds), Side::Left);

        signal.record_move(150.0, 10.0);
        assert!(!signal.is_inside(&bounds));
    }
}
