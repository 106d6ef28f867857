//! Scripted headless hover episode.
//!
//! Sweeps a pointer across a three-option selector on a manual clock and
//! records what the border does at each step.

use std::rc::Rc;

use hoverline_core::{
    BoundingBox, HeadlessRunner, HeadlessWidget, HoverBorderAnimator, HoverConfig, HoverPhase,
    ManualClock, MemoryStore, PointerSignal, SelectionMode, SelectionModel, StyleProperty,
    WidgetAdapter, WidgetKind, WidgetResult,
};

const OPTIONS: [&str; 3] = ["small", "medium", "large"];

/// Pointer path: (milliseconds to advance, x, y).
const PATH: [(u64, f64, f64); 7] = [
    (100, -20.0, 20.0),
    (100, 30.0, 20.0),
    (900, 30.0, 20.0),
    (200, 150.0, 20.0),
    (200, 250.0, 20.0),
    (200, 340.0, 20.0),
    (900, 340.0, 20.0),
];

/// Snapshot of the widget after one step of the path.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoFrame {
    pub at_ms: u64,
    pub pointer: (f64, f64),
    pub phase: HoverPhase,
    pub transform: Option<String>,
    pub hovered: Option<String>,
}

/// Run the scripted episode with `config`.
pub fn run_scripted_episode(config: HoverConfig) -> WidgetResult<Vec<DemoFrame>> {
    let clock = Rc::new(ManualClock::new());
    let pointer = PointerSignal::new(clock.clone());
    let widget = HeadlessWidget::with_options(
        WidgetKind::Selector,
        BoundingBox::new(0.0, 300.0, 0.0, 40.0),
        &OPTIONS,
        Some(48.0),
    );
    let animator = HoverBorderAnimator::new(widget, pointer.clone(), config)?;
    let mut runner = HeadlessRunner::new(animator, clock);

    let mut frames = Vec::with_capacity(PATH.len());
    for (millis, x, y) in PATH {
        pointer.record_move(x, y);
        runner.advance(millis);

        let animator = runner.animator();
        let frame = DemoFrame {
            at_ms: runner.now(),
            pointer: (x, y),
            phase: animator.phase(),
            transform: animator.adapter().top().style(StyleProperty::Transform),
            hovered: animator.hovered_value(),
        };
        log::info!(
            "{:>5}ms pointer=({}, {}) phase={:?} transform={} hovered={}",
            frame.at_ms,
            x,
            y,
            frame.phase,
            frame.transform.as_deref().unwrap_or("-"),
            frame.hovered.as_deref().unwrap_or("-"),
        );
        frames.push(frame);
    }

    // Clicking is independent of the hover border
    let store = MemoryStore::new();
    let values = (0..OPTIONS.len())
        .filter_map(|i| runner.animator().adapter().option_value(i))
        .collect();
    let mut selection = SelectionModel::new(SelectionMode::Single, values);
    selection.select(1);
    if let Err(e) = selection.persist(&store, "demo:size") {
        log::warn!("Failed to persist selection: {}", e);
    }
    log::info!("Selected value: {:?}", selection.value());

    runner.dispose();
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_phases() {
        let frames = run_scripted_episode(HoverConfig::default()).unwrap();
        let phases: Vec<HoverPhase> = frames.iter().map(|f| f.phase).collect();
        assert_eq!(
            phases,
            vec![
                HoverPhase::Idle,
                HoverPhase::EnteringAnimating,
                HoverPhase::Settled,
                HoverPhase::Settled,
                HoverPhase::Settled,
                HoverPhase::ExitingAnimating,
                HoverPhase::Idle,
            ]
        );
    }

    #[test]
    fn test_episode_tracks_options() {
        let frames = run_scripted_episode(HoverConfig::default()).unwrap();
        let hovered: Vec<Option<&str>> = frames.iter().map(|f| f.hovered.as_deref()).collect();
        assert_eq!(hovered[2], Some("small"));
        assert_eq!(hovered[3], Some("medium"));
        assert_eq!(hovered[4], Some("large"));
        assert_eq!(hovered[6], None);
        // Entered from the left, so it leaves to the left
        assert_eq!(frames[5].transform.as_deref(), Some("translateX(-100%)"));
    }

    #[test]
    fn test_invalid_config_fails() {
        let config = HoverConfig {
            poll_interval_ms: 0,
            ..Default::default()
        };
        assert!(run_scripted_episode(config).is_err());
    }
}
