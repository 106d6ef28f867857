//! Hover animation configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default slide duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 800;
/// Default poll interval in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;
/// Default minimum border width in pixels.
pub const DEFAULT_MIN_BORDER_WIDTH_PX: f64 = 20.0;
/// Default border width as a fraction of the label's text width.
pub const DEFAULT_BORDER_WIDTH_FRACTION: f64 = 0.9;

/// Per-widget hover configuration.
///
/// `animation_duration_ms` drives both the CSS transition and the timer that
/// advances the state machine, so the two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HoverConfig {
    pub animation_duration_ms: u64,
    pub poll_interval_ms: u64,
    pub min_border_width_px: f64,
    pub border_width_fraction: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            min_border_width_px: DEFAULT_MIN_BORDER_WIDTH_PX,
            border_width_fraction: DEFAULT_BORDER_WIDTH_FRACTION,
        }
    }
}

impl HoverConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_duration_ms == 0 {
            return Err(ConfigError::ZeroAnimationDuration);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if !self.min_border_width_px.is_finite() || self.min_border_width_px <= 0.0 {
            return Err(ConfigError::InvalidBorderFloor(self.min_border_width_px));
        }
        if !self.border_width_fraction.is_finite() || self.border_width_fraction <= 0.0 {
            return Err(ConfigError::InvalidBorderFraction(
                self.border_width_fraction,
            ));
        }
        Ok(())
    }

    /// CSS `transition` value for the border elements.
    pub fn transition_css(&self) -> String {
        let ms = self.animation_duration_ms;
        format!("transform {ms}ms ease, width {ms}ms ease")
    }

    /// Minimum spacing between two accepted poll ticks.
    ///
    /// Half an interval, so timer jitter never skips a legitimate tick.
    pub fn poll_spacing_ms(&self) -> u64 {
        self.poll_interval_ms / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HoverConfig::default();
        assert_eq!(config.animation_duration_ms, 800);
        assert_eq!(config.poll_interval_ms, 100);
        assert!((config.min_border_width_px - 20.0).abs() < f64::EPSILON);
        assert!((config.border_width_fraction - 0.9).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = HoverConfig::from_json(r#"{"animationDurationMs": 300}"#).unwrap();
        assert_eq!(config.animation_duration_ms, 300);
        assert_eq!(config.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
    }

    #[test]
    fn test_transition_follows_duration() {
        let config = HoverConfig {
            animation_duration_ms: 250,
            ..Default::default()
        };
        assert_eq!(
            config.transition_css(),
            "transform 250ms ease, width 250ms ease"
        );
    }

    #[test]
    fn test_rejects_invalid_values() {
        let zero = HoverConfig {
            animation_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ZeroAnimationDuration));

        let no_poll = HoverConfig {
            poll_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(no_poll.validate(), Err(ConfigError::ZeroPollInterval));

        let bad_floor = HoverConfig {
            min_border_width_px: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_floor.validate(),
            Err(ConfigError::InvalidBorderFloor(_))
        ));

        let bad_fraction = HoverConfig {
            border_width_fraction: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            bad_fraction.validate(),
            Err(ConfigError::InvalidBorderFraction(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            HoverConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
