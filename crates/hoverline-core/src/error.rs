//! Construction-time errors.
//!
//! Only widget construction can fail. Steady-state operations recover
//! locally and never return these.

use thiserror::Error;

use crate::widget::WidgetKind;

/// Invalid hover configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Animation duration must be non-zero")]
    ZeroAnimationDuration,
    #[error("Poll interval must be non-zero")]
    ZeroPollInterval,
    #[error("Minimum border width must be finite and positive, got {0}")]
    InvalidBorderFloor(f64),
    #[error("Border width fraction must be finite and positive, got {0}")]
    InvalidBorderFraction(f64),
    #[error("Malformed configuration: {0}")]
    Parse(String),
}

/// Errors that reject a widget's initialization.
#[derive(Debug, Error, PartialEq)]
pub enum WidgetError {
    #[error("{kind} widget has no options to hover")]
    EmptyOptions { kind: WidgetKind },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Required element not found: {0}")]
    MissingElement(String),
    #[error("Unknown widget kind: {0}")]
    UnknownKind(String),
}

/// Result type for widget construction.
pub type WidgetResult<T> = Result<T, WidgetError>;
