//! Widget family definitions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// The family a widget belongs to.
///
/// Every family shares the same hover animator; the kind only decides
/// whether the widget has discrete options to track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Slider-style selector with one active option.
    Selector,
    /// Horizontal option set with several active options.
    MultiSelect,
    /// Plain button.
    Button,
    /// Button whose border width follows its label.
    TextButton,
    /// Single-line text input.
    TextInput,
}

impl WidgetKind {
    /// Whether the widget hovers over individual options.
    pub fn is_multi_target(&self) -> bool {
        matches!(self, Self::Selector | Self::MultiSelect)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Selector => "selector",
            Self::MultiSelect => "multi-select",
            Self::Button => "button",
            Self::TextButton => "text-button",
            Self::TextInput => "text-input",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetKind {
    type Err = WidgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "selector" | "slider" => Ok(Self::Selector),
            "multi-select" | "multiselect" => Ok(Self::MultiSelect),
            "button" => Ok(Self::Button),
            "text-button" => Ok(Self::TextButton),
            "text-input" | "input" => Ok(Self::TextInput),
            other => Err(WidgetError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_target_families() {
        assert!(WidgetKind::Selector.is_multi_target());
        assert!(WidgetKind::MultiSelect.is_multi_target());
        assert!(!WidgetKind::Button.is_multi_target());
        assert!(!WidgetKind::TextInput.is_multi_target());
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("slider".parse::<WidgetKind>(), Ok(WidgetKind::Selector));
        assert_eq!(
            " multi-select ".parse::<WidgetKind>(),
            Ok(WidgetKind::MultiSelect)
        );
        assert_eq!(
            "calendar".parse::<WidgetKind>(),
            Err(WidgetError::UnknownKind("calendar".to_string()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for kind in [
            WidgetKind::Selector,
            WidgetKind::MultiSelect,
            WidgetKind::Button,
            WidgetKind::TextButton,
            WidgetKind::TextInput,
        ] {
            assert_eq!(kind.to_string().parse::<WidgetKind>(), Ok(kind));
        }
    }
}
