//! Font-family selector and its concrete family strings.
//!
//! The mapping between the wire enum and CSS font-family strings is
//! enumerated explicitly in both directions; unknown family strings hit the
//! sans-serif default branch rather than any runtime name transformation.

use serde::{Deserialize, Serialize};

/// Wire enum selecting one of the shipped font stacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

impl FontFamily {
    /// Concrete CSS font-family string for this selector.
    pub fn family(self) -> &'static str {
        match self {
            Self::SansSerif => "\"Source Sans Pro\", sans-serif",
            Self::Serif => "\"Source Serif Pro\", serif",
            Self::Monospace => "\"Source Code Pro\", monospace",
        }
    }

    /// Selector for a concrete family string; sans-serif for anything
    /// unrecognized.
    pub fn from_family(family: &str) -> Self {
        match family {
            "\"Source Serif Pro\", serif" => Self::Serif,
            "\"Source Code Pro\", monospace" => Self::Monospace,
            _ => Self::SansSerif,
        }
    }
}
