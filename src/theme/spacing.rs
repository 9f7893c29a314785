//! Spacing scale and margin/padding shorthand resolution.

use serde::Serialize;
use tracing::error;

use crate::theme::ThemeTokens;

/// Named spacing tokens, as CSS length strings.
///
/// Serialized field names are the host wire names (`threeXS`, `twoXL`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Spacing {
    pub none: String,
    #[serde(rename = "threeXS")]
    pub three_xs: String,
    #[serde(rename = "twoXS")]
    pub two_xs: String,
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "twoXL")]
    pub two_xl: String,
    #[serde(rename = "threeXL")]
    pub three_xl: String,
}

impl Spacing {
    /// The shipped spacing scale.
    pub fn default_scale() -> Self {
        Self {
            none: "0".to_string(),
            three_xs: "2px".to_string(),
            two_xs: "4px".to_string(),
            xs: "6px".to_string(),
            sm: "8px".to_string(),
            md: "12px".to_string(),
            lg: "16px".to_string(),
            xl: "24px".to_string(),
            two_xl: "32px".to_string(),
            three_xl: "48px".to_string(),
        }
    }

    /// Look up a token by its wire name.
    pub fn token(&self, name: &str) -> Option<&str> {
        let value = match name {
            "none" => &self.none,
            "threeXS" => &self.three_xs,
            "twoXS" => &self.two_xs,
            "xs" => &self.xs,
            "sm" => &self.sm,
            "md" => &self.md,
            "lg" => &self.lg,
            "xl" => &self.xl,
            "twoXL" => &self.two_xl,
            "threeXL" => &self.three_xl,
            _ => return None,
        };
        Some(value)
    }
}

/// Resolve a whitespace-separated spacing shorthand (`"sm md"`) against the
/// theme's scale.
///
/// `"0"` maps to the none token. An unknown token logs an error and degrades
/// to the none token; this is the one diagnostic the theme subsystem emits.
pub fn compute_spacing_style(value: &str, tokens: &ThemeTokens) -> String {
    if value.is_empty() {
        return String::new();
    }

    value
        .split_whitespace()
        .map(|part| {
            if part == "0" {
                return tokens.spacing.none.as_str();
            }
            match tokens.spacing.token(part) {
                Some(resolved) => resolved,
                None => {
                    error!("invalid spacing value: {part}");
                    tokens.spacing.none.as_str()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
