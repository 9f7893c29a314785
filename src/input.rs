//! Partial theme configuration supplied by the embedding application.
//!
//! Every field is optional; absent fields fall back to the chosen base
//! preset during resolution. Field names follow the external camelCase wire
//! schema so the same struct deserializes config files and cached records.

use serde::{Deserialize, Serialize};

use crate::fonts::FontFamily;

/// Base preset a custom theme is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetBase {
    #[default]
    Light,
    Dark,
}

/// Sparse, externally supplied theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontFamily>,
    /// Explicit body font-family string; wins over `font` when both are set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radii: Option<RadiiInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_sizes: Option<FontSizesInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<PresetBase>,
}

/// Optional corner-radius overrides, in pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RadiiInput {
    /// Overrides the small radius token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkbox_radius: Option<f64>,
    /// Overrides the medium radius token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_widget_radius: Option<f64>,
}

/// Optional font-size overrides, in pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSizesInput {
    /// Overrides the two-small size token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiny_font_size: Option<f64>,
    /// Overrides the small size token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_font_size: Option<f64>,
    /// Overrides the medium size token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_font_size: Option<f64>,
}

impl ThemeInput {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
