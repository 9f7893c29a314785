//! Reading the settable subset back out of a resolved token set.
//!
//! `to_theme_input` inverts the merge over the settable fields; the exported
//! form additionally carries the luminance classification and the derived
//! slots for embedding hosts.

use serde::Serialize;

use crate::color;
use crate::fonts::FontFamily;
use crate::input::ThemeInput;
use crate::theme::ThemeTokens;

/// The settable subset of a resolved token set, as a sparse input.
pub fn to_theme_input(tokens: &ThemeTokens) -> ThemeInput {
    ThemeInput {
        primary_color: Some(tokens.colors.primary.clone()),
        background_color: Some(tokens.colors.bg_color.clone()),
        secondary_background_color: Some(tokens.colors.secondary_bg.clone()),
        text_color: Some(tokens.colors.body_text.clone()),
        font: Some(FontFamily::from_family(&tokens.fonts.body)),
        ..ThemeInput::default()
    }
}

/// Theme snapshot handed to embedding hosts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedTheme {
    /// `"light"` or `"dark"`, from the background luminance classification.
    pub base: String,
    pub primary_color: String,
    pub background_color: String,
    pub secondary_background_color: String,
    pub text_color: String,
    /// Resolved body font-family string.
    pub font: String,
    pub link_text: String,
    pub success_bg: String,
    pub success_text: String,
    pub warning_bg: String,
    pub warning_text: String,
    pub danger_bg: String,
    pub danger_text: String,
    pub info_bg: String,
    pub info_text: String,
}

/// Snapshot a resolved token set for an embedding host.
pub fn to_exported_theme(tokens: &ThemeTokens) -> ExportedTheme {
    let colors = &tokens.colors;
    ExportedTheme {
        base: base_string_for(&colors.bg_color).to_string(),
        primary_color: colors.primary.clone(),
        background_color: colors.bg_color.clone(),
        secondary_background_color: colors.secondary_bg.clone(),
        text_color: colors.body_text.clone(),
        font: tokens.fonts.body.clone(),
        link_text: colors.link_text.clone(),
        success_bg: colors.success_bg.clone(),
        success_text: colors.success_text.clone(),
        warning_bg: colors.warning_bg.clone(),
        warning_text: colors.warning_text.clone(),
        danger_bg: colors.danger_bg.clone(),
        danger_text: colors.danger_text.clone(),
        info_bg: colors.info_bg.clone(),
        info_text: colors.info_text.clone(),
    }
}

/// Classification string for a background color; illegal strings classify
/// as light.
pub fn base_string_for(bg_color: &str) -> &'static str {
    if color::luminance(bg_color).map_or(true, |lum| lum > 0.5) {
        "light"
    } else {
        "dark"
    }
}
