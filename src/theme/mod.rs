//! Resolved theme model and built-in presets.
//!
//! A [`Theme`] is a named, fully-populated token set: after resolution every
//! color, font, size, radius, and spacing field has a concrete value. Themes
//! are immutable; switching themes builds a new instance, and the embedding
//! application owns the active reference.

pub mod derived;
pub mod export;
pub mod palette;
pub mod presets;
pub mod resolve;
pub mod spacing;

use serde::Serialize;

use crate::input::PresetBase;
use derived::DerivedColors;
use palette::ChartScales;
use spacing::Spacing;

pub use presets::{dark_theme, light_theme};

/// Name of the built-in light preset.
pub const LIGHT_THEME_NAME: &str = "light";
/// Name of the built-in dark preset.
pub const DARK_THEME_NAME: &str = "dark";
/// Name of the follow-the-system pseudo-preset.
pub const AUTO_THEME_NAME: &str = "system";

/// A named, fully-resolved theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub name: String,
    pub tokens: ThemeTokens,
}

/// The complete style token set consumed by rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub colors: ThemeColors,
    pub fonts: GenericFonts,
    pub font_sizes: FontSizes,
    pub radii: Radii,
    pub spacing: Spacing,
    /// Whether this token set styles content nested inside the sidebar.
    pub in_sidebar: bool,
}

/// Named color slots plus the fixed chart palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub body_text: String,
    pub bg_color: String,
    pub secondary_bg: String,
    pub widget_background: String,
    pub widget_border: String,
    // Derived from background luminance; never user-settable.
    pub link_text: String,
    pub success_bg: String,
    pub success_text: String,
    pub warning_bg: String,
    pub warning_text: String,
    pub danger_bg: String,
    pub danger_text: String,
    pub info_bg: String,
    pub info_text: String,
    pub chart: &'static ChartScales,
}

impl ThemeColors {
    /// Overwrite the luminance-derived slots from a fixed table.
    pub(crate) fn apply_derived(&mut self, derived: &DerivedColors) {
        self.link_text = derived.link_text.to_string();
        self.success_bg = derived.success_bg.to_string();
        self.success_text = derived.success_text.to_string();
        self.warning_bg = derived.warning_bg.to_string();
        self.warning_text = derived.warning_text.to_string();
        self.danger_bg = derived.danger_bg.to_string();
        self.danger_text = derived.danger_text.to_string();
        self.info_bg = derived.info_bg.to_string();
        self.info_text = derived.info_text.to_string();
    }
}

/// Body/heading/code font-family strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericFonts {
    pub body: String,
    pub heading: String,
    pub code: String,
}

/// Font-size tokens: a unitful CSS string plus a unitless numeric twin for
/// layout math.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSizes {
    pub two_sm: String,
    pub two_sm_px: f64,
    pub sm: String,
    pub sm_px: f64,
    pub md: String,
    pub md_px: f64,
}

/// Corner-radius tokens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Radii {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

/// The preset matching the host's color-scheme preference.
///
/// A plain query with no memoization. Callers re-query when the host signals an
/// environment change.
pub fn preset_for(prefers_dark: bool) -> Theme {
    if prefers_dark {
        dark_theme()
    } else {
        light_theme()
    }
}

/// The system preset under the auto-theme name.
pub fn auto_theme(prefers_dark: bool) -> Theme {
    let mut theme = preset_for(prefers_dark);
    theme.name = AUTO_THEME_NAME.to_string();
    theme
}

/// Look up a built-in preset by name.
pub fn preset_named(name: &str) -> Option<Theme> {
    match name {
        LIGHT_THEME_NAME => Some(light_theme()),
        DARK_THEME_NAME => Some(dark_theme()),
        _ => None,
    }
}

/// True for the built-in preset names, including the auto theme.
pub fn is_preset(name: &str) -> bool {
    matches!(name, LIGHT_THEME_NAME | DARK_THEME_NAME | AUTO_THEME_NAME)
}

/// Stable list of selectable preset names.
pub fn preset_names() -> [&'static str; 3] {
    [AUTO_THEME_NAME, LIGHT_THEME_NAME, DARK_THEME_NAME]
}

/// The dark preset when the stored base says dark, else light.
pub(crate) fn base_preset(base: Option<PresetBase>) -> Theme {
    match base {
        Some(PresetBase::Dark) => dark_theme(),
        _ => light_theme(),
    }
}

/// Convenience re-export of the resolver entry points.
pub use resolve::{create_theme, merge_theme_input};

/// Convenience re-export of the export surface.
pub use export::{to_exported_theme, to_theme_input, ExportedTheme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_for_follows_preference() {
        assert_eq!(preset_for(false).name, LIGHT_THEME_NAME);
        assert_eq!(preset_for(true).name, DARK_THEME_NAME);
    }

    #[test]
    fn auto_theme_renames_the_system_preset() {
        let auto = auto_theme(true);
        assert_eq!(auto.name, AUTO_THEME_NAME);
        assert_eq!(auto.tokens, dark_theme().tokens);
    }

    #[test]
    fn preset_named_resolves_builtins_only() {
        assert!(preset_named("light").is_some());
        assert!(preset_named("dark").is_some());
        assert!(preset_named("system").is_none());
        assert!(preset_named("midnight").is_none());
    }

    #[test]
    fn is_preset_includes_auto() {
        assert!(is_preset(AUTO_THEME_NAME));
        assert!(is_preset(LIGHT_THEME_NAME));
        assert!(!is_preset("Custom Theme"));
    }
}
