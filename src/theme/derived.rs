//! Luminance-derived colors.
//!
//! Status boxes, link text, and every chart accessor key off a single rule:
//! background relative luminance above 0.5 classifies the theme as light,
//! anything else as dark. Each accessor then selects from one of two fixed,
//! hand-tuned tables. No other signal (preset base, user override)
//! participates in the selection.

use crate::color;
use crate::theme::palette::CHART;
use crate::theme::ThemeTokens;

/// One fixed table of luminance-derived slot values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedColors {
    pub link_text: &'static str,
    pub success_bg: &'static str,
    pub success_text: &'static str,
    pub warning_bg: &'static str,
    pub warning_text: &'static str,
    pub danger_bg: &'static str,
    pub danger_text: &'static str,
    pub info_bg: &'static str,
    pub info_text: &'static str,
}

pub(crate) const LIGHT_DERIVED: DerivedColors = DerivedColors {
    link_text: "#1d64b8",
    success_bg: "#e7f7ec",
    success_text: "#114425",
    warning_bg: "#fff2e2",
    warning_text: "#663105",
    danger_bg: "#fdeaea",
    danger_text: "#691212",
    info_bg: "#e4f0fb",
    info_text: "#0d366e",
};

pub(crate) const DARK_DERIVED: DerivedColors = DerivedColors {
    link_text: "#6fb6ea",
    success_bg: "#112b1d",
    success_text: "#6cca8f",
    warning_bg: "#33250f",
    warning_text: "#ffc585",
    danger_bg: "#331113",
    danger_text: "#ee7a7a",
    info_bg: "#0f2034",
    info_text: "#6fb6ea",
};

/// The derived-color table matching a background color.
pub fn derived_for(bg_color: &str) -> &'static DerivedColors {
    if is_light_color(bg_color) {
        &LIGHT_DERIVED
    } else {
        &DARK_DERIVED
    }
}

/// True when a resolved token set sits on a light background.
pub fn has_light_background(tokens: &ThemeTokens) -> bool {
    is_light_color(&tokens.colors.bg_color)
}

fn is_light_color(value: &str) -> bool {
    // Resolved backgrounds are always legal colors; an illegal string can
    // only reach here through an unresolved caller and classifies as light,
    // matching the resolver's fallback direction.
    color::luminance(value).map_or(true, |lum| lum > 0.5)
}

pub fn gray30(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.gray.s30
    } else {
        CHART.gray.s80
    }
}

pub fn gray70(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.gray.s70
    } else {
        CHART.gray.s30
    }
}

pub fn gray90(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.gray.s90
    } else {
        CHART.gray.s10
    }
}

pub fn md_red(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.red.s80
    } else {
        CHART.red.s70
    }
}

pub fn md_blue(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.blue.s80
    } else {
        CHART.blue.s50
    }
}

pub fn md_green(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.green.s90
    } else {
        CHART.green.s60
    }
}

pub fn md_violet(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.purple.s80
    } else {
        CHART.purple.s50
    }
}

pub fn md_orange(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.orange.s100
    } else {
        CHART.orange.s60
    }
}

/// Single-hue ramp for sequential chart data: ascending blues on light
/// backgrounds, descending on dark.
pub fn sequential_colors(tokens: &ThemeTokens) -> [&'static str; 10] {
    if has_light_background(tokens) {
        CHART.blue.ascending()
    } else {
        CHART.blue.descending()
    }
}

/// Red-to-blue ramp for diverging chart data; identical on both
/// classifications.
pub fn diverging_colors(_tokens: &ThemeTokens) -> [&'static str; 10] {
    [
        CHART.red.s100,
        CHART.red.s90,
        CHART.red.s70,
        CHART.red.s50,
        CHART.red.s30,
        CHART.blue.s30,
        CHART.blue.s50,
        CHART.blue.s70,
        CHART.blue.s90,
        CHART.blue.s100,
    ]
}

/// Hand-tuned categorical series palette.
pub fn categorical_colors(tokens: &ThemeTokens) -> [&'static str; 10] {
    if has_light_background(tokens) {
        [
            CHART.blue.s80,
            CHART.blue.s40,
            CHART.red.s80,
            CHART.red.s40,
            CHART.blue_green.s80,
            CHART.green.s40,
            CHART.orange.s80,
            CHART.orange.s50,
            CHART.purple.s80,
            CHART.gray.s40,
        ]
    } else {
        [
            CHART.blue.s40,
            CHART.blue.s80,
            CHART.red.s40,
            CHART.red.s80,
            CHART.green.s40,
            CHART.blue_green.s80,
            CHART.orange.s50,
            CHART.orange.s80,
            CHART.purple.s80,
            CHART.gray.s40,
        ]
    }
}

/// The "falling" series color (financial charts).
pub fn decreasing_red(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.red.s80
    } else {
        CHART.red.s40
    }
}

/// The "rising" series color (financial charts).
pub fn increasing_green(tokens: &ThemeTokens) -> &'static str {
    if has_light_background(tokens) {
        CHART.blue_green.s80
    } else {
        CHART.green.s40
    }
}
