//! Built-in light and dark presets.

use crate::fonts::FontFamily;
use crate::theme::derived::{DARK_DERIVED, DerivedColors, LIGHT_DERIVED};
use crate::theme::palette::CHART;
use crate::theme::spacing::Spacing;
use crate::theme::{
    FontSizes, GenericFonts, Radii, Theme, ThemeColors, ThemeTokens, DARK_THEME_NAME,
    LIGHT_THEME_NAME,
};

/// The shipped light preset.
pub fn light_theme() -> Theme {
    Theme {
        name: LIGHT_THEME_NAME.to_string(),
        tokens: ThemeTokens {
            colors: preset_colors(
                PresetPalette {
                    primary: "#ff4b4b",
                    body_text: "#31333f",
                    bg_color: "#ffffff",
                    secondary_bg: "#f0f2f6",
                    widget_background: "#ffffff",
                    widget_border: "#d5dae5",
                },
                &LIGHT_DERIVED,
            ),
            fonts: default_fonts(),
            font_sizes: default_font_sizes(),
            radii: default_radii(),
            spacing: Spacing::default_scale(),
            in_sidebar: false,
        },
    }
}

/// The shipped dark preset.
pub fn dark_theme() -> Theme {
    Theme {
        name: DARK_THEME_NAME.to_string(),
        tokens: ThemeTokens {
            colors: preset_colors(
                PresetPalette {
                    primary: "#ff4b4b",
                    body_text: "#fafafa",
                    bg_color: "#0e1117",
                    secondary_bg: "#262730",
                    widget_background: "#262730",
                    widget_border: "#555867",
                },
                &DARK_DERIVED,
            ),
            fonts: default_fonts(),
            font_sizes: default_font_sizes(),
            radii: default_radii(),
            spacing: Spacing::default_scale(),
            in_sidebar: false,
        },
    }
}

struct PresetPalette {
    primary: &'static str,
    body_text: &'static str,
    bg_color: &'static str,
    secondary_bg: &'static str,
    widget_background: &'static str,
    widget_border: &'static str,
}

fn preset_colors(palette: PresetPalette, derived: &DerivedColors) -> ThemeColors {
    let mut colors = ThemeColors {
        primary: palette.primary.to_string(),
        body_text: palette.body_text.to_string(),
        bg_color: palette.bg_color.to_string(),
        secondary_bg: palette.secondary_bg.to_string(),
        widget_background: palette.widget_background.to_string(),
        widget_border: palette.widget_border.to_string(),
        link_text: String::new(),
        success_bg: String::new(),
        success_text: String::new(),
        warning_bg: String::new(),
        warning_text: String::new(),
        danger_bg: String::new(),
        danger_text: String::new(),
        info_bg: String::new(),
        info_text: String::new(),
        chart: &CHART,
    };
    colors.apply_derived(derived);
    colors
}

fn default_fonts() -> GenericFonts {
    GenericFonts {
        body: FontFamily::SansSerif.family().to_string(),
        heading: FontFamily::SansSerif.family().to_string(),
        code: FontFamily::Monospace.family().to_string(),
    }
}

fn default_font_sizes() -> FontSizes {
    FontSizes {
        two_sm: "12px".to_string(),
        two_sm_px: 12.0,
        sm: "14px".to_string(),
        sm_px: 14.0,
        md: "16px".to_string(),
        md_px: 16.0,
    }
}

fn default_radii() -> Radii {
    Radii {
        sm: "4px".to_string(),
        md: "8px".to_string(),
        lg: "12px".to_string(),
        full: "9999px".to_string(),
    }
}
