//! Theme resolution: merging a sparse input onto a base preset.
//!
//! Resolution is pure and total. Illegal color strings, unknown fonts, and
//! absent fields all fall back to the base value; the resolver never errors
//! and never mutates its inputs.

use crate::color;
use crate::input::ThemeInput;
use crate::theme::derived::derived_for;
use crate::theme::export::to_theme_input;
use crate::theme::{base_preset, dark_theme, light_theme, Theme, ThemeTokens};

/// Merge a sparse input onto a resolved base token set.
///
/// Only slots explicitly present in `input` are overwritten; colors that fail
/// validation (with and without a retried `#` prefix) are dropped silently.
/// The luminance-derived slots are recomputed from the resolved background.
pub fn merge_theme_input(input: &ThemeInput, base: &ThemeTokens) -> ThemeTokens {
    let mut tokens = base.clone();

    overlay_color(&mut tokens.colors.primary, input.primary_color.as_deref());
    overlay_color(&mut tokens.colors.body_text, input.text_color.as_deref());
    overlay_color(&mut tokens.colors.bg_color, input.background_color.as_deref());
    overlay_color(
        &mut tokens.colors.secondary_bg,
        input.secondary_background_color.as_deref(),
    );
    overlay_color(
        &mut tokens.colors.widget_background,
        input.widget_background_color.as_deref(),
    );
    overlay_color(
        &mut tokens.colors.widget_border,
        input.widget_border_color.as_deref(),
    );

    // Fonts change only when the font selector is present. An explicit body
    // font wins over the selector; the heading font always follows the body
    // font (there is no independent heading channel).
    if let Some(font) = input.font {
        let resolved = input
            .body_font
            .clone()
            .unwrap_or_else(|| font.family().to_string());
        tokens.fonts.heading = resolved.clone();
        tokens.fonts.body = resolved;
        if let Some(code) = &input.code_font {
            tokens.fonts.code = code.clone();
        }
    }

    if let Some(radii) = &input.radii {
        if let Some(px) = radii.checkbox_radius {
            tokens.radii.sm = add_px_unit(px);
        }
        if let Some(px) = radii.base_widget_radius {
            tokens.radii.md = add_px_unit(px);
        }
    }

    if let Some(sizes) = &input.font_sizes {
        if let Some(px) = sizes.tiny_font_size {
            tokens.font_sizes.two_sm = add_px_unit(px);
            tokens.font_sizes.two_sm_px = px;
        }
        if let Some(px) = sizes.small_font_size {
            tokens.font_sizes.sm = add_px_unit(px);
            tokens.font_sizes.sm_px = px;
        }
        if let Some(px) = sizes.base_font_size {
            tokens.font_sizes.md = add_px_unit(px);
            tokens.font_sizes.md_px = px;
        }
    }

    let derived = derived_for(&tokens.colors.bg_color);
    tokens.colors.apply_derived(derived);

    tokens
}

/// Build a complete named theme from a sparse input.
///
/// The input is first completed against `base` (or the preset selected by
/// `input.base` when no explicit base is given). The starting token set is
/// then picked by the *resolved background luminance*, not by `input.base`,
/// so auxiliary colors stay readable even for `base = light` plus a black
/// background.
pub fn create_theme(
    name: &str,
    input: &ThemeInput,
    base: Option<&Theme>,
    in_sidebar: bool,
) -> Theme {
    let fallback = match base {
        Some(theme) => theme.clone(),
        None => base_preset(input.base),
    };
    let completed = complete_theme_input(input, &fallback);

    let starting = if base.is_some() {
        fallback
    } else {
        let bg = completed.background_color.as_deref().unwrap_or_default();
        if color::luminance(bg).map_or(true, |lum| lum > 0.5) {
            light_theme()
        } else {
            dark_theme()
        }
    };

    let mut tokens = merge_theme_input(&completed, &starting.tokens);
    tokens.in_sidebar = in_sidebar;

    Theme {
        name: name.to_string(),
        tokens,
    }
}

/// Fill the settable fields absent from `partial` with the base theme's
/// values; fields present in `partial` win.
pub(crate) fn complete_theme_input(partial: &ThemeInput, base: &Theme) -> ThemeInput {
    let mut completed = to_theme_input(&base.tokens);

    macro_rules! take {
        ($field:ident) => {
            if partial.$field.is_some() {
                completed.$field = partial.$field.clone();
            }
        };
    }
    take!(primary_color);
    take!(background_color);
    take!(secondary_background_color);
    take!(text_color);
    take!(widget_background_color);
    take!(widget_border_color);
    take!(font);
    take!(body_font);
    take!(code_font);
    take!(radii);
    take!(font_sizes);
    take!(base);

    completed
}

fn overlay_color(slot: &mut String, value: Option<&str>) {
    if let Some(candidate) = value {
        if let Some(normalized) = color::normalize_color(candidate) {
            *slot = normalized;
        }
    }
}

fn add_px_unit(value: f64) -> String {
    format!("{value}px")
}
