//! tinge: theme resolution and persistence for a web UI framework.
//!
//! This crate derives a complete visual theme (colors, fonts, font sizes,
//! radii, spacing, derived chart/status colors) from a sparse user-supplied
//! configuration merged onto a built-in light or dark preset, and caches the
//! active choice in a local key-value store.
//!
//! # Quick start
//!
//! ```
//! use tinge::input::ThemeInput;
//! use tinge::theme::{create_theme, light_theme};
//!
//! let input = ThemeInput {
//!     primary_color: Some("1b9e77".to_string()),
//!     ..ThemeInput::default()
//! };
//! let theme = create_theme("brand", &input, Some(&light_theme()), false);
//! assert_eq!(theme.tokens.colors.primary, "#1b9e77");
//! ```

pub mod build_info;
pub mod color;
pub mod error;
pub mod fonts;
pub mod input;
pub mod store;
pub mod theme;
pub mod widgets;
