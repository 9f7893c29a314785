//! Cached-theme round-trip.
//!
//! Presets persist by name only; custom themes persist the partial input
//! they were resolved from so a restore can re-run the merge. Every write is
//! preceded by a sweep of the enumerated legacy cache keys from earlier
//! cache-layout versions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::ThemeInput;
use crate::store::{FileStore, KeyValueStore};
use crate::theme::{
    auto_theme, create_theme, is_preset, preset_named, to_theme_input, Theme, AUTO_THEME_NAME,
};

/// Unversioned cache key stem.
const CACHED_THEME_BASE_KEY: &str = "active-theme";

/// Current cache layout version.
const CACHED_THEME_VERSION: u32 = 2;

/// Pre-release builds cached the active theme under this key.
const PRERELEASE_THEME_KEY: &str = "theme";

/// Versioned key the active theme is cached under.
pub fn active_theme_key() -> String {
    format!("{CACHED_THEME_BASE_KEY}-v{CACHED_THEME_VERSION}")
}

/// Persisted shape of the active theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedTheme {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_input: Option<ThemeInput>,
}

/// Restore the cached theme, if one is present and intelligible.
///
/// A known preset name restores that preset directly: presets are canonical
/// and any stored input is ignored. Custom themes re-run the merge from the
/// stored partial input against the preset its `base` field names. Absent or
/// unparsable records read as "no cached theme".
pub fn cached_theme(store: &dyn KeyValueStore) -> Option<Theme> {
    let raw = store.get(&active_theme_key())?;
    let cached: CachedTheme = match serde_json::from_str(&raw) {
        Ok(cached) => cached,
        Err(e) => {
            debug!("discarding unparsable cached theme: {e}");
            return None;
        }
    };

    if let Some(preset) = preset_named(&cached.name) {
        return Some(preset);
    }

    let input = cached.theme_input?;
    Some(create_theme(&cached.name, &input, None, false))
}

/// Cache `theme` as the active theme, sweeping legacy keys first.
pub fn set_cached_theme(store: &dyn KeyValueStore, theme: &Theme) {
    delete_old_cached_themes(store);

    let cached = CachedTheme {
        name: theme.name.clone(),
        theme_input: (!is_preset(&theme.name)).then(|| to_theme_input(&theme.tokens)),
    };
    match serde_json::to_string(&cached) {
        Ok(raw) => store.set(&active_theme_key(), &raw),
        Err(e) => debug!("failed to serialize cached theme: {e}"),
    }
}

/// Drop the cached theme.
pub fn remove_cached_theme(store: &dyn KeyValueStore) {
    store.remove(&active_theme_key());
}

/// Delete every cache key written by earlier layouts. Missing keys are a
/// no-op, so the sweep is safe to run unconditionally.
fn delete_old_cached_themes(store: &dyn KeyValueStore) {
    store.remove(PRERELEASE_THEME_KEY);
    store.remove(CACHED_THEME_BASE_KEY);
    for version in 1..CACHED_THEME_VERSION {
        store.remove(&format!("{CACHED_THEME_BASE_KEY}-v{version}"));
    }
}

/// Default-theme priority: the cached user preference when it names a
/// concrete theme, else the system preset under the auto name.
pub fn default_theme(store: &dyn KeyValueStore, prefers_dark: bool) -> Theme {
    match cached_theme(store) {
        Some(theme) if theme.name != AUTO_THEME_NAME => theme,
        _ => auto_theme(prefers_dark),
    }
}

/// Restore the active theme from the default store.
///
/// `None` both when nothing is cached and when storage is unavailable.
pub fn load_active_theme() -> Option<Theme> {
    let store = FileStore::open_default()?;
    cached_theme(&store)
}

/// Persist the active theme to the default store; a no-op when storage is
/// unavailable.
pub fn persist_active_theme(theme: &Theme) {
    if let Some(store) = FileStore::open_default() {
        set_cached_theme(&store, theme);
    }
}

/// Drop the active theme from the default store; a no-op when storage is
/// unavailable.
pub fn clear_active_theme() {
    if let Some(store) = FileStore::open_default() {
        remove_cached_theme(&store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PresetBase;
    use crate::store::MemoryStore;
    use crate::theme::{dark_theme, light_theme, DARK_THEME_NAME, LIGHT_THEME_NAME};

    fn custom_theme() -> Theme {
        let input = ThemeInput {
            primary_color: Some("#1b9e77".to_string()),
            background_color: Some("#0e1117".to_string()),
            base: Some(PresetBase::Dark),
            ..ThemeInput::default()
        };
        create_theme("Custom Theme", &input, None, false)
    }

    #[test]
    fn empty_store_has_no_cached_theme() {
        let store = MemoryStore::new();
        assert!(cached_theme(&store).is_none());
    }

    #[test]
    fn preset_round_trips_by_name_with_identical_colors() {
        let store = MemoryStore::new();
        set_cached_theme(&store, &light_theme());

        let restored = cached_theme(&store).expect("cached preset");
        assert_eq!(restored.name, LIGHT_THEME_NAME);
        assert_eq!(restored.tokens.colors, light_theme().tokens.colors);

        // Presets persist without their input.
        let raw = store.get(&active_theme_key()).expect("raw record");
        assert!(!raw.contains("themeInput"), "got: {raw}");
    }

    #[test]
    fn custom_theme_round_trips_through_re_merge() {
        let store = MemoryStore::new();
        let original = custom_theme();
        set_cached_theme(&store, &original);

        let restored = cached_theme(&store).expect("cached custom theme");
        assert_eq!(restored.name, original.name);
        assert_eq!(restored.tokens.colors, original.tokens.colors);
    }

    #[test]
    fn stored_input_is_ignored_for_preset_names() {
        let store = MemoryStore::new();
        let record = CachedTheme {
            name: DARK_THEME_NAME.to_string(),
            theme_input: Some(ThemeInput {
                primary_color: Some("#00ff00".to_string()),
                ..ThemeInput::default()
            }),
        };
        store.set(
            &active_theme_key(),
            &serde_json::to_string(&record).expect("serialize"),
        );

        let restored = cached_theme(&store).expect("cached preset");
        assert_eq!(restored.tokens.colors, dark_theme().tokens.colors);
    }

    #[test]
    fn unparsable_record_reads_as_no_cached_theme() {
        let store = MemoryStore::new();
        store.set(&active_theme_key(), "{not json");
        assert!(cached_theme(&store).is_none());
    }

    #[test]
    fn custom_record_without_input_reads_as_no_cached_theme() {
        let store = MemoryStore::new();
        store.set(&active_theme_key(), r#"{"name":"Custom Theme"}"#);
        assert!(cached_theme(&store).is_none());
    }

    #[test]
    fn write_sweeps_legacy_keys() {
        let store = MemoryStore::new();
        store.set(PRERELEASE_THEME_KEY, "old");
        store.set(CACHED_THEME_BASE_KEY, "old");
        store.set("active-theme-v1", "old");

        set_cached_theme(&store, &dark_theme());

        assert!(store.get(PRERELEASE_THEME_KEY).is_none());
        assert!(store.get(CACHED_THEME_BASE_KEY).is_none());
        assert!(store.get("active-theme-v1").is_none());
        assert!(store.get(&active_theme_key()).is_some());
    }

    #[test]
    fn sweep_with_no_legacy_keys_present_is_harmless() {
        let store = MemoryStore::new();
        set_cached_theme(&store, &dark_theme());
        assert!(cached_theme(&store).is_some());
    }

    #[test]
    fn default_theme_prefers_the_cached_choice() {
        let store = MemoryStore::new();
        set_cached_theme(&store, &dark_theme());
        assert_eq!(default_theme(&store, false).name, DARK_THEME_NAME);
    }

    #[test]
    fn default_theme_falls_back_to_the_system_preset() {
        let store = MemoryStore::new();
        let theme = default_theme(&store, true);
        assert_eq!(theme.name, AUTO_THEME_NAME);
        assert_eq!(theme.tokens.colors, dark_theme().tokens.colors);
    }

    #[test]
    fn cached_auto_theme_is_requeried_not_replayed() {
        // The auto name should never be cached, but a stale record must not
        // pin the system preference that was active when it was written.
        let store = MemoryStore::new();
        store.set(
            &active_theme_key(),
            &format!(r#"{{"name":"{AUTO_THEME_NAME}"}}"#),
        );
        let theme = default_theme(&store, true);
        assert_eq!(theme.name, AUTO_THEME_NAME);
        assert_eq!(theme.tokens.colors, dark_theme().tokens.colors);
    }

    #[test]
    fn remove_drops_only_the_active_record() {
        let store = MemoryStore::new();
        set_cached_theme(&store, &light_theme());
        remove_cached_theme(&store);
        assert!(cached_theme(&store).is_none());
    }
}
