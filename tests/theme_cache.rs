//! End-to-end cached-theme round-trips through a real file-backed store.

use std::path::PathBuf;

use tinge::input::{PresetBase, ThemeInput};
use tinge::store::cache::{cached_theme, default_theme, remove_cached_theme, set_cached_theme};
use tinge::store::{FileStore, KeyValueStore};
use tinge::theme::{create_theme, dark_theme, light_theme};

fn temp_root(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "tinge-cache-test-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn preset_persists_and_restores_by_name() {
    let root = temp_root("preset");
    let store = FileStore::open(&root).expect("store should open");

    set_cached_theme(&store, &light_theme());
    let restored = cached_theme(&store).expect("cached theme");
    assert_eq!(restored.name, light_theme().name);
    assert_eq!(restored.tokens.colors, light_theme().tokens.colors);

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn custom_theme_persists_and_restores_with_identical_colors() {
    let root = temp_root("custom");
    let store = FileStore::open(&root).expect("store should open");

    let input = ThemeInput {
        primary_color: Some("1b9e77".to_string()),
        background_color: Some("#101418".to_string()),
        text_color: Some("#e8eaed".to_string()),
        base: Some(PresetBase::Dark),
        ..ThemeInput::default()
    };
    let original = create_theme("Custom Theme", &input, None, false);
    set_cached_theme(&store, &original);

    let restored = cached_theme(&store).expect("cached theme");
    assert_eq!(restored.name, "Custom Theme");
    assert_eq!(restored.tokens.colors, original.tokens.colors);
    assert_eq!(restored.tokens.fonts, original.tokens.fonts);

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn write_sweeps_legacy_keys_left_by_older_layouts() {
    let root = temp_root("legacy");
    let store = FileStore::open(&root).expect("store should open");

    store.set("theme", "stale");
    store.set("active-theme", "stale");
    store.set("active-theme-v1", "stale");

    set_cached_theme(&store, &dark_theme());

    assert!(store.get("theme").is_none());
    assert!(store.get("active-theme").is_none());
    assert!(store.get("active-theme-v1").is_none());
    assert_eq!(cached_theme(&store).expect("cached theme").name, "dark");

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn cleared_store_falls_back_to_the_system_preference() {
    let root = temp_root("clear");
    let store = FileStore::open(&root).expect("store should open");

    set_cached_theme(&store, &dark_theme());
    remove_cached_theme(&store);
    assert!(cached_theme(&store).is_none());

    let fallback = default_theme(&store, false);
    assert_eq!(fallback.name, "system");
    assert_eq!(fallback.tokens.colors, light_theme().tokens.colors);

    std::fs::remove_dir_all(&root).unwrap();
}

#[test]
fn unavailable_storage_reads_none_and_skips_writes() {
    // A plain file where the store root should be: the availability probe
    // fails and every persistence helper degrades.
    let root = temp_root("unavailable");
    std::fs::create_dir_all(root.parent().unwrap()).unwrap();
    std::fs::write(&root, "blocking file").unwrap();

    assert!(FileStore::open(&root).is_none());

    std::fs::remove_file(&root).unwrap();
}

#[test]
fn corrupt_cache_file_reads_as_no_cached_theme() {
    let root = temp_root("corrupt");
    let store = FileStore::open(&root).expect("store should open");

    store.set("active-theme-v2", "{definitely not json");
    assert!(cached_theme(&store).is_none());

    std::fs::remove_dir_all(&root).unwrap();
}
