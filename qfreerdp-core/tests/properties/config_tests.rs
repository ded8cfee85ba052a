//! Property-based tests for settings persistence

use proptest::prelude::*;
use qfreerdp_core::config::{
    ConfigManager, SettingValue, SettingsStore, keys, restore_preferences, save_preferences,
};
use qfreerdp_core::models::{
    CompressionSettings, DisplayArea, PerformancePreset, Preferences, Resolution,
    STANDARD_RESOLUTIONS, usable_resolutions,
};
use secrecy::{ExposeSecret, SecretString};
use tempfile::TempDir;

use super::generators::arb_preferences;

const ALL_KEYS: &[&str] = &[
    keys::CURRENT_SERVER,
    keys::ALL_SERVERS,
    keys::USERNAME,
    keys::RESOLUTION_TYPE,
    keys::STANDARD_RESOLUTION,
    keys::CUSTOM_RESOLUTION,
    keys::BIT_DEPTH,
    keys::COMPRESSION_TYPE,
    keys::LEGACY_COMPRESSION,
    keys::JPEG,
    keys::JPEG_LEVEL,
    keys::AUDIO_MODE,
    keys::CLIPBOARD,
    keys::REDIRECT_DRIVES,
    keys::REDIRECT_HOME,
    keys::WALLPAPER,
    keys::FONT_SMOOTHING,
    keys::AERO,
    keys::WINDOW_DRAG,
    keys::MENU_ANIMS,
    keys::THEMES,
    keys::BITMAP_CACHE,
    keys::OFFSCREEN_CACHE,
    keys::GLYPH_CACHE,
    keys::GATEWAY,
    keys::GATEWAY_USERNAME,
];

/// Strategy for any value a hand-edited settings file could hold
fn arb_setting_value() -> impl Strategy<Value = SettingValue> {
    prop_oneof![
        any::<bool>().prop_map(SettingValue::Bool),
        any::<i64>().prop_map(SettingValue::Integer),
        (-5i64..200).prop_map(SettingValue::Integer),
        "[a-z0-9x ]{0,12}".prop_map(SettingValue::Text),
        (1u32..9000, 1u32..9000).prop_map(|(w, h)| SettingValue::Text(format!("{w}x{h}"))),
        prop::collection::vec("[a-z.]{0,10}", 0..4).prop_map(SettingValue::List),
    ]
}

/// Strategy for stores built from known keys holding arbitrary values
fn arb_garbage_store() -> impl Strategy<Value = SettingsStore> {
    prop::collection::vec(
        (prop::sample::select(ALL_KEYS.to_vec()), arb_setting_value()),
        0..30,
    )
    .prop_map(|entries| {
        let mut store = SettingsStore::new();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    })
}

fn arb_catalogue() -> impl Strategy<Value = Vec<Resolution>> {
    prop::collection::vec((320u32..9000, 200u32..5000), 0..3).prop_map(|sizes| {
        let displays: Vec<DisplayArea> = sizes
            .into_iter()
            .map(|(w, h)| DisplayArea::sized(w, h))
            .collect();
        usable_resolutions(STANDARD_RESOLUTIONS, &displays)
    })
}

/// What survives a save and restore: passwords are dropped and the
/// server list is saved current-first
fn persisted_view(prefs: &Preferences) -> Preferences {
    let mut expected = prefs.clone();
    expected.login.recent_servers = prefs.login.server_history();
    expected.login.password = SecretString::from(String::new());
    expected.gateway.password = SecretString::from(String::new());
    expected
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Saving then restoring gives back every persisted field
    #[test]
    fn prop_save_restore_roundtrip(prefs in arb_preferences()) {
        let store = save_preferences(&prefs);
        let restored = restore_preferences(&store, STANDARD_RESOLUTIONS);
        prop_assert_eq!(restored, persisted_view(&prefs));
    }

    /// The roundtrip also holds through the TOML text form
    #[test]
    fn prop_toml_text_roundtrip(prefs in arb_preferences()) {
        let text = save_preferences(&prefs).to_toml_string().unwrap();
        let store = SettingsStore::from_toml_str(&text).unwrap();
        let restored = restore_preferences(&store, STANDARD_RESOLUTIONS);
        prop_assert_eq!(restored, persisted_view(&prefs));
    }

    /// No password ever reaches the store
    #[test]
    fn prop_store_never_holds_passwords(mut prefs in arb_preferences()) {
        prefs.login.password = SecretString::from("LoginSecret-4711".to_string());
        prefs.gateway.password = SecretString::from("GatewaySecret-0815".to_string());

        let text = save_preferences(&prefs).to_toml_string().unwrap();
        prop_assert!(!text.contains(prefs.login.password.expose_secret()));
        prop_assert!(!text.contains(prefs.gateway.password.expose_secret()));
        prop_assert!(!text.to_lowercase().contains("password"));
    }

    /// Restoring from arbitrary content always yields a consistent model
    #[test]
    fn prop_restore_from_garbage_is_consistent(
        store in arb_garbage_store(),
        catalogue in arb_catalogue(),
    ) {
        let prefs = restore_preferences(&store, &catalogue);

        let quality = prefs.compression.jpeg_quality;
        prop_assert!(
            (CompressionSettings::MIN_JPEG_QUALITY..=CompressionSettings::MAX_JPEG_QUALITY)
                .contains(&quality)
        );
        prop_assert!(prefs.compression.choice_index() <= 4);
        prop_assert!(catalogue.contains(&prefs.display.standard_resolution));
        prop_assert_eq!(
            prefs.experience.preset(),
            PerformancePreset::from_toggles(&prefs.experience.toggles())
        );
        prop_assert!(prefs.login.password.expose_secret().is_empty());
    }

    /// Saving through the manager keeps keys it does not own
    #[test]
    fn prop_manager_preserves_unknown_keys(
        prefs in arb_preferences(),
        extra in "[a-z]{1,12}",
    ) {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_config_dir(dir.path());

        let mut store = SettingsStore::new();
        store.set("ZzUnrelated", extra.as_str());
        manager.save_store(&store).unwrap();

        manager.save_preferences(&prefs).unwrap();
        let reloaded = manager.load_store().unwrap();
        prop_assert_eq!(reloaded.get_text("ZzUnrelated"), Some(extra));
        prop_assert_eq!(
            manager.load_preferences(STANDARD_RESOLUTIONS),
            persisted_view(&prefs)
        );
    }
}
