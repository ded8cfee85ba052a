//! Property-based tests for preset and toggle reconciliation

use proptest::prelude::*;
use qfreerdp_core::models::{
    CacheSettings, ExperienceSettings, ExperienceToggle, ExperienceToggles, PerformancePreset,
};

use super::generators::arb_toggles;

/// One user action on the experience group
#[derive(Debug, Clone)]
enum Action {
    SelectPreset(PerformancePreset),
    SetToggle(ExperienceToggle, bool),
    SetToggles(ExperienceToggles),
}

fn arb_preset() -> impl Strategy<Value = PerformancePreset> {
    prop::sample::select(PerformancePreset::all().to_vec())
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arb_preset().prop_map(Action::SelectPreset),
        (
            prop::sample::select(ExperienceToggle::all().to_vec()),
            any::<bool>()
        )
            .prop_map(|(toggle, value)| Action::SetToggle(toggle, value)),
        arb_toggles().prop_map(Action::SetToggles),
    ]
}

fn apply(settings: &mut ExperienceSettings, action: &Action) {
    match action {
        Action::SelectPreset(preset) => settings.select_preset(*preset),
        Action::SetToggle(toggle, value) => settings.set_toggle(*toggle, *value),
        Action::SetToggles(toggles) => settings.set_toggles(*toggles),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The preset always describes the toggles, unless the user explicitly
    /// chose Custom as the last action
    #[test]
    fn prop_preset_matches_toggles(
        start in arb_toggles(),
        actions in prop::collection::vec(arb_action(), 0..20),
    ) {
        let mut settings = ExperienceSettings::from_toggles(start, CacheSettings::default());
        for action in &actions {
            apply(&mut settings, action);
        }

        let derived = PerformancePreset::from_toggles(&settings.toggles());
        let chose_custom = matches!(
            actions.last(),
            Some(Action::SelectPreset(PerformancePreset::Custom))
        );
        if chose_custom {
            prop_assert_eq!(settings.preset(), PerformancePreset::Custom);
        } else {
            prop_assert_eq!(settings.preset(), derived);
        }
    }

    /// Selecting a named preset always applies its exact pattern
    #[test]
    fn prop_named_preset_applies_pattern(
        start in arb_toggles(),
        preset in arb_preset(),
    ) {
        let mut settings = ExperienceSettings::from_toggles(start, CacheSettings::default());
        settings.select_preset(preset);

        prop_assert_eq!(settings.preset(), preset);
        match preset.toggles() {
            Some(pattern) => prop_assert_eq!(settings.toggles(), pattern),
            None => prop_assert_eq!(settings.toggles(), start),
        }
    }

    /// Presets never touch the cache options
    #[test]
    fn prop_presets_leave_cache_alone(
        start in arb_toggles(),
        cache in any::<[bool; 3]>(),
        actions in prop::collection::vec(arb_action(), 1..10),
    ) {
        let cache = CacheSettings {
            bitmap_cache: cache[0],
            offscreen_cache: cache[1],
            glyph_cache: cache[2],
        };
        let mut settings = ExperienceSettings::from_toggles(start, cache);
        for action in &actions {
            apply(&mut settings, action);
        }
        prop_assert_eq!(settings.cache, cache);
    }

    /// Flipping a toggle and flipping it back restores the original preset
    #[test]
    fn prop_toggle_flip_is_reversible(
        start in arb_toggles(),
        toggle in prop::sample::select(ExperienceToggle::all().to_vec()),
    ) {
        let mut settings = ExperienceSettings::from_toggles(start, CacheSettings::default());
        let before = settings.preset();
        let value = settings.toggles().get(toggle);

        settings.set_toggle(toggle, !value);
        prop_assert_ne!(settings.toggles(), start);
        settings.set_toggle(toggle, value);

        prop_assert_eq!(settings.toggles(), start);
        prop_assert_eq!(settings.preset(), before);
    }
}

#[test]
fn test_every_combination_maps_to_one_preset() {
    let mut named = 0;
    for selector in 0u8..64 {
        let toggles = ExperienceToggles::from_selector(selector);
        let preset = PerformancePreset::from_toggles(&toggles);
        if let Some(pattern) = preset.toggles() {
            assert_eq!(pattern, toggles, "selector {selector:#04x}");
            named += 1;
        }
    }
    assert_eq!(named, 4);
}

#[test]
fn test_low_from_every_state_is_themes_only() {
    for selector in 0u8..64 {
        let mut settings = ExperienceSettings::from_toggles(
            ExperienceToggles::from_selector(selector),
            CacheSettings::default(),
        );
        settings.select_preset(PerformancePreset::Low);
        let toggles = settings.toggles();
        assert!(toggles.themes);
        assert_eq!(toggles.selector(), ExperienceToggle::Themes.bit());
    }
}
