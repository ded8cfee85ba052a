//! Shared strategies for preference models

use proptest::prelude::*;
use qfreerdp_core::models::{
    AudioMode, CacheSettings, ColorDepth, ExperienceSettings, ExperienceToggles, Preferences,
    ResolutionMode, STANDARD_RESOLUTIONS,
};
use secrecy::SecretString;

/// Strategy for generating valid hostnames, optionally with a port
pub fn arb_hostname() -> impl Strategy<Value = String> {
    (
        "[a-z0-9]([a-z0-9-]{0,20}[a-z0-9])?(\\.[a-z0-9]([a-z0-9-]{0,20}[a-z0-9])?){0,2}",
        prop::option::of(1u16..65535),
    )
        .prop_map(|(host, port)| match port {
            Some(port) => format!("{host}:{port}"),
            None => host,
        })
}

/// Strategy for generating usernames, with or without a domain
pub fn arb_username() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9_.-]{0,15}",
        "[A-Z]{2,8}\\\\[a-z][a-z0-9_]{0,10}",
        "[a-z][a-z0-9_]{0,10}@[A-Z]{2,8}",
    ]
}

/// Strategy for generating non-empty passwords
pub fn arb_password() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9!@#$%^&*]{1,24}"
}

/// Strategy for the 64 experience toggle combinations
pub fn arb_toggles() -> impl Strategy<Value = ExperienceToggles> {
    (0u8..64).prop_map(ExperienceToggles::from_selector)
}

fn arb_cache() -> impl Strategy<Value = CacheSettings> {
    any::<[bool; 3]>().prop_map(|[bitmap_cache, offscreen_cache, glyph_cache]| CacheSettings {
        bitmap_cache,
        offscreen_cache,
        glyph_cache,
    })
}

/// Strategy for complete, valid preference models.
///
/// Custom dimensions are always in range so every generated model compiles.
pub fn arb_preferences() -> impl Strategy<Value = Preferences> {
    (
        (
            arb_hostname(),
            prop::collection::vec(arb_hostname(), 0..4),
            arb_username(),
            arb_password(),
        ),
        (
            0u32..3,
            prop::sample::select(STANDARD_RESOLUTIONS.to_vec()),
            100u32..=65535,
            100u32..=65535,
            prop::sample::select(ColorDepth::all().to_vec()),
        ),
        (0u32..5, any::<bool>(), 10u8..=100),
        (0u32..3, any::<[bool; 3]>()),
        (arb_toggles(), arb_cache()),
        (
            prop::option::of(arb_hostname()),
            prop::option::of(arb_username()),
            prop::option::of(arb_password()),
        ),
    )
        .prop_map(
            |(login, display, compression, devices, experience, gateway)| {
                let mut prefs = Preferences::default();

                let (server, recent, username, password) = login;
                prefs.login.server = server;
                prefs.login.recent_servers = recent;
                prefs.login.username = username;
                prefs.login.password = SecretString::from(password);

                let (mode, standard, width, height, depth) = display;
                prefs.display.resolution_mode = ResolutionMode::from_index(mode);
                prefs.display.standard_resolution = standard;
                prefs.display.custom_width = width.to_string();
                prefs.display.custom_height = height.to_string();
                prefs.display.color_depth = depth;

                let (choice, jpeg, quality) = compression;
                prefs.compression.set_choice_index(choice);
                prefs.compression.jpeg_enabled = jpeg;
                prefs.compression.jpeg_quality = quality;

                let (audio, [clipboard, drives, home]) = devices;
                prefs.devices.audio_mode = AudioMode::from_index(audio);
                prefs.devices.clipboard = clipboard;
                prefs.devices.redirect_all_drives = drives;
                prefs.devices.redirect_home_drive = home;

                let (toggles, cache) = experience;
                prefs.experience = ExperienceSettings::from_toggles(toggles, cache);

                let (gw_server, gw_user, gw_password) = gateway;
                prefs.gateway.server = gw_server.unwrap_or_default();
                prefs.gateway.username = gw_user.unwrap_or_default();
                prefs.gateway.password = SecretString::from(gw_password.unwrap_or_default());

                prefs
            },
        )
}
