//! Property-based tests for the FreeRDP argument compiler

use proptest::prelude::*;
use qfreerdp_core::error::ValidationError;
use qfreerdp_core::models::{Preferences, ResolutionMode};
use qfreerdp_core::protocol::{
    TOGGLE_FLAG_NAMES, ToggleFlags, build_freerdp_args, format_command_for_log, mask_args,
    parse_toggle_flags,
};
use secrecy::{ExposeSecret, SecretString};

use super::generators::{arb_password, arb_preferences};

/// Strategy for custom dimensions as typed, valid or not
fn arb_dimension_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..200_000).prop_map(|v| v.to_string()),
        "[a-z ]{0,6}",
        Just(String::new()),
    ]
}

// ============================================================================
// Compilation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Identical preferences always compile to identical arguments
    #[test]
    fn prop_compile_is_deterministic(prefs in arb_preferences()) {
        let first = build_freerdp_args(&prefs).unwrap();
        let second = build_freerdp_args(&prefs.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The login arguments always come first, in order
    #[test]
    fn prop_login_args_lead(prefs in arb_preferences()) {
        let args = build_freerdp_args(&prefs).unwrap();
        prop_assert_eq!(&args[0], &format!("/v:{}", prefs.login.server));
        prop_assert_eq!(&args[1], &format!("/u:{}", prefs.login.username));
        prop_assert_eq!(&args[2], &format!("/p:{}", prefs.login.password.expose_secret()));
    }

    /// Exactly one of /size or /f is emitted, matching the mode
    #[test]
    fn prop_single_size_argument(prefs in arb_preferences()) {
        let args = build_freerdp_args(&prefs).unwrap();
        let sizes = args.iter().filter(|a| a.starts_with("/size:")).count();
        let fullscreen = args.iter().filter(|a| *a == "/f").count();
        prop_assert_eq!(sizes + fullscreen, 1);
        prop_assert_eq!(
            fullscreen == 1,
            prefs.display.resolution_mode == ResolutionMode::Fullscreen
        );
    }

    /// The twelve switches in compiled output parse back to the model's values
    #[test]
    fn prop_compiled_toggles_parse_back(prefs in arb_preferences()) {
        let args = build_freerdp_args(&prefs).unwrap();
        prop_assert_eq!(
            parse_toggle_flags(&args),
            Some(ToggleFlags::from_preferences(&prefs))
        );
    }

    /// Gateway arguments follow the server and username rules
    #[test]
    fn prop_gateway_arguments(prefs in arb_preferences()) {
        let args = build_freerdp_args(&prefs).unwrap();
        let has = |prefix: &str| args.iter().any(|a| a.starts_with(prefix));
        prop_assert_eq!(has("/g:"), !prefs.gateway.server.is_empty());
        let credentials = !prefs.gateway.server.is_empty() && !prefs.gateway.username.is_empty();
        prop_assert_eq!(has("/gu:"), credentials);
        prop_assert_eq!(has("/gp:"), credentials);
    }

    /// Custom dimensions compile exactly when both are integers in range
    #[test]
    fn prop_custom_dimension_bounds(
        width in arb_dimension_text(),
        height in arb_dimension_text(),
    ) {
        let mut prefs = Preferences::default();
        prefs.login.server = "rdp.example.com".to_string();
        prefs.login.username = "alice".to_string();
        prefs.login.password = SecretString::from("s3cret".to_string());
        prefs.display.resolution_mode = ResolutionMode::Custom;
        prefs.display.custom_width = width.clone();
        prefs.display.custom_height = height.clone();

        let in_range = |text: &str| {
            text.trim().parse::<u32>().is_ok_and(|v| (100..=65535).contains(&v))
        };
        let result = build_freerdp_args(&prefs);
        if in_range(&width) && in_range(&height) {
            let args = result.unwrap();
            let expected = format!("/size:{}x{}", width.trim(), height.trim());
            prop_assert!(args.contains(&expected));
        } else {
            prop_assert_eq!(
                result.unwrap_err(),
                ValidationError::InvalidResolution { width, height }
            );
        }
    }

    /// Masked output never contains either password
    #[test]
    fn prop_masking_hides_passwords(
        mut prefs in arb_preferences(),
        login_password in arb_password(),
        gateway_password in arb_password(),
    ) {
        prefs.login.password = SecretString::from(format!("LP{login_password}"));
        prefs.gateway.server = "gw.example.com".to_string();
        prefs.gateway.username = "gwuser".to_string();
        prefs.gateway.password = SecretString::from(format!("GW{gateway_password}"));

        let args = build_freerdp_args(&prefs).unwrap();
        let logged = format_command_for_log("xfreerdp", &args);
        let login_secret = format!("/p:{}", prefs.login.password.expose_secret());
        let gateway_secret = format!("/gp:{}", prefs.gateway.password.expose_secret());
        prop_assert!(!logged.contains(&login_secret));
        prop_assert!(!logged.contains(&gateway_secret));
        prop_assert!(logged.contains("/p:****"));
        prop_assert!(logged.contains("/gp:****"));
        prop_assert_eq!(mask_args(&args).len(), args.len());
    }
}

// ============================================================================
// Validation order
// ============================================================================

#[test]
fn test_validation_reports_first_missing_field() {
    let mut prefs = Preferences::default();
    prefs.display.resolution_mode = ResolutionMode::Custom;
    assert_eq!(build_freerdp_args(&prefs), Err(ValidationError::MissingServer));

    prefs.login.server = "rdp.example.com".to_string();
    assert_eq!(build_freerdp_args(&prefs), Err(ValidationError::MissingUsername));

    prefs.login.username = "alice".to_string();
    assert_eq!(build_freerdp_args(&prefs), Err(ValidationError::MissingPassword));

    prefs.login.password = SecretString::from("s3cret".to_string());
    assert!(matches!(
        build_freerdp_args(&prefs),
        Err(ValidationError::InvalidResolution { .. })
    ));
}

// ============================================================================
// Toggle parse-back over every combination
// ============================================================================

#[test]
fn test_all_toggle_combinations_parse_back() {
    for bits in 0u16..(1 << 12) {
        let mut values = [false; 12];
        for (i, value) in values.iter_mut().enumerate() {
            *value = bits & (1 << i) != 0;
        }
        let flags = ToggleFlags::from_values(values);
        let args = flags.to_args();

        assert_eq!(args.len(), TOGGLE_FLAG_NAMES.len());
        assert_eq!(parse_toggle_flags(&args), Some(flags), "combination {bits:#05x}");
    }
}
