//! Property-based tests for the resolution catalogue

use proptest::prelude::*;
use qfreerdp_core::models::{
    DisplayArea, MAX_CUSTOM_DIMENSION, MIN_CUSTOM_DIMENSION, Resolution, STANDARD_RESOLUTIONS,
    match_catalogue, parse_custom_dimension, usable_resolutions,
};

fn arb_display() -> impl Strategy<Value = DisplayArea> {
    (-4000i32..4000, -4000i32..4000, 0u32..10_000, 0u32..6_000)
        .prop_map(|(x, y, w, h)| DisplayArea::new(x, y, w, h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The offered list is a non-empty, sorted subset of the catalogue
    #[test]
    fn prop_usable_is_sorted_subset(displays in prop::collection::vec(arb_display(), 0..4)) {
        let usable = usable_resolutions(STANDARD_RESOLUTIONS, &displays);

        prop_assert!(!usable.is_empty());
        prop_assert!(usable.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(usable.iter().all(|r| STANDARD_RESOLUTIONS.contains(r)));
    }

    /// Every offered size fits some display, unless nothing fits at all
    #[test]
    fn prop_usable_entries_fit(displays in prop::collection::vec(arb_display(), 1..4)) {
        let usable = usable_resolutions(STANDARD_RESOLUTIONS, &displays);
        let fits = |r: &Resolution| displays.iter().any(|d| r.fits_in(d));

        if STANDARD_RESOLUTIONS.iter().any(fits) {
            prop_assert!(usable.iter().all(fits));
            let expected = STANDARD_RESOLUTIONS.iter().filter(|r| fits(*r)).count();
            prop_assert_eq!(usable.len(), expected);
        } else {
            prop_assert_eq!(usable, vec![STANDARD_RESOLUTIONS[0]]);
        }
    }

    /// Snapping always lands inside the catalogue
    #[test]
    fn prop_match_catalogue_stays_inside(
        displays in prop::collection::vec(arb_display(), 0..3),
        width in 0u32..10_000,
        height in 0u32..10_000,
    ) {
        let catalogue = usable_resolutions(STANDARD_RESOLUTIONS, &displays);
        let wanted = Resolution::new(width, height);
        let matched = match_catalogue(&catalogue, wanted).unwrap();

        prop_assert!(catalogue.contains(&matched));
        if catalogue.contains(&wanted) {
            prop_assert_eq!(matched, wanted);
        } else {
            prop_assert_eq!(Some(&matched), catalogue.last());
        }
    }

    /// Custom dimensions are accepted exactly within the allowed range
    #[test]
    fn prop_custom_dimension_range(value in 0u32..200_000, padded in any::<bool>()) {
        let text = if padded { format!("  {value} ") } else { value.to_string() };
        let in_range = (MIN_CUSTOM_DIMENSION..=MAX_CUSTOM_DIMENSION).contains(&value);
        prop_assert_eq!(parse_custom_dimension(&text), in_range.then_some(value));
    }

    /// Text that is not a plain integer never parses
    #[test]
    fn prop_custom_dimension_rejects_text(text in "[a-zA-Z.,-]{1,8}") {
        prop_assert_eq!(parse_custom_dimension(&text), None);
    }
}

#[test]
fn test_custom_dimension_edges() {
    assert_eq!(parse_custom_dimension("99"), None);
    assert_eq!(parse_custom_dimension("100"), Some(100));
    assert_eq!(parse_custom_dimension("65535"), Some(65535));
    assert_eq!(parse_custom_dimension("65536"), None);
    assert_eq!(parse_custom_dimension(""), None);
}
