//! Rule-based yield estimation
//!
//! Average yields and irrigation multipliers used when no trained model is
//! available. Lookups are case-insensitive; unknown crops and irrigation
//! methods fall back to the defaults below.

use crate::types::IrrigationType;

/// Base yield for crops missing from the table (tons/hectare)
pub const DEFAULT_BASE_YIELD: f64 = 4.0;

/// Multiplier for irrigation methods missing from the table
pub const DEFAULT_IRRIGATION_MULTIPLIER: f64 = 1.0;

/// Average yields per hectare (tons)
pub const BASE_YIELDS: &[(&str, f64)] = &[
    ("tomato", 5.5),
    ("onion", 4.5),
    ("potato", 6.5),
    ("wheat", 3.5),
    ("rice", 5.0),
    ("cabbage", 4.0),
    ("cauliflower", 3.8),
    ("brinjal", 4.2),
    ("chili", 2.5),
];

/// Average yield per hectare for a crop
pub fn base_yield(crop_name: &str) -> f64 {
    let crop = crop_name.trim().to_lowercase();
    BASE_YIELDS
        .iter()
        .find(|(name, _)| *name == crop)
        .map(|(_, tons)| *tons)
        .unwrap_or(DEFAULT_BASE_YIELD)
}

/// Yield impact of an irrigation method
pub fn irrigation_multiplier(irrigation: &IrrigationType) -> f64 {
    match irrigation {
        IrrigationType::Drip => 1.2,
        IrrigationType::Sprinkler => 1.1,
        IrrigationType::Flood => 1.0,
        IrrigationType::Rainfed => 0.85,
        IrrigationType::Other(_) => DEFAULT_IRRIGATION_MULTIPLIER,
    }
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Lookup-table yield estimate in tons, rounded to 2 decimals.
///
/// Pure function of its inputs; never negative for a non-negative area.
pub fn predict_fallback(crop_name: &str, area: f64, irrigation: &IrrigationType) -> f64 {
    let prediction = area * base_yield(crop_name) * irrigation_multiplier(irrigation);
    round2(prediction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MAX_CULTIVATED_AREA_HA;
    use proptest::prelude::*;

    #[test]
    fn test_tomato_with_drip() {
        assert_eq!(predict_fallback("tomato", 2.0, &IrrigationType::Drip), 13.2);
    }

    #[test]
    fn test_onion_with_sprinkler() {
        assert_eq!(predict_fallback("onion", 5.0, &IrrigationType::Sprinkler), 24.75);
    }

    #[test]
    fn test_unknown_crop_uses_default() {
        assert_eq!(predict_fallback("durian", 1.0, &IrrigationType::Flood), 4.0);
    }

    #[test]
    fn test_unknown_irrigation_uses_default() {
        let canal = IrrigationType::from("canal");
        assert_eq!(irrigation_multiplier(&canal), 1.0);
        assert_eq!(predict_fallback("potato", 3.0, &canal), 19.5);
    }

    #[test]
    fn test_crop_lookup_is_case_insensitive() {
        assert_eq!(
            predict_fallback("TOMATO", 2.0, &IrrigationType::Drip),
            predict_fallback("tomato", 2.0, &IrrigationType::Drip)
        );
        assert_eq!(base_yield("Chili"), 2.5);
    }

    #[test]
    fn test_crop_lookup_ignores_surrounding_whitespace() {
        assert_eq!(base_yield(" tomato "), 5.5);
        assert_eq!(predict_fallback("\tonion", 5.0, &IrrigationType::Sprinkler), 24.75);
    }

    #[test]
    fn test_rainfed_penalty() {
        assert_eq!(predict_fallback("wheat", 4.0, &IrrigationType::Rainfed), 11.9);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(13.200000000000001), 13.2);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(1.234), 1.23);
    }

    fn irrigation_strategy() -> impl Strategy<Value = IrrigationType> {
        prop_oneof![
            Just(IrrigationType::Drip),
            Just(IrrigationType::Sprinkler),
            Just(IrrigationType::Flood),
            Just(IrrigationType::Rainfed),
            "[a-z]{1,8}".prop_map(IrrigationType::from),
        ]
    }

    proptest! {
        #[test]
        fn prop_accepted_areas_give_finite_yields(
            area in 0.001f64..=MAX_CULTIVATED_AREA_HA,
            crop in prop::sample::select(vec!["tomato", "potato", "chili", "durian"]),
            irrigation in irrigation_strategy(),
        ) {
            let tons = predict_fallback(crop, area, &irrigation);
            prop_assert!(tons.is_finite());
            prop_assert!(tons >= 0.0);
        }
    }
}
