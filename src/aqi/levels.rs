//! Maps numeric AQI values to severity levels.
//!
//! The six levels partition `[0, ∞)` into contiguous integer ranges. Anything
//! above the top of the published scale (500) still classifies as hazardous.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top of the published AQI scale. Generated readings are clamped to it.
pub const AQI_SCALE_MAX: u32 = 500;

/// Air quality severity levels, in ascending order of severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize,
)]
pub enum SeverityLevel {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    #[serde(rename = "Unhealthy")]
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    #[serde(rename = "Hazardous")]
    Hazardous,
}

/// Upper bound (inclusive) of each level, walked in ascending order.
const UPPER_BOUNDS: [(u32, SeverityLevel); 5] = [
    (50, SeverityLevel::Good),
    (100, SeverityLevel::Moderate),
    (150, SeverityLevel::UnhealthyForSensitiveGroups),
    (200, SeverityLevel::Unhealthy),
    (300, SeverityLevel::VeryUnhealthy),
];

/// Classifies an AQI value. Total and monotonic; values above 500 are `Hazardous`.
pub fn classify(aqi: u32) -> SeverityLevel {
    UPPER_BOUNDS
        .iter()
        .find(|(upper, _)| aqi <= *upper)
        .map(|(_, level)| *level)
        .unwrap_or(SeverityLevel::Hazardous)
}

/// Share of the 0..=500 scale covered by `aqi`, capped at 100.
pub fn gauge_percent(aqi: u32) -> f64 {
    (f64::from(aqi) / f64::from(AQI_SCALE_MAX) * 100.0).min(100.0)
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 6] = [
        SeverityLevel::Good,
        SeverityLevel::Moderate,
        SeverityLevel::UnhealthyForSensitiveGroups,
        SeverityLevel::Unhealthy,
        SeverityLevel::VeryUnhealthy,
        SeverityLevel::Hazardous,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Good => "Good",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            SeverityLevel::Unhealthy => "Unhealthy",
            SeverityLevel::VeryUnhealthy => "Very Unhealthy",
            SeverityLevel::Hazardous => "Hazardous",
        }
    }

    /// Inclusive AQI range of the level. `Hazardous` is reported up to the scale top.
    pub fn range(self) -> (u32, u32) {
        match self {
            SeverityLevel::Good => (0, 50),
            SeverityLevel::Moderate => (51, 100),
            SeverityLevel::UnhealthyForSensitiveGroups => (101, 150),
            SeverityLevel::Unhealthy => (151, 200),
            SeverityLevel::VeryUnhealthy => (201, 300),
            SeverityLevel::Hazardous => (301, AQI_SCALE_MAX),
        }
    }

    /// Standard AQI colour code (for UI display).
    pub fn color_hex(self) -> &'static str {
        match self {
            SeverityLevel::Good => "#00E400",                        // Green
            SeverityLevel::Moderate => "#FFFF00",                    // Yellow
            SeverityLevel::UnhealthyForSensitiveGroups => "#FF7E00", // Orange
            SeverityLevel::Unhealthy => "#FF0000",                   // Red
            SeverityLevel::VeryUnhealthy => "#8F3F97",               // Purple
            SeverityLevel::Hazardous => "#7E0023",                   // Maroon
        }
    }

    /// The colour as an RGB triple, for terminals with truecolor support.
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.color_hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, SeverityLevel::Good)]
    #[case(50, SeverityLevel::Good)]
    #[case(51, SeverityLevel::Moderate)]
    #[case(100, SeverityLevel::Moderate)]
    #[case(101, SeverityLevel::UnhealthyForSensitiveGroups)]
    #[case(150, SeverityLevel::UnhealthyForSensitiveGroups)]
    #[case(151, SeverityLevel::Unhealthy)]
    #[case(200, SeverityLevel::Unhealthy)]
    #[case(201, SeverityLevel::VeryUnhealthy)]
    #[case(300, SeverityLevel::VeryUnhealthy)]
    #[case(301, SeverityLevel::Hazardous)]
    #[case(500, SeverityLevel::Hazardous)]
    #[case(600, SeverityLevel::Hazardous)]
    #[case(u32::MAX, SeverityLevel::Hazardous)]
    fn classifies_boundaries(#[case] aqi: u32, #[case] expected: SeverityLevel) {
        assert_eq!(classify(aqi), expected);
    }

    #[test]
    fn classification_is_monotonic() {
        let mut previous = classify(0);
        for aqi in 1..=AQI_SCALE_MAX {
            let level = classify(aqi);
            assert!(level >= previous, "level dropped at aqi {}", aqi);
            previous = level;
        }
    }

    #[test]
    fn ranges_are_contiguous_and_agree_with_classify() {
        let mut expected_low = 0;
        for level in SeverityLevel::ALL {
            let (low, high) = level.range();
            assert_eq!(low, expected_low);
            assert_eq!(classify(low), level);
            assert_eq!(classify(high), level);
            expected_low = high + 1;
        }
        assert_eq!(expected_low, AQI_SCALE_MAX + 1);
    }

    #[test]
    fn levels_serialize_as_labels() {
        for level in SeverityLevel::ALL {
            let json = serde_json::to_value(level).unwrap();
            assert_eq!(json, level.label());
        }
    }

    #[test]
    fn colors_decode_to_rgb() {
        assert_eq!(SeverityLevel::Good.rgb(), (0x00, 0xE4, 0x00));
        assert_eq!(SeverityLevel::UnhealthyForSensitiveGroups.color_hex(), "#FF7E00");
        assert_eq!(SeverityLevel::Hazardous.rgb(), (0x7E, 0x00, 0x23));
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(250, 50.0)]
    #[case(500, 100.0)]
    #[case(750, 100.0)]
    fn gauge_caps_at_full_scale(#[case] aqi: u32, #[case] expected: f64) {
        assert!((gauge_percent(aqi) - expected).abs() < f64::EPSILON);
    }
}
