//! Combines pollutant concentrations into a single predicted AQI.
//!
//! The weighting is a fixed linear heuristic, not a calibrated model: each
//! concentration is divided by a reference value, the ratios are summed, and the
//! sum is scaled by 50.

use super::profile::{in_season, Season};
use crate::models::PollutantLevels;

/// Reference concentrations the pollutants are divided by.
const PM10_REFERENCE: f64 = 100.0;
const CO_REFERENCE: f64 = 2.0;
const NO2_REFERENCE: f64 = 40.0;
const SO2_REFERENCE: f64 = 30.0;
const O3_REFERENCE: f64 = 50.0;

const SCORE_SCALE: f64 = 50.0;

/// Maximum relative variation applied to each pollutant (±20%).
pub const POLLUTANT_VARIATION: f64 = 0.2;

/// `floor((pm10/100 + co/2 + no2/40 + so2/30 + o3/50) * 50)`.
///
/// The score is not clamped to the 0..=500 AQI scale.
pub fn predicted_aqi(levels: &PollutantLevels) -> u32 {
    let score = levels.pm10 / PM10_REFERENCE
        + levels.co / CO_REFERENCE
        + levels.no2 / NO2_REFERENCE
        + levels.so2 / SO2_REFERENCE
        + levels.o3 / O3_REFERENCE;
    // `as` saturates, and inputs are never negative.
    (score * SCORE_SCALE).floor().max(0.0) as u32
}

/// Scales PM10, CO and NO2 for winter smog or monsoon washout.
pub fn apply_seasonal_adjustment(levels: PollutantLevels, month: u32) -> PollutantLevels {
    let (pm10, co, no2) = if in_season(month, Season::Winter) {
        (1.3, 1.2, 1.4)
    } else if in_season(month, Season::MonsoonPeak) {
        (0.7, 0.8, 0.9)
    } else {
        (1.0, 1.0, 1.0)
    };
    PollutantLevels {
        pm10: levels.pm10 * pm10,
        co: levels.co * co,
        no2: levels.no2 * no2,
        ..levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tamil_nadu() -> PollutantLevels {
        PollutantLevels {
            pm10: 45.0,
            co: 0.8,
            no2: 25.0,
            so2: 15.0,
            o3: 40.0,
        }
    }

    #[test]
    fn scores_the_reference_profile() {
        // (0.45 + 0.4 + 0.625 + 0.5 + 0.8) * 50 = 138.75
        assert_eq!(predicted_aqi(&tamil_nadu()), 138);
    }

    #[test]
    fn zero_concentrations_score_zero() {
        let zero = PollutantLevels {
            pm10: 0.0,
            co: 0.0,
            no2: 0.0,
            so2: 0.0,
            o3: 0.0,
        };
        assert_eq!(predicted_aqi(&zero), 0);
    }

    #[test]
    fn score_is_not_clamped_to_the_aqi_scale() {
        let heavy = PollutantLevels {
            pm10: 900.0,
            co: 10.0,
            no2: 200.0,
            so2: 90.0,
            o3: 150.0,
        };
        // (9 + 5 + 5 + 3 + 3) * 50
        assert_eq!(predicted_aqi(&heavy), 1250);
    }

    #[rstest]
    #[case(12, 1.3, 1.2, 1.4)]
    #[case(1, 1.3, 1.2, 1.4)]
    #[case(8, 0.7, 0.8, 0.9)]
    #[case(4, 1.0, 1.0, 1.0)]
    #[case(10, 1.0, 1.0, 1.0)]
    fn seasonal_adjustment_scales_three_pollutants(
        #[case] month: u32,
        #[case] pm10: f64,
        #[case] co: f64,
        #[case] no2: f64,
    ) {
        let base = tamil_nadu();
        let adjusted = apply_seasonal_adjustment(base, month);
        assert!((adjusted.pm10 - base.pm10 * pm10).abs() < 1e-9);
        assert!((adjusted.co - base.co * co).abs() < 1e-9);
        assert!((adjusted.no2 - base.no2 * no2).abs() < 1e-9);
        assert_eq!(adjusted.so2, base.so2);
        assert_eq!(adjusted.o3, base.o3);
    }
}
