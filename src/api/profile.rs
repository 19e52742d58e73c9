//! Regional and seasonal baselines for the simulated provider.
//!
//! Each location carries a `Region` tag; the calendar month selects the set of
//! `Season`s in effect. Together they pick the baseline that random variation
//! is applied around.

use crate::models::{PollutantLevels, Region};

/// Seasonal windows used by the baseline tables. Windows overlap, so a month
/// can be in several seasons at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// April to July.
    Summer,
    /// June to September.
    SouthwestMonsoon,
    /// July to September.
    MonsoonPeak,
    /// October to December.
    NortheastMonsoon,
    /// October to February.
    PostMonsoon,
    /// November to February.
    Winter,
    /// November and December.
    EarlyWinter,
}

use Season::*;

/// Seasons in effect for each month, January first.
const SEASON_TABLE: [&[Season]; 12] = [
    &[PostMonsoon, Winter],
    &[PostMonsoon, Winter],
    &[],
    &[Summer],
    &[Summer],
    &[Summer, SouthwestMonsoon],
    &[Summer, SouthwestMonsoon, MonsoonPeak],
    &[SouthwestMonsoon, MonsoonPeak],
    &[SouthwestMonsoon, MonsoonPeak],
    &[NortheastMonsoon, PostMonsoon],
    &[NortheastMonsoon, PostMonsoon, Winter, EarlyWinter],
    &[NortheastMonsoon, PostMonsoon, Winter, EarlyWinter],
];

/// Seasons for a 1-based month. Out-of-range months have no seasons.
pub fn seasons_for_month(month: u32) -> &'static [Season] {
    match month {
        1..=12 => SEASON_TABLE[(month - 1) as usize],
        _ => &[],
    }
}

pub fn in_season(month: u32, season: Season) -> bool {
    seasons_for_month(month).contains(&season)
}

/// Current AQI is `base` plus a floored uniform draw from `[0, span)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiSpread {
    pub base: u32,
    pub span: u32,
}

pub fn current_aqi_spread(region: Region) -> AqiSpread {
    let (base, span) = match region {
        Region::Delhi => (100, 200),
        Region::Mumbai | Region::Kolkata => (50, 150),
        Region::Chennai => (40, 120),
        Region::Coimbatore => (30, 80),
        Region::TamilNadu | Region::Other => (30, 100),
    };
    AqiSpread { base, span }
}

pub fn forecast_baseline(region: Region) -> f64 {
    match region {
        Region::Delhi => 150.0,
        Region::Mumbai | Region::Kolkata => 100.0,
        Region::Chennai => 90.0,
        Region::Coimbatore => 60.0,
        Region::TamilNadu | Region::Other => 80.0,
    }
}

pub fn historical_baseline(region: Region, month: u32) -> f64 {
    if region.is_tamil_nadu() {
        if in_season(month, NortheastMonsoon) {
            50.0
        } else {
            70.0
        }
    } else {
        match region {
            Region::Delhi if in_season(month, PostMonsoon) => 200.0,
            Region::Delhi => 120.0,
            Region::Mumbai if in_season(month, SouthwestMonsoon) => 60.0,
            Region::Mumbai => 100.0,
            _ => 80.0,
        }
    }
}

/// Weather values that noise is applied around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherBaseline {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
}

pub fn weather_baseline(region: Region, month: u32) -> WeatherBaseline {
    let season = |s| in_season(month, s);

    if region.is_tamil_nadu() {
        return WeatherBaseline {
            temperature: if season(Summer) { 32.0 } else { 28.0 },
            humidity: if season(NortheastMonsoon) { 85.0 } else { 70.0 },
            wind_speed: 8.0,
            precipitation: if season(NortheastMonsoon) { 10.0 } else { 2.0 },
        };
    }

    match region {
        Region::Delhi => WeatherBaseline {
            temperature: if season(Summer) {
                35.0
            } else if season(EarlyWinter) {
                15.0
            } else {
                25.0
            },
            humidity: if season(MonsoonPeak) { 80.0 } else { 50.0 },
            wind_speed: 10.0,
            precipitation: if season(MonsoonPeak) { 8.0 } else { 1.0 },
        },
        Region::Mumbai => WeatherBaseline {
            temperature: 28.0,
            humidity: 75.0,
            wind_speed: 12.0,
            precipitation: if season(SouthwestMonsoon) { 15.0 } else { 2.0 },
        },
        _ => WeatherBaseline {
            temperature: 28.0,
            humidity: 60.0,
            wind_speed: 10.0,
            precipitation: 4.0,
        },
    }
}

/// Pollutant concentrations before seasonal adjustment and variation.
pub fn pollutant_baseline(region: Region) -> PollutantLevels {
    if region.is_tamil_nadu() {
        PollutantLevels {
            pm10: 45.0,
            co: 0.8,
            no2: 25.0,
            so2: 15.0,
            o3: 40.0,
        }
    } else if region == Region::Delhi {
        PollutantLevels {
            pm10: 120.0,
            co: 2.1,
            no2: 45.0,
            so2: 25.0,
            o3: 60.0,
        }
    } else {
        PollutantLevels {
            pm10: 60.0,
            co: 1.2,
            no2: 30.0,
            so2: 20.0,
            o3: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn months_in(season: Season) -> Vec<u32> {
        (1..=12).filter(|m| in_season(*m, season)).collect()
    }

    #[test]
    fn season_windows_cover_expected_months() {
        assert_eq!(months_in(Season::Summer), vec![4, 5, 6, 7]);
        assert_eq!(months_in(Season::SouthwestMonsoon), vec![6, 7, 8, 9]);
        assert_eq!(months_in(Season::MonsoonPeak), vec![7, 8, 9]);
        assert_eq!(months_in(Season::NortheastMonsoon), vec![10, 11, 12]);
        assert_eq!(months_in(Season::PostMonsoon), vec![1, 2, 10, 11, 12]);
        assert_eq!(months_in(Season::Winter), vec![1, 2, 11, 12]);
        assert_eq!(months_in(Season::EarlyWinter), vec![11, 12]);
    }

    #[test]
    fn out_of_range_month_has_no_seasons() {
        assert!(seasons_for_month(0).is_empty());
        assert!(seasons_for_month(13).is_empty());
    }

    #[test]
    fn delhi_is_the_worst_and_coimbatore_the_cleanest() {
        let delhi = current_aqi_spread(Region::Delhi);
        let coimbatore = current_aqi_spread(Region::Coimbatore);
        assert!(delhi.base > coimbatore.base);
        assert!(forecast_baseline(Region::Delhi) > forecast_baseline(Region::Coimbatore));
    }

    #[rstest]
    #[case(Region::Chennai, 11, 50.0)]
    #[case(Region::TamilNadu, 3, 70.0)]
    #[case(Region::Coimbatore, 10, 50.0)]
    #[case(Region::Delhi, 1, 200.0)]
    #[case(Region::Delhi, 10, 200.0)]
    #[case(Region::Delhi, 5, 120.0)]
    #[case(Region::Mumbai, 7, 60.0)]
    #[case(Region::Mumbai, 12, 100.0)]
    #[case(Region::Kolkata, 7, 80.0)]
    #[case(Region::Other, 1, 80.0)]
    fn historical_baseline_follows_region_and_month(
        #[case] region: Region,
        #[case] month: u32,
        #[case] expected: f64,
    ) {
        assert_eq!(historical_baseline(region, month), expected);
    }

    #[test]
    fn delhi_weather_has_three_temperature_regimes() {
        assert_eq!(weather_baseline(Region::Delhi, 5).temperature, 35.0);
        assert_eq!(weather_baseline(Region::Delhi, 12).temperature, 15.0);
        assert_eq!(weather_baseline(Region::Delhi, 2).temperature, 25.0);
        assert_eq!(weather_baseline(Region::Delhi, 8).humidity, 80.0);
        assert_eq!(weather_baseline(Region::Delhi, 8).precipitation, 8.0);
    }

    #[test]
    fn tamil_nadu_weather_tracks_the_northeast_monsoon() {
        let monsoon = weather_baseline(Region::Chennai, 11);
        assert_eq!(monsoon.humidity, 85.0);
        assert_eq!(monsoon.precipitation, 10.0);
        assert_eq!(monsoon.wind_speed, 8.0);

        let summer = weather_baseline(Region::TamilNadu, 5);
        assert_eq!(summer.temperature, 32.0);
        assert_eq!(summer.precipitation, 2.0);
    }

    #[test]
    fn mumbai_and_other_weather_baselines() {
        assert_eq!(weather_baseline(Region::Mumbai, 6).precipitation, 15.0);
        assert_eq!(weather_baseline(Region::Mumbai, 1).precipitation, 2.0);
        assert_eq!(
            weather_baseline(Region::Kolkata, 6),
            WeatherBaseline {
                temperature: 28.0,
                humidity: 60.0,
                wind_speed: 10.0,
                precipitation: 4.0,
            }
        );
    }

    #[test]
    fn pollutant_baselines_group_tamil_nadu_cities() {
        assert_eq!(
            pollutant_baseline(Region::Coimbatore),
            pollutant_baseline(Region::TamilNadu)
        );
        assert_eq!(pollutant_baseline(Region::Delhi).pm10, 120.0);
        assert_eq!(pollutant_baseline(Region::Mumbai).co, 1.2);
    }
}
