//! Health recommendations, one fixed record per severity level.

use super::SeverityLevel;
use serde::Serialize;

/// Advice shown alongside a reading of a given severity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecommendation {
    pub level: SeverityLevel,
    pub general_advice: &'static str,
    pub sensitive_groups: &'static str,
    pub outdoor_activities: &'static str,
    pub indoor_advice: &'static str,
}

const GOOD: HealthRecommendation = HealthRecommendation {
    level: SeverityLevel::Good,
    general_advice:
        "Air quality is considered satisfactory, and air pollution poses little or no risk.",
    sensitive_groups: "No precautions needed.",
    outdoor_activities: "Great time for outdoor activities.",
    indoor_advice: "No special indoor measures required.",
};

const MODERATE: HealthRecommendation = HealthRecommendation {
    level: SeverityLevel::Moderate,
    general_advice: "Air quality is acceptable; however, there may be some concern for a small number of people who are unusually sensitive to air pollution.",
    sensitive_groups:
        "Unusually sensitive people should consider reducing prolonged or heavy exertion.",
    outdoor_activities: "Most people can safely engage in outdoor activities.",
    indoor_advice: "No special indoor measures required.",
};

const SENSITIVE: HealthRecommendation = HealthRecommendation {
    level: SeverityLevel::UnhealthyForSensitiveGroups,
    general_advice: "Members of sensitive groups may experience health effects. The general public is less likely to be affected.",
    sensitive_groups: "People with heart or lung disease, older adults, children, and teenagers should reduce prolonged or heavy exertion.",
    outdoor_activities: "Keep outdoor activities moderate and take more breaks.",
    indoor_advice: "Consider running an air purifier if available.",
};

const UNHEALTHY: HealthRecommendation = HealthRecommendation {
    level: SeverityLevel::Unhealthy,
    general_advice: "Everyone may begin to experience health effects. Members of sensitive groups may experience more serious health effects.",
    sensitive_groups: "People with heart or lung disease, older adults, children, and teenagers should avoid prolonged or heavy exertion.",
    outdoor_activities: "Everyone should reduce prolonged or heavy exertion. Move activities indoors or reschedule.",
    indoor_advice: "Keep windows closed. Use air purifiers if available.",
};

const VERY_UNHEALTHY: HealthRecommendation = HealthRecommendation {
    level: SeverityLevel::VeryUnhealthy,
    general_advice: "Health alert: everyone may experience more serious health effects.",
    sensitive_groups: "People with heart or lung disease, older adults, children, and teenagers should avoid all physical activity outdoors.",
    outdoor_activities: "Everyone should avoid prolonged or heavy exertion. Consider moving all activities indoors.",
    indoor_advice: "Stay indoors with windows closed. Use air purifiers.",
};

const HAZARDOUS: HealthRecommendation = HealthRecommendation {
    level: SeverityLevel::Hazardous,
    general_advice: "Health warnings of emergency conditions. The entire population is more likely to be affected.",
    sensitive_groups: "People with heart or lung disease, older adults, children, and teenagers should remain indoors and keep activity levels low.",
    outdoor_activities: "Everyone should avoid all outdoor physical activity.",
    indoor_advice:
        "Stay indoors. Keep windows and doors tightly closed. Run air purifiers continuously.",
};

/// Returns the recommendation record for `level`.
///
/// The match is exhaustive over the closed level set, so every level has
/// exactly one record and there is no fallback.
pub fn recommendation_for(level: SeverityLevel) -> &'static HealthRecommendation {
    match level {
        SeverityLevel::Good => &GOOD,
        SeverityLevel::Moderate => &MODERATE,
        SeverityLevel::UnhealthyForSensitiveGroups => &SENSITIVE,
        SeverityLevel::Unhealthy => &UNHEALTHY,
        SeverityLevel::VeryUnhealthy => &VERY_UNHEALTHY,
        SeverityLevel::Hazardous => &HAZARDOUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level_has_its_own_non_empty_record() {
        for level in SeverityLevel::ALL {
            let rec = recommendation_for(level);
            assert_eq!(rec.level, level);
            assert!(!rec.general_advice.is_empty());
            assert!(!rec.sensitive_groups.is_empty());
            assert!(!rec.outdoor_activities.is_empty());
            assert!(!rec.indoor_advice.is_empty());
        }
    }

    #[test]
    fn records_are_distinct() {
        let mut seen = Vec::new();
        for level in SeverityLevel::ALL {
            let advice = recommendation_for(level).general_advice;
            assert!(!seen.contains(&advice));
            seen.push(advice);
        }
    }
}
