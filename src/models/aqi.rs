use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{AQI_GOOD_MAX, AQI_MODERATE_MAX, AQI_SENSITIVE_MAX, AQI_UNHEALTHY_MAX};

/// Air quality tier derived from a PM2.5 reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AqiStatus {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    #[serde(rename = "Unhealthy")]
    Unhealthy,
    #[serde(rename = "Very Unhealthy/Hazardous")]
    VeryUnhealthyOrHazardous,
}

impl AqiStatus {
    /// Every tier, best first.
    pub const ALL: [AqiStatus; 5] = [
        AqiStatus::Good,
        AqiStatus::Moderate,
        AqiStatus::UnhealthyForSensitiveGroups,
        AqiStatus::Unhealthy,
        AqiStatus::VeryUnhealthyOrHazardous,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AqiStatus::Good => "Good",
            AqiStatus::Moderate => "Moderate",
            AqiStatus::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiStatus::Unhealthy => "Unhealthy",
            AqiStatus::VeryUnhealthyOrHazardous => "Very Unhealthy/Hazardous",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        AqiStatus::ALL
            .iter()
            .copied()
            .find(|status| status.label() == s.trim())
    }
}

impl fmt::Display for AqiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a PM2.5 concentration. Boundary values belong to the better tier;
/// NaN fails every comparison and lands in the top tier.
pub fn classify_aqi(value: f64) -> AqiStatus {
    if value <= AQI_GOOD_MAX {
        AqiStatus::Good
    } else if value <= AQI_MODERATE_MAX {
        AqiStatus::Moderate
    } else if value <= AQI_SENSITIVE_MAX {
        AqiStatus::UnhealthyForSensitiveGroups
    } else if value <= AQI_UNHEALTHY_MAX {
        AqiStatus::Unhealthy
    } else {
        AqiStatus::VeryUnhealthyOrHazardous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_lower_tier() {
        assert_eq!(classify_aqi(50.0), AqiStatus::Good);
        assert_eq!(classify_aqi(50.0001), AqiStatus::Moderate);
        assert_eq!(classify_aqi(100.0), AqiStatus::Moderate);
        assert_eq!(classify_aqi(100.5), AqiStatus::UnhealthyForSensitiveGroups);
        assert_eq!(classify_aqi(150.0), AqiStatus::UnhealthyForSensitiveGroups);
        assert_eq!(classify_aqi(200.0), AqiStatus::Unhealthy);
        assert_eq!(classify_aqi(200.0001), AqiStatus::VeryUnhealthyOrHazardous);
    }

    #[test]
    fn test_classify_is_total() {
        assert_eq!(classify_aqi(-10.0), AqiStatus::Good);
        assert_eq!(classify_aqi(f64::NEG_INFINITY), AqiStatus::Good);
        assert_eq!(classify_aqi(f64::INFINITY), AqiStatus::VeryUnhealthyOrHazardous);
        assert_eq!(classify_aqi(f64::NAN), AqiStatus::VeryUnhealthyOrHazardous);
    }

    #[test]
    fn test_label_round_trip() {
        for status in AqiStatus::ALL {
            assert_eq!(AqiStatus::parse(status.label()), Some(status));
        }
        assert_eq!(AqiStatus::parse("Hazardous"), None);
    }
}
