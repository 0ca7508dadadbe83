use std::fmt;

/// Severity band of an Air Quality Index value.
///
/// # Examples
///
/// ```
/// use airsight::AqiCategory;
///
/// assert_eq!(AqiCategory::from_aqi(42.0), AqiCategory::Good);
/// assert_eq!(AqiCategory::from_aqi(150.0), AqiCategory::UnhealthyForSensitiveGroups);
/// assert_eq!(AqiCategory::from_aqi(301.0).to_string(), "Hazardous");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    pub fn from_aqi(aqi: f64) -> AqiCategory {
        if aqi <= 50.0 {
            AqiCategory::Good
        } else if aqi <= 100.0 {
            AqiCategory::Moderate
        } else if aqi <= 150.0 {
            AqiCategory::UnhealthyForSensitiveGroups
        } else if aqi <= 200.0 {
            AqiCategory::Unhealthy
        } else if aqi <= 300.0 {
            AqiCategory::VeryUnhealthy
        } else {
            AqiCategory::Hazardous
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Short advice line shown next to the calendar day.
    pub fn health_advice(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Great for outdoor activities!",
            AqiCategory::Moderate => "Moderate - limit prolonged outdoor exertion",
            AqiCategory::UnhealthyForSensitiveGroups => {
                "Sensitive groups should avoid outdoor activities"
            }
            _ => "Everyone should avoid outdoor activities",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(AqiCategory::from_aqi(50.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(50.5), AqiCategory::Moderate);
        assert_eq!(AqiCategory::from_aqi(200.0), AqiCategory::Unhealthy);
        assert_eq!(AqiCategory::from_aqi(300.0), AqiCategory::VeryUnhealthy);
    }

    #[test]
    fn test_advice_collapses_above_sensitive() {
        assert_eq!(
            AqiCategory::Hazardous.health_advice(),
            AqiCategory::Unhealthy.health_advice()
        );
    }
}
