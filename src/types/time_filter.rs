use crate::types::error::ViewKeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of the pollutant chart.
///
/// Changing only the filter re-fetches the chart but never repaints the
/// calendar or the cached tiles.
///
/// # Examples
///
/// ```
/// use airsight::TimeFilter;
///
/// assert_eq!(" Weekly ".parse::<TimeFilter>().unwrap(), TimeFilter::Weekly);
/// assert_eq!(TimeFilter::Hourly.to_string(), "hourly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    Hourly,
    #[default]
    Daily,
    Weekly,
}

impl TimeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFilter::Hourly => "hourly",
            TimeFilter::Daily => "daily",
            TimeFilter::Weekly => "weekly",
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFilter {
    type Err = ViewKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(TimeFilter::Hourly),
            "daily" => Ok(TimeFilter::Daily),
            "weekly" => Ok(TimeFilter::Weekly),
            _ => Err(ViewKeyError::UnknownFilter(s.to_string())),
        }
    }
}
