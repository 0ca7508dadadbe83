//! Defines the six pollutants tracked by the dashboard, their display units
//! and the thresholds used to colour their concentrations.

use crate::types::error::ViewKeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six pollutants shown on the pollutant analysis view.
///
/// The declaration order is the fixed display order of the highest
/// concentration tiles: PM2.5, PM10, NO2, SO2, CO, O3.
///
/// # Examples
///
/// ```
/// use airsight::Pollutant;
///
/// let p: Pollutant = "PM2.5".parse().unwrap();
/// assert_eq!(p, Pollutant::Pm25);
/// assert_eq!(p.to_string(), "PM2.5");
/// assert_eq!(Pollutant::Co.unit(), "ppm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pollutant {
    /// Fine particulate matter, µg/m³.
    #[serde(rename = "PM2.5")]
    Pm25,
    /// Coarse particulate matter, µg/m³.
    #[serde(rename = "PM10")]
    Pm10,
    /// Nitrogen dioxide, ppb.
    #[serde(rename = "NO2")]
    No2,
    /// Sulphur dioxide, ppb.
    #[serde(rename = "SO2")]
    So2,
    /// Carbon monoxide, ppm.
    #[serde(rename = "CO")]
    Co,
    /// Ozone, ppb.
    #[serde(rename = "O3")]
    O3,
}

/// How worrying a single concentration reading is for its pollutant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcentrationLevel {
    Good,
    Moderate,
    Unhealthy,
    /// The reading is unavailable or not a finite number.
    Unknown,
}

impl Pollutant {
    /// All pollutants in tile display order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    /// The identifier used by the backend API and in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
        }
    }

    /// Measurement unit of the pollutant's concentration.
    pub fn unit(&self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => "µg/m³",
            Pollutant::No2 | Pollutant::So2 | Pollutant::O3 => "ppb",
            Pollutant::Co => "ppm",
        }
    }

    /// Position of the pollutant in [`Pollutant::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    // (moderate, unhealthy) upper bounds, inclusive
    fn thresholds(&self) -> (f64, f64) {
        match self {
            Pollutant::Pm25 => (35.0, 55.0),
            Pollutant::Pm10 => (155.0, 255.0),
            Pollutant::O3 => (70.0, 85.0),
            Pollutant::No2 => (54.0, 100.0),
            Pollutant::So2 => (36.0, 75.0),
            Pollutant::Co => (9.0, 15.0),
        }
    }

    /// Classifies a concentration of this pollutant.
    ///
    /// # Examples
    ///
    /// ```
    /// use airsight::{ConcentrationLevel, Pollutant};
    ///
    /// assert_eq!(Pollutant::Pm25.concentration_level(Some(35.0)), ConcentrationLevel::Good);
    /// assert_eq!(Pollutant::Pm25.concentration_level(Some(40.0)), ConcentrationLevel::Moderate);
    /// assert_eq!(Pollutant::Co.concentration_level(Some(20.0)), ConcentrationLevel::Unhealthy);
    /// assert_eq!(Pollutant::O3.concentration_level(None), ConcentrationLevel::Unknown);
    /// ```
    pub fn concentration_level(&self, concentration: Option<f64>) -> ConcentrationLevel {
        let Some(value) = concentration.filter(|v| v.is_finite()) else {
            return ConcentrationLevel::Unknown;
        };
        let (moderate, unhealthy) = self.thresholds();
        if value <= moderate {
            ConcentrationLevel::Good
        } else if value <= unhealthy {
            ConcentrationLevel::Moderate
        } else {
            ConcentrationLevel::Unhealthy
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pollutant {
    type Err = ViewKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Pollutant::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ViewKeyError::UnknownPollutant(s.to_string()))
    }
}
