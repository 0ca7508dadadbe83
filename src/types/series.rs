use serde::{Deserialize, Serialize};

/// A single labelled value on the pollutant chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Colour band of a chart bar, handed to the renderer as the point
/// classification function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarLevel {
    Low,
    Moderate,
    High,
    Severe,
    Invalid,
}

impl BarLevel {
    /// # Examples
    ///
    /// ```
    /// use airsight::BarLevel;
    ///
    /// assert_eq!(BarLevel::classify(25.0), BarLevel::Low);
    /// assert_eq!(BarLevel::classify(50.0), BarLevel::Moderate);
    /// assert_eq!(BarLevel::classify(75.0), BarLevel::High);
    /// assert_eq!(BarLevel::classify(75.1), BarLevel::Severe);
    /// ```
    pub fn classify(value: f64) -> BarLevel {
        if !value.is_finite() {
            BarLevel::Invalid
        } else if value <= 25.0 {
            BarLevel::Low
        } else if value <= 50.0 {
            BarLevel::Moderate
        } else if value <= 75.0 {
            BarLevel::High
        } else {
            BarLevel::Severe
        }
    }
}

/// Whether a series can be drawn: non-empty and made of finite values only.
pub(crate) fn is_drawable(points: &[SeriesPoint]) -> bool {
    !points.is_empty() && points.iter().all(|p| p.value.is_finite())
}
