use crate::types::aqi::AqiCategory;
use serde::{Deserialize, Serialize};

/// One day of the monthly AQI calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub day: u32,
    pub aqi: f64,
    pub main_pollutant: String,
}

impl CalendarCell {
    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.aqi)
    }
}
