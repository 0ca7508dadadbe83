//! JSON shapes returned by the AirSight backend.
//!
//! Every field is optional: the backend drops fields when part of its
//! computation fails, and that is an expected response, not an error.

use crate::sync::fetch_result::FetchResult;
use crate::types::aqi::AqiCategory;
use crate::types::calendar::CalendarCell;
use crate::types::pollutant::Pollutant;
use crate::types::series::SeriesPoint;
use crate::types::tile::HighestTile;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

/// Body of `GET /pollutants`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollutantsResponse {
    pub highest_concentration: Option<Vec<HighestCandidate>>,
    pub chart_data: Option<ChartData>,
    pub calendar_data: Option<Vec<CalendarEntry>>,
    pub month_year: Option<String>,
    pub filter_type: Option<String>,
    pub selected_pollutant: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartData {
    pub labels: Option<Vec<String>>,
    pub data: Option<Vec<Value>>,
    pub title: Option<String>,
    pub unit: Option<String>,
}

/// A backend-computed highest observation. `day` and `concentration` are
/// numbers or the string `"--"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HighestCandidate {
    pub pollutant: Option<String>,
    pub date: Option<String>,
    pub day: Option<Value>,
    pub month_name: Option<String>,
    pub concentration: Option<Value>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarEntry {
    pub day: Option<u32>,
    pub aqi: Option<f64>,
    pub category: Option<String>,
    pub main_pollutant: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub models_trained: bool,
    pub prediction_source: Option<String>,
    pub model_info: Option<String>,
    #[serde(default)]
    pub available_models: Vec<String>,
    pub best_model: Option<String>,
    #[serde(default)]
    pub real_models_active: bool,
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Body of `GET /recommendations`.
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendations {
    pub aqi: f64,
    pub category: String,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl Recommendations {
    pub fn aqi_category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.aqi)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl ChartData {
    /// Pairs labels with values. Values that are not JSON numbers become
    /// NaN so the series is later rejected as invalid; mismatched lengths
    /// yield `None`.
    pub fn into_series(self) -> Option<Vec<SeriesPoint>> {
        let (labels, data) = (self.labels?, self.data?);
        if labels.len() != data.len() {
            warn!(
                "Chart data has {} labels but {} values",
                labels.len(),
                data.len()
            );
            return None;
        }
        Some(
            labels
                .into_iter()
                .zip(data)
                .map(|(label, value)| SeriesPoint {
                    label,
                    value: value.as_f64().unwrap_or(f64::NAN),
                })
                .collect(),
        )
    }
}

impl HighestCandidate {
    /// Converts the candidate into a tile, dropping it when the pollutant is
    /// missing or unknown.
    pub fn into_tile(self) -> Option<HighestTile> {
        let pollutant: Pollutant = match self.pollutant.as_deref()?.parse() {
            Ok(p) => p,
            Err(e) => {
                debug!("Skipping highest candidate: {}", e);
                return None;
            }
        };
        let day = self
            .day
            .as_ref()
            .and_then(as_number)
            .filter(|d| d.fract() == 0.0 && *d >= 1.0 && *d <= 31.0)
            .map(|d| d as u32);
        let concentration = self
            .concentration
            .as_ref()
            .and_then(as_number)
            .filter(|c| c.is_finite());
        Some(HighestTile {
            pollutant,
            date: self.date.unwrap_or_default(),
            day,
            month_name: self.month_name.unwrap_or_default(),
            concentration,
            unit: self.unit.unwrap_or_default(),
        })
    }
}

impl CalendarEntry {
    pub fn into_cell(self) -> Option<CalendarCell> {
        Some(CalendarCell {
            day: self.day?,
            aqi: self.aqi.filter(|a| a.is_finite())?,
            main_pollutant: self.main_pollutant.unwrap_or_default(),
        })
    }
}

impl From<PollutantsResponse> for FetchResult {
    fn from(response: PollutantsResponse) -> Self {
        FetchResult {
            series: response.chart_data.and_then(ChartData::into_series),
            highest_candidates: response
                .highest_concentration
                .unwrap_or_default()
                .into_iter()
                .filter_map(HighestCandidate::into_tile)
                .collect(),
            calendar_cells: response.calendar_data.map(|entries| {
                entries
                    .into_iter()
                    .filter_map(CalendarEntry::into_cell)
                    .collect()
            }),
            month_year: response.month_year,
        }
    }
}
