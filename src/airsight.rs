//! The main entry point for talking to the AirSight backend API.

use crate::api::loader::ApiLoader;
use crate::api::wire::{HealthStatus, PollutantsResponse, Recommendations};
use crate::error::AirSightError;
use crate::sync::fetch_result::FetchResult;
use crate::types::view_key::ViewKey;
use crate::view::PollutantSource;
use bon::bon;
use chrono::{Local, NaiveDate};
use std::time::Duration;

/// Backend address used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";
/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
/// Environment variable read by [`AirSight::from_env`].
pub const BASE_URL_ENV: &str = "AIRSIGHT_API_URL";

/// Client for the AirSight prediction API.
///
/// Create one with [`AirSight::builder()`] or [`AirSight::from_env()`]. The
/// client issues a single request per call; retries are left to the caller.
///
/// # Examples
///
/// ```no_run
/// # use airsight::{AirSight, AirSightError, Pollutant, TimeFilter, ViewKey};
/// # use std::time::Duration;
/// # #[tokio::main]
/// # async fn main() -> Result<(), AirSightError> {
/// let client = AirSight::builder()
///     .base_url("http://127.0.0.1:5000/api")
///     .timeout(Duration::from_secs(3))
///     .build()?;
///
/// let key = ViewKey::new(2025, 8, Pollutant::Pm25, TimeFilter::Daily)?;
/// let response = client.pollutants(&key).await?;
/// println!("{:?}", response.month_year);
/// # Ok(())
/// # }
/// ```
pub struct AirSight {
    loader: ApiLoader,
}

#[bon]
impl AirSight {
    /// Creates a client.
    ///
    /// # Arguments
    ///
    /// * `.base_url(&str)`: Optional. API root, defaults to [`DEFAULT_BASE_URL`].
    /// * `.timeout(Duration)`: Optional. Per-request timeout, defaults to [`DEFAULT_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`AirSightError::Api`] if the HTTP client cannot be constructed.
    #[builder]
    pub fn new(base_url: Option<&str>, timeout: Option<Duration>) -> Result<Self, AirSightError> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        Ok(Self {
            loader: ApiLoader::new(base_url, timeout)?,
        })
    }

    /// Creates a client whose base URL is taken from `AIRSIGHT_API_URL` when
    /// set.
    pub fn from_env() -> Result<Self, AirSightError> {
        let base_url = std::env::var(BASE_URL_ENV).ok();
        Self::builder().maybe_base_url(base_url.as_deref()).build()
    }

    pub fn base_url(&self) -> &str {
        self.loader.base_url()
    }

    /// Fetches chart series, highest-concentration candidates and the month
    /// calendar for `key` from `GET /pollutants`.
    ///
    /// # Errors
    ///
    /// Returns [`AirSightError::Api`] for network failures, non-success
    /// statuses and undecodable bodies. Missing fields are not errors.
    pub async fn pollutants(&self, key: &ViewKey) -> Result<PollutantsResponse, AirSightError> {
        let query = [
            ("year", key.year().to_string()),
            ("month", key.month().to_string()),
            ("filter", key.filter().to_string()),
            ("pollutant", key.pollutant().to_string()),
        ];
        Ok(self.loader.get_json("pollutants", &query).await?)
    }

    /// Backend liveness and model status from `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, AirSightError> {
        Ok(self.loader.get_json("health", &[]).await?)
    }

    /// Advice for the predicted AQI of a day, from `GET /recommendations`.
    ///
    /// * `.date(NaiveDate)`: Optional. Defaults to today in local time.
    #[builder]
    pub async fn recommendations(
        &self,
        date: Option<NaiveDate>,
    ) -> Result<Recommendations, AirSightError> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let query = [("date", date.format("%Y-%m-%d").to_string())];
        Ok(self.loader.get_json("recommendations", &query).await?)
    }
}

impl PollutantSource for AirSight {
    async fn fetch(&self, key: &ViewKey) -> Result<FetchResult, AirSightError> {
        Ok(self.pollutants(key).await?.into())
    }
}
