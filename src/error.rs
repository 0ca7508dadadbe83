use crate::api::error::ApiError;
use crate::types::error::ViewKeyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirSightError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    ViewKey(#[from] ViewKeyError),

    #[error("Pollutant data source unavailable: {0}")]
    SourceUnavailable(String),
}
