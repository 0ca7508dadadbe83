use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewKeyError {
    #[error("Month {0} is outside 1..=12")]
    MonthOutOfRange(u32),

    #[error("Unknown pollutant '{0}'")]
    UnknownPollutant(String),

    #[error("Unknown time filter '{0}'")]
    UnknownFilter(String),
}
