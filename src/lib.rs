mod airsight;
mod api;
mod error;
pub mod fallback;
mod render;
mod sync;
mod types;
mod utils;
mod view;

pub use airsight::*;
pub use error::AirSightError;

pub use api::error::ApiError;
pub use api::wire::{
    CalendarEntry, ChartData, HealthStatus, HighestCandidate, PollutantsResponse,
    Recommendation, Recommendations,
};

pub use render::Renderer;
pub use view::*;

pub use sync::fetch_result::FetchResult;
pub use sync::highest::derive_highest;
pub use sync::sequence::{RequestSequencer, RequestTicket};
pub use sync::view_state::{CalendarUpdate, ChartUpdate, Reconciliation, ViewPhase, ViewState};

pub use types::aqi::AqiCategory;
pub use types::calendar::CalendarCell;
pub use types::error::ViewKeyError;
pub use types::pollutant::{ConcentrationLevel, Pollutant};
pub use types::series::{BarLevel, SeriesPoint};
pub use types::tile::{HighestTile, TileSet};
pub use types::time_filter::TimeFilter;
pub use types::view_key::ViewKey;

pub use utils::{days_in_month, month_name};
