pub mod aqi;
pub mod calendar;
pub mod error;
pub mod pollutant;
pub mod series;
pub mod tile;
pub mod time_filter;
pub mod view_key;
