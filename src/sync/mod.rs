pub mod fetch_result;
pub mod highest;
pub mod sequence;
pub mod view_state;
