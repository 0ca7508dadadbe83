use crate::types::calendar::CalendarCell;
use crate::types::series::SeriesPoint;
use crate::types::tile::HighestTile;

/// Everything a single fetch for a [`crate::ViewKey`] produced.
///
/// Every field may be missing; absence signals a partial failure and is
/// handled by [`crate::ViewState::reconcile`], not treated as an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchResult {
    pub series: Option<Vec<SeriesPoint>>,
    pub highest_candidates: Vec<HighestTile>,
    pub calendar_cells: Option<Vec<CalendarCell>>,
    /// Display title of the month as chosen by the backend, e.g. `August 2025`.
    pub month_year: Option<String>,
}

impl FetchResult {
    /// The result of a fetch that failed outright.
    pub fn empty() -> Self {
        Self::default()
    }
}
