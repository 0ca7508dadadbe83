//! The cross-view cache policy of the pollutant analysis view.
//!
//! A [`ViewState`] is owned by the caller and threaded through
//! [`ViewState::reconcile`], which decides for every new [`ViewKey`] whether
//! the calendar and highest-concentration tiles are repainted or left
//! untouched. The chart is refreshed on every call.

use crate::sync::fetch_result::FetchResult;
use crate::sync::highest::derive_highest;
use crate::types::calendar::CalendarCell;
use crate::types::series::{is_drawable, SeriesPoint};
use crate::types::tile::TileSet;
use crate::types::view_key::ViewKey;
use crate::utils::month_name;
use log::{debug, info, warn};

/// The (year, month) the cached tiles and displayed calendar belong to.
#[derive(Debug, Clone, PartialEq)]
struct CacheWindow {
    year: i32,
    month: u32,
    tiles: TileSet,
}

impl CacheWindow {
    fn covers(&self, key: &ViewKey) -> bool {
        self.year == key.year() && self.month == key.month()
    }
}

// Last calendar built from real backend data. Survives `invalidate` so a
// failed refresh of the same month keeps it on screen.
#[derive(Debug, Clone, PartialEq)]
struct RealCalendar {
    year: i32,
    month: u32,
    cells: Vec<CalendarCell>,
}

/// Lifecycle of a view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// No cache window yet; the next reconcile repaints everything.
    Uninitialized,
    /// The cache window is set.
    Ready,
}

/// What to do with the chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartUpdate {
    Series(Vec<SeriesPoint>),
    /// The series was missing, empty or held a non-finite value. The caller
    /// draws a fallback series instead.
    DataInvalid,
}

/// What to do with the monthly calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarUpdate {
    /// Leave the displayed calendar exactly as it is.
    Unchanged,
    Refreshed {
        title: String,
        cells: Vec<CalendarCell>,
    },
    /// A refresh was due but no calendar came back and none is remembered
    /// for this month. The caller synthesises a placeholder calendar.
    DataMissing,
}

/// Output of [`ViewState::reconcile`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub chart: ChartUpdate,
    /// Always six tiles in display order.
    pub tiles: TileSet,
    pub calendar: CalendarUpdate,
    /// The state to pass into the next reconcile.
    pub state: ViewState,
}

impl Reconciliation {
    /// Calendar cells to draw, `None` meaning "do not touch the calendar".
    pub fn calendar_cells(&self) -> Option<&[CalendarCell]> {
        match &self.calendar {
            CalendarUpdate::Refreshed { cells, .. } => Some(cells),
            CalendarUpdate::Unchanged | CalendarUpdate::DataMissing => None,
        }
    }
}

/// Caller-owned cache of the calendar and tile state of one view.
///
/// # Examples
///
/// ```
/// use airsight::{CalendarCell, CalendarUpdate, FetchResult, Pollutant, SeriesPoint, TimeFilter, ViewKey, ViewState};
///
/// let daily = ViewKey::new(2025, 8, Pollutant::Pm25, TimeFilter::Daily).unwrap();
/// let fetch = FetchResult {
///     series: Some(vec![SeriesPoint::new("Aug 01", 31.0), SeriesPoint::new("Aug 02", 44.5)]),
///     calendar_cells: Some(vec![CalendarCell { day: 1, aqi: 61.0, main_pollutant: "PM2.5".into() }]),
///     ..FetchResult::default()
/// };
///
/// let first = ViewState::new().reconcile(&daily, fetch.clone());
/// assert!(matches!(first.calendar, CalendarUpdate::Refreshed { .. }));
///
/// // Switching the filter alone never touches the calendar.
/// let weekly = daily.with_filter(TimeFilter::Weekly);
/// let second = first.state.reconcile(&weekly, fetch);
/// assert_eq!(second.calendar, CalendarUpdate::Unchanged);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    window: Option<CacheWindow>,
    real_calendar: Option<RealCalendar>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ViewPhase {
        if self.window.is_some() {
            ViewPhase::Ready
        } else {
            ViewPhase::Uninitialized
        }
    }

    /// The (year, month) the cache currently covers.
    pub fn cache_window(&self) -> Option<(i32, u32)> {
        self.window.as_ref().map(|w| (w.year, w.month))
    }

    pub fn cached_tiles(&self) -> Option<&TileSet> {
        self.window.as_ref().map(|w| &w.tiles)
    }

    /// The last calendar built from backend data, with its year and month.
    pub fn real_calendar(&self) -> Option<(i32, u32, &[CalendarCell])> {
        self.real_calendar
            .as_ref()
            .map(|c| (c.year, c.month, c.cells.as_slice()))
    }

    /// Forgets the cache window and the cached tiles.
    ///
    /// Only an explicit year/month request from the user calls this; filter
    /// and pollutant changes never do.
    pub fn invalidate(&mut self) {
        debug!("Cache window invalidated");
        self.window = None;
    }

    pub fn needs_calendar_refresh(&self, key: &ViewKey) -> bool {
        !self.window.as_ref().is_some_and(|w| w.covers(key))
    }

    /// Decides what the view repaints for `key` given the result of its
    /// fetch, and returns the next state.
    ///
    /// The chart always follows `fetch.series`. A tile derived from the
    /// series peak is merged with the backend candidates. When the cache
    /// window is unset or covers another month, the merged tiles and the
    /// fetched calendar are adopted and the window moves to `key`'s month.
    /// Otherwise the cached tiles are shown with only the current
    /// pollutant's tile replaced by the derived one, the calendar is left
    /// untouched, and the cache is not modified.
    pub fn reconcile(self, key: &ViewKey, fetch: FetchResult) -> Reconciliation {
        let FetchResult {
            series,
            highest_candidates,
            calendar_cells,
            month_year,
        } = fetch;

        // The peak skips non-finite points, so a partly broken series still
        // yields a tile even though the chart falls back.
        let derived = series
            .as_deref()
            .and_then(|points| derive_highest(points, key));
        let series = series.filter(|points| is_drawable(points));
        let chart = match series {
            Some(points) => ChartUpdate::Series(points),
            None => {
                warn!("Chart data missing or invalid for {}", key);
                ChartUpdate::DataInvalid
            }
        };

        if let Some(window) = self.window.as_ref().filter(|w| w.covers(key)) {
            info!("Reusing calendar and tiles for {} (same month)", key);
            let tiles = match derived {
                Some(tile) => window.tiles.clone().with_tile(tile),
                None => window.tiles.clone(),
            };
            return Reconciliation {
                chart,
                tiles,
                calendar: CalendarUpdate::Unchanged,
                state: self,
            };
        }

        info!("Refreshing calendar and tiles for {}", key);
        let tiles = TileSet::merge(highest_candidates, derived);
        let mut real_calendar = self.real_calendar;
        let calendar = match calendar_cells.filter(|cells| !cells.is_empty()) {
            Some(cells) => {
                real_calendar = Some(RealCalendar {
                    year: key.year(),
                    month: key.month(),
                    cells: cells.clone(),
                });
                let title = month_year
                    .unwrap_or_else(|| format!("{} {}", month_name(key.month()), key.year()));
                CalendarUpdate::Refreshed { title, cells }
            }
            None => {
                let same_month = real_calendar
                    .as_ref()
                    .is_some_and(|c| c.year == key.year() && c.month == key.month());
                if same_month {
                    warn!("Calendar data missing for {}, keeping previous calendar", key);
                    CalendarUpdate::Unchanged
                } else {
                    warn!("Calendar data missing for {}", key);
                    real_calendar = None;
                    CalendarUpdate::DataMissing
                }
            }
        };

        Reconciliation {
            chart,
            tiles: tiles.clone(),
            calendar,
            state: ViewState {
                window: Some(CacheWindow {
                    year: key.year(),
                    month: key.month(),
                    tiles,
                }),
                real_calendar,
            },
        }
    }
}
