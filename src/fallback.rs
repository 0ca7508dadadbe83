//! Deterministic placeholder data drawn when the backend returns an
//! unusable chart series or no calendar.
//!
//! Values are pseudo-random but seeded from the view key (or year and
//! month), so redrawing the same view shows the same placeholder.

use crate::types::calendar::CalendarCell;
use crate::types::series::SeriesPoint;
use crate::types::time_filter::TimeFilter;
use crate::types::view_key::ViewKey;
use crate::utils::{days_in_month, short_month_name};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const CALENDAR_POLLUTANTS: [&str; 3] = ["PM2.5", "O3", "NO2"];

fn seeded_rng(parts: &[u64]) -> ChaCha8Rng {
    let seed = parts
        .iter()
        .fold(0xcbf2_9ce4_8422_2325_u64, |acc, part| {
            (acc ^ part).wrapping_mul(0x0100_0000_01b3)
        });
    ChaCha8Rng::seed_from_u64(seed)
}

/// Placeholder chart series for `key`.
///
/// Hourly views get eight three-hourly points, weekly views four weeks and
/// daily views the first fourteen days of the month.
///
/// # Examples
///
/// ```
/// use airsight::{fallback, Pollutant, TimeFilter, ViewKey};
///
/// let key = ViewKey::new(2025, 8, Pollutant::No2, TimeFilter::Weekly).unwrap();
/// let series = fallback::chart_series(&key);
/// assert_eq!(series.len(), 4);
/// assert_eq!(series[0].label, "Week 1");
/// assert_eq!(series, fallback::chart_series(&key));
/// ```
pub fn chart_series(key: &ViewKey) -> Vec<SeriesPoint> {
    let mut rng = seeded_rng(&[
        key.year() as u64,
        key.month() as u64,
        key.pollutant() as u64,
        key.filter() as u64,
    ]);
    match key.filter() {
        TimeFilter::Hourly => (0..8)
            .map(|i| {
                SeriesPoint::new(
                    format!("{:02}:00", i * 3),
                    rng.gen_range(20..80) as f64,
                )
            })
            .collect(),
        TimeFilter::Weekly => (1..=4)
            .map(|week| SeriesPoint::new(format!("Week {}", week), rng.gen_range(30..80) as f64))
            .collect(),
        TimeFilter::Daily => {
            let month = short_month_name(key.month());
            (1..=14)
                .map(|day| {
                    SeriesPoint::new(format!("{} {}", month, day), rng.gen_range(20..90) as f64)
                })
                .collect()
        }
    }
}

/// Placeholder calendar with one cell per day of the month.
///
/// # Examples
///
/// ```
/// use airsight::fallback;
///
/// let cells = fallback::calendar(2024, 2);
/// assert_eq!(cells.len(), 29);
/// assert_eq!(cells, fallback::calendar(2024, 2));
/// ```
pub fn calendar(year: i32, month: u32) -> Vec<CalendarCell> {
    let mut rng = seeded_rng(&[year as u64, month as u64]);
    (1..=days_in_month(year, month))
        .map(|day| CalendarCell {
            day,
            aqi: rng.gen_range(20..120) as f64,
            main_pollutant: CALENDAR_POLLUTANTS[rng.gen_range(0..CALENDAR_POLLUTANTS.len())]
                .to_string(),
        })
        .collect()
}
