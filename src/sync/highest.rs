use crate::types::series::SeriesPoint;
use crate::types::tile::HighestTile;
use crate::types::view_key::ViewKey;
use crate::utils::{month_name, parse_day_label};

/// Index of the largest value, ties resolved to the earliest point.
pub(crate) fn max_index(series: &[SeriesPoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, point) in series.iter().enumerate() {
        if !point.value.is_finite() {
            continue;
        }
        match best {
            Some((_, value)) if point.value <= value => {}
            _ => best = Some((i, point.value)),
        }
    }
    best.map(|(i, _)| i)
}

/// Builds the tile for `key.pollutant()` from the chart series' peak.
///
/// The date is the peak point's label. When the label reads like `Aug 10`
/// the day and month name come from it; otherwise the day is unavailable
/// and the month name is that of the key. The concentration is rounded to
/// one decimal.
pub fn derive_highest(series: &[SeriesPoint], key: &ViewKey) -> Option<HighestTile> {
    let peak = &series[max_index(series)?];
    let (month, day) = match parse_day_label(&peak.label) {
        Some((month, day)) => (month.to_string(), Some(day)),
        None => (month_name(key.month()).to_string(), None),
    };
    let pollutant = key.pollutant();
    Some(HighestTile {
        pollutant,
        date: peak.label.clone(),
        day,
        month_name: month,
        concentration: Some((peak.value * 10.0).round() / 10.0),
        unit: pollutant.unit().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pollutant::Pollutant;
    use crate::types::time_filter::TimeFilter;

    fn points(values: &[(&str, f64)]) -> Vec<SeriesPoint> {
        values
            .iter()
            .map(|(label, value)| SeriesPoint::new(*label, *value))
            .collect()
    }

    #[test]
    fn test_tie_breaks_on_earliest_index() {
        let series = points(&[("Aug 01", 10.0), ("Aug 02", 30.0), ("Aug 03", 30.0), ("Aug 04", 5.0)]);
        assert_eq!(max_index(&series), Some(1));

        let key = ViewKey::new(2025, 8, Pollutant::Pm25, TimeFilter::Daily).unwrap();
        let tile = derive_highest(&series, &key).unwrap();
        assert_eq!(tile.date, "Aug 02");
        assert_eq!(tile.day, Some(2));
        assert_eq!(tile.month_name, "Aug");
        assert_eq!(tile.concentration, Some(30.0));
        assert_eq!(tile.unit, "µg/m³");
    }

    #[test]
    fn test_non_day_label_uses_key_month() {
        let series = points(&[("00:00", 1.26), ("03:00", 1.84), ("06:00", 0.9)]);
        let key = ViewKey::new(2025, 3, Pollutant::Co, TimeFilter::Hourly).unwrap();
        let tile = derive_highest(&series, &key).unwrap();
        assert_eq!(tile.date, "03:00");
        assert_eq!(tile.day, None);
        assert_eq!(tile.month_name, "March");
        assert_eq!(tile.concentration, Some(1.8));
        assert_eq!(tile.unit, "ppm");
    }

    #[test]
    fn test_empty_series_has_no_peak() {
        let key = ViewKey::new(2025, 3, Pollutant::Co, TimeFilter::Hourly).unwrap();
        assert!(derive_highest(&[], &key).is_none());
    }
}
