//! Axis index construction for rendering collaborators.
//!
//! The chart collaborator receives the RGB grid plus these indices and tick
//! positions; figure styling itself happens outside this crate.

use chrono::{Datelike, NaiveDate};

use crate::models::delta::date_range;
use crate::models::info::ButterflyInfo;

/// Marker labeling the between-degree rows of the latitude index.
pub const LAT_SEPARATOR: i32 = -1;

/// Date of every column of the grid, in column order.
pub fn create_date_index(info: &ButterflyInfo) -> Vec<NaiveDate> {
    date_range(info.date_start, info.date_end, &info.date_interval)
}

/// Per-row latitude labels: absolute degree values descending from
/// `lat_max` to `lat_min`, with a separator marker in every between-degree
/// row. Hemisphere is conveyed by position (north above the equator row),
/// so labels are unsigned.
pub fn create_lat_index(lat_min: i32, lat_max: i32) -> Vec<i32> {
    let mut index = Vec::with_capacity(((lat_max - lat_min) * 2 + 1).max(1) as usize);
    let mut degree = lat_max;
    loop {
        index.push(degree.abs());
        if degree == lat_min {
            break;
        }
        index.push(LAT_SEPARATOR);
        degree -= 1;
    }
    index
}

/// Tick positions/labels for January columns of years divisible by
/// `year_interval`.
pub fn year_ticks(dates: &[NaiveDate], year_interval: i32) -> Vec<(usize, String)> {
    dates
        .iter()
        .enumerate()
        .filter(|(_, date)| date.month() == 1 && date.year() % year_interval == 0)
        .map(|(col, date)| (col, date.year().to_string()))
        .collect()
}

/// Tick positions/labels for latitude labels divisible by `lat_interval`.
/// Separator markers never match intervals greater than one.
pub fn lat_ticks(lats: &[i32], lat_interval: i32) -> Vec<(usize, String)> {
    lats.iter()
        .enumerate()
        .filter(|(_, label)| *label % lat_interval == 0)
        .map(|(row, label)| (row, label.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::delta::DateDelta;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_lat_index() {
        assert_eq!(create_lat_index(-2, 2), vec![2, -1, 1, -1, 0, -1, 1, -1, 2]);
        assert_eq!(create_lat_index(0, 0), vec![0]);
        assert_eq!(create_lat_index(1, 3), vec![3, -1, 2, -1, 1]);
    }

    #[test]
    fn test_lat_index_matches_axis_len() {
        let info = ButterflyInfo::new(
            -30,
            40,
            date(2020, 1, 1),
            date(2020, 2, 1),
            DateDelta::one_month(),
        )
        .unwrap();
        assert_eq!(
            create_lat_index(info.lat_min, info.lat_max).len(),
            info.lat_axis_len()
        );
    }

    #[test]
    fn test_create_date_index() {
        let info = ButterflyInfo::new(
            0,
            0,
            date(2020, 1, 1),
            date(2020, 5, 1),
            DateDelta::one_month(),
        )
        .unwrap();
        let index = create_date_index(&info);
        assert_eq!(index.len(), info.date_axis_len());
        assert_eq!(index[0], date(2020, 1, 1));
        assert_eq!(index[4], date(2020, 5, 1));
    }

    #[test]
    fn test_year_ticks_monthly() {
        let monthly = DateDelta::one_month();
        let dates = crate::models::delta::date_range(date(2018, 1, 1), date(2021, 12, 1), &monthly);
        let ticks = year_ticks(&dates, 2);
        assert_eq!(
            ticks,
            vec![(0, "2018".to_string()), (24, "2020".to_string())]
        );
    }

    #[test]
    fn test_year_ticks_skip_odd_years() {
        let monthly = DateDelta::one_month();
        let dates = crate::models::delta::date_range(date(2019, 1, 1), date(2019, 12, 1), &monthly);
        assert!(year_ticks(&dates, 2).is_empty());
    }

    #[test]
    fn test_lat_ticks() {
        let lats = create_lat_index(-2, 2);
        let ticks = lat_ticks(&lats, 2);
        assert_eq!(
            ticks,
            vec![
                (0, "2".to_string()),
                (4, "0".to_string()),
                (8, "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_lat_ticks_interval_one_includes_separators() {
        let lats = create_lat_index(0, 1);
        let ticks = lat_ticks(&lats, 1);
        assert_eq!(ticks.len(), 3);
    }
}
