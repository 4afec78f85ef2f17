//! Latitude aggregation over the date axis.
//!
//! Converts raw per-sighting rows into the per-period latitude-interval
//! table the rasterizer consumes: sightings are grouped by the period
//! containing their date, then every period of the grid is filled so the
//! table carries exactly one row per date-axis column.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::models::delta::{date_range, DateDelta};
use crate::models::info::ButterflyInfo;
use crate::models::observation::{Observation, PeriodLatitudes};

/// Group sightings by the period containing their date.
///
/// Each output row pairs the `lat_min`/`lat_max` values of its sightings
/// positionally, in input order. One row per distinct period, sorted by
/// period start.
// TODO: flooring is epoch-anchored while fill_periods steps from
// date_start; a date_start off the interval lattice (e.g. a yearly grid
// starting mid-year) drops rows in fill_periods. All current catalogs use
// daily or month-aligned grids.
pub fn aggregate_latitudes(rows: &[Observation], interval: &DateDelta) -> Vec<PeriodLatitudes> {
    let mut grouped: BTreeMap<NaiveDate, (Vec<i32>, Vec<i32>)> = BTreeMap::new();
    for row in rows {
        let period = interval.floor(row.date);
        let lists = grouped.entry(period).or_default();
        lists.0.push(row.lat_min);
        lists.1.push(row.lat_max);
    }
    grouped
        .into_iter()
        .map(|(date, (min, max))| PeriodLatitudes::new(date, min, max))
        .collect()
}

/// Re-expand an aggregated table to one row per period of `[date_start,
/// date_end]`, inserting empty rows for periods without observations.
///
/// Aggregated periods outside the range are dropped; keeping inputs inside
/// the range is the caller's responsibility. Should the input carry
/// duplicate periods, the last row wins ([`aggregate_latitudes`] never
/// produces duplicates).
pub fn fill_periods(
    aggregated: Vec<PeriodLatitudes>,
    date_start: NaiveDate,
    date_end: NaiveDate,
    interval: &DateDelta,
) -> Vec<PeriodLatitudes> {
    let mut by_period: HashMap<NaiveDate, PeriodLatitudes> = aggregated
        .into_iter()
        .map(|row| (row.date, row))
        .collect();
    date_range(date_start, date_end, interval)
        .into_iter()
        .map(|date| {
            by_period
                .remove(&date)
                .unwrap_or_else(|| PeriodLatitudes::empty(date))
        })
        .collect()
}

/// Aggregate raw sightings directly against a grid definition.
///
/// The fill join clips at period granularity: a sighting whose floored
/// period start falls outside the grid's date range falls away here, while
/// a raw date later than `date_end` still lands in the final period when
/// its period start is inside the range.
pub fn aggregate_for_grid(rows: &[Observation], info: &ButterflyInfo) -> Vec<PeriodLatitudes> {
    let aggregated = aggregate_latitudes(rows, &info.date_interval);
    debug!(
        "aggregated {} sightings into {} periods for {} grid",
        rows.len(),
        aggregated.len(),
        info.date_interval
    );
    fill_periods(
        aggregated,
        info.date_start,
        info.date_end,
        &info.date_interval,
    )
}

/// Earliest and latest observation date of a row set, `None` when empty.
pub fn observed_date_limits(rows: &[Observation]) -> Option<(NaiveDate, NaiveDate)> {
    let first = rows.first()?;
    let mut start = first.date;
    let mut end = first.date;
    for row in rows {
        start = start.min(row.date);
        end = end.max(row.date);
    }
    Some((start, end))
}

/// Floor both ends of a date pair to month starts, for monthly diagrams.
pub fn align_to_month_starts(start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    (month_start(start), month_start(end))
}

fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
