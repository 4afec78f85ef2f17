//! Windowing an aggregated table to a narrower grid.
//!
//! Companion to [`ButterflyInfo::trimmed`]: once a grid has been narrowed,
//! the aggregated table is re-windowed here so its period sequence matches
//! the new date axis exactly.

use crate::models::info::ButterflyInfo;
use crate::models::observation::PeriodLatitudes;
use crate::services::aggregation::fill_periods;

/// Filter an aggregated table to the grid's date range and re-fill it so
/// the result has one row per period of the trimmed axis.
pub fn trim_data(rows: Vec<PeriodLatitudes>, info: &ButterflyInfo) -> Vec<PeriodLatitudes> {
    let clipped: Vec<PeriodLatitudes> = rows
        .into_iter()
        .filter(|row| row.date >= info.date_start && row.date <= info.date_end)
        .collect();
    fill_periods(
        clipped,
        info.date_start,
        info.date_end,
        &info.date_interval,
    )
}
