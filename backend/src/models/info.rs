//! Butterfly diagram grid definition.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ButterflyError, ButterflyResult};
use crate::models::delta::{date_range, DateDelta};

/// Fixed latitude/date grid of one butterfly diagram.
///
/// Bounds are validated once at construction (and re-validated when
/// deserialized), so every downstream consumer can rely on
/// `lat_min <= lat_max` and `date_start <= date_end`. The struct is plain
/// data and never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ButterflyInfoRepr")]
pub struct ButterflyInfo {
    pub lat_min: i32,
    pub lat_max: i32,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub date_interval: DateDelta,
}

/// Raw persisted form; converted through the validating constructor so a
/// malformed dict is rejected at deserialization, not in a later stage.
#[derive(Deserialize)]
struct ButterflyInfoRepr {
    lat_min: i32,
    lat_max: i32,
    date_start: NaiveDate,
    date_end: NaiveDate,
    date_interval: DateDelta,
}

impl TryFrom<ButterflyInfoRepr> for ButterflyInfo {
    type Error = ButterflyError;

    fn try_from(repr: ButterflyInfoRepr) -> ButterflyResult<Self> {
        Self::new(
            repr.lat_min,
            repr.lat_max,
            repr.date_start,
            repr.date_end,
            repr.date_interval,
        )
    }
}

impl ButterflyInfo {
    /// Validated constructor.
    pub fn new(
        lat_min: i32,
        lat_max: i32,
        date_start: NaiveDate,
        date_end: NaiveDate,
        date_interval: DateDelta,
    ) -> ButterflyResult<Self> {
        if lat_min > lat_max {
            return Err(ButterflyError::LatitudeRangeInverted { lat_min, lat_max });
        }
        if date_start > date_end {
            return Err(ButterflyError::DateRangeInverted {
                date_start,
                date_end,
            });
        }
        Ok(Self {
            lat_min,
            lat_max,
            date_start,
            date_end,
            date_interval,
        })
    }

    /// Number of date-axis columns: lattice points `date_start + k * interval`
    /// inside `[date_start, date_end]`.
    pub fn date_axis_len(&self) -> usize {
        date_range(self.date_start, self.date_end, &self.date_interval).len()
    }

    /// Number of latitude-axis rows. Every whole degree gets a data row and
    /// the rows in between separate adjacent degrees, hence `2n + 1`.
    pub fn lat_axis_len(&self) -> usize {
        ((self.lat_max - self.lat_min) * 2 + 1) as usize
    }

    /// Combine several grids into the smallest grid covering all of them.
    ///
    /// All inputs must share an identical interval; latitude bounds take
    /// min/max, date bounds take min/max. An empty input set has no shared
    /// interval and fails the same way as a mismatched one.
    pub fn merge(infos: &[ButterflyInfo]) -> ButterflyResult<ButterflyInfo> {
        let first = infos.first().ok_or(ButterflyError::IncompatibleInterval)?;
        if infos
            .iter()
            .any(|info| info.date_interval != first.date_interval)
        {
            return Err(ButterflyError::IncompatibleInterval);
        }
        let mut merged = *first;
        for info in &infos[1..] {
            merged.lat_min = merged.lat_min.min(info.lat_min);
            merged.lat_max = merged.lat_max.max(info.lat_max);
            merged.date_start = merged.date_start.min(info.date_start);
            merged.date_end = merged.date_end.max(info.date_end);
        }
        Ok(merged)
    }

    /// Narrowed (or widened) copy with any subset of the bounds replaced.
    /// The interval is kept; the result is re-validated.
    pub fn trimmed(
        &self,
        lat_min: Option<i32>,
        lat_max: Option<i32>,
        date_start: Option<NaiveDate>,
        date_end: Option<NaiveDate>,
    ) -> ButterflyResult<ButterflyInfo> {
        Self::new(
            lat_min.unwrap_or(self.lat_min),
            lat_max.unwrap_or(self.lat_max),
            date_start.unwrap_or(self.date_start),
            date_end.unwrap_or(self.date_end),
            self.date_interval,
        )
    }

    /// Pretty JSON text of the persisted form.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load a persisted grid definition from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<ButterflyInfo> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read butterfly info {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid butterfly info JSON in {}", path.display()))
    }

    /// Persist the grid definition as pretty JSON.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_json())
            .with_context(|| format!("Failed to write butterfly info {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn info(
        lat_min: i32,
        lat_max: i32,
        start: (i32, u32, u32),
        end: (i32, u32, u32),
        interval: DateDelta,
    ) -> ButterflyInfo {
        ButterflyInfo::new(
            lat_min,
            lat_max,
            date(start.0, start.1, start.2),
            date(end.0, end.1, end.2),
            interval,
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_latitudes() {
        let err = ButterflyInfo::new(
            5,
            -5,
            date(2020, 2, 2),
            date(2020, 5, 5),
            DateDelta::new(1, 0, 0).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, ButterflyError::LatitudeRangeInverted { .. }));
    }

    #[test]
    fn test_new_rejects_inverted_dates() {
        let err = ButterflyInfo::new(
            -50,
            50,
            date(2020, 5, 5),
            date(2020, 2, 2),
            DateDelta::new(1, 0, 0).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, ButterflyError::DateRangeInverted { .. }));
    }

    #[test]
    fn test_to_json_pretty_form() {
        let info = info(-50, 50, (2020, 2, 2), (2020, 5, 5), DateDelta::one_day());
        let expected = "{\n  \"lat_min\": -50,\n  \"lat_max\": 50,\n  \"date_start\": \"2020-02-02\",\n  \"date_end\": \"2020-05-05\",\n  \"date_interval\": \"P1D\"\n}";
        assert_eq!(info.to_json(), expected);
    }

    #[test]
    fn test_from_json() {
        let text = r#"{
            "lat_min": -12,
            "lat_max": 12,
            "date_start": "2020-02-02",
            "date_end": "2020-12-12",
            "date_interval": "P1M"
        }"#;
        let parsed: ButterflyInfo = serde_json::from_str(text).unwrap();
        let expected = info(-12, 12, (2020, 2, 2), (2020, 12, 12), DateDelta::one_month());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_from_json_daily() {
        let text = r#"{
            "lat_min": 3,
            "lat_max": 12,
            "date_start": "1960-02-02",
            "date_end": "2020-12-12",
            "date_interval": "P1D"
        }"#;
        let parsed: ButterflyInfo = serde_json::from_str(text).unwrap();
        let expected = info(3, 12, (1960, 2, 2), (2020, 12, 12), DateDelta::one_day());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_from_json_rejects_bad_duration() {
        let text = r#"{
            "lat_min": -12,
            "lat_max": 12,
            "date_start": "2020-02-02",
            "date_end": "2020-12-12",
            "date_interval": "1M"
        }"#;
        assert!(serde_json::from_str::<ButterflyInfo>(text).is_err());
    }

    #[test]
    fn test_from_json_rejects_inverted_bounds() {
        let text = r#"{
            "lat_min": 12,
            "lat_max": -12,
            "date_start": "2020-02-02",
            "date_end": "2020-12-12",
            "date_interval": "P1M"
        }"#;
        assert!(serde_json::from_str::<ButterflyInfo>(text).is_err());
    }

    #[test]
    fn test_lat_axis_len() {
        let monthly = DateDelta::one_month();
        assert_eq!(
            info(0, 0, (2020, 1, 1), (2020, 3, 1), monthly).lat_axis_len(),
            1
        );
        assert_eq!(
            info(-2, 2, (2020, 1, 1), (2020, 3, 1), monthly).lat_axis_len(),
            9
        );
        assert_eq!(
            info(-50, 50, (2020, 1, 1), (2020, 3, 1), monthly).lat_axis_len(),
            201
        );
    }

    #[test]
    fn test_date_axis_len() {
        let daily = info(-2, 2, (2020, 2, 1), (2020, 2, 5), DateDelta::one_day());
        assert_eq!(daily.date_axis_len(), 5);

        let monthly = info(-2, 2, (2020, 1, 1), (2020, 5, 1), DateDelta::one_month());
        assert_eq!(monthly.date_axis_len(), 5);
    }

    #[test]
    fn test_merge() {
        let monthly = DateDelta::one_month();
        let first = info(-10, 50, (2020, 1, 1), (2020, 2, 2), monthly);
        let second = info(-40, 40, (2010, 5, 1), (2011, 12, 1), monthly);
        let merged = ButterflyInfo::merge(&[first, second]).unwrap();
        let expected = info(-40, 50, (2010, 5, 1), (2020, 2, 2), monthly);
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_single_is_identity() {
        let only = info(-10, 50, (2020, 1, 1), (2020, 2, 2), DateDelta::one_day());
        assert_eq!(ButterflyInfo::merge(&[only]).unwrap(), only);
    }

    #[test]
    fn test_merge_rejects_mixed_intervals() {
        let first = info(-10, 50, (2020, 1, 1), (2020, 2, 2), DateDelta::one_month());
        let second = info(-40, 40, (2010, 5, 1), (2011, 12, 1), DateDelta::one_day());
        assert_eq!(
            ButterflyInfo::merge(&[first, second]).unwrap_err(),
            ButterflyError::IncompatibleInterval
        );
    }

    #[test]
    fn test_merge_rejects_empty() {
        assert_eq!(
            ButterflyInfo::merge(&[]).unwrap_err(),
            ButterflyError::IncompatibleInterval
        );
    }

    #[test]
    fn test_trimmed() {
        let base = info(-50, 50, (2020, 1, 1), (2020, 12, 1), DateDelta::one_month());
        let trimmed = base
            .trimmed(Some(-30), None, None, Some(date(2020, 6, 1)))
            .unwrap();
        assert_eq!(trimmed.lat_min, -30);
        assert_eq!(trimmed.lat_max, 50);
        assert_eq!(trimmed.date_start, date(2020, 1, 1));
        assert_eq!(trimmed.date_end, date(2020, 6, 1));
        assert_eq!(trimmed.date_interval, base.date_interval);
    }

    #[test]
    fn test_trimmed_rejects_inverted_result() {
        let base = info(-50, 50, (2020, 1, 1), (2020, 12, 1), DateDelta::one_month());
        assert!(base.trimmed(Some(60), None, None, None).is_err());
    }
}
