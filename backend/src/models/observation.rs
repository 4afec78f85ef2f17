//! Tabular input and aggregation rows for the butterfly pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sunspot group sighting: the latitude extent observed on one date.
///
/// Rows arrive pre-validated from the catalog-loading collaborator; many
/// rows share a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub lat_min: i32,
    pub lat_max: i32,
}

impl Observation {
    pub fn new(date: NaiveDate, lat_min: i32, lat_max: i32) -> Self {
        Self {
            date,
            lat_min,
            lat_max,
        }
    }
}

/// Latitude bounds of every sighting inside one period of the date axis.
///
/// `min` and `max` are positionally paired: entry *i* of each list belongs
/// to the same sighting. Both lists are empty for periods without
/// observations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLatitudes {
    pub date: NaiveDate,
    pub min: Vec<i32>,
    pub max: Vec<i32>,
}

impl PeriodLatitudes {
    pub fn new(date: NaiveDate, min: Vec<i32>, max: Vec<i32>) -> Self {
        Self { date, min, max }
    }

    /// Row for a period without observations.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            min: Vec::new(),
            max: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }

    /// Paired `(min, max)` bounds, one per sighting.
    pub fn pairs(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.min.iter().copied().zip(self.max.iter().copied())
    }
}
