//! Calendar interval arithmetic for the butterfly date axis.
//!
//! A [`DateDelta`] is the recurrence step of a diagram's date axis: a
//! validated (years, months, days) triple with ISO 8601 round-tripping.
//! Every grid consumer (axis sizing, aggregation flooring, index
//! construction) steps the calendar through [`DateDelta::advance`], so the
//! same arithmetic rule is shared and no off-by-one drift can appear
//! between pipeline stages.

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{ButterflyError, ButterflyResult};

/// Calendar step between two adjacent periods of a date axis.
///
/// Components are non-negative and at least one is non-zero; both rules are
/// enforced at construction so downstream arithmetic never has to re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateDelta {
    years: i32,
    months: i32,
    days: i32,
}

impl DateDelta {
    /// Validated constructor.
    pub fn new(years: i32, months: i32, days: i32) -> ButterflyResult<Self> {
        if years < 0 || months < 0 || days < 0 {
            return Err(ButterflyError::NegativeDuration {
                years,
                months,
                days,
            });
        }
        if years == 0 && months == 0 && days == 0 {
            return Err(ButterflyError::ZeroDuration);
        }
        Ok(Self {
            years,
            months,
            days,
        })
    }

    /// One calendar day.
    pub fn one_day() -> Self {
        Self {
            years: 0,
            months: 0,
            days: 1,
        }
    }

    /// One calendar month.
    pub fn one_month() -> Self {
        Self {
            years: 0,
            months: 1,
            days: 0,
        }
    }

    pub fn years(&self) -> i32 {
        self.years
    }

    pub fn months(&self) -> i32 {
        self.months
    }

    pub fn days(&self) -> i32 {
        self.days
    }

    /// ISO 8601 calendar duration, zero components omitted (`P1Y2M3D`).
    pub fn isoformat(&self) -> String {
        let mut text = String::from("P");
        if self.years > 0 {
            text.push_str(&format!("{}Y", self.years));
        }
        if self.months > 0 {
            text.push_str(&format!("{}M", self.months));
        }
        if self.days > 0 {
            text.push_str(&format!("{}D", self.days));
        }
        text
    }

    /// Compact interval text used in diagnostics (`1y2mo3d`).
    pub fn to_interval(&self) -> String {
        let mut text = String::new();
        if self.years > 0 {
            text.push_str(&format!("{}y", self.years));
        }
        if self.months > 0 {
            text.push_str(&format!("{}mo", self.months));
        }
        if self.days > 0 {
            text.push_str(&format!("{}d", self.days));
        }
        text
    }

    /// Parse an ISO 8601 calendar duration.
    ///
    /// Accepts `P` followed by any non-empty ordered subset of `<n>Y`,
    /// `<n>M`, `<n>D`. Rejects text not starting with `P`, text with none
    /// of the three markers, and out-of-order or repeated markers.
    pub fn from_iso(text: &str) -> ButterflyResult<Self> {
        let malformed = || ButterflyError::MalformedDuration(text.to_string());
        let rest = text.strip_prefix('P').ok_or_else(malformed)?;
        if rest.is_empty() {
            return Err(malformed());
        }

        let mut years = 0;
        let mut months = 0;
        let mut days = 0;
        // Marker order is Y then M then D, each at most once.
        let mut stage = 0;
        let mut chars = rest.chars().peekable();
        while chars.peek().is_some() {
            let mut digits = String::new();
            while let Some(c) = chars.peek() {
                if c.is_ascii_digit() {
                    digits.push(*c);
                    chars.next();
                } else {
                    break;
                }
            }
            let marker = chars.next().ok_or_else(malformed)?;
            let value: i32 = digits.parse().map_err(|_| malformed())?;
            match marker {
                'Y' if stage < 1 => {
                    years = value;
                    stage = 1;
                }
                'M' if stage < 2 => {
                    months = value;
                    stage = 2;
                }
                'D' if stage < 3 => {
                    days = value;
                    stage = 3;
                }
                _ => return Err(malformed()),
            }
        }
        Self::new(years, months, days)
    }

    fn total_months(&self) -> i64 {
        self.years as i64 * 12 + self.months as i64
    }

    /// `origin + steps * delta`.
    ///
    /// The month component is applied first with end-of-month clamping,
    /// then the day component. Returns `None` only when the result falls
    /// outside the representable calendar.
    pub fn advance(&self, origin: NaiveDate, steps: i64) -> Option<NaiveDate> {
        let with_months = add_months(origin, self.total_months() * steps)?;
        add_days(with_months, self.days as i64 * steps)
    }

    /// Greatest lattice point `<= date` on `{epoch + k * delta}`.
    ///
    /// The lattice is anchored at 1970-01-01, which makes monthly intervals
    /// floor to month starts and daily intervals the identity.
    pub fn floor(&self, date: NaiveDate) -> NaiveDate {
        // chrono's default NaiveDate is the 1970-01-01 anchor.
        let anchor = NaiveDate::default();
        let months = self.total_months();

        if self.days == 0 {
            let elapsed = (date.year() as i64 - 1970) * 12 + (date.month() as i64 - 1);
            let steps = elapsed.div_euclid(months);
            return self.advance(anchor, steps).unwrap_or(date);
        }
        if months == 0 {
            let elapsed = date.signed_duration_since(anchor).num_days();
            let steps = elapsed.div_euclid(self.days as i64);
            return add_days(anchor, steps * self.days as i64).unwrap_or(date);
        }

        // Mixed interval: start from a conservative underestimate of the
        // step count, then settle with bounded adjustment.
        let elapsed = date.signed_duration_since(anchor).num_days();
        let longest_period = months * 31 + self.days as i64;
        let mut steps = elapsed.div_euclid(longest_period);
        while self
            .advance(anchor, steps + 1)
            .is_some_and(|d| d <= date)
        {
            steps += 1;
        }
        while self.advance(anchor, steps).is_some_and(|d| d > date) {
            steps -= 1;
        }
        self.advance(anchor, steps).unwrap_or(date)
    }
}

impl fmt::Display for DateDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_interval())
    }
}

impl Serialize for DateDelta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.isoformat())
    }
}

impl<'de> Deserialize<'de> for DateDelta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        DateDelta::from_iso(&text).map_err(D::Error::custom)
    }
}

/// Dates of every period start in `[start, end]`, stepping by `interval`.
pub fn date_range(start: NaiveDate, end: NaiveDate, interval: &DateDelta) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut step = 0i64;
    while let Some(date) = interval.advance(start, step) {
        if date > end {
            break;
        }
        dates.push(date);
        step += 1;
    }
    dates
}

fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(u32::try_from(months).ok()?))
    } else {
        date.checked_sub_months(Months::new(u32::try_from(-months).ok()?))
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(u64::try_from(days).ok()?))
    } else {
        date.checked_sub_days(Days::new(u64::try_from(-days).ok()?))
    }
}
