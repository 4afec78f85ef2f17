//! Error types for grid construction and image synthesis.
//!
//! All pipeline stages are pure computations: every error is raised
//! synchronously at the call that detects it and nothing is retried. An
//! operation either completes on the full input or fails wholesale.

use chrono::NaiveDate;

/// Result type for butterfly pipeline operations.
pub type ButterflyResult<T> = Result<T, ButterflyError>;

/// Error type for butterfly pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ButterflyError {
    /// Latitude bounds inverted at grid construction.
    #[error("latitude minimum value cannot be greater than maximum value: {lat_min} > {lat_max}")]
    LatitudeRangeInverted { lat_min: i32, lat_max: i32 },

    /// Date bounds inverted at grid construction.
    #[error("start date cannot be later than end date: {date_start} > {date_end}")]
    DateRangeInverted {
        date_start: NaiveDate,
        date_end: NaiveDate,
    },

    /// Every component of a date interval is zero.
    #[error("all parameters cannot be zero")]
    ZeroDuration,

    /// A date interval carries a negative component.
    #[error("parameters cannot be negative: {years}y {months}mo {days}d")]
    NegativeDuration { years: i32, months: i32, days: i32 },

    /// Duration text that is not an ISO 8601 calendar duration.
    #[error("invalid ISO 8601 duration: {0:?}")]
    MalformedDuration(String),

    /// Grids with differing date intervals cannot be merged.
    #[error("date interval must be equal")]
    IncompatibleInterval,

    /// Image or table shape disagrees with the grid it is composited on.
    #[error(
        "shape mismatch: expected {expected_rows}x{expected_cols}, got {actual_rows}x{actual_cols}"
    )]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// A sighting extends beyond the latitude range of the grid.
    #[error("latitude interval [{lo}, {hi}] outside grid range [{lat_min}, {lat_max}]")]
    LatitudeOutOfRange {
        lo: i32,
        hi: i32,
        lat_min: i32,
        lat_max: i32,
    },

    /// The paired latitude lists of one period disagree in length.
    #[error("latitude list length mismatch in period {date}: {min_len} min vs {max_len} max")]
    UnpairedLatitudes {
        date: NaiveDate,
        min_len: usize,
        max_len: usize,
    },

    /// More sources than the composite pixel has bit planes.
    #[error("too many sources for one composite: {count} (limit {limit})")]
    TooManySources { count: usize, limit: usize },
}
