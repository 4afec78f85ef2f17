//! Public API surface for the butterfly engine.
//!
//! This file consolidates the types and entry points consumed by catalog
//! and rendering collaborators. All data types derive Serialize/Deserialize
//! for JSON persistence.

pub use crate::error::{ButterflyError, ButterflyResult};

pub use crate::models::color::{Color, ColorMap};
pub use crate::models::delta::{date_range, DateDelta};
pub use crate::models::image::{Bitmap, CompositeImage, Grid, Rgb, RgbImage, WHITE};
pub use crate::models::info::ButterflyInfo;
pub use crate::models::observation::{Observation, PeriodLatitudes};

pub use crate::services::aggregation::{
    aggregate_for_grid, aggregate_latitudes, align_to_month_starts, fill_periods,
    observed_date_limits,
};
pub use crate::services::axes::{
    create_date_index, create_lat_index, lat_ticks, year_ticks, LAT_SEPARATOR,
};
pub use crate::services::compositing::{
    create_color_image, create_merged_image, merge_images, MAX_SOURCES,
};
pub use crate::services::raster::{create_image, lat_row};
pub use crate::services::trim::trim_data;
