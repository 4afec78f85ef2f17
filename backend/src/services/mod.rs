//! Service layer for the aggregation and image-synthesis pipeline.
//!
//! Services are pure batch computations: each consumes immutable tabular or
//! array inputs and produces a new output, synchronously. The usual path is
//! aggregation -> rasterization -> composition -> colorization, with axis
//! indices built alongside for the chart collaborator.

pub mod aggregation;

pub mod axes;

pub mod compositing;

pub mod raster;

pub mod trim;

pub use aggregation::{
    aggregate_for_grid, aggregate_latitudes, align_to_month_starts, fill_periods,
    observed_date_limits,
};
pub use axes::{create_date_index, create_lat_index, lat_ticks, year_ticks};
pub use compositing::{create_color_image, create_merged_image, merge_images, MAX_SOURCES};
pub use raster::create_image;
pub use trim::trim_data;
