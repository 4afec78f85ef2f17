//! Multi-source composition and colorization.
//!
//! Every source is rasterized against the same merged grid, then reduced
//! to one bit plane of a 16-bit composite pixel: source *i* (in caller
//! order) owns bit *i*, so the pixel value identifies exactly which
//! sources saw a spot at that latitude and period. A color table then maps
//! pixel values to RGB.

#![allow(clippy::needless_range_loop)]

use log::debug;

use crate::error::{ButterflyError, ButterflyResult};
use crate::models::color::ColorMap;
use crate::models::image::{Bitmap, CompositeImage, RgbImage, WHITE};
use crate::models::info::ButterflyInfo;
use crate::models::observation::PeriodLatitudes;
use crate::services::aggregation::fill_periods;
use crate::services::raster::create_image;

/// Upper bound on sources in one composite: one bit plane per source in a
/// 16-bit pixel.
pub const MAX_SOURCES: usize = 16;

/// Merge per-source occupancy bitmaps into a bit-plane composite.
///
/// All bitmaps must match the grid's shape. Any positive occupancy count
/// reads as "present"; presence is shifted to the source's bit and OR-ed
/// into the pixel. Source order is caller-controlled and decides which bit
/// (and hence which color) each source owns.
pub fn merge_images(images: &[Bitmap], info: &ButterflyInfo) -> ButterflyResult<CompositeImage> {
    if images.len() > MAX_SOURCES {
        return Err(ButterflyError::TooManySources {
            count: images.len(),
            limit: MAX_SOURCES,
        });
    }
    let lat_size = info.lat_axis_len();
    let date_size = info.date_axis_len();
    for image in images {
        if image.shape() != (lat_size, date_size) {
            return Err(ButterflyError::ShapeMismatch {
                expected_rows: lat_size,
                expected_cols: date_size,
                actual_rows: image.rows(),
                actual_cols: image.cols(),
            });
        }
    }

    let mut composite = CompositeImage::zeros(lat_size, date_size);
    for (index, image) in images.iter().enumerate() {
        let plane = 1u16 << index;
        for row in 0..lat_size {
            for col in 0..date_size {
                if image.get(row, col) > 0 {
                    composite.set(row, col, composite.get(row, col) | plane);
                }
            }
        }
    }
    Ok(composite)
}

/// Rasterize and merge several sources' aggregated tables in one step.
///
/// Each source's table is filled against the shared grid first, so sources
/// without data in a period contribute an empty row (an all-zero bitmap
/// column) there.
pub fn create_merged_image(
    sources: &[Vec<PeriodLatitudes>],
    info: &ButterflyInfo,
) -> ButterflyResult<CompositeImage> {
    if sources.len() > MAX_SOURCES {
        return Err(ButterflyError::TooManySources {
            count: sources.len(),
            limit: MAX_SOURCES,
        });
    }
    debug!(
        "merging {} sources into {}x{} composite",
        sources.len(),
        info.lat_axis_len(),
        info.date_axis_len()
    );
    let mut bitmaps = Vec::with_capacity(sources.len());
    for source in sources {
        let filled = fill_periods(
            source.clone(),
            info.date_start,
            info.date_end,
            &info.date_interval,
        );
        bitmaps.push(create_image(&filled, info)?);
    }
    merge_images(&bitmaps, info)
}

/// Render a composite to RGB through an ordered color table.
///
/// Pixels start white; composite value `i` (1-based) takes
/// `cmap.cmap[i - 1]`. Value 0 and values beyond the table stay white —
/// a direct value lookup, not a per-bit blend, so a distinct overlap color
/// must be listed explicitly at the overlap value's index.
pub fn create_color_image(composite: &CompositeImage, cmap: &ColorMap) -> RgbImage {
    let (rows, cols) = composite.shape();
    let mut image = RgbImage::filled(rows, cols, WHITE);
    for row in 0..rows {
        for col in 0..cols {
            let value = composite.get(row, col) as usize;
            if value >= 1 && value <= cmap.len() {
                image.set(row, col, cmap.cmap[value - 1].rgb());
            }
        }
    }
    image
}
