//! Occupancy bitmap construction for a single source.
//!
//! The latitude axis doubles every degree: degree `d` occupies row
//! `2 * (lat_max - d)` and the odd rows sit between adjacent degrees. A
//! sighting paints one contiguous vertical band per period, covering its
//! whole-degree rows and the between-degree rows inside the span, so the
//! band reads as one stroke while rows between two separate sightings stay
//! zero.

use crate::error::{ButterflyError, ButterflyResult};
use crate::models::image::Bitmap;
use crate::models::info::ButterflyInfo;
use crate::models::observation::PeriodLatitudes;

/// Grid row of a whole latitude degree. Row 0 is `lat_max` (image top);
/// rows grow toward `lat_min`.
pub fn lat_row(lat_max: i32, degree: i32) -> usize {
    (2 * (lat_max - degree)) as usize
}

/// Rasterize a filled period table into an occupancy-count bitmap.
///
/// The table must carry exactly one row per date-axis column (the output
/// of `fill_periods`). Each normalized `(lo, hi)` pair increments every
/// band row by one at its period's column. A pair reaching beyond the
/// grid's latitude range is rejected, not clipped.
pub fn create_image(filled: &[PeriodLatitudes], info: &ButterflyInfo) -> ButterflyResult<Bitmap> {
    let lat_size = info.lat_axis_len();
    let date_size = info.date_axis_len();
    if filled.len() != date_size {
        return Err(ButterflyError::ShapeMismatch {
            expected_rows: lat_size,
            expected_cols: date_size,
            actual_rows: lat_size,
            actual_cols: filled.len(),
        });
    }

    let mut image = Bitmap::zeros(lat_size, date_size);
    for (col, period) in filled.iter().enumerate() {
        if period.min.len() != period.max.len() {
            return Err(ButterflyError::UnpairedLatitudes {
                date: period.date,
                min_len: period.min.len(),
                max_len: period.max.len(),
            });
        }
        for (a, b) in period.pairs() {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            if lo < info.lat_min || hi > info.lat_max {
                return Err(ButterflyError::LatitudeOutOfRange {
                    lo,
                    hi,
                    lat_min: info.lat_min,
                    lat_max: info.lat_max,
                });
            }
            let top = lat_row(info.lat_max, hi);
            let bottom = lat_row(info.lat_max, lo);
            for row in top..=bottom {
                image.set(row, col, image.get(row, col) + 1);
            }
        }
    }
    Ok(image)
}
