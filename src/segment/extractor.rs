//! Rectangular extraction of regions
//!
//! Copies every pixel inside a region's bounding box, all four channels,
//! into a new image of the region's size. Pixels that are transparent in the
//! source stay transparent; nothing is re-masked.

use image::RgbaImage;
use log::debug;

use crate::errors::{SliceError, SliceResult};

use super::region::Region;

const CHANNELS: usize = 4;

/// Extract a region from the source image
///
/// # Arguments
/// * `source` - The original decoded image
/// * `region` - Region to copy; must lie inside `source`
///
/// # Returns
/// A new image of `region.width x region.height` pixels, or
/// `GeometryContractViolation` if the region does not fit the source
pub fn extract_region(source: &RgbaImage, region: Region) -> SliceResult<RgbaImage> {
    let (image_width, image_height) = source.dimensions();
    if !region.fits_within(image_width, image_height) {
        return Err(SliceError::GeometryContractViolation { region, image_width, image_height });
    }

    debug!(
        "Extracting region x={}, y={}, width={}, height={}",
        region.x, region.y, region.width, region.height
    );

    let src = source.as_raw();
    let src_stride = image_width as usize * CHANNELS;
    let row_len = region.width as usize * CHANNELS;
    let mut data = Vec::with_capacity(row_len * region.height as usize);

    for local_y in 0..region.height as usize {
        let start = (region.y as usize + local_y) * src_stride + region.x as usize * CHANNELS;
        data.extend_from_slice(&src[start..start + row_len]);
    }

    RgbaImage::from_raw(region.width, region.height, data).ok_or_else(|| {
        SliceError::GenericError(format!(
            "Extracted buffer does not match {}x{} region",
            region.width, region.height
        ))
    })
}
