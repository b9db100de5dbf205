//! Segmentation pipeline
//!
//! Runs mask construction, component detection, reading-order sorting and
//! extraction over one decoded image. A call either returns every fragment
//! or fails as a whole.

use image::RgbaImage;
use log::{debug, info};

use crate::config::SegmentationConfig;
use crate::errors::{SliceError, SliceResult};

use super::detector::{detect_regions, Detection};
use super::extractor::extract_region;
use super::mask::OpacityMask;
use super::region::Region;
use super::sorter::sort_regions;

/// One fragment cut out of the source image
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedImage {
    /// X-coordinate of the fragment in the source image
    pub x: u32,
    /// Y-coordinate of the fragment in the source image
    pub y: u32,
    /// Width of the fragment in pixels
    pub width: u32,
    /// Height of the fragment in pixels
    pub height: u32,
    /// Pixels of the fragment, `width x height` RGBA cells
    pub image: RgbaImage,
}

impl ExtractedImage {
    /// Geometry of the fragment in source coordinates
    pub fn region(&self) -> Region {
        Region::new(self.x, self.y, self.width, self.height)
    }

    /// Raw RGBA bytes, row-major
    pub fn pixel_data(&self) -> &[u8] {
        self.image.as_raw()
    }
}

/// Pipeline over a fixed set of thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentationPipeline {
    config: SegmentationConfig,
}

impl SegmentationPipeline {
    pub fn new(config: SegmentationConfig) -> Self {
        SegmentationPipeline { config }
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    /// Mask and label an image without extracting anything
    pub fn detect(&self, image: &RgbaImage) -> Detection {
        let mask = OpacityMask::from_image(image, self.config.alpha_threshold);
        detect_regions(&mask, self.config.min_pixel_count)
    }

    /// Detect regions and return them in reading order
    pub fn ordered_regions(&self, image: &RgbaImage) -> Vec<Region> {
        let mut regions = self.detect(image).boxes();
        sort_regions(&mut regions, self.config.y_tolerance);
        regions
    }

    /// Split an image into its opaque components
    ///
    /// # Arguments
    /// * `image` - The decoded source image
    ///
    /// # Returns
    /// The extracted fragments in reading order; an empty vector means no
    /// component survived the noise filter
    pub fn run(&self, image: &RgbaImage) -> SliceResult<Vec<ExtractedImage>> {
        let regions = self.ordered_regions(image);
        if regions.is_empty() {
            info!("No components detected in {}x{} image", image.width(), image.height());
            return Ok(Vec::new());
        }

        let fragments = regions
            .into_iter()
            .map(|region| -> SliceResult<ExtractedImage> {
                let pixels = extract_region(image, region)?;
                Ok(ExtractedImage {
                    x: region.x,
                    y: region.y,
                    width: region.width,
                    height: region.height,
                    image: pixels,
                })
            })
            .collect::<SliceResult<Vec<ExtractedImage>>>()?;

        debug!("Extracted {} fragments", fragments.len());
        Ok(fragments)
    }
}

/// Split an image using the default thresholds
pub fn segment_image(image: &RgbaImage) -> SliceResult<Vec<ExtractedImage>> {
    SegmentationPipeline::default().run(image)
}

/// Split a raw row-major RGBA buffer using the default thresholds
///
/// The buffer must hold exactly `width * height * 4` bytes.
pub fn segment_raw(width: u32, height: u32, data: Vec<u8>) -> SliceResult<Vec<ExtractedImage>> {
    let expected = width as u64 * height as u64 * 4;
    let actual = data.len();
    let image = RgbaImage::from_raw(width, height, data).filter(|_| actual as u64 == expected);
    let image = image.ok_or_else(|| {
        SliceError::InvalidInputFormat(format!(
            "expected {} bytes for a {}x{} RGBA buffer, got {}",
            expected, width, height, actual
        ))
    })?;

    segment_image(&image)
}
