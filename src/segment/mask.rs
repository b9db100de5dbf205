//! Opacity mask construction
//!
//! Turns an RGBA image into a flat boolean grid where `true` marks a pixel
//! whose alpha is strictly above the threshold.

use image::RgbaImage;
use log::debug;

use super::ALPHA_THRESHOLD;

/// Boolean opacity grid with the same dimensions as its source image
///
/// Cells are stored row-major in a single vector indexed by `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpacityMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OpacityMask {
    /// Build a mask from an image
    ///
    /// # Arguments
    /// * `image` - The decoded RGBA image
    /// * `alpha_threshold` - Pixels with alpha strictly greater than this are opaque
    pub fn from_image(image: &RgbaImage, alpha_threshold: u8) -> Self {
        let (width, height) = image.dimensions();
        let cells: Vec<bool> = image
            .pixels()
            .map(|pixel| pixel[3] > alpha_threshold)
            .collect();

        debug!("Built {}x{} opacity mask with alpha threshold {}", width, height, alpha_threshold);

        OpacityMask { width, height, cells }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the pixel at (x, y) is opaque
    ///
    /// Coordinates outside the mask are reported as transparent.
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[self.index(x, y)]
    }

    /// Total number of opaque cells
    pub fn opaque_count(&self) -> usize {
        self.cells.iter().filter(|&&opaque| opaque).count()
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }
}

/// Build the opacity mask with the fixed alpha threshold
pub fn build_mask(image: &RgbaImage) -> OpacityMask {
    OpacityMask::from_image(image, ALPHA_THRESHOLD)
}
