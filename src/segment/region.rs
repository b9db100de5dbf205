//! Region structure describing one detected component
//!
//! A region is the axis-aligned bounding box of a connected set of opaque
//! pixels. Coordinates are in pixels of the source image, with (0,0) at the
//! top-left corner.

/// Bounding box of a component (in pixel coordinates)
///
/// Regions produced by the detector always satisfy `width >= 1`,
/// `height >= 1` and lie entirely inside the image they were detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Build a region from inclusive min/max corners
    pub fn from_corners(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Region {
            x: min_x,
            y: min_y,
            width: max_x - min_x + 1,
            height: max_y - min_y + 1,
        }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Number of pixels covered by the bounding box
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check whether the pixel (x, y) lies inside the box
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.end_x() && y >= self.y && y < self.end_y()
    }

    /// Check that the region is non-empty and fits inside an image
    ///
    /// Uses widened arithmetic so that a corrupt region near `u32::MAX`
    /// is reported as out of bounds instead of overflowing.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.width >= 1
            && self.height >= 1
            && self.x as u64 + self.width as u64 <= image_width as u64
            && self.y as u64 + self.height as u64 <= image_height as u64
    }
}
