//! Alpha-channel segmentation
//!
//! This module splits an RGBA image into one rectangular fragment per
//! 4-connected group of opaque pixels.

mod region;
mod mask;
mod detector;
mod sorter;
mod extractor;
mod pipeline;
mod tests;

/// Pixels with alpha at or below this value count as transparent
pub const ALPHA_THRESHOLD: u8 = 10;

/// Components with fewer opaque pixels than this are treated as noise
pub const MIN_PIXEL_COUNT: usize = 10;

/// Regions whose top edges differ by at most this many pixels share a row
pub const Y_TOLERANCE: u32 = 10;

pub use region::Region;
pub use mask::{build_mask, OpacityMask};
pub use detector::{detect_regions, DetectedRegion, Detection};
pub use sorter::{compare_reading_order, sort_regions};
pub use extractor::extract_region;
pub use pipeline::{segment_image, segment_raw, ExtractedImage, SegmentationPipeline};
