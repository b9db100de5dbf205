pub mod errors;
pub mod config;
pub mod segment;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{AlphaCut, WrittenFragment};

pub use config::SegmentationConfig;
pub use errors::{SliceError, SliceResult};
pub use segment::{
    build_mask, detect_regions, extract_region, segment_image, segment_raw, sort_regions,
    ExtractedImage, OpacityMask, Region, SegmentationPipeline,
};
