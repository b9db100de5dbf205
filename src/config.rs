//! Segmentation settings
//!
//! Defaults are the fixed thresholds the splitter is tuned for. A TOML file
//! with a `[segmentation]` table can override any of them.

use std::fs;

use log::debug;

use crate::errors::{SliceError, SliceResult};
use crate::segment::{ALPHA_THRESHOLD, MIN_PIXEL_COUNT, Y_TOLERANCE};

/// Thresholds used by the segmentation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationConfig {
    /// Pixels with alpha strictly above this value are opaque
    pub alpha_threshold: u8,
    /// Components with fewer opaque pixels are dropped as noise
    pub min_pixel_count: usize,
    /// Maximum difference of top edges for two regions to share a row
    pub y_tolerance: u32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        SegmentationConfig {
            alpha_threshold: ALPHA_THRESHOLD,
            min_pixel_count: MIN_PIXEL_COUNT,
            y_tolerance: Y_TOLERANCE,
        }
    }
}

impl SegmentationConfig {
    /// Parse settings from a TOML string
    ///
    /// Keys missing from the `[segmentation]` table keep their defaults.
    pub fn from_str(content: &str) -> SliceResult<Self> {
        let document: toml::Table = toml::from_str(content)
            .map_err(|e| SliceError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = SegmentationConfig::default();

        let Some(table) = document.get("segmentation") else {
            return Ok(config);
        };
        let table = table
            .as_table()
            .ok_or_else(|| SliceError::ConfigError("[segmentation] must be a table".to_string()))?;

        if let Some(value) = table.get("alpha_threshold") {
            config.alpha_threshold = Self::read_integer(value, "alpha_threshold", u8::MAX as i64)? as u8;
        }
        if let Some(value) = table.get("min_pixel_count") {
            config.min_pixel_count = Self::read_integer(value, "min_pixel_count", i64::MAX)? as usize;
        }
        if let Some(value) = table.get("y_tolerance") {
            config.y_tolerance = Self::read_integer(value, "y_tolerance", u32::MAX as i64)? as u32;
        }

        debug!("Loaded segmentation config: {:?}", config);
        Ok(config)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &str) -> SliceResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    fn read_integer(value: &toml::Value, key: &str, max: i64) -> SliceResult<i64> {
        let number = value
            .as_integer()
            .ok_or_else(|| SliceError::ConfigError(format!("{} must be an integer", key)))?;

        if number < 0 || number > max {
            return Err(SliceError::ConfigError(format!(
                "{} must be between 0 and {}, got {}",
                key, max, number
            )));
        }

        Ok(number)
    }
}
