//! Custom error types for segmentation and PNG handling

use std::fmt;
use std::io;

use crate::segment::Region;

/// Error types raised while splitting an image
#[derive(Debug)]
pub enum SliceError {
    /// I/O error
    IoError(io::Error),
    /// Input is not a decodable PNG or not a valid RGBA buffer
    InvalidInputFormat(String),
    /// A region handed to extraction does not fit inside the source image
    GeometryContractViolation {
        region: Region,
        image_width: u32,
        image_height: u32,
    },
    /// Encoding or decoding error from the image crate
    ImageError(image::ImageError),
    /// Invalid configuration file
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::IoError(e) => write!(f, "I/O error: {}", e),
            SliceError::InvalidInputFormat(msg) => write!(f, "Invalid input format: {}", msg),
            SliceError::GeometryContractViolation { region, image_width, image_height } => write!(
                f,
                "Region x={}, y={}, width={}, height={} lies outside the {}x{} source image",
                region.x, region.y, region.width, region.height, image_width, image_height
            ),
            SliceError::ImageError(e) => write!(f, "Image error: {}", e),
            SliceError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SliceError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SliceError::IoError(e) => Some(e),
            SliceError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SliceError {
    fn from(error: io::Error) -> Self {
        SliceError::IoError(error)
    }
}

impl From<image::ImageError> for SliceError {
    fn from(error: image::ImageError) -> Self {
        SliceError::ImageError(error)
    }
}

impl From<String> for SliceError {
    fn from(msg: String) -> Self {
        SliceError::GenericError(msg)
    }
}

/// Result type for segmentation operations
pub type SliceResult<T> = Result<T, SliceError>;
