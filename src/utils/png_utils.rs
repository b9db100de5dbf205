//! PNG decoding and encoding helpers
//!
//! The segmentation core only sees decoded RGBA buffers. These helpers are
//! the boundary: they refuse anything that is not a PNG before it reaches
//! the core, and turn fragments back into standalone PNG files.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::{debug, info};

use crate::errors::{SliceError, SliceResult};

/// Decode PNG bytes into an RGBA image
///
/// # Arguments
/// * `bytes` - Raw file contents
///
/// # Returns
/// The decoded image, or `InvalidInputFormat` when the bytes are not a
/// decodable PNG
pub fn decode_png(bytes: &[u8]) -> SliceResult<RgbaImage> {
    match image::guess_format(bytes) {
        Ok(ImageFormat::Png) => {}
        Ok(other) => {
            return Err(SliceError::InvalidInputFormat(format!(
                "expected a PNG file, found {:?}",
                other
            )))
        }
        Err(_) => {
            return Err(SliceError::InvalidInputFormat(
                "file is not a recognizable image".to_string(),
            ))
        }
    }

    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| SliceError::InvalidInputFormat(format!("failed to decode PNG: {}", e)))?;

    debug!("Decoded {}x{} PNG ({:?})", image.width(), image.height(), image.color());
    Ok(image.to_rgba8())
}

/// Read and decode a PNG file
///
/// Content decides whether a file is accepted. When it is rejected, the
/// error names the file extension as well, since a wrong extension is the
/// usual cause.
pub fn load_png(path: &str) -> SliceResult<RgbaImage> {
    info!("Loading {}", path);
    let bytes = fs::read(path)?;
    decode_png(&bytes).map_err(|e| match e {
        SliceError::InvalidInputFormat(msg) => {
            let extension = Path::new(path)
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
                .unwrap_or_else(|| "no extension".to_string());
            SliceError::InvalidInputFormat(format!("{} ({}): {}", path, extension, msg))
        }
        other => other,
    })
}

/// Encode an RGBA image as PNG bytes, preserving alpha
pub fn encode_png(image: &RgbaImage) -> SliceResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image.clone()).write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Write an RGBA image to `path` as PNG
pub fn save_png(image: &RgbaImage, path: &Path) -> SliceResult<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    debug!("Saved {}x{} PNG to {}", image.width(), image.height(), path.display());
    Ok(())
}

/// File name of the fragment at 0-based `index`
///
/// Fragments are numbered from 1, e.g. `cut_image_1.png`.
pub fn fragment_file_name(prefix: &str, index: usize) -> String {
    format!("{}_{}.png", prefix, index + 1)
}

/// Full output path of the fragment at 0-based `index`
pub fn fragment_path(output_dir: &Path, prefix: &str, index: usize) -> PathBuf {
    output_dir.join(fragment_file_name(prefix, index))
}
