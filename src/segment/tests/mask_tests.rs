//! Tests for the opacity mask

extern crate std;

use image::Rgba;

use crate::segment::{build_mask, OpacityMask, ALPHA_THRESHOLD};
use super::test_utils::{fill_rect, transparent_image, OPAQUE_RED};

#[test]
fn test_alpha_threshold_is_strict() {
    let mut image = transparent_image(3, 1);
    image.put_pixel(0, 0, Rgba([9, 9, 9, ALPHA_THRESHOLD]));
    image.put_pixel(1, 0, Rgba([9, 9, 9, ALPHA_THRESHOLD + 1]));
    image.put_pixel(2, 0, Rgba([9, 9, 9, 255]));

    let mask = build_mask(&image);
    std::assert!(!mask.is_opaque(0, 0));
    std::assert!(mask.is_opaque(1, 0));
    std::assert!(mask.is_opaque(2, 0));
    std::assert_eq!(mask.opaque_count(), 2);
}

#[test]
fn test_mask_matches_source_dimensions() {
    let mut image = transparent_image(7, 4);
    fill_rect(&mut image, 2, 1, 3, 2, OPAQUE_RED);

    let mask = build_mask(&image);
    std::assert_eq!(mask.width(), 7);
    std::assert_eq!(mask.height(), 4);
    for y in 0..4 {
        for x in 0..7 {
            let expected = image.get_pixel(x, y)[3] > ALPHA_THRESHOLD;
            std::assert_eq!(mask.is_opaque(x, y), expected, "mismatch at ({}, {})", x, y);
        }
    }
}

#[test]
fn test_out_of_range_is_transparent() {
    let image = image::RgbaImage::from_pixel(2, 2, OPAQUE_RED);
    let mask = build_mask(&image);
    std::assert!(!mask.is_opaque(2, 0));
    std::assert!(!mask.is_opaque(0, 2));
}

#[test]
fn test_zero_size_image() {
    let image = transparent_image(0, 0);
    let mask = build_mask(&image);
    std::assert!(mask.is_empty());
    std::assert_eq!(mask.opaque_count(), 0);
}

#[test]
fn test_custom_threshold() {
    let image = image::RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 128]));
    std::assert_eq!(OpacityMask::from_image(&image, 127).opaque_count(), 4);
    std::assert_eq!(OpacityMask::from_image(&image, 128).opaque_count(), 0);
}
