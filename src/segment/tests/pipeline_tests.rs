//! End-to-end tests for the segmentation pipeline

extern crate std;

use image::{Rgba, RgbaImage};

use crate::config::SegmentationConfig;
use crate::errors::SliceError;
use crate::segment::{segment_image, segment_raw, Region, SegmentationPipeline};
use super::test_utils::{fill_gradient, fill_rect, fill_run, transparent_image, OPAQUE_RED};

#[test]
fn test_fully_transparent_image_yields_nothing() {
    let image = transparent_image(10, 10);
    std::assert!(segment_image(&image).unwrap().is_empty());
}

#[test]
fn test_single_square() {
    let mut image = transparent_image(100, 100);
    fill_rect(&mut image, 10, 10, 20, 20, OPAQUE_RED);

    let fragments = segment_image(&image).unwrap();
    std::assert_eq!(fragments.len(), 1);

    let fragment = &fragments[0];
    std::assert_eq!(fragment.region(), Region::new(10, 10, 20, 20));
    std::assert_eq!(fragment.pixel_data().len(), 20 * 20 * 4);
    std::assert!(fragment.image.pixels().all(|p| *p == OPAQUE_RED));
    std::assert_eq!(fragment.image.pixels().count(), 400);
}

#[test]
fn test_same_row_ordered_left_to_right() {
    let mut image = transparent_image(100, 40);
    fill_rect(&mut image, 50, 0, 20, 20, OPAQUE_RED);
    fill_rect(&mut image, 0, 0, 20, 20, OPAQUE_RED);

    let fragments = segment_image(&image).unwrap();
    let regions: Vec<Region> = fragments.iter().map(|f| f.region()).collect();
    std::assert_eq!(regions, vec![Region::new(0, 0, 20, 20), Region::new(50, 0, 20, 20)]);
}

#[test]
fn test_separate_rows_ordered_top_to_bottom() {
    let mut image = transparent_image(40, 100);
    fill_rect(&mut image, 0, 0, 20, 20, OPAQUE_RED);
    fill_rect(&mut image, 0, 50, 20, 20, OPAQUE_RED);

    let fragments = segment_image(&image).unwrap();
    let regions: Vec<Region> = fragments.iter().map(|f| f.region()).collect();
    std::assert_eq!(regions, vec![Region::new(0, 0, 20, 20), Region::new(0, 50, 20, 20)]);
}

#[test]
fn test_lower_row_on_the_left_still_comes_second() {
    let mut image = transparent_image(100, 100);
    fill_rect(&mut image, 60, 0, 20, 20, OPAQUE_RED);
    fill_rect(&mut image, 0, 40, 20, 20, OPAQUE_RED);

    let fragments = segment_image(&image).unwrap();
    std::assert_eq!(fragments[0].region(), Region::new(60, 0, 20, 20));
    std::assert_eq!(fragments[1].region(), Region::new(0, 40, 20, 20));
}

#[test]
fn test_nine_pixels_dropped_ten_pixels_kept() {
    let mut nine = transparent_image(20, 20);
    fill_rect(&mut nine, 5, 5, 3, 3, OPAQUE_RED);
    std::assert!(segment_image(&nine).unwrap().is_empty());

    let mut ten = transparent_image(20, 20);
    fill_run(&mut ten, 5, 5, 10);
    let fragments = segment_image(&ten).unwrap();
    std::assert_eq!(fragments.len(), 1);
    std::assert_eq!(fragments[0].region(), Region::new(5, 5, 10, 1));
}

#[test]
fn test_l_shape_keeps_transparent_corner() {
    let background = Rgba([1, 2, 3, 5]);
    let mut image = RgbaImage::from_pixel(50, 50, background);
    fill_rect(&mut image, 10, 10, 5, 20, OPAQUE_RED);
    fill_rect(&mut image, 10, 25, 20, 5, OPAQUE_RED);

    let fragments = segment_image(&image).unwrap();
    std::assert_eq!(fragments.len(), 1);

    let fragment = &fragments[0];
    std::assert_eq!(fragment.region(), Region::new(10, 10, 20, 20));
    std::assert_eq!(*fragment.image.get_pixel(19, 0), background);
    std::assert_eq!(*fragment.image.get_pixel(0, 0), OPAQUE_RED);
    std::assert_eq!(*fragment.image.get_pixel(19, 19), OPAQUE_RED);

    let transparent = fragment.image.pixels().filter(|p| p[3] == 5).count();
    std::assert_eq!(transparent, 15 * 15);
}

#[test]
fn test_fragments_match_source_pixels() {
    let mut image = transparent_image(80, 60);
    fill_gradient(&mut image, 3, 4, 17, 11);
    fill_gradient(&mut image, 40, 30, 25, 20);

    for fragment in segment_image(&image).unwrap() {
        for ly in 0..fragment.height {
            for lx in 0..fragment.width {
                std::assert_eq!(
                    fragment.image.get_pixel(lx, ly),
                    image.get_pixel(fragment.x + lx, fragment.y + ly)
                );
            }
        }
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let mut image = transparent_image(64, 64);
    fill_gradient(&mut image, 2, 2, 10, 10);
    fill_gradient(&mut image, 30, 5, 12, 4);
    fill_gradient(&mut image, 5, 40, 30, 20);

    let first = segment_image(&image).unwrap();
    let second = segment_image(&image).unwrap();
    std::assert_eq!(first, second);
    std::assert_eq!(first.len(), 3);
}

#[test]
fn test_custom_config_changes_noise_filter() {
    let mut image = transparent_image(20, 20);
    fill_rect(&mut image, 0, 0, 3, 3, OPAQUE_RED);

    let config = SegmentationConfig { min_pixel_count: 9, ..SegmentationConfig::default() };
    let fragments = SegmentationPipeline::new(config).run(&image).unwrap();
    std::assert_eq!(fragments.len(), 1);
}

#[test]
fn test_raw_buffer_input() {
    let mut image = transparent_image(30, 30);
    fill_rect(&mut image, 4, 4, 6, 6, OPAQUE_RED);

    let fragments = segment_raw(30, 30, image.into_raw()).unwrap();
    std::assert_eq!(fragments.len(), 1);
    std::assert_eq!(fragments[0].region(), Region::new(4, 4, 6, 6));
}

#[test]
fn test_raw_buffer_with_wrong_length() {
    let short = segment_raw(4, 4, vec![0; 63]);
    std::assert!(matches!(short, Err(SliceError::InvalidInputFormat(_))));

    let long = segment_raw(4, 4, vec![0; 65]);
    std::assert!(matches!(long, Err(SliceError::InvalidInputFormat(_))));
}

#[test]
fn test_zero_size_image() {
    std::assert!(segment_raw(0, 0, Vec::new()).unwrap().is_empty());
}
