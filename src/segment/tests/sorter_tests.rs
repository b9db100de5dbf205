//! Tests for reading-order sorting

extern crate std;

use std::cmp::Ordering;

use crate::segment::{compare_reading_order, sort_regions, Region, Y_TOLERANCE};

#[test]
fn test_same_row_orders_by_x() {
    let left = Region::new(5, 10, 3, 3);
    let right = Region::new(50, 0, 3, 3);
    std::assert_eq!(compare_reading_order(&left, &right, Y_TOLERANCE), Ordering::Less);
    std::assert_eq!(compare_reading_order(&right, &left, Y_TOLERANCE), Ordering::Greater);
}

#[test]
fn test_different_rows_order_by_y() {
    let top_right = Region::new(90, 0, 3, 3);
    let bottom_left = Region::new(0, 11, 3, 3);
    std::assert_eq!(compare_reading_order(&top_right, &bottom_left, Y_TOLERANCE), Ordering::Less);
}

#[test]
fn test_sort_rows_then_columns() {
    let mut regions = vec![
        Region::new(60, 52, 10, 10),
        Region::new(0, 50, 10, 10),
        Region::new(40, 3, 10, 10),
        Region::new(10, 0, 10, 10),
    ];
    sort_regions(&mut regions, Y_TOLERANCE);
    std::assert_eq!(
        regions,
        vec![
            Region::new(10, 0, 10, 10),
            Region::new(40, 3, 10, 10),
            Region::new(0, 50, 10, 10),
            Region::new(60, 52, 10, 10),
        ]
    );
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let first = Region::new(7, 4, 10, 2);
    let second = Region::new(7, 0, 3, 9);
    let mut regions = vec![first, second];
    sort_regions(&mut regions, Y_TOLERANCE);
    std::assert_eq!(regions, vec![first, second]);

    let mut reversed = vec![second, first];
    sort_regions(&mut reversed, Y_TOLERANCE);
    std::assert_eq!(reversed, vec![second, first]);
}

#[test]
fn test_non_transitive_chain_is_deterministic() {
    let a = Region::new(100, 0, 5, 5);
    let b = Region::new(50, 8, 5, 5);
    let c = Region::new(0, 16, 5, 5);

    let mut first = vec![a, b, c];
    let mut second = vec![a, b, c];
    sort_regions(&mut first, Y_TOLERANCE);
    sort_regions(&mut second, Y_TOLERANCE);

    std::assert_eq!(first, second);
    std::assert_eq!(first, vec![b, a, c]);
}

#[test]
fn test_sort_empty_and_single() {
    let mut empty: Vec<Region> = Vec::new();
    sort_regions(&mut empty, Y_TOLERANCE);
    std::assert!(empty.is_empty());

    let mut single = vec![Region::new(1, 1, 1, 1)];
    sort_regions(&mut single, Y_TOLERANCE);
    std::assert_eq!(single, vec![Region::new(1, 1, 1, 1)]);
}
