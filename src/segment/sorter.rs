//! Reading-order sorting of regions
//!
//! Regions are ordered top to bottom, and left to right when their top
//! edges are within a tolerance of each other. The tolerance makes the
//! comparison non-transitive, so the sort below never assumes a total order.

use std::cmp::Ordering;

use super::region::Region;

/// Compare two regions in reading order
///
/// If the top edges differ by more than `y_tolerance` the higher region comes
/// first, otherwise the region further left comes first.
pub fn compare_reading_order(a: &Region, b: &Region, y_tolerance: u32) -> Ordering {
    if a.y.abs_diff(b.y) > y_tolerance {
        a.y.cmp(&b.y)
    } else {
        a.x.cmp(&b.x)
    }
}

/// Sort regions into reading order in place
///
/// Stable insertion sort: a region only moves in front of its predecessor
/// when it compares strictly less, so equal keys keep their input order and
/// identical inputs always produce identical output.
pub fn sort_regions(regions: &mut [Region], y_tolerance: u32) {
    for i in 1..regions.len() {
        let mut j = i;
        while j > 0
            && compare_reading_order(&regions[j], &regions[j - 1], y_tolerance) == Ordering::Less
        {
            regions.swap(j, j - 1);
            j -= 1;
        }
    }
}
