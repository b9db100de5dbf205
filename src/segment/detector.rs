//! Connected-component detection over an opacity mask
//!
//! Components are grown with an explicit work stack over 4-connected
//! neighbours (no diagonals), so very large components cannot exhaust the
//! call stack. Every mask cell is visited at most once per pass.

use log::{debug, info};

use super::mask::OpacityMask;
use super::region::Region;

/// A component that survived the pixel-count filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectedRegion {
    /// Bounding box of the component
    pub region: Region,
    /// Number of opaque pixels in the component
    pub pixel_count: usize,
}

/// Result of a detection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Retained components in raster discovery order
    pub regions: Vec<DetectedRegion>,
    /// Components dropped for being smaller than the minimum pixel count
    pub discarded_components: usize,
    /// Total opaque pixels belonging to dropped components
    pub discarded_pixels: usize,
}

impl Detection {
    /// Bounding boxes of the retained components
    pub fn boxes(&self) -> Vec<Region> {
        self.regions.iter().map(|detected| detected.region).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Running bounds of a component while it is being filled
struct ComponentBounds {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
    pixel_count: usize,
}

impl ComponentBounds {
    fn new(x: u32, y: u32) -> Self {
        ComponentBounds { min_x: x, min_y: y, max_x: x, max_y: y, pixel_count: 0 }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.pixel_count += 1;
    }

    fn region(&self) -> Region {
        Region::from_corners(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

/// Find all 4-connected opaque components in a mask
///
/// # Arguments
/// * `mask` - The opacity mask to label
/// * `min_pixel_count` - Components with fewer pixels than this are discarded
///
/// # Returns
/// The retained components in raster scan order of their first pixel, plus
/// bookkeeping about what was filtered out
pub fn detect_regions(mask: &OpacityMask, min_pixel_count: usize) -> Detection {
    let width = mask.width();
    let height = mask.height();
    let cells = mask.cells();
    let mut visited = vec![false; cells.len()];
    let mut stack: Vec<(u32, u32)> = Vec::new();
    let mut detection = Detection::default();

    for y in 0..height {
        for x in 0..width {
            let seed = mask.index(x, y);
            if !cells[seed] || visited[seed] {
                continue;
            }

            visited[seed] = true;
            stack.push((x, y));
            let mut bounds = ComponentBounds::new(x, y);

            while let Some((cx, cy)) = stack.pop() {
                bounds.include(cx, cy);

                let neighbours = [
                    (cx.checked_add(1), Some(cy)),
                    (cx.checked_sub(1), Some(cy)),
                    (Some(cx), cy.checked_add(1)),
                    (Some(cx), cy.checked_sub(1)),
                ];

                for (nx, ny) in neighbours {
                    let (Some(nx), Some(ny)) = (nx, ny) else {
                        continue;
                    };
                    if nx >= width || ny >= height {
                        continue;
                    }
                    let index = mask.index(nx, ny);
                    if cells[index] && !visited[index] {
                        visited[index] = true;
                        stack.push((nx, ny));
                    }
                }
            }

            if bounds.pixel_count < min_pixel_count {
                debug!(
                    "Discarding {}-pixel component at ({}, {})",
                    bounds.pixel_count, bounds.min_x, bounds.min_y
                );
                detection.discarded_components += 1;
                detection.discarded_pixels += bounds.pixel_count;
                continue;
            }

            detection.regions.push(DetectedRegion {
                region: bounds.region(),
                pixel_count: bounds.pixel_count,
            });
        }
    }

    info!(
        "Detected {} components ({} discarded as noise, {} pixels)",
        detection.regions.len(),
        detection.discarded_components,
        detection.discarded_pixels
    );

    detection
}
