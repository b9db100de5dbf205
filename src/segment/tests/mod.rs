//! Unit tests for the segmentation stages

#[cfg(test)]
mod mask_tests;
#[cfg(test)]
mod sorter_tests;
#[cfg(test)]
mod pipeline_tests;
