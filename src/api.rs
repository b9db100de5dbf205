use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::info;

use crate::config::SegmentationConfig;
use crate::errors::SliceResult;
use crate::segment::{sort_regions, Detection, ExtractedImage, Region, SegmentationPipeline};
use crate::utils::logger::Logger;
use crate::utils::png_utils;
use crate::utils::progress::ProgressTracker;

/// A fragment written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFragment {
    /// Path of the PNG file
    pub path: PathBuf,
    /// Geometry of the fragment in the source image
    pub region: Region,
}

/// Main interface to the AlphaCut library
pub struct AlphaCut {
    logger: Logger,
    pipeline: SegmentationPipeline,
    show_progress: bool,
}

impl AlphaCut {
    /// Create a new AlphaCut instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to an operation log; without one nothing is written to disk
    ///
    /// # Returns
    /// An AlphaCut instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> SliceResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::console(),
        };
        Ok(AlphaCut {
            logger,
            pipeline: SegmentationPipeline::default(),
            show_progress: false,
        })
    }

    /// Record operations in an existing logger instead of the one built by `new`
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Use custom segmentation thresholds
    pub fn with_config(mut self, config: SegmentationConfig) -> Self {
        self.pipeline = SegmentationPipeline::new(config);
        self
    }

    /// Draw a progress bar while writing fragments
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &SegmentationConfig {
        self.pipeline.config()
    }

    /// Split a decoded image into fragments
    pub fn segment(&self, image: &RgbaImage) -> SliceResult<Vec<ExtractedImage>> {
        self.pipeline.run(image)
    }

    /// Load a PNG file and split it into fragments
    pub fn segment_file(&self, input_path: &str) -> SliceResult<Vec<ExtractedImage>> {
        let image = png_utils::load_png(input_path)?;
        self.segment(&image)
    }

    /// Load a PNG file and report what the detector finds, without extracting
    ///
    /// # Returns
    /// The decoded image dimensions, the raw detection and the regions in
    /// reading order
    pub fn analyze_file(&self, input_path: &str) -> SliceResult<(u32, u32, Detection, Vec<Region>)> {
        let image = png_utils::load_png(input_path)?;
        let detection = self.pipeline.detect(&image);
        let mut ordered = detection.boxes();
        sort_regions(&mut ordered, self.config().y_tolerance);
        Ok((image.width(), image.height(), detection, ordered))
    }

    /// Split a PNG file and write every fragment as its own PNG
    ///
    /// # Arguments
    /// * `input_path` - Path to the source PNG
    /// * `output_dir` - Directory receiving the fragments; created if missing
    /// * `prefix` - File name prefix, fragments are written as `{prefix}_{n}.png`
    ///
    /// # Returns
    /// The written fragments in reading order, empty when no component was found
    pub fn split_file(&self, input_path: &str, output_dir: &Path, prefix: &str) -> SliceResult<Vec<WrittenFragment>> {
        let fragments = self.segment_file(input_path)?;
        if fragments.is_empty() {
            self.logger.log(&format!("No components detected in {}", input_path))?;
            return Ok(Vec::new());
        }
        self.write_fragments(&fragments, output_dir, prefix)
    }

    /// Write already extracted fragments as `{prefix}_{n}.png` files
    pub fn write_fragments(&self, fragments: &[ExtractedImage], output_dir: &Path, prefix: &str) -> SliceResult<Vec<WrittenFragment>> {
        fs::create_dir_all(output_dir)?;

        let progress = if self.show_progress {
            ProgressTracker::new(fragments.len() as u64, "Writing fragments")
        } else {
            ProgressTracker::hidden()
        };

        let mut written = Vec::with_capacity(fragments.len());
        for (index, fragment) in fragments.iter().enumerate() {
            let path = png_utils::fragment_path(output_dir, prefix, index);
            png_utils::save_png(&fragment.image, &path)?;
            self.logger.log(&format!(
                "{}: x={}, y={}, width={}, height={}",
                path.display(), fragment.x, fragment.y, fragment.width, fragment.height
            ))?;
            progress.set_message(&path.display().to_string());
            progress.increment(1);
            written.push(WrittenFragment { path, region: fragment.region() });
        }
        progress.finish();

        info!("Wrote {} fragments to {}", written.len(), output_dir.display());
        Ok(written)
    }

    /// Encode one fragment as standalone PNG bytes
    pub fn encode_png(&self, fragment: &ExtractedImage) -> SliceResult<Vec<u8>> {
        png_utils::encode_png(&fragment.image)
    }
}
