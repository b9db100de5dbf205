//! Component analysis command
//!
//! Reports the components the splitter would cut out of a PNG, in the
//! order they would be written, without writing anything.

use clap::ArgMatches;
use log::info;

use crate::api::AlphaCut;
use crate::commands::command_traits::Command;
use crate::config::SegmentationConfig;
use crate::errors::SliceResult;
use crate::utils::logger::Logger;

/// Command for listing detected components
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Thresholds to analyze with
    config: SegmentationConfig,
    /// Whether to print per-component pixel counts
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        Ok(AnalyzeCommand {
            input_file: super::input_file(args)?,
            config: super::segmentation_config(args)?,
            verbose: args.get_flag("verbose"),
            logger,
        })
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        info!("Analyzing {}", self.input_file);

        let api = AlphaCut::new(None)?
            .with_logger(self.logger.clone())
            .with_config(self.config);
        let (width, height, detection, ordered) = api.analyze_file(&self.input_file)?;
        let retained_pixels: usize = detection.regions.iter().map(|d| d.pixel_count).sum();

        println!("Image: {} ({}x{})", self.input_file, width, height);
        println!("  Opaque pixels: {}", retained_pixels + detection.discarded_pixels);
        println!("  Components: {}", ordered.len());
        println!(
            "  Discarded as noise: {} ({} pixels)",
            detection.discarded_components, detection.discarded_pixels
        );

        if ordered.is_empty() {
            println!("No components detected");
        }

        for (index, region) in ordered.iter().enumerate() {
            print!(
                "  #{}: x={}, y={}, {}x{}",
                index + 1, region.x, region.y, region.width, region.height
            );
            if self.verbose {
                let pixels = detection
                    .regions
                    .iter()
                    .find(|d| d.region == *region)
                    .map(|d| d.pixel_count)
                    .unwrap_or(0);
                print!(" ({} opaque pixels)", pixels);
            }
            println!();
        }

        self.logger.log(&format!(
            "Analyzed {}: {} components, {} discarded",
            self.input_file,
            ordered.len(),
            detection.discarded_components
        ))?;

        Ok(())
    }
}
