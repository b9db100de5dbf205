//! Image splitting command
//!
//! Cuts every component out of a PNG and writes each one as its own PNG.

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::{error, info};

use crate::api::AlphaCut;
use crate::commands::command_traits::Command;
use crate::config::SegmentationConfig;
use crate::errors::SliceResult;
use crate::utils::logger::Logger;

/// Command for writing one PNG per component
pub struct SplitCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Directory receiving the fragments
    output_dir: PathBuf,
    /// File name prefix for fragments
    prefix: String,
    /// Thresholds to split with
    config: SegmentationConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SplitCommand<'a> {
    /// Create a new split command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        let input_file = super::input_file(args)?;
        info!("Input file: {}", input_file);

        let output_dir = args.get_one::<String>("output-dir")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        info!("Output directory: {}", output_dir.display());

        let prefix = args.get_one::<String>("prefix")
            .cloned()
            .unwrap_or_else(|| "cut_image".to_string());

        Ok(SplitCommand {
            input_file,
            output_dir,
            prefix,
            config: super::segmentation_config(args)?,
            logger,
        })
    }

    /// Directory receiving the fragments
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// File name prefix for fragments
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<'a> Command for SplitCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        let api = AlphaCut::new(None)?
            .with_logger(self.logger.clone())
            .with_config(self.config)
            .with_progress(true);

        let written = match api.split_file(&self.input_file, &self.output_dir, &self.prefix) {
            Ok(written) => written,
            Err(e) => {
                error!("Failed to split {}: {}", self.input_file, e);
                return Err(e);
            }
        };

        if written.is_empty() {
            println!("No components detected");
            return Ok(());
        }

        for fragment in &written {
            let region = fragment.region;
            println!(
                "{}: x={}, y={}, {}x{}",
                fragment.path.display(), region.x, region.y, region.width, region.height
            );
        }

        info!("Split {} into {} fragments", self.input_file, written.len());
        Ok(())
    }
}
