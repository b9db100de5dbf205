//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod split_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use split_command::SplitCommand;


use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::debug;

use crate::config::SegmentationConfig;
use crate::errors::{SliceError, SliceResult};
use crate::utils::logger::Logger;

/// Command-line definition shared by the binary and the command tests
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("AlphaCut")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split a transparent PNG into one image per opaque component")
        .arg(
            Arg::new("input")
                .help("Input PNG file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("split")
                .short('s')
                .long("split")
                .help("Write every component as its own PNG")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory for the extracted PNG files")
                .value_name("DIR")
                .default_value("."),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .help("File name prefix for extracted images")
                .value_name("PREFIX")
                .default_value("cut_image"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file overriding segmentation thresholds")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write an operation log to this file")
                .value_name("FILE")
                .required(false),
        )
}

/// Factory for creating command instances based on CLI arguments
pub struct AlphaCutCommandFactory;

impl AlphaCutCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        AlphaCutCommandFactory
    }
}

impl Default for AlphaCutCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for AlphaCutCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SliceResult<Box<dyn Command + 'a>> {
        if args.get_flag("split") {
            Ok(Box::new(SplitCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

/// Read the input path argument shared by all commands
pub(crate) fn input_file(args: &ArgMatches) -> SliceResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| SliceError::GenericError("Missing input file".to_string()))
}

/// Load thresholds from `--config` if given, otherwise use the defaults
pub(crate) fn segmentation_config(args: &ArgMatches) -> SliceResult<SegmentationConfig> {
    match args.get_one::<String>("config") {
        Some(path) => {
            debug!("Loading segmentation config from {}", path);
            SegmentationConfig::from_file(path)
        }
        None => Ok(SegmentationConfig::default()),
    }
}
