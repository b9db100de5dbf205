use std::process;
use log::{error, Level};

use alphacut::utils::logger::Logger;
use alphacut::commands::{build_cli, CommandFactory, AlphaCutCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { Level::Debug } else { Level::Info };

    let logger = match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(&format!("{}.global", log_file), level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
            match Logger::new(log_file) {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error initializing logger: {}", e);
                    process::exit(1);
                }
            }
        }
        None => {
            Logger::init_console_logger(level.to_level_filter());
            Logger::console()
        }
    };

    let factory = AlphaCutCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
