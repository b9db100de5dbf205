//! Logger utility for application-wide logging
//!
//! This module provides a logger that works alongside the standard log
//! crate and adds file output. A logger without a file only echoes to the
//! console, which is what commands get when no log file was requested.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use log::{Log, Record, Level, Metadata, LevelFilter};

/// File-backed logger
///
/// Clones share the same file handle.
#[derive(Clone)]
pub struct Logger {
    /// File handle for log output
    file: Arc<Mutex<Option<File>>>,
    /// Most verbose level this logger accepts
    level: Level,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Arc::new(Mutex::new(Some(file))),
            level: Level::Info,
        })
    }

    /// Creates a logger that has no file attached
    pub fn console() -> Self {
        Logger {
            file: Arc::new(Mutex::new(None)),
            level: Level::Info,
        }
    }

    /// Sets the most verbose level this logger accepts
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Appends a message to the log file, if there is one
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Whether this logger writes to a file
    pub fn has_file(&self) -> bool {
        self.file.lock().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// Installs a file logger as the global `log` backend
    pub fn init_global_logger(log_file: &str, level: Level) -> io::Result<()> {
        let global_logger = Logger::new(log_file)?.with_level(level);

        // Only called once at startup
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level.to_level_filter());
        Ok(())
    }

    /// Installs `env_logger` as the global backend
    ///
    /// `RUST_LOG` takes precedence; otherwise `default_level` applies.
    pub fn init_console_logger(default_level: LevelFilter) {
        let filter = default_level.to_string().to_lowercase();
        let env = env_logger::Env::default().default_filter_or(filter);
        if env_logger::Builder::from_env(env).try_init().is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = self.log(&message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_logger_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alphacut.log");
        let logger = Logger::new(path.to_str().unwrap()).unwrap();

        logger.log("first").unwrap();
        logger.log("second").unwrap();

        assert!(logger.has_file());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_console_logger_ignores_file_writes() {
        let logger = Logger::console();
        assert!(!logger.has_file());
        assert!(logger.log("nothing to write").is_ok());
    }

    #[test]
    fn test_clones_share_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shared.log");
        let logger = Logger::new(path.to_str().unwrap()).unwrap();
        let clone = logger.clone();

        logger.log("from original").unwrap();
        clone.log("from clone").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "from original\nfrom clone\n");
    }

    #[test]
    fn test_level_filtering() {
        let logger = Logger::console().with_level(Level::Warn);
        let warn = Metadata::builder().level(Level::Warn).build();
        let info = Metadata::builder().level(Level::Info).build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }
}
