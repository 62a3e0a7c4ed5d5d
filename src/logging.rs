//! Logging configuration for playlistgen
//!
//! Log lines go to the terminal at the CLI-selected verbosity and, when a
//! log directory is available, to a file at debug level so a quiet run can
//! still be diagnosed after the fact.

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Get the log directory path
/// On macOS: ~/Library/Logs/playlistgen/
pub fn get_log_directory() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Logs").join("playlistgen"))
    } else {
        // Fallback for other platforms
        dirs::data_local_dir().map(|d| d.join("playlistgen").join("logs"))
    }
}

/// Initialize the logging system
///
/// Sets up combined logging to:
/// - Terminal (with colors, at the verbosity requested on the CLI)
/// - File (always at debug level, for bug reports)
///
/// Returns the path to the log file on success
pub fn init_logging(verbosity: LevelFilter) -> Option<PathBuf> {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_thread_level(LevelFilter::Off) // Don't show thread IDs
        .set_target_level(LevelFilter::Off) // Don't show module targets
        .build();

    let log_dir = match get_log_directory() {
        Some(d) => d,
        None => {
            eprintln!("Warning: Could not determine log directory");
            init_terminal_only(verbosity, config);
            return None;
        }
    };

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Could not create log directory: {}", e);
        init_terminal_only(verbosity, config);
        return None;
    }

    let log_path = log_dir.join("playlistgen.log");

    // Rotate old log if it's too large (> 10MB)
    if let Ok(metadata) = fs::metadata(&log_path) {
        if metadata.len() > 10 * 1024 * 1024 {
            let backup_path = log_dir.join("playlistgen.log.old");
            let _ = fs::rename(&log_path, &backup_path);
        }
    }

    // Open log file (append mode)
    let log_file = match OpenOptions::new().create(true).append(true).open(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not open log file: {}", e);
            init_terminal_only(verbosity, config);
            return None;
        }
    };

    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(verbosity, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(LevelFilter::Debug, config, log_file),
    ];

    if CombinedLogger::init(loggers).is_err() {
        eprintln!("Warning: Logger already initialized");
    }

    Some(log_path)
}

/// Initialize terminal-only logging (fallback if file logging fails)
fn init_terminal_only(verbosity: LevelFilter, config: simplelog::Config) {
    let term_logger = TermLogger::new(verbosity, config, TerminalMode::Mixed, ColorChoice::Auto);
    let _ = CombinedLogger::init(vec![term_logger]);
}
