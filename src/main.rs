//! playlistgen - per-directory M3U8 playlist generator
//!
//! Scans one or more directory trees, probes media durations through
//! ffprobe, and writes one `<dirname>.m3u8` playlist into every visited
//! directory, optionally folding descendant media into ancestor playlists.

mod core;
mod error;
mod logging;
mod media;
mod playlist;
#[cfg(test)]
mod test_fixtures;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::LevelFilter;

use crate::core::{walk, WalkOptions};
use crate::error::PathError;
use crate::media::MediaProber;

#[derive(Debug, Parser)]
#[command(
    name = "playlistgen",
    version,
    about = "Generate per-directory M3U8 playlists for media trees"
)]
struct Cli {
    /// Top directories with media
    paths: Vec<PathBuf>,

    /// Log level for terminal output (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    verbosity: LevelFilter,

    /// Keep descendant media out of ancestor playlists
    #[arg(long)]
    no_multilevel_playlists: bool,

    /// Do not descend into subdirectories
    #[arg(long)]
    no_recurse: bool,
}

/// Check that a CLI-supplied root exists and is a directory
fn validate_root(path: &Path) -> Result<(), PathError> {
    if !path.exists() {
        return Err(PathError::Missing(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(PathError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Ask interactively for a single directory when none was given
fn prompt_for_directory() -> io::Result<PathBuf> {
    print!("Directory: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim_end_matches(['\n', '\r'])))
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbosity);

    let targets = if cli.paths.is_empty() {
        match prompt_for_directory() {
            Ok(path) => vec![path],
            Err(e) => {
                log::error!("Failed to read directory from stdin: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        cli.paths
    };

    let options = WalkOptions {
        recurse: !cli.no_recurse,
        multilevel: !cli.no_multilevel_playlists,
    };

    // One prober for the whole run, so the duration cache spans all roots
    let mut prober = MediaProber::new();

    for path in &targets {
        if let Err(e) = validate_root(path) {
            log::error!("{}", e);
            std::process::exit(1);
        }

        match walk(path, options, &mut prober) {
            Ok(outcome) => log::debug!(
                "Created {} playlist(s) under {}",
                outcome.playlists.len(),
                path.display()
            ),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
