//! Error types for playlist generation
//!
//! Probe and write failures are never caught inside the walker: they
//! propagate out of `walk` and terminate the run, leaving any playlists
//! already written on disk. Root-path validation errors are handled at the
//! top level instead.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure to obtain a media file's duration from the external probe.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe executable could not be started at all.
    #[error("failed to run duration probe for {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The probe ran but exited with a non-zero status.
    #[error("duration probe exited with {status} for {path}: {stderr}")]
    Failed {
        path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },

    /// The probe's stdout was not a decimal number of seconds.
    #[error("duration probe produced unparsable output for {path}: {output:?}")]
    Unparsable { path: PathBuf, output: String },
}

/// Failure to persist a playlist file.
#[derive(Debug, Error)]
#[error("failed to write playlist {path}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// A CLI-supplied root path that cannot be walked.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("directory {0} does not exist")]
    Missing(PathBuf),

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
}

/// Any error that can escape the tree walker.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Write(#[from] WriteError),

    /// Reading a directory listing failed mid-walk.
    #[error("failed to list directory {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
