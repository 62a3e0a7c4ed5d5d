//! Recursive directory walking and playlist aggregation
//!
//! Each visited directory produces exactly one playlist, media or not. Data
//! flows bottom-up: every recursive call reports the playlists created in
//! its subtree and, when multilevel aggregation is on, the media the subtree
//! contributes to its parent's playlist. A directory's playlist therefore
//! holds its own files plus (if multilevel) everything beneath it, while
//! each subdirectory still gets its own scoped playlist.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::media::{is_media_file, MediaProber};
use crate::playlist::{playlist_name, write_playlist};

/// Traversal switches, shared by every recursive call of one run
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
    /// Descend into subdirectories at all
    pub recurse: bool,
    /// Fold descendant media into ancestor playlists
    pub multilevel: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            recurse: true,
            multilevel: true,
        }
    }
}

/// What one `walk` call produced for its caller
#[derive(Debug)]
pub struct WalkOutcome {
    /// Names of every playlist file written at or below the directory
    pub playlists: Vec<String>,
    /// Media from this subtree that belongs in the parent's playlist
    /// (the directory's own files plus, when multilevel, its descendants')
    pub media: Vec<PathBuf>,
}

/// Walk `directory`, writing one playlist per visited directory
///
/// Entries are taken in the order the filesystem returns them, which is
/// platform-dependent and deliberately not sorted. Symlinks count as
/// whatever they resolve to; entries that are neither file nor directory
/// are skipped. Probe and write failures propagate immediately, leaving
/// playlists already written for earlier siblings on disk.
pub fn walk(
    directory: &Path,
    options: WalkOptions,
    prober: &mut MediaProber,
) -> Result<WalkOutcome, Error> {
    log::debug!("Entering directory: {}", directory.display());

    let mut playlists = vec![playlist_name(directory)];
    let mut media: Vec<PathBuf> = Vec::new();

    let entries = fs::read_dir(directory).map_err(|source| Error::Scan {
        path: directory.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| Error::Scan {
            path: directory.to_path_buf(),
            source,
        })?;
        let entry_path = entry.path();

        if entry_path.is_file() {
            if is_media_file(&entry_path) {
                log::debug!("Found media: {}", entry_path.display());
                media.push(entry_path);
            } else {
                log::debug!(
                    "File ignored due to extension not in the list: {}",
                    entry_path.display()
                );
            }
        } else if entry_path.is_dir() {
            if options.recurse {
                log::debug!("Found directory: {}", entry_path.display());
                let outcome = walk(&entry_path, options, prober)?;
                if options.multilevel {
                    media.extend(outcome.media);
                }
                playlists.extend(outcome.playlists);
            } else {
                log::debug!(
                    "Directory {} ignored because recursion is disabled",
                    entry_path.display()
                );
            }
        } else {
            log::debug!("Entry ignored: {}", entry_path.display());
        }
    }

    write_playlist(directory, &media, prober)?;

    Ok(WalkOutcome { playlists, media })
}
