//! M3U8 playlist rendering and persistence
//!
//! Every visited directory gets exactly one playlist named after the
//! directory itself, overwritten on each run. Entries reference media by
//! path relative to the playlist's own directory, so playlists stay valid
//! when the tree is moved as a whole.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, WriteError};
use crate::media::MediaProber;

/// Compute the playlist file name for a directory: `<basename>.m3u8`
pub fn playlist_name(directory: &Path) -> String {
    let basename = directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.m3u8", basename)
}

/// Render and write one playlist for `directory`
///
/// `media` is the ordered list of media file paths to include; an empty list
/// still produces a playlist containing only the `#EXTM3U` marker. Durations
/// come from the prober and are truncated to whole seconds at render time.
///
/// Probe failures abort the write and propagate; so do filesystem write
/// failures. Neither is retried.
pub fn write_playlist(
    directory: &Path,
    media: &[PathBuf],
    prober: &mut MediaProber,
) -> Result<(), Error> {
    let mut lines = vec!["#EXTM3U".to_string()];

    for file in media {
        let duration = prober.duration(file)? as i64;
        let title = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        lines.push(format!("#EXTINF:{},{}", duration, title));
        lines.push(relative_path(file, directory).to_string_lossy().into_owned());
    }

    let playlist_path = directory.join(playlist_name(directory));
    fs::write(&playlist_path, lines.join("\n")).map_err(|source| WriteError {
        path: playlist_path.clone(),
        source,
    })?;

    log::info!("Playlist generated: {}", playlist_path.display());
    Ok(())
}

/// Express `file` relative to `directory`
///
/// Media always comes from within the directory's own subtree, so stripping
/// the directory prefix is enough; a path from elsewhere is kept as-is.
fn relative_path(file: &Path, directory: &Path) -> PathBuf {
    file.strip_prefix(directory)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| file.to_path_buf())
}
