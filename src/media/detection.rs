use std::path::Path;

/// Check if a file is a media file based on its extension
///
/// Matching is case-sensitive against the raw extension: `track.MP3` does
/// not qualify. Files without an extension never qualify.
pub fn is_media_file(path: &Path) -> bool {
    if let Some(ext) = path.extension() {
        matches!(
            ext.to_string_lossy().as_ref(),
            "mp3" | "flac" | "webm" | "mp4" | "mkv" | "ogg" | "mod" | "m4a"
        )
    } else {
        false
    }
}
