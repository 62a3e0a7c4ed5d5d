//! Media duration probing via ffprobe
//!
//! Durations are read from an external `ffprobe` subprocess and memoized per
//! path, so a file pulled into several playlists is only probed once per run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ProbeError;

/// Queries media durations through an external probe, caching results.
///
/// The cache maps each probed path to its unrounded duration in seconds and
/// is never evicted; it lives as long as the prober, which the walker shares
/// across every directory of a run.
pub struct MediaProber {
    command: PathBuf,
    cache: HashMap<PathBuf, f64>,
}

impl MediaProber {
    /// Create a prober that runs `ffprobe` from the PATH
    pub fn new() -> Self {
        Self::with_command("ffprobe")
    }

    /// Create a prober backed by a specific probe executable
    ///
    /// The executable must accept a single file path argument after the
    /// standard ffprobe duration flags and print the duration in seconds as
    /// plain decimal text on stdout.
    pub fn with_command(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            cache: HashMap::new(),
        }
    }

    /// Get the duration of a media file in seconds
    ///
    /// Invokes the probe subprocess on the first call for a given path and
    /// serves every later call from the cache. Probe failures propagate as
    /// [`ProbeError`]; there is no fallback duration.
    pub fn duration(&mut self, path: &Path) -> Result<f64, ProbeError> {
        if let Some(&duration) = self.cache.get(path) {
            log::debug!("Duration cache hit: {}", path.display());
            return Ok(duration);
        }

        let output = Command::new(&self.command)
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .map_err(|source| ProbeError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ProbeError::Failed {
                path: path.to_path_buf(),
                status: output.status,
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let duration: f64 =
            stdout
                .trim()
                .parse()
                .map_err(|_| ProbeError::Unparsable {
                    path: path.to_path_buf(),
                    output: stdout.trim().to_string(),
                })?;

        log::debug!("Probed duration {:.3}s: {}", duration, path.display());
        self.cache.insert(path.to_path_buf(), duration);
        Ok(duration)
    }
}

impl Default for MediaProber {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;
    use std::path::Path;

    #[cfg(unix)]
    mod with_stub_probe {
        use super::*;
        use crate::test_fixtures::{counting_probe, stub_probe};
        use tempfile::TempDir;

        #[test]
        fn parses_probe_stdout_as_seconds() {
            let temp_dir = TempDir::new().unwrap();
            let probe = stub_probe(temp_dir.path(), "57.913\n");

            let mut prober = MediaProber::with_command(&probe);
            let duration = prober.duration(Path::new("/music/a.mp3")).unwrap();
            assert_eq!(duration, 57.913);
        }

        #[test]
        fn caches_durations_per_path() {
            let temp_dir = TempDir::new().unwrap();
            let (probe, counter) = counting_probe(temp_dir.path(), "120.5");

            let mut prober = MediaProber::with_command(&probe);
            for _ in 0..4 {
                let duration = prober.duration(Path::new("/music/a.mp3")).unwrap();
                assert_eq!(duration, 120.5);
            }

            let invocations = std::fs::read_to_string(&counter).unwrap();
            assert_eq!(invocations.lines().count(), 1, "probe should run once");
        }

        #[test]
        fn distinct_paths_are_probed_separately() {
            let temp_dir = TempDir::new().unwrap();
            let (probe, counter) = counting_probe(temp_dir.path(), "10.0");

            let mut prober = MediaProber::with_command(&probe);
            prober.duration(Path::new("/music/a.mp3")).unwrap();
            prober.duration(Path::new("/music/b.mp3")).unwrap();
            prober.duration(Path::new("/music/a.mp3")).unwrap();

            let invocations = std::fs::read_to_string(&counter).unwrap();
            assert_eq!(invocations.lines().count(), 2);
        }

        #[test]
        fn unparsable_output_is_an_error() {
            let temp_dir = TempDir::new().unwrap();
            let probe = stub_probe(temp_dir.path(), "N/A\n");

            let mut prober = MediaProber::with_command(&probe);
            let err = prober.duration(Path::new("/music/a.mp3")).unwrap_err();
            assert!(matches!(err, ProbeError::Unparsable { .. }));
        }

        #[test]
        fn failing_probe_reports_exit_status() {
            let temp_dir = TempDir::new().unwrap();
            let probe = crate::test_fixtures::failing_probe(temp_dir.path());

            let mut prober = MediaProber::with_command(&probe);
            let err = prober.duration(Path::new("/music/a.mp3")).unwrap_err();
            assert!(matches!(err, ProbeError::Failed { .. }));
        }
    }

    #[test]
    fn missing_probe_executable_is_a_spawn_error() {
        let mut prober = MediaProber::with_command("/nonexistent/ffprobe");
        let err = prober.duration(Path::new("/music/a.mp3")).unwrap_err();
        assert!(matches!(err, ProbeError::Spawn { .. }));
    }
}
