//! Test fixtures for duration probing tests
//!
//! Real runs shell out to ffprobe; tests substitute small executable shell
//! scripts that honour the same contract (duration on stdout) so the suite
//! does not depend on ffprobe being installed.

#![cfg(test)]
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable stub probe that prints `stdout` for every invocation
pub fn stub_probe(dir: &Path, stdout: &str) -> PathBuf {
    write_script(
        dir,
        "stub-probe",
        &format!("#!/bin/sh\nprintf '%s' '{}'\n", stdout.trim()),
    )
}

/// Write a stub probe that appends a line to a counter file per invocation
///
/// Returns the script path and the counter file path.
pub fn counting_probe(dir: &Path, stdout: &str) -> (PathBuf, PathBuf) {
    let counter = dir.join("probe-invocations");
    let script = write_script(
        dir,
        "counting-probe",
        &format!(
            "#!/bin/sh\necho probed >> '{}'\nprintf '%s' '{}'\n",
            counter.display(),
            stdout.trim()
        ),
    );
    (script, counter)
}

/// Write a stub probe that always exits non-zero
pub fn failing_probe(dir: &Path) -> PathBuf {
    write_script(dir, "failing-probe", "#!/bin/sh\necho broken >&2\nexit 1\n")
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("Failed to write stub probe script");

    let mut permissions = fs::metadata(&path)
        .expect("Failed to stat stub probe script")
        .permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).expect("Failed to chmod stub probe script");

    path
}
