// SPDX-License-Identifier: AGPL-3.0-or-later

use std::env;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Returns the absolute path of a file or directory.
///
/// Falls back to the given path when the current directory can't be determined.
pub fn absolute_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if path.is_absolute() {
        return path.to_path_buf().clean();
    }

    match env::current_dir() {
        Ok(current_dir) => current_dir.join(path).clean(),
        Err(_) => path.to_path_buf(),
    }
}

/// Scope a plain log level to this program's crates, filter expressions are passed through.
pub fn log_filter(log_level: &str) -> String {
    if log_level.contains('=') {
        log_level.to_owned()
    } else {
        format!("graphql_filtering={log_level}")
    }
}
