//! Request-backend selection.
//!
//! Backends are external HTTP tools (curl, httpie, wget, ...) probed on
//! PATH in a configured priority order. No request is ever issued here;
//! this module only answers "which tool would run".

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Locate an executable by walking the PATH entries in order.
pub fn find_in_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    search_dirs(name, &path_var)
}

fn search_dirs(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    for dir in std::env::split_paths(path_var) {
        if dir.as_os_str().is_empty() {
            continue;
        }
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Every backend from `priority` present on PATH, most preferred first.
pub fn detect_backends(priority: &[String]) -> Vec<String> {
    priority
        .iter()
        .filter(|name| find_in_path(name).is_some())
        .cloned()
        .collect()
}

/// The most preferred backend present on PATH, if any.
pub fn select_backend(priority: &[String]) -> Option<String> {
    let chosen = priority.iter().find(|name| find_in_path(name).is_some());
    if let Some(name) = chosen {
        log::debug!("selected backend {name}");
    }
    chosen.cloned()
}
