//! Executable lookup and home directory expansion

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Find an executable on `PATH`
///
/// A name containing a path separator is checked as-is instead of searched.
pub fn find_executable(name: &str) -> Result<PathBuf> {
    find_executable_in(name, std::env::var_os("PATH").as_deref())
}

fn find_executable_in(name: &str, path_var: Option<&OsStr>) -> Result<PathBuf> {
    let not_found = || Error::ExecutableNotFound(name.to_string());

    if name.is_empty() {
        return Err(not_found());
    }

    let candidate = Path::new(name);
    if candidate.components().count() > 1 {
        return if is_executable(candidate) {
            Ok(candidate.to_path_buf())
        } else {
            Err(not_found())
        };
    }

    let paths = path_var.ok_or_else(not_found)?;
    std::env::split_paths(paths)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, name))
        .find(|path| is_executable(path))
        .inspect(|path| tracing::debug!(name, path = %path.display(), "Found executable"))
        .ok_or_else(not_found)
}

#[cfg(not(windows))]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    let exts = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    std::iter::once(dir.join(name))
        .chain(
            exts.split(';')
                .filter(|ext| !ext.is_empty())
                .map(|ext| dir.join(format!("{}{}", name, ext))),
        )
        .collect()
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

/// Expand a leading `~` to the current user's home directory
///
/// Only `~` and `~/...` are expanded; `~user` forms are returned unchanged.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if path != "~" && !path.starts_with("~/") && !path.starts_with("~\\") {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;
    Ok(join_home(&home, path))
}

fn join_home(home: &Path, path: &str) -> PathBuf {
    let rest = path[1..].trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    }
}
