use std::ffi::CString;

use crate::core::env::Environment;

/// Resolves a command word to an executable path.
///
/// A word containing `/` is taken as a direct path and only checked in
/// place, never against the search path. Bare words are probed against
/// each `PATH` directory in listed order; the first hit wins.
#[derive(Clone)]
pub struct PathResolver;

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, command: &str, environment: &Environment) -> Option<String> {
        if command.is_empty() {
            return None;
        }

        if command.contains('/') {
            if is_executable(command) {
                return Some(command.to_string());
            }
            return None;
        }

        // Absent and empty PATH read the same: nothing to search.
        let search_path = environment.get("PATH")?;
        search_path
            .split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| format!("{}/{}", dir, command))
            .find(|candidate| is_executable(candidate))
    }
}

// access(2) with X_OK tests the permission bit execve(2) will enforce.
// The gap between this probe and the actual exec is accepted; the runner
// handles the losing side of that race.
fn is_executable(path: &str) -> bool {
    let cpath = match CString::new(path) {
        Ok(cpath) => cpath,
        Err(_) => return false,
    };
    unsafe { libc::access(cpath.as_ptr(), libc::X_OK) == 0 }
}
