use std::fs;
use std::path::{Path, PathBuf};

use crate::environment::Environment;

/// Locates the executable for an external stage. Names containing a slash
/// are taken as paths; bare names are searched in the interpreter's own
/// `PATH`, not the OS environment, so `setenv PATH ...` takes effect.
pub struct PathResolver;

impl PathResolver {
    pub fn resolve(&self, command: &str, env: &Environment) -> Option<PathBuf> {
        if command.contains('/') {
            let path = Path::new(command);
            if path.is_file() {
                return Some(PathBuf::from(command));
            }
            return None;
        }

        let paths = env.get("PATH")?;
        for dir in std::env::split_paths(paths) {
            let full_path = dir.join(command);
            if fs::metadata(&full_path).map(|m| m.is_file()).unwrap_or(false) {
                return Some(full_path);
            }
        }
        None
    }
}
