//! Loader directories, overridable from the environment

use super::naming::normalize_dir;
use std::env;
use std::path::PathBuf;

/// Default directory, relative to the resource root, holding native libraries.
pub const DEFAULT_NATIVE_LIBRARY_JAR_DIR: &str = "lib/";

/// Overrides the library directory inside the resource root.
pub const NATIVE_LIBRARY_JAR_DIR_ENV: &str = "NATIVE_LIBRARY_JAR_DIR";

/// Overrides the directory libraries are extracted to before loading.
pub const NATIVE_LIBRARY_FS_DIR_ENV: &str = "NATIVE_LIBRARY_FS_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub jar_dir: String,
    pub fs_dir: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            jar_dir: DEFAULT_NATIVE_LIBRARY_JAR_DIR.to_string(),
            fs_dir: env::temp_dir(),
        }
    }
}

impl LoaderConfig {
    /// Reads the current environment; unset or non-UTF-8 variables fall back to the defaults.
    pub fn from_env() -> Self {
        let jar_dir = env::var(NATIVE_LIBRARY_JAR_DIR_ENV)
            .unwrap_or_else(|_| DEFAULT_NATIVE_LIBRARY_JAR_DIR.to_string());
        let fs_dir = env::var_os(NATIVE_LIBRARY_FS_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);
        Self { jar_dir, fs_dir }
    }

    #[inline]
    pub fn jar_dir(&self) -> String {
        normalize_dir(&self.jar_dir)
    }
}
