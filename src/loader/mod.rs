//! Host-side loading of native libraries
//!
//! Libraries are looked up under a resource root (the directory standing in for
//! the classpath), copied to an extraction directory and loaded from there.

pub mod config;
pub mod error;
pub mod library;
pub mod naming;

pub use config::{
    DEFAULT_NATIVE_LIBRARY_JAR_DIR, LoaderConfig, NATIVE_LIBRARY_FS_DIR_ENV,
    NATIVE_LIBRARY_JAR_DIR_ENV,
};
pub use error::{LoaderError, LoaderResult};
pub use library::{NativeLibrary, NativeLibraryLoader, write_file};
pub use naming::{library_name_candidates, map_library_name, normalize_dir};
