//! Platform library file names

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};

const MACOS_JNI_SUFFIX: &str = ".jnilib";
const MACOS_DYLIB_SUFFIX: &str = ".dylib";

/// Empty stays empty, everything else gets a trailing `/`.
pub fn normalize_dir(dir: &str) -> String {
    if dir.is_empty() || dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}

/// Platform file name for a simple library name, e.g. `native` -> `libnative.so`.
pub fn map_library_name(name: &str) -> String {
    if cfg!(target_os = "macos") {
        format!("{DLL_PREFIX}{name}{MACOS_JNI_SUFFIX}")
    } else {
        format!("{DLL_PREFIX}{name}{DLL_SUFFIX}")
    }
}

/// File names to probe for a simple library name, most preferred first.
///
/// On macOS the JVM's `.jnilib` name is tried before the usual `.dylib`.
pub fn library_name_candidates(name: &str) -> Vec<String> {
    let mapped = map_library_name(name);
    match mapped.strip_suffix(MACOS_JNI_SUFFIX) {
        Some(stem) => {
            let dylib = format!("{stem}{MACOS_DYLIB_SUFFIX}");
            vec![mapped, dylib]
        }
        None => vec![mapped],
    }
}
