use anyhow::{Result, anyhow};
use jni_fixtures::{JNI_TEST_CLASS_TWO, NativeLibrary, NativeLibraryLoader};
use std::path::{Path, PathBuf};

/// Extraction directory for libraries loaded by the tests.
pub fn extract_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join(name)
}

/// Loads the `libJniTestClassTwo` cargo just built for this test run.
pub fn load_fixture_library(fs_dir: &Path) -> Result<NativeLibrary> {
    // 测试可执行文件位于 target/<profile>/deps
    let exe = std::env::current_exe()?;
    let profile_dir = exe
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| anyhow!("unexpected test binary location {}", exe.display()))?;
    let loader = NativeLibraryLoader::new(profile_dir);
    let lib_name = JNI_TEST_CLASS_TWO.library_name();
    let jar_dir = ["", "deps/"]
        .into_iter()
        .find(|dir| matches!(loader.find_native_library_name(dir, lib_name), Ok(Some(_))))
        .ok_or_else(|| anyhow!("lib{lib_name} not built under {}", profile_dir.display()))?;

    Ok(loader.load_native_library(jar_dir, fs_dir, lib_name)?)
}
