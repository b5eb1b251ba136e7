use super::config::LoaderConfig;
use super::error::{LoaderError, LoaderResult};
use super::naming::{library_name_candidates, normalize_dir};
use libloading::{Library, Symbol};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// A library loaded by [`NativeLibraryLoader`]; unloaded when dropped.
#[derive(Debug)]
pub struct NativeLibrary {
    library: Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Path of the extracted copy the library was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolves an exported symbol.
    ///
    /// # Safety
    /// `T` must match the symbol's actual type and calling convention.
    pub unsafe fn symbol<T>(&self, name: &str) -> LoaderResult<Symbol<'_, T>> {
        unsafe { self.library.get::<T>(name.as_bytes()) }.map_err(|source| LoaderError::Symbol {
            name: name.to_string(),
            path: self.path().to_path_buf(),
            source,
        })
    }

    pub fn has_symbol(&self, name: &str) -> bool {
        unsafe { self.symbol::<*const ()>(name) }.is_ok()
    }
}

/// Finds native libraries under a resource root and loads them.
#[derive(Debug, Clone)]
pub struct NativeLibraryLoader {
    root: PathBuf,
}

impl NativeLibraryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resource_exists(&self, jar_dir: &str, file_name: &str) -> bool {
        self.root.join(format!("{jar_dir}{file_name}")).is_file()
    }

    /// Full file name of `lib_name` inside `jar_dir`, if one exists.
    ///
    /// `lib_name` may be a full file name (`libnative.so`) or a simple name (`native`).
    pub fn find_native_library_name(
        &self,
        jar_dir: &str,
        lib_name: &str,
    ) -> LoaderResult<Option<String>> {
        if lib_name.is_empty() {
            return Err(LoaderError::EmptyName);
        }

        let jar_dir = normalize_dir(jar_dir);
        if self.resource_exists(&jar_dir, lib_name) {
            return Ok(Some(lib_name.to_string()));
        }

        let found = library_name_candidates(lib_name)
            .into_iter()
            .find(|candidate| self.resource_exists(&jar_dir, candidate));
        debug!("Resolved native library {lib_name} in {jar_dir:?}: {found:?}");
        Ok(found)
    }

    /// Same as [`Self::find_native_library_name`] with the configured library directory.
    pub fn find(&self, lib_name: &str) -> LoaderResult<Option<String>> {
        self.find_native_library_name(&LoaderConfig::from_env().jar_dir, lib_name)
    }

    /// Copies `lib_name` from `jar_dir` into `fs_dir` and loads the copy.
    pub fn load_native_library(
        &self,
        jar_dir: &str,
        fs_dir: &Path,
        lib_name: &str,
    ) -> LoaderResult<NativeLibrary> {
        let Some(file_name) = self.find_native_library_name(jar_dir, lib_name)? else {
            return Err(LoaderError::NotFound {
                name: lib_name.to_string(),
                dir: self.root.join(normalize_dir(jar_dir)),
            });
        };

        prepare_fs_dir(fs_dir)?;

        let source = self.root.join(format!("{}{}", normalize_dir(jar_dir), file_name));
        let target = fs_dir.join(&file_name);
        {
            let mut reader = BufReader::new(File::open(&source)?);
            let mut writer = BufWriter::new(File::create(&target)?);
            let copied = write_file(&mut reader, &mut writer)?;
            writer.flush()?;
            debug!("Extracted {} ({copied} bytes) to {}", source.display(), target.display());
        }

        let target = fs::canonicalize(&target)?;
        let library = unsafe { Library::new(&target) }.map_err(|source| LoaderError::Load {
            path: target.clone(),
            source,
        })?;
        info!("Loaded native library {}", target.display());

        Ok(NativeLibrary {
            library,
            path: target,
        })
    }

    /// Same as [`Self::load_native_library`] with the configured directories.
    pub fn load(&self, lib_name: &str) -> LoaderResult<NativeLibrary> {
        let config = LoaderConfig::from_env();
        self.load_native_library(&config.jar_dir, &config.fs_dir, lib_name)
    }
}

fn prepare_fs_dir(fs_dir: &Path) -> LoaderResult<()> {
    if !fs_dir.exists() {
        return fs::create_dir_all(fs_dir).map_err(|source| LoaderError::CreateDir {
            path: fs_dir.to_path_buf(),
            source,
        });
    }

    if !is_writable(fs_dir)? {
        return Err(LoaderError::ReadOnlyDir(fs_dir.to_path_buf()));
    }
    Ok(())
}

/// Whether this process may create files in `dir`, as the kernel decides it.
#[cfg(unix)]
fn is_writable(dir: &Path) -> LoaderResult<bool> {
    use nix::errno::Errno;
    use nix::unistd::{AccessFlags, access};

    match access(dir, AccessFlags::W_OK) {
        Ok(()) => Ok(true),
        Err(Errno::EACCES | Errno::EROFS | Errno::EPERM) => Ok(false),
        Err(errno) => Err(LoaderError::Io(errno.into())),
    }
}

#[cfg(not(unix))]
fn is_writable(dir: &Path) -> LoaderResult<bool> {
    Ok(!fs::metadata(dir)?.permissions().readonly())
}

/// Copies everything from `reader` into `writer`, returning the number of bytes written.
pub fn write_file<R, W>(reader: &mut R, writer: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    io::copy(reader, writer)
}
