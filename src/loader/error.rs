use std::path::PathBuf;
use thiserror::Error;

pub type LoaderResult<T> = Result<T, LoaderError>;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("library name cannot be empty")]
    EmptyName,
    #[error("unable to find library {name} under {dir}")]
    NotFound { name: String, dir: PathBuf },
    #[error("unable to create the native library extraction directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to write to the native library extraction directory {0}")]
    ReadOnlyDir(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unable to load native library {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    #[error("symbol {name} not found in {path}")]
    Symbol {
        name: String,
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
}
