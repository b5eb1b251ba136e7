//! Shared support for the JNI test fixture libraries.
//!
//! The fixture `cdylib`s under `native/` only export symbols; the bodies,
//! logging setup and the host-side library loader live here.

pub mod core;
pub mod ext;
pub mod jni_interface;
pub mod loader;


pub use crate::core::fixture::{JNI_TEST_CLASS_ONE, JNI_TEST_CLASS_TWO, NativeFixture};
pub use loader::{LoaderConfig, LoaderError, NativeLibrary, NativeLibraryLoader};
