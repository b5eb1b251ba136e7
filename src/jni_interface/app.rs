//! Library load hook shared by the fixture libraries

use crate::core::logging::init_logging;
use jni::JavaVM;
use jni::sys::{JNI_VERSION_1_6, jint};
use log::info;

/// Body of `JNI_OnLoad`.
pub fn on_load(_vm: &JavaVM, library: &str) -> jint {
    init_logging();
    info!("Loaded native fixture library {library}");
    JNI_VERSION_1_6
}
