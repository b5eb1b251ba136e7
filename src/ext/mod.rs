//! Extensions over third-party crates

pub mod jni;
