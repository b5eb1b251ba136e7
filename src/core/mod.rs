//! Core fixture definitions
//!
//! This module contains the fixture table, JNI symbol naming and logger setup.

pub mod fixture;
pub mod logging;
pub mod symbol;

// Re-export commonly used items
pub use fixture::{FIXTURES, JNI_TEST_CLASS_ONE, JNI_TEST_CLASS_TWO, NativeFixture};
pub use logging::init_logging;
pub use symbol::mangle_jni_name;
