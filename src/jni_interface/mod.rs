//! JNI interface implementations
//!
//! The fixture libraries export thin `extern "system"` shims; the bodies are centralized here.

pub mod app;
pub mod fixture;

pub use app::on_load;
pub use fixture::native_method;
