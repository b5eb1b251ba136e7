//! Error plumbing for JNI entry points.
//!
//! Nothing may unwind across the FFI boundary, so every entry point runs its
//! body as a `JniResult` and finishes with [`JniResultExt::or_throw`].

use ::jni::JNIEnv;
use ::jni::sys::jstring;
use log::error;
use std::ptr;

pub type JniResult<T> = anyhow::Result<T>;

const RUNTIME_EXCEPTION: &str = "java/lang/RuntimeException";

/// Value handed back to the JVM when an entry point fails.
pub trait JniFallback {
    fn fallback() -> Self;
}

impl JniFallback for jstring {
    #[inline]
    fn fallback() -> Self {
        ptr::null_mut()
    }
}

pub trait JniResultExt<T> {
    /// Unwraps the value, or leaves a Java exception pending and returns the fallback.
    fn or_throw(self, env: &mut JNIEnv) -> T;
}

impl<T: JniFallback> JniResultExt<T> for JniResult<T> {
    fn or_throw(self, env: &mut JNIEnv) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                // 已有挂起的异常（例如 OutOfMemoryError）时不能再抛
                if env.exception_check().unwrap_or(true) {
                    error!("JNI call failed with a pending Java exception: {err:#}");
                    return T::fallback();
                }
                error!("JNI call failed: {err:#}");
                if let Err(throw_err) = env.throw_new(RUNTIME_EXCEPTION, format!("{err:#}")) {
                    error!("Unable to throw {RUNTIME_EXCEPTION}: {throw_err}");
                }
                T::fallback()
            }
        }
    }
}
