//! JNI methods for the fixture classes

use crate::core::fixture::NativeFixture;
use crate::ext::jni::{JniResult, JniResultExt};
use jni::JNIEnv;
use jni::objects::JClass;
use jni::sys::jstring;
use log::debug;

/// Body of a fixture's `nativeMethod`: a new Java string holding the fixture message.
///
/// Returns `null` with an exception pending if the JVM cannot allocate the string.
pub fn native_method(env: &mut JNIEnv, _class: &JClass, fixture: &NativeFixture) -> jstring {
    new_message(env, fixture).or_throw(env)
}

fn new_message(env: &mut JNIEnv, fixture: &NativeFixture) -> JniResult<jstring> {
    debug!("{}.{}{} called", fixture.class_name, fixture.method, fixture.signature);
    let message = env.new_string(fixture.message)?;
    Ok(message.into_raw())
}
