//! Native library for `org.karlbennett.jni.test.JniTestClassTwo`.
#![allow(non_snake_case)]

use jni::objects::JClass;
use jni::sys::{jint, jstring};
use jni::{JNIEnv, JavaVM};
use jni_fixtures::JNI_TEST_CLASS_TWO;
use jni_fixtures::jni_interface;
use std::ffi::c_void;

/// `static native String nativeMethod()`
#[unsafe(no_mangle)]
pub extern "system" fn Java_org_karlbennett_jni_test_JniTestClassTwo_nativeMethod<'local>(
    mut env: JNIEnv<'local>,
    class: JClass<'local>,
) -> jstring {
    jni_interface::native_method(&mut env, &class, &JNI_TEST_CLASS_TWO)
}

#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(vm: JavaVM, _reserved: *mut c_void) -> jint {
    jni_interface::on_load(&vm, JNI_TEST_CLASS_TWO.library_name())
}
