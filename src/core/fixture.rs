//! Fixture classes bound by the native test libraries

use super::symbol::mangle_jni_name;

/// Java package of the fixture classes, in JNI (slash separated) form.
pub const FIXTURE_PACKAGE: &str = "org/karlbennett/jni/test";

/// Signature shared by every fixture method: no arguments, returns `String`.
pub const NATIVE_METHOD_SIGNATURE: &str = "()Ljava/lang/String;";

/// A `(class, method)` pair with the constant text its native method returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeFixture {
    pub package: &'static str,
    pub class_name: &'static str,
    pub method: &'static str,
    pub signature: &'static str,
    pub message: &'static str,
}

pub const JNI_TEST_CLASS_ONE: NativeFixture = NativeFixture {
    package: FIXTURE_PACKAGE,
    class_name: "JniTestClassOne",
    method: "nativeMethod",
    signature: NATIVE_METHOD_SIGNATURE,
    message: "Test string from native JniTestClassOne.",
};

pub const JNI_TEST_CLASS_TWO: NativeFixture = NativeFixture {
    package: FIXTURE_PACKAGE,
    class_name: "JniTestClassTwo",
    method: "nativeMethod",
    signature: NATIVE_METHOD_SIGNATURE,
    message: "Test string from native JniTestClassTwo.",
};

pub static FIXTURES: [NativeFixture; 2] = [JNI_TEST_CLASS_ONE, JNI_TEST_CLASS_TWO];

impl NativeFixture {
    /// Fully qualified class name, e.g. `org/karlbennett/jni/test/JniTestClassOne`.
    pub fn class_path(&self) -> String {
        if self.package.is_empty() {
            self.class_name.to_string()
        } else {
            format!("{}/{}", self.package, self.class_name)
        }
    }

    /// Simple library name the class is packaged under; the loader maps it to a file name.
    #[inline]
    pub fn library_name(&self) -> &'static str {
        self.class_name
    }

    /// Exported symbol the JVM resolves for this method.
    pub fn symbol_name(&self) -> String {
        mangle_jni_name(&self.class_path(), self.method)
    }
}
