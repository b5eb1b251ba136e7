//! JNI short symbol names
//!
//! `Java_` + mangled class path + `_` + mangled method name, using the escape
//! sequences from the JNI specification.

use std::fmt::Write;

pub const JNI_SYMBOL_PREFIX: &str = "Java_";

/// Mangles a single component (a class path with `/` separators, or a method name).
pub fn mangle_component(name: &str) -> String {
    let mut mangled = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            '/' | '.' => mangled.push('_'),
            '_' => mangled.push_str("_1"),
            ';' => mangled.push_str("_2"),
            '[' => mangled.push_str("_3"),
            c if c.is_ascii_alphanumeric() => mangled.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // String 写入不会失败
                    let _ = write!(mangled, "_0{unit:04x}");
                }
            }
        }
    }
    mangled
}

/// Short JNI name for `method` declared on `class_path`.
pub fn mangle_jni_name(class_path: &str, method: &str) -> String {
    format!(
        "{}{}_{}",
        JNI_SYMBOL_PREFIX,
        mangle_component(class_path),
        mangle_component(method)
    )
}
