//! A C API for deriving sort names.

extern crate libc;

use self::libc::c_char;
use super::derive_sort_name;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

/// Derives the sort name of `input` for `language`, which may be null.
///
/// Returns null if `input` is null. The result must be released with
/// `sort_name_free_string`.
#[no_mangle]
pub unsafe extern "C" fn sort_name_derive(
    input: *const c_char,
    language: *const c_char,
) -> *mut c_char {
    if input.is_null() {
        return ptr::null_mut();
    }

    let name = CStr::from_ptr(input).to_string_lossy();
    let language = if language.is_null() {
        None
    } else {
        Some(CStr::from_ptr(language).to_string_lossy())
    };

    // Output words all come from the input, so can't contain a nul
    match CString::new(derive_sort_name(&name, language.as_deref())) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn sort_name_free_string(str_ptr: *mut c_char) {
    if !str_ptr.is_null() {
        mem::drop(CString::from_raw(str_ptr));
    }
}
