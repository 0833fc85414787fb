//! FFI (Foreign Function Interface) bindings for cross-language interop.
//!
//! This module exposes the scanner through C-compatible functions that can
//! be called from Swift (macOS) and C# (Windows) host applications.
//!
//! # Memory Management
//!
//! - Rust allocates memory and returns pointers to the host
//! - The calling code MUST call the corresponding `_free` functions
//! - Strings are null-terminated UTF-8
//!
//! # Usage from Swift (macOS)
//!
//! ```swift
//! let listPtr = extsweep_scan()
//! defer { extsweep_free_finding_list(listPtr) }
//!
//! if let message = extsweep_warning_message(listPtr) {
//!     defer { extsweep_free_string(message) }
//!     // Show warning dialog with the message text...
//! }
//! ```
//!
//! # Usage from C# (Windows)
//!
//! ```csharp
//! [DllImport("extsweep_core.dll")]
//! private static extern IntPtr extsweep_scan();
//!
//! [DllImport("extsweep_core.dll")]
//! private static extern void extsweep_free_finding_list(IntPtr list);
//! ```

use crate::report::obsolete_libraries_warning;
use crate::{ExtensionScanner, Finding};
use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;

// ============================================================================
// C-Compatible Types
// ============================================================================

/// Opaque handle to a list of findings
#[repr(C)]
pub struct CFindingList {
    findings: Vec<Finding>,
}

// ============================================================================
// Scanning
// ============================================================================

/// Scan the configured extension directories for obsolete libraries.
/// Returns an opaque handle to the finding list, or null on error.
/// Caller MUST call extsweep_free_finding_list() when done.
#[no_mangle]
pub extern "C" fn extsweep_scan() -> *mut CFindingList {
    match ExtensionScanner::new() {
        Ok(scanner) => {
            let findings = scanner.list_obsolete_libraries();
            Box::into_raw(Box::new(CFindingList { findings }))
        }
        Err(e) => {
            eprintln!("Error constructing scanner: {}", e);
            ptr::null_mut()
        }
    }
}

/// Get the number of findings in a list.
#[no_mangle]
pub extern "C" fn extsweep_finding_list_count(list: *const CFindingList) -> c_int {
    if list.is_null() {
        return 0;
    }
    unsafe { (*list).findings.len() as c_int }
}

/// Get the path of the finding at a specific index.
/// Returns a null-terminated string. Caller MUST call extsweep_free_string()
/// when done.
#[no_mangle]
pub extern "C" fn extsweep_finding_list_get(
    list: *const CFindingList,
    index: c_int,
) -> *mut c_char {
    if list.is_null() {
        return ptr::null_mut();
    }

    unsafe {
        let findings = &(*list).findings;
        let idx = index as usize;

        if idx >= findings.len() {
            return ptr::null_mut();
        }

        string_to_c_char(&findings[idx].absolute_path().to_string_lossy())
    }
}

/// Free a finding list returned by extsweep_scan().
#[no_mangle]
pub extern "C" fn extsweep_free_finding_list(list: *mut CFindingList) {
    if !list.is_null() {
        unsafe {
            let _ = Box::from_raw(list);
        }
    }
}

// ============================================================================
// Reporting
// ============================================================================

/// Build the user-facing warning text for a finding list.
/// Returns null when the list is empty (nothing to warn about); the host
/// should show no dialog in that case.
/// Caller MUST call extsweep_free_string() when done.
#[no_mangle]
pub extern "C" fn extsweep_warning_message(list: *const CFindingList) -> *mut c_char {
    if list.is_null() {
        return ptr::null_mut();
    }

    unsafe {
        match obsolete_libraries_warning(&(*list).findings) {
            Some(message) => string_to_c_char(&message),
            None => ptr::null_mut(),
        }
    }
}

/// Run a scan and return the findings as a JSON array of objects with a
/// "path" field. Returns null on error.
/// Caller MUST call extsweep_free_string() when done.
#[no_mangle]
pub extern "C" fn extsweep_scan_json() -> *mut c_char {
    let scanner = match ExtensionScanner::new() {
        Ok(scanner) => scanner,
        Err(e) => {
            eprintln!("Error constructing scanner: {}", e);
            return ptr::null_mut();
        }
    };

    let findings = scanner.list_obsolete_libraries();
    match serde_json::to_string(&findings) {
        Ok(json) => string_to_c_char(&json),
        Err(e) => {
            eprintln!("Error serializing findings: {}", e);
            ptr::null_mut()
        }
    }
}

// ============================================================================
// String Management
// ============================================================================

/// Free a string returned by FFI functions.
#[no_mangle]
pub extern "C" fn extsweep_free_string(s: *mut c_char) {
    free_c_char(s);
}

// ============================================================================
// Helper Functions
// ============================================================================

fn string_to_c_char(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

fn free_c_char(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
