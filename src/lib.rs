//! Extsweep Core Library
//!
//! Detects obsolete Java 3D native-library installations that silently
//! shadow the modern, bundled JOGL-based replacements.
//!
//! # Background
//!
//! Java 3D used to be installed as an extension to the JRE: jars and native
//! libraries were placed in `lib/ext` or appended to the extension path via
//! the `java.ext.dirs` property. Libraries on the extension path take
//! precedence over the regular class path, so a stale installation left
//! behind by an OS upgrade keeps loading instead of the version an
//! application ships, producing cryptic version-skew errors. This library
//! finds those leftovers so the host application can ask the user to remove
//! them; it never deletes anything itself.
//!
//! # Core Features
//!
//! ## Scanning (`scanner` module)
//! - [`ExtensionScanner::list_obsolete_libraries`] - scan the directories
//!   named by an environment variable against the builtin rule table
//! - [`ExtensionScanner::scan_path`] - scan an explicit directory list
//!
//! ## Rules (`rules` module)
//! - [`RuleSet::obsolete_java3d`] - the builtin exact-name and
//!   filename-pattern table, compiled and validated once
//! - [`RuleSet::compile`] - compile a custom rule table
//!
//! ## Reporting (`report` module)
//! - [`report::obsolete_libraries_warning`] - build the warning dialog text
//! - [`report::notify_obsolete_libraries`] - hand the text to a
//!   host-supplied presentation function, skipping it when nothing was found
//!
//! # FFI
//!
//! The `ffi` module exposes the scan and the warning text over a C ABI for
//! native UI frontends (see the crate-type list in Cargo.toml).

pub mod error;
pub mod ffi;
pub mod finding;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod search_path;

pub use error::{Error, Result};
pub use finding::Finding;
pub use rules::{MatchRule, RuleSet, RuleSpec, OBSOLETE_JAVA3D};
pub use scanner::{ExtensionScanner, DEFAULT_EXT_DIRS_VAR};
pub use search_path::{SearchPath, PATH_SEPARATOR};
