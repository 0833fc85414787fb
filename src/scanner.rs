//! Extension directory scanning.
//!
//! Java 3D was historically installed as a JRE extension: its jars and
//! native libraries were dropped into `lib/ext` or appended via the
//! `java.ext.dirs` property. Libraries on the extension path take precedence
//! over the class path, so those old installations silently shadow the
//! modern JOGL-based builds an application bundles, producing version-skew
//! failures at runtime. The scanner finds those leftovers so the host
//! application can ask the user to delete them.
//!
//! Scanning is a pure query: it reads the environment and filesystem
//! metadata, mutates nothing, and holds no state between calls.

use crate::error::Result;
use crate::finding::Finding;
use crate::rules::{MatchRule, RuleSet};
use crate::search_path::SearchPath;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable holding the extension directory list.
///
/// The environment rendition of the old `java.ext.dirs` system property.
pub const DEFAULT_EXT_DIRS_VAR: &str = "JAVA_EXT_DIRS";

/// Scans extension directories for obsolete library installations.
///
/// The directory list is re-read from the environment on every call, so a
/// changed variable or filesystem is reflected by the next scan without
/// reconstructing the scanner.
#[derive(Debug, Clone)]
pub struct ExtensionScanner {
    env_var: String,
    rules: RuleSet,
}

impl ExtensionScanner {
    /// Scanner over [`DEFAULT_EXT_DIRS_VAR`] with the builtin Java 3D rules.
    pub fn new() -> Result<Self> {
        Self::with_env_var(DEFAULT_EXT_DIRS_VAR)
    }

    /// Scanner reading its directory list from a custom environment variable.
    pub fn with_env_var(env_var: impl Into<String>) -> Result<Self> {
        Ok(Self::with_rules(env_var, RuleSet::obsolete_java3d()?))
    }

    /// Scanner with a custom rule table.
    pub fn with_rules(env_var: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            env_var: env_var.into(),
            rules,
        }
    }

    /// The environment variable this scanner reads.
    pub fn env_var(&self) -> &str {
        &self.env_var
    }

    /// List every file on the extension search path matching an obsolete
    /// library rule.
    ///
    /// Returns an empty list when the variable is unset or empty, or when no
    /// directory holds a matching file; nothing found is not an error. Each
    /// physical file appears at most once, even if it matches several rules
    /// or its directory is listed twice. Ordering is deterministic:
    /// directory order, then rule order, then sorted directory-listing
    /// order.
    pub fn list_obsolete_libraries(&self) -> Vec<Finding> {
        self.scan_path(&SearchPath::from_environ(&self.env_var))
    }

    /// Run the same scan over an explicit directory list.
    pub fn scan_path(&self, search_path: &SearchPath) -> Vec<Finding> {
        let mut seen = HashSet::new();
        let mut findings = Vec::new();
        for dir in search_path.iter() {
            self.scan_directory(dir, &mut seen, &mut findings);
        }
        findings
    }

    fn scan_directory(
        &self,
        dir: &Path,
        seen: &mut HashSet<PathBuf>,
        findings: &mut Vec<Finding>,
    ) {
        // Missing or non-directory entries are expected, not an error.
        if !dir.is_dir() {
            return;
        }

        let entries = list_file_names(dir);
        for rule in self.rules.iter() {
            match rule {
                MatchRule::Exact(name) => {
                    let candidate = dir.join(name);
                    if candidate.exists() {
                        record(candidate, seen, findings);
                    }
                }
                MatchRule::Pattern(regex) => {
                    for name in &entries {
                        if regex.is_match(name) {
                            record(dir.join(name), seen, findings);
                        }
                    }
                }
            }
        }
    }
}

/// Directory listing as bare filenames, sorted for deterministic output.
///
/// A listing failure contributes no pattern matches for this directory; the
/// scan carries on with the remaining rules and directories.
fn list_file_names(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("failed to read extension directory {}: {e}", dir.display());
            return Vec::new();
        }
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

/// Record a match unless its canonical path has already been reported.
///
/// Canonicalization collapses a directory listed twice under different
/// spellings; if it fails (file vanished mid-scan) the raw path serves as
/// the key.
fn record(path: PathBuf, seen: &mut HashSet<PathBuf>, findings: &mut Vec<Finding>) {
    let key = path.canonicalize().unwrap_or_else(|_| path.clone());
    if seen.insert(key) {
        findings.push(Finding::new(path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleSpec;
    use std::fs::File;
    use tempfile::TempDir;

    fn scanner() -> ExtensionScanner {
        ExtensionScanner::with_env_var("EXTSWEEP_SCANNER_UNIT_TEST_UNSET").unwrap()
    }

    #[test]
    fn empty_search_path_yields_nothing() {
        assert!(scanner().scan_path(&SearchPath::new()).is_empty());
    }

    #[test]
    fn nonexistent_directory_is_skipped() {
        let sp = SearchPath::from_delimited("/definitely/not/a/real/dir", ':');
        assert!(scanner().scan_path(&sp).is_empty());
    }

    #[test]
    fn file_matching_two_rules_is_reported_once() {
        let tmp = TempDir::new().unwrap();
        // vecmath.jar matches both the exact rule and the vecmath.* pattern.
        File::create(tmp.path().join("vecmath.jar")).unwrap();

        let sp = SearchPath::from_delimited(&tmp.path().display().to_string(), ':');
        let findings = scanner().scan_path(&sp);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].path, tmp.path().join("vecmath.jar"));
    }

    #[test]
    fn duplicate_directory_is_reported_once() {
        let tmp = TempDir::new().unwrap();
        File::create(tmp.path().join("j3dcore.jar")).unwrap();

        let dir = tmp.path().display().to_string();
        let sp = SearchPath::from_delimited(&format!("{dir}:{dir}"), ':');
        let findings = scanner().scan_path(&sp);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn custom_rules_replace_the_builtin_table() {
        let tmp = TempDir::new().unwrap();
        File::create(tmp.path().join("legacy.so")).unwrap();
        File::create(tmp.path().join("j3dcore.jar")).unwrap();

        let rules = RuleSet::compile(&[RuleSpec::Pattern(r"legacy\..*")]).unwrap();
        let sweeper = ExtensionScanner::with_rules("EXTSWEEP_SCANNER_UNIT_TEST_UNSET", rules);
        let sp = SearchPath::from_delimited(&tmp.path().display().to_string(), ':');
        let findings = sweeper.scan_path(&sp);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].path, tmp.path().join("legacy.so"));
    }
}
