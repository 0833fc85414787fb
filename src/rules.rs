//! Filename rules identifying obsolete extension libraries.
//!
//! A rule is either an exact filename or a regular-expression pattern tested
//! against the bare filename of each directory entry. The builtin table
//! covers the Java 3D and JOGL artifacts that were historically installed as
//! Java extensions and now shadow the bundled JOGL-based builds.
//!
//! Rule tables are plain data ([`RuleSpec`] constants) compiled once into a
//! [`RuleSet`]; a malformed pattern is rejected at compile time rather than
//! during a scan.

use crate::error::{Error, Result};
use regex::Regex;

/// Declarative form of a rule, as stored in a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSpec {
    /// Match a file with exactly this name.
    Exact(&'static str),
    /// Match any file whose whole name matches this regular expression.
    Pattern(&'static str),
}

/// Obsolete Java 3D and JOGL artifacts found in Java extension directories.
pub const OBSOLETE_JAVA3D: &[RuleSpec] = &[
    RuleSpec::Exact("j3dcore.jar"),
    RuleSpec::Exact("vecmath.jar"),
    RuleSpec::Exact("j3dutils.jar"),
    RuleSpec::Pattern("j3d-core.*"),
    RuleSpec::Pattern("vecmath.*"),
    RuleSpec::Pattern("jogl.*"),
];

/// A compiled rule, ready to test against bare filenames.
#[derive(Debug, Clone)]
pub enum MatchRule {
    Exact(String),
    Pattern(Regex),
}

impl MatchRule {
    fn compile(spec: &RuleSpec) -> Result<Self> {
        match spec {
            RuleSpec::Exact(name) => Ok(Self::Exact((*name).to_string())),
            RuleSpec::Pattern(pattern) => {
                // Whole-name semantics: "jogl.*" must not match "not-jogl.jar".
                let anchored = format!("^(?:{pattern})$");
                let regex = Regex::new(&anchored).map_err(|source| Error::InvalidPattern {
                    pattern: (*pattern).to_string(),
                    source,
                })?;
                Ok(Self::Pattern(regex))
            }
        }
    }

    /// Test a bare filename (no directory components) against this rule.
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            Self::Exact(name) => file_name == name,
            Self::Pattern(regex) => regex.is_match(file_name),
        }
    }
}

/// An ordered, immutable set of compiled rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<MatchRule>,
}

impl RuleSet {
    /// Compile a rule table.
    ///
    /// Fails on the first malformed pattern, so a bad rule surfaces when the
    /// scanner is constructed rather than partway through a scan.
    pub fn compile(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(MatchRule::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The builtin table of obsolete Java 3D extension artifacts.
    pub fn obsolete_java3d() -> Result<Self> {
        Self::compile(OBSOLETE_JAVA3D)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_compiles() {
        let rules = RuleSet::obsolete_java3d().unwrap();
        assert_eq!(rules.len(), OBSOLETE_JAVA3D.len());
    }

    #[test]
    fn exact_rule_requires_whole_name() {
        let rules = RuleSet::compile(&[RuleSpec::Exact("j3dcore.jar")]).unwrap();
        let rule = rules.iter().next().unwrap();
        assert!(rule.matches("j3dcore.jar"));
        assert!(!rule.matches("j3dcore.jar.bak"));
        assert!(!rule.matches("j3dcore"));
    }

    #[test]
    fn pattern_rule_matches_whole_name_only() {
        let rules = RuleSet::compile(&[RuleSpec::Pattern("jogl.*")]).unwrap();
        let rule = rules.iter().next().unwrap();
        assert!(rule.matches("jogl-2.2.0.jar"));
        assert!(rule.matches("jogl"));
        assert!(!rule.matches("red-herring"));
        // Substring hits are not matches; the pattern is anchored.
        assert!(!rule.matches("not-jogl.jar"));
    }

    #[test]
    fn vecmath_pattern_overlaps_exact_rule() {
        // The builtin table matches vecmath.jar twice (exact + pattern);
        // deduplication is the scanner's job, both rules must fire.
        let rules = RuleSet::obsolete_java3d().unwrap();
        let hits = rules.iter().filter(|r| r.matches("vecmath.jar")).count();
        assert_eq!(hits, 2);
    }

    #[test]
    fn malformed_pattern_is_rejected_at_compile_time() {
        let result = RuleSet::compile(&[RuleSpec::Pattern("jogl[")]);
        assert!(matches!(
            result,
            Err(Error::InvalidPattern { ref pattern, .. }) if pattern == "jogl["
        ));
    }

    #[test]
    fn empty_table_compiles_to_empty_set() {
        let rules = RuleSet::compile(&[]).unwrap();
        assert!(rules.is_empty());
    }
}
