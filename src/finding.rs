use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A file identified as an obsolete extension library.
///
/// A finding is just the path that matched at scan time; no handle to the
/// file is held, and the file may well be gone by the time the finding is
/// shown to anyone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    pub path: PathBuf,
}

impl Finding {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The absolute form of the path, for display to the user.
    ///
    /// Falls back to the discovered path if the file has vanished since the
    /// scan (canonicalization requires the file to exist).
    pub fn absolute_path(&self) -> PathBuf {
        self.path
            .canonicalize()
            .unwrap_or_else(|_| self.path.clone())
    }
}

impl From<PathBuf> for Finding {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
