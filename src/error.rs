//! Error types for extsweep.

/// Result type alias for extsweep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up a scanner.
///
/// Scanning itself never fails: missing directories, unreadable entries and
/// the like are expected conditions and simply contribute no findings. The
/// only real failure mode is a malformed rule table, which is caught once at
/// construction time.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pattern rule holds an unparsable regular expression.
    #[error("invalid filename pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
