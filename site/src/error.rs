//! Error type for loading configuration and content.

use std::path::PathBuf;

/// Errors raised while loading config/content or writing the rendered page.
///
/// Rendering itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// File is not valid TOML for the expected shape
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
    /// A configured URL is unusable
    #[error("invalid {field} `{value}`: {reason}")]
    InvalidUrl {
        /// Config key, e.g. `form_action`
        field: &'static str,
        /// Offending value
        value: String,
        /// What is wrong with it
        reason: String,
    },
    /// Output could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
