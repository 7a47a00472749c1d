//! Error types for git-get

use thiserror::Error;

/// Result type alias for git-get operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for git-get operations
#[derive(Error, Debug)]
pub enum Error {
    /// The version-control executable is not on the search path
    #[error("failed to find git command {0:?} in PATH")]
    ExecutableNotFound(String),

    /// No host/path split could be found in a clone URL
    #[error("{reason}, got {url:?}")]
    MalformedUrl {
        /// What the resolver expected to find
        reason: &'static str,
        /// The clone URL as given
        url: String,
    },

    /// The operating system refused to replace the process image
    #[error("failed to run git")]
    ProcessReplacement(#[source] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn malformed(reason: &'static str, url: &str) -> Self {
        Self::MalformedUrl {
            reason,
            url: url.to_string(),
        }
    }
}
