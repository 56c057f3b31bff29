//! Error types for hilite

use thiserror::Error;

/// Result type alias for hilite operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
///
/// Highlighting itself never fails; these all come from building rules,
/// loading language files, or the command line.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    #[error("Malformed rule file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Bad language definition: {0}")]
    Language(String),

    #[error("No such language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    #[error("{0}")]
    Message(String),
}
