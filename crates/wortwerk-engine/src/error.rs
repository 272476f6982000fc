// Configuration errors
//
// Resolution misses are never errors. Only malformed configuration
// supplied by the host fails, and it fails when the dictionary or option
// set is built, never during a check.

/// Error raised while constructing a `Dictionary`.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// A date, number or custom format does not compile.
    #[error("invalid {kind} format `{pattern}`: {source}")]
    InvalidPattern {
        kind: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The data names a post-processing hook nobody registered.
    #[error("unknown dictionary processor: {0}")]
    UnknownProcessor(String),

    /// The dictionary JSON could not be parsed.
    #[error("malformed dictionary data: {0}")]
    Data(#[from] serde_json::Error),
}

/// Error raised while building a `CheckOptions` value.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// An ignore or mark pattern does not compile.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("malformed options: {0}")]
    Data(#[from] serde_json::Error),
}
