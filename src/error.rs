use std::fmt;

/// The error type for breakwater operations
///
/// Merging and header synthesis are total and never fail; errors only arise
/// from genuinely invalid call contracts such as malformed configuration
/// documents or unknown policy tokens.
#[derive(Debug, thiserror::Error)]
pub enum BreakwaterError {
    #[error("Configuration document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Unknown {kind} token: {token}")]
    UnknownToken { kind: &'static str, token: String },
}

impl BreakwaterError {
    pub(crate) fn unknown_token(kind: &'static str, token: impl fmt::Display) -> Self {
        Self::UnknownToken {
            kind,
            token: token.to_string(),
        }
    }
}

/// Result type alias for breakwater operations
pub type Result<T> = std::result::Result<T, BreakwaterError>;
