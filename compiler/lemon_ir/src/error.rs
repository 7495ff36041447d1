//! Construction errors.
//!
//! Missing children are unrepresentable: every constructor takes its payload
//! by value. What remains are the checks on literal surface tokens.

use thiserror::Error;

/// Error when building a pattern node from producer input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The surface token is empty or only whitespace.
    #[error("surface token is empty")]
    EmptyToken,
    /// The surface token contains whitespace, including at its edges.
    #[error("surface token {token:?} contains whitespace; use one tagged word per token")]
    WhitespaceInToken { token: String },
}
