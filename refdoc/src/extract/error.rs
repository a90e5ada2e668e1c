//! Error types for page extraction and rendering

use thiserror::Error;

/// Maximum element nesting the dispatcher will follow before giving up on
/// a page as malformed.
pub const MAX_DISPATCH_DEPTH: usize = 64;

/// Errors that can occur while extracting a page into markup or a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The page no longer matches the assumed template shape. Fatal: the
    /// run must not silently produce mis-structured output.
    #[error("{section} section does not match the expected template shape: {detail}")]
    StructureMismatch {
        /// Which section's shape was violated
        section: String,
        /// What was found instead
        detail: String,
    },

    /// A heading depth beyond the fixed underline-character table
    #[error("heading depth {depth} has no underline character (supported depths are 0..=5)")]
    UnsupportedHeadingDepth {
        /// The offending depth
        depth: usize,
    },

    /// Element nesting deeper than the dispatcher is willing to follow
    #[error("element nesting exceeds the dispatch depth limit of {limit}")]
    DepthLimitExceeded {
        /// The configured limit
        limit: usize,
    },

    /// A selector assembled from the template profile failed to parse
    #[error("invalid selector '{selector}': {detail}")]
    InvalidSelector {
        /// The selector source text
        selector: String,
        /// Parser diagnostic
        detail: String,
    },
}
