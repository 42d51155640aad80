//! Error types for chat-overlay.
//!
//! This module defines the error types returned by cleanup and styling
//! operations.

/// Error type for cleanup and styling operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The chat message container was not found in the document.
    ///
    /// Non-fatal at the pipeline level: the cleanup pass is skipped and the
    /// document is left untouched.
    #[error("target container not found: {selector}")]
    TargetNotFound {
        /// The selector that failed to match.
        selector: String,
    },

    /// The text color style element is missing from the document.
    ///
    /// Returned when a color replacement is attempted before the overlay
    /// styles have been injected.
    #[error("text color style element not injected")]
    StyleNotInjected,
}

/// Result type alias for cleanup and styling operations.
pub type Result<T> = std::result::Result<T, Error>;
