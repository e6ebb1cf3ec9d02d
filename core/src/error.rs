//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//!
//! The extractor itself never fails: malformed declarations simply produce no
//! match. Errors only arise at the edges (discovery, rendering, writing).

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Failure while walking the source tree.
    #[display("Walk Error: {_0}")]
    Walk(walkdir::Error),

    /// Failure while rendering JSON metadata.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
