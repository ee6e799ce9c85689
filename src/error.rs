//! Error types
//!
//! Typed errors for the library surface. Only two things can go wrong:
//! a heading level outside `1..=6`, and a failed directory fetch (which the
//! static store never produces).

use thiserror::Error;

/// Errors raised by the formatting helpers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// Heading level outside the HTML range `h1`..`h6`
    #[error("Heading level must be between 1 and 6 (got {0})")]
    InvalidHeadingLevel(i64),
}

/// Errors raised when reading users or groups from a directory store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Could not fetch users")]
    Users,

    #[error("Could not fetch groups")]
    Groups,
}
