//! Utility functions
//!
//! Pure helpers for validation, formatting and string manipulation. None of
//! them hold state, so they are safe to call from anywhere.

pub mod formatting;
pub mod text;
pub mod validation;
