//! Error Types for Summary Lookups
//!
//! These never cross the tool boundary: the encyclopedia tool catches
//! every variant and degrades to a fixed not-found string.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No page found for '{0}'")]
    NotFound(String),

    #[error("Title '{0}' is ambiguous")]
    Ambiguous(String),

    #[error("Malformed summary response: {0}")]
    Malformed(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
