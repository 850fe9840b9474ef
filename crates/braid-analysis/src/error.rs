//! Analysis error types

use thiserror::Error;

/// Error parsing a sort key from user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct ParseSortError(pub String);
