//! Shared error type across cartcap crates.
//!
//! A rejected cart mutation is *not* an error: it is a normal
//! [`Decision::Reject`](crate::policy::Decision) surfaced to the shopper as a
//! notice. This type covers the boundaries around that logic: bad admin
//! input, malformed config or payloads, and store backend failures.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, CartCapError>;

/// Unified error type used by core and the extension runtime.
#[derive(Debug, Error)]
pub enum CartCapError {
    /// The submitted limit value is not a positive whole number.
    #[error("invalid quantity limit: {0}")]
    InvalidLimit(String),
    /// Malformed config or host payload.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The host's attribute storage failed.
    #[error("store: {0}")]
    Store(String),
    #[error("internal: {0}")]
    Internal(String),
}
