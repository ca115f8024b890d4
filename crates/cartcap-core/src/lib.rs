//! cartcap core: product, cart, and quantity-limit primitives.
//!
//! This crate defines the domain types and the decision logic shared by the
//! extension runtime and host integrations. It intentionally carries no
//! runtime or I/O dependencies so it can be embedded in any host process.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `CartCapError`/`Result` so a bad admin
//! submission or a malformed payload never takes the host down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cart;
pub mod error;
pub mod policy;
pub mod product;

/// Shared result type.
pub use error::{CartCapError, Result};
