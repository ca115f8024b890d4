//! Validation pipeline exports.
//!
//! Re-exports the registry and validator trait so downstream consumers can
//! depend on this module directly.

pub mod registry;

pub use registry::{CartMutation, CartValidator, HookPoint, ValidationPipeline};
