//! Product identity and the stored quantity limit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CartCapError, Result};

/// Opaque product identifier assigned by the host catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-product "maximum quantity in cart" limit.
///
/// Always `>= 1`. An absent limit is modeled as `Option<MaxQuantity>` at the
/// call sites; `0` is rejected at construction rather than being given a
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxQuantity(u32);

impl MaxQuantity {
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(CartCapError::InvalidLimit(
                "limit must be at least 1".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Parse the raw admin form field.
    ///
    /// Empty or whitespace-only input means "no limit" (the stored value is
    /// cleared). Anything else must be a whole number `>= 1`.
    pub fn parse_field(raw: &str) -> Result<Option<Self>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let value: u32 = trimmed.parse().map_err(|_| {
            CartCapError::InvalidLimit(format!("not a whole number: {trimmed:?}"))
        })?;
        Self::new(value).map(Some)
    }
}

impl fmt::Display for MaxQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
