//! Typed accessor over the host's product attribute storage.
//!
//! The host platform owns the underlying key/value store; implementations
//! adapt it to this interface. An absent stored value means "no limit".

pub mod memory;

use async_trait::async_trait;

use cartcap_core::product::{MaxQuantity, ProductId};
use cartcap_core::Result;

pub use memory::MemoryMetaStore;

/// Read/write access to the per-product quantity limit.
#[async_trait]
pub trait ProductMetaStore: Send + Sync {
    async fn max_quantity(&self, product: ProductId) -> Result<Option<MaxQuantity>>;

    async fn set_max_quantity(&self, product: ProductId, value: MaxQuantity) -> Result<()>;

    async fn clear_max_quantity(&self, product: ProductId) -> Result<()>;
}
