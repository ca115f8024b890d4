//! In-memory attribute store backing tests and the demo binary.

use async_trait::async_trait;
use dashmap::DashMap;

use cartcap_core::product::{MaxQuantity, ProductId};
use cartcap_core::Result;

use super::ProductMetaStore;

/// Concurrent in-memory limit store. Never fails.
#[derive(Debug, Default)]
pub struct MemoryMetaStore {
    limits: DashMap<ProductId, MaxQuantity>,
}

impl MemoryMetaStore {
    pub fn new() -> Self {
        Self {
            limits: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.limits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }
}

#[async_trait]
impl ProductMetaStore for MemoryMetaStore {
    async fn max_quantity(&self, product: ProductId) -> Result<Option<MaxQuantity>> {
        Ok(self.limits.get(&product).map(|entry| *entry.value()))
    }

    async fn set_max_quantity(&self, product: ProductId, value: MaxQuantity) -> Result<()> {
        self.limits.insert(product, value);
        Ok(())
    }

    async fn clear_max_quantity(&self, product: ProductId) -> Result<()> {
        self.limits.remove(&product);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_clear_roundtrip() {
        let store = MemoryMetaStore::new();
        let product = ProductId(42);

        assert_eq!(store.max_quantity(product).await.unwrap(), None);

        let limit = MaxQuantity::new(5).unwrap();
        store.set_max_quantity(product, limit).await.unwrap();
        assert_eq!(store.max_quantity(product).await.unwrap(), Some(limit));
        assert_eq!(store.len(), 1);

        store.clear_max_quantity(product).await.unwrap();
        assert_eq!(store.max_quantity(product).await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn set_overwrites_existing_limit() {
        let store = MemoryMetaStore::new();
        let product = ProductId(7);

        store
            .set_max_quantity(product, MaxQuantity::new(3).unwrap())
            .await
            .unwrap();
        store
            .set_max_quantity(product, MaxQuantity::new(8).unwrap())
            .await
            .unwrap();

        let stored = store.max_quantity(product).await.unwrap().unwrap();
        assert_eq!(stored.get(), 8);
    }
}
