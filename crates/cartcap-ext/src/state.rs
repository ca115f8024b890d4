//! Shared extension state wiring config, store, and pipeline.

use std::sync::Arc;

use cartcap_core::cart::CartSnapshot;
use cartcap_core::policy::QuantityLimitPolicy;
use cartcap_core::product::ProductId;
use cartcap_core::Result;

use crate::config::ExtensionConfig;
use crate::context::MutationCtx;
use crate::notice::NoticeSink;
use crate::pipeline::{CartMutation, HookPoint, ValidationPipeline};
use crate::store::{MemoryMetaStore, ProductMetaStore};
use crate::validators::{MaxQuantityAddValidator, MaxQuantityUpdateValidator};

#[derive(Clone)]
pub struct ExtensionState {
    inner: Arc<Inner>,
}

struct Inner {
    cfg: ExtensionConfig,
    store: Arc<dyn ProductMetaStore>,
    pipeline: ValidationPipeline,
}

impl ExtensionState {
    /// Build the extension around the host's attribute store and register
    /// the built-in validators.
    pub fn new(cfg: ExtensionConfig, store: Arc<dyn ProductMetaStore>) -> Result<Self> {
        cfg.validate()?;
        let policy = QuantityLimitPolicy::new(cfg.messages.to_messages());

        let pipeline = ValidationPipeline::new();
        pipeline.register(Arc::new(MaxQuantityAddValidator::new(
            Arc::clone(&store),
            policy.clone(),
        )));
        pipeline.register(Arc::new(MaxQuantityUpdateValidator::new(
            Arc::clone(&store),
            policy,
        )));

        tracing::info!(
            add_validators = pipeline.registered(HookPoint::AddToCart),
            update_validators = pipeline.registered(HookPoint::UpdateCart),
            "cartcap extension ready"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                cfg,
                store,
                pipeline,
            }),
        })
    }

    /// Convenience constructor backed by the in-memory store.
    pub fn in_memory(cfg: ExtensionConfig) -> Result<Self> {
        Self::new(cfg, Arc::new(MemoryMetaStore::new()))
    }

    pub fn cfg(&self) -> &ExtensionConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> Arc<dyn ProductMetaStore> {
        Arc::clone(&self.inner.store)
    }

    pub fn pipeline(&self) -> &ValidationPipeline {
        &self.inner.pipeline
    }

    /// Host entry point for an add-to-cart attempt: `quantity` more units of
    /// `product` on top of whatever the cart already holds.
    pub async fn validate_add_to_cart(
        &self,
        cart: CartSnapshot,
        notices: Arc<dyn NoticeSink>,
        product: ProductId,
        quantity: u32,
    ) -> Result<bool> {
        let ctx = MutationCtx::new(cart, notices);
        self.inner
            .pipeline
            .run(
                &ctx,
                &CartMutation::Add {
                    product_id: product,
                    quantity,
                },
                true,
            )
            .await
    }

    /// Host entry point for a cart-line update to an absolute quantity.
    pub async fn validate_update_cart(
        &self,
        cart: CartSnapshot,
        notices: Arc<dyn NoticeSink>,
        product: ProductId,
        quantity: u32,
    ) -> Result<bool> {
        let ctx = MutationCtx::new(cart, notices);
        self.inner
            .pipeline
            .run(
                &ctx,
                &CartMutation::Update {
                    product_id: product,
                    quantity,
                },
                true,
            )
            .await
    }
}
