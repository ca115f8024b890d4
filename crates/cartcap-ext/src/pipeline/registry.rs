use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use cartcap_core::product::ProductId;
use cartcap_core::Result;

use crate::context::MutationCtx;

/// Where in the host's cart-mutation flow a validator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    AddToCart,
    UpdateCart,
}

impl HookPoint {
    pub fn as_str(self) -> &'static str {
        match self {
            HookPoint::AddToCart => "add_to_cart",
            HookPoint::UpdateCart => "update_cart",
        }
    }
}

/// One cart mutation attempt as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartMutation {
    /// Add `quantity` more units of a product to the cart.
    Add {
        product_id: ProductId,
        quantity: u32,
    },
    /// Set a product's cart line to an absolute quantity.
    Update {
        product_id: ProductId,
        quantity: u32,
    },
}

impl CartMutation {
    pub fn hook(&self) -> HookPoint {
        match self {
            CartMutation::Add { .. } => HookPoint::AddToCart,
            CartMutation::Update { .. } => HookPoint::UpdateCart,
        }
    }
}

/// Cart mutation validator.
///
/// Receives the upstream `proceed` flag and returns it unchanged or
/// downgraded, attaching a notice when it rejects. A validator never
/// upgrades `false` back to `true`.
#[async_trait]
pub trait CartValidator: Send + Sync {
    fn hook(&self) -> HookPoint;

    async fn validate(
        &self,
        ctx: &MutationCtx,
        mutation: &CartMutation,
        proceed: bool,
    ) -> Result<bool>;
}

/// Explicit validator registry, invoked by the host once per mutation
/// attempt. Replaces process-wide implicit hook dispatch.
#[derive(Default)]
pub struct ValidationPipeline {
    validators: DashMap<HookPoint, Vec<Arc<dyn CartValidator>>>,
}

impl ValidationPipeline {
    pub fn new() -> Self {
        Self {
            validators: DashMap::new(),
        }
    }

    pub fn register(&self, validator: Arc<dyn CartValidator>) {
        tracing::debug!(hook = validator.hook().as_str(), "validator registered");
        self.validators
            .entry(validator.hook())
            .or_default()
            .push(validator);
    }

    pub fn registered(&self, hook: HookPoint) -> usize {
        self.validators.get(&hook).map(|v| v.len()).unwrap_or(0)
    }

    /// Run every validator registered for the mutation's hook point,
    /// chaining the proceed flag through them in registration order.
    pub async fn run(
        &self,
        ctx: &MutationCtx,
        mutation: &CartMutation,
        proceed: bool,
    ) -> Result<bool> {
        // clone the chain out of the map so no shard lock is held across await
        let chain: Vec<Arc<dyn CartValidator>> = self
            .validators
            .get(&mutation.hook())
            .map(|entry| entry.value().clone())
            .unwrap_or_default();

        let mut proceed = proceed;
        for validator in chain {
            let result = validator.validate(ctx, mutation, proceed).await?;
            // an already-failed mutation stays failed
            proceed = proceed && result;
        }
        Ok(proceed)
    }
}
