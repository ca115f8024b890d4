use std::sync::Arc;

use async_trait::async_trait;

use cartcap_core::policy::{Decision, QuantityLimitPolicy};
use cartcap_core::Result;

use crate::context::MutationCtx;
use crate::notice::Notice;
use crate::pipeline::{CartMutation, CartValidator, HookPoint};
use crate::store::ProductMetaStore;

/// Rejects a cart-line update whose absolute quantity exceeds the limit.
pub struct MaxQuantityUpdateValidator {
    store: Arc<dyn ProductMetaStore>,
    policy: QuantityLimitPolicy,
}

impl MaxQuantityUpdateValidator {
    pub fn new(store: Arc<dyn ProductMetaStore>, policy: QuantityLimitPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl CartValidator for MaxQuantityUpdateValidator {
    fn hook(&self) -> HookPoint {
        HookPoint::UpdateCart
    }

    async fn validate(
        &self,
        ctx: &MutationCtx,
        mutation: &CartMutation,
        proceed: bool,
    ) -> Result<bool> {
        let CartMutation::Update {
            product_id,
            quantity,
        } = mutation
        else {
            return Ok(proceed);
        };

        let max = self.store.max_quantity(*product_id).await?;

        match self.policy.evaluate_update(max, *quantity) {
            Decision::Allow => Ok(proceed),
            Decision::Reject { message } => {
                tracing::debug!(
                    product = %product_id,
                    requested = *quantity,
                    "cart update rejected by quantity limit"
                );
                ctx.push_notice(Notice::error(message));
                Ok(false)
            }
        }
    }
}
