use std::sync::Arc;

use async_trait::async_trait;

use cartcap_core::policy::{Decision, QuantityLimitPolicy};
use cartcap_core::Result;

use crate::context::MutationCtx;
use crate::notice::Notice;
use crate::pipeline::{CartMutation, CartValidator, HookPoint};
use crate::store::ProductMetaStore;

/// Rejects an add-to-cart attempt that would push a product past its limit.
///
/// The existing cart quantity for the product counts toward the limit, so
/// adding 3 with 3 already in the cart needs a limit of at least 6.
pub struct MaxQuantityAddValidator {
    store: Arc<dyn ProductMetaStore>,
    policy: QuantityLimitPolicy,
}

impl MaxQuantityAddValidator {
    pub fn new(store: Arc<dyn ProductMetaStore>, policy: QuantityLimitPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl CartValidator for MaxQuantityAddValidator {
    fn hook(&self) -> HookPoint {
        HookPoint::AddToCart
    }

    async fn validate(
        &self,
        ctx: &MutationCtx,
        mutation: &CartMutation,
        proceed: bool,
    ) -> Result<bool> {
        let CartMutation::Add {
            product_id,
            quantity,
        } = mutation
        else {
            return Ok(proceed);
        };

        let max = self.store.max_quantity(*product_id).await?;
        let existing = ctx.cart().sum_quantity_for(*product_id);

        match self.policy.evaluate_add(max, existing, *quantity) {
            Decision::Allow => Ok(proceed),
            Decision::Reject { message } => {
                tracing::debug!(
                    product = %product_id,
                    existing,
                    requested = *quantity,
                    "add-to-cart rejected by quantity limit"
                );
                ctx.push_notice(Notice::error(message));
                Ok(false)
            }
        }
    }
}
