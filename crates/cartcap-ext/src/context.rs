//! Per-request context handed to validators.

use std::sync::Arc;

use cartcap_core::cart::CartSnapshot;

use crate::notice::{Notice, NoticeSink};

/// What a validator sees of the request it runs inside: the cart snapshot
/// plus the channel rejection messages go out on.
#[derive(Clone)]
pub struct MutationCtx {
    cart: CartSnapshot,
    notices: Arc<dyn NoticeSink>,
}

impl MutationCtx {
    pub fn new(cart: CartSnapshot, notices: Arc<dyn NoticeSink>) -> Self {
        Self { cart, notices }
    }

    pub fn cart(&self) -> &CartSnapshot {
        &self.cart
    }

    pub fn push_notice(&self, notice: Notice) {
        self.notices.push(notice);
    }
}
