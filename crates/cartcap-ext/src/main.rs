//! cartcap demo host.
//!
//! Wires the extension against the in-memory attribute store, seeds a
//! product limit through the admin save path, and replays a few cart
//! mutations so the enforcement can be watched in the logs.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use cartcap_core::cart::{CartLine, CartSnapshot};
use cartcap_core::product::ProductId;
use cartcap_ext::notice::MemoryNoticeSink;
use cartcap_ext::state::ExtensionState;
use cartcap_ext::{admin, config};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("cartcap.yaml").expect("config load failed");
    tracing::info!(version = cfg.version, "config loaded");

    let state = ExtensionState::in_memory(cfg).expect("extension init failed");

    let product = ProductId(1001);
    let store = state.store();
    admin::save_max_quantity_field(store.as_ref(), product, "5")
        .await
        .expect("seed limit failed");

    let cart = CartSnapshot::new(vec![CartLine {
        product_id: product,
        quantity: 3,
    }]);
    let notices = Arc::new(MemoryNoticeSink::new());

    let allowed = state
        .validate_add_to_cart(cart.clone(), notices.clone(), product, 2)
        .await
        .expect("validation failed");
    tracing::info!(allowed, "add 2 with 3 in cart (limit 5)");

    let allowed = state
        .validate_add_to_cart(cart.clone(), notices.clone(), product, 3)
        .await
        .expect("validation failed");
    tracing::info!(allowed, "add 3 with 3 in cart (limit 5)");

    let allowed = state
        .validate_update_cart(cart, notices.clone(), product, 11)
        .await
        .expect("validation failed");
    tracing::info!(allowed, "update line to 11 (limit 5)");

    for notice in notices.drain() {
        tracing::info!(kind = notice.kind.as_str(), text = %notice.text, "notice");
    }
}
