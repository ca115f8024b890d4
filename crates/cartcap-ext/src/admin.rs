//! Product-form save path for the quantity limit field.
//!
//! The host delivers the submitted product form as JSON; only the
//! `max_quantity_in_cart` field is read here, everything else belongs to the
//! host. Set-or-delete semantics: an empty value clears the stored limit.

use serde::Deserialize;

use cartcap_core::error::{CartCapError, Result};
use cartcap_core::product::{MaxQuantity, ProductId};

use crate::store::ProductMetaStore;

/// The one field of the product edit form this extension owns. Unknown
/// fields are the host's business and are ignored.
#[derive(Debug, Deserialize)]
pub struct ProductFormSubmission {
    #[serde(default)]
    pub max_quantity_in_cart: Option<String>,
}

/// Parse a submitted product form and apply the limit field to the store.
///
/// Returns the limit now in effect for the product, `None` when cleared.
pub async fn apply_product_form(
    store: &dyn ProductMetaStore,
    product: ProductId,
    raw_json: &str,
) -> Result<Option<MaxQuantity>> {
    let form: ProductFormSubmission = serde_json::from_str(raw_json)
        .map_err(|e| CartCapError::BadRequest(format!("invalid product form payload: {e}")))?;
    let raw = form.max_quantity_in_cart.as_deref().unwrap_or("");
    save_max_quantity_field(store, product, raw).await
}

/// Apply one raw field value: store a valid limit, clear on empty input.
/// Invalid input leaves the stored value untouched.
pub async fn save_max_quantity_field(
    store: &dyn ProductMetaStore,
    product: ProductId,
    raw: &str,
) -> Result<Option<MaxQuantity>> {
    match MaxQuantity::parse_field(raw)? {
        Some(limit) => {
            store.set_max_quantity(product, limit).await?;
            tracing::debug!(product = %product, limit = limit.get(), "stored max quantity");
            Ok(Some(limit))
        }
        None => {
            store.clear_max_quantity(product).await?;
            tracing::debug!(product = %product, "cleared max quantity");
            Ok(None)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::MemoryMetaStore;

    #[tokio::test]
    async fn form_with_value_stores_the_limit() {
        let store = MemoryMetaStore::new();
        let product = ProductId(10);

        let applied = apply_product_form(
            &store,
            product,
            r#"{ "max_quantity_in_cart": "5", "title": "Mug", "price": "9.99" }"#,
        )
        .await
        .unwrap();

        assert_eq!(applied.unwrap().get(), 5);
        assert_eq!(
            store.max_quantity(product).await.unwrap().unwrap().get(),
            5
        );
    }

    #[tokio::test]
    async fn missing_or_empty_field_clears_the_limit() {
        let store = MemoryMetaStore::new();
        let product = ProductId(10);
        store
            .set_max_quantity(product, MaxQuantity::new(5).unwrap())
            .await
            .unwrap();

        let applied = apply_product_form(&store, product, r#"{ "title": "Mug" }"#)
            .await
            .unwrap();

        assert_eq!(applied, None);
        assert_eq!(store.max_quantity(product).await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_field_is_an_error_and_writes_nothing() {
        let store = MemoryMetaStore::new();
        let product = ProductId(10);
        store
            .set_max_quantity(product, MaxQuantity::new(5).unwrap())
            .await
            .unwrap();

        let err = save_max_quantity_field(&store, product, "0")
            .await
            .expect_err("zero must be rejected");
        assert!(matches!(err, CartCapError::InvalidLimit(_)));

        // previous value survives
        assert_eq!(
            store.max_quantity(product).await.unwrap().unwrap().get(),
            5
        );
    }

    #[tokio::test]
    async fn malformed_json_is_a_bad_request() {
        let store = MemoryMetaStore::new();
        let err = apply_product_form(&store, ProductId(1), "{ not json")
            .await
            .expect_err("must fail");
        assert!(matches!(err, CartCapError::BadRequest(_)));
    }
}
