//! Quantity-limit decision logic.
//!
//! Pure and synchronous: the policy reads nothing and mutates nothing. It is
//! evaluated once per cart mutation attempt, with the stored limit and the
//! relevant quantities supplied by the caller.

use crate::product::MaxQuantity;

/// Default add-to-cart rejection message.
pub const DEFAULT_ADD_EXCEEDS: &str =
    "You can only add up to {max} of this product to your cart.";

/// Default cart-update rejection message.
pub const DEFAULT_UPDATE_EXCEEDS: &str =
    "You can only have a maximum of {max} of this product in your basket.";

/// Rejection message templates. `{max}` is replaced with the limit value.
#[derive(Debug, Clone)]
pub struct Messages {
    pub add_exceeds: String,
    pub update_exceeds: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            add_exceeds: DEFAULT_ADD_EXCEEDS.into(),
            update_exceeds: DEFAULT_UPDATE_EXCEEDS.into(),
        }
    }
}

/// Outcome of evaluating one cart mutation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Reject { message: String },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Evaluator for the per-product quantity limit.
///
/// Holds the configured message templates; construct once and share.
#[derive(Debug, Clone, Default)]
pub struct QuantityLimitPolicy {
    messages: Messages,
}

impl QuantityLimitPolicy {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    /// Decide an add-to-cart attempt: `delta` more units of a product on top
    /// of the `existing` cart quantity. An absent limit always allows.
    pub fn evaluate_add(
        &self,
        max: Option<MaxQuantity>,
        existing: u32,
        delta: u32,
    ) -> Decision {
        let Some(max) = max else {
            return Decision::Allow;
        };
        // Widened arithmetic: existing + delta must not wrap.
        if u64::from(existing) + u64::from(delta) > u64::from(max.get()) {
            return Decision::Reject {
                message: render(&self.messages.add_exceeds, max),
            };
        }
        Decision::Allow
    }

    /// Decide a cart-line update to an absolute `requested` quantity.
    pub fn evaluate_update(&self, max: Option<MaxQuantity>, requested: u32) -> Decision {
        let Some(max) = max else {
            return Decision::Allow;
        };
        if requested > max.get() {
            return Decision::Reject {
                message: render(&self.messages.update_exceeds, max),
            };
        }
        Decision::Allow
    }
}

fn render(template: &str, max: MaxQuantity) -> String {
    template.replace("{max}", &max.get().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn limit(value: u32) -> Option<MaxQuantity> {
        Some(MaxQuantity::new(value).unwrap())
    }

    #[test]
    fn absent_limit_always_allows() {
        let policy = QuantityLimitPolicy::default();
        assert_eq!(policy.evaluate_add(None, 100, 50), Decision::Allow);
        assert_eq!(policy.evaluate_update(None, 100_000), Decision::Allow);
    }

    #[test]
    fn add_allows_up_to_the_limit() {
        let policy = QuantityLimitPolicy::default();
        assert_eq!(policy.evaluate_add(limit(5), 3, 2), Decision::Allow);
    }

    #[test]
    fn add_rejects_one_past_the_limit() {
        let policy = QuantityLimitPolicy::default();
        let decision = policy.evaluate_add(limit(5), 3, 3);
        assert_eq!(
            decision,
            Decision::Reject {
                message: "You can only add up to 5 of this product to your cart.".into()
            }
        );
    }

    #[test]
    fn add_boundary_exact() {
        let policy = QuantityLimitPolicy::default();
        assert!(policy.evaluate_add(limit(10), 4, 6).is_allowed());
        assert!(!policy.evaluate_add(limit(10), 4, 7).is_allowed());
    }

    #[test]
    fn update_allows_at_the_limit_and_rejects_past_it() {
        let policy = QuantityLimitPolicy::default();
        assert_eq!(policy.evaluate_update(limit(10), 10), Decision::Allow);
        let decision = policy.evaluate_update(limit(10), 11);
        assert_eq!(
            decision,
            Decision::Reject {
                message: "You can only have a maximum of 10 of this product in your basket."
                    .into()
            }
        );
    }

    #[test]
    fn add_does_not_wrap_on_huge_quantities() {
        let policy = QuantityLimitPolicy::default();
        assert!(!policy.evaluate_add(limit(5), u32::MAX, u32::MAX).is_allowed());
    }

    #[test]
    fn custom_templates_render_the_limit() {
        let policy = QuantityLimitPolicy::new(Messages {
            add_exceeds: "Limite de {max} atteinte.".into(),
            update_exceeds: "Maximum {max}.".into(),
        });
        assert_eq!(
            policy.evaluate_add(limit(3), 3, 1),
            Decision::Reject {
                message: "Limite de 3 atteinte.".into()
            }
        );
        assert_eq!(
            policy.evaluate_update(limit(3), 4),
            Decision::Reject {
                message: "Maximum 3.".into()
            }
        );
    }
}
