//! Registered vehicle discount.
//!
//! Vehicles whose plate is in the [`Registry`] pay half of the base fee.

use std::collections::HashSet;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Number of decimal places a fee is rounded to.
pub const FEE_DECIMAL_PLACES: u32 = 2;

/// Returns the multiplier applied to registered vehicles' fees.
///
/// The multiplier is 0.5 (50% discount).
pub fn registry_discount_multiplier() -> Decimal {
    Decimal::new(5, 1)
}

/// Plates entitled to the registered vehicle discount.
///
/// # Example
///
/// ```
/// use parking_engine::billing::Registry;
///
/// let registry = Registry::from_iter(["1111", "1421"]);
/// assert!(registry.contains("1111"));
/// assert!(!registry.contains("2222"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    plates: HashSet<String>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the plate is registered.
    pub fn contains(&self, plate: &str) -> bool {
        self.plates.contains(plate)
    }

    /// Returns the number of registered plates.
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    /// Returns true if no plate is registered.
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Registry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            plates: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The result of applying the registry discount.
#[derive(Debug, Clone)]
pub struct DiscountResult {
    /// The fee after any discount, rounded to [`FEE_DECIMAL_PLACES`] with
    /// trailing zeros removed.
    pub fee: Decimal,
    /// Whether the discount was applied.
    pub discount_applied: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the registered vehicle discount to a base fee.
///
/// Registered plates pay `base_fee x 0.5`; everyone else pays the base fee.
/// The result is rounded to two decimal places, midpoint away from zero,
/// and stripped of trailing zeros, so `5000.0` and `7.50` become `5000`
/// and `7.5`.
///
/// # Examples
///
/// ```
/// use parking_engine::billing::{Registry, apply_registry_discount};
/// use rust_decimal::Decimal;
///
/// let registry = Registry::from_iter(["1111"]);
/// let result = apply_registry_discount(Decimal::new(10000, 0), "1111", &registry, 1);
/// assert_eq!(result.fee, Decimal::new(5000, 0));
/// assert!(result.discount_applied);
/// ```
pub fn apply_registry_discount(
    base_fee: Decimal,
    plate: &str,
    registry: &Registry,
    step_number: u32,
) -> DiscountResult {
    if registry.contains(plate) {
        let multiplier = registry_discount_multiplier();
        let fee = round_fee(base_fee * multiplier);

        let audit_step = AuditStep {
            step_number,
            rule_id: "registry_discount".to_string(),
            rule_name: "Registered Vehicle Discount".to_string(),
            input: serde_json::json!({
                "base_fee": base_fee.normalize().to_string(),
                "plate": plate,
                "registered": true
            }),
            output: serde_json::json!({
                "fee": fee.normalize().to_string(),
                "discount_applied": true,
                "multiplier": multiplier.normalize().to_string()
            }),
            reasoning: format!(
                "{} x {} = {}",
                base_fee.normalize(),
                multiplier.normalize(),
                fee.normalize()
            ),
        };

        DiscountResult {
            fee,
            discount_applied: true,
            audit_step,
        }
    } else {
        let fee = round_fee(base_fee);

        let audit_step = AuditStep {
            step_number,
            rule_id: "registry_discount".to_string(),
            rule_name: "Registered Vehicle Discount".to_string(),
            input: serde_json::json!({
                "base_fee": base_fee.normalize().to_string(),
                "plate": plate,
                "registered": false
            }),
            output: serde_json::json!({
                "fee": fee.normalize().to_string(),
                "discount_applied": false
            }),
            reasoning: format!("No discount applied - plate '{}' is not registered", plate),
        };

        DiscountResult {
            fee,
            discount_applied: false,
            audit_step,
        }
    }
}

fn round_fee(amount: Decimal) -> Decimal {
    amount
        .round_dp_with_strategy(FEE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}
