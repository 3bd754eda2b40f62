//! Parking fee calculation.
//!
//! Combines the interval check, billed hours and registry discount into a
//! single [`FeeResult`].

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{AuditStep, Timestamp};

use super::billed_hours::calculate_billed_hours;
use super::discount::{Registry, apply_registry_discount};

/// The complete result of a fee calculation.
#[derive(Debug, Clone)]
pub struct FeeResult {
    /// Minutes between entry and exit.
    pub elapsed_minutes: u32,
    /// Whole hours charged.
    pub billed_hours: u32,
    /// The hourly rate applied.
    pub hourly_rate: Decimal,
    /// `billed_hours x hourly_rate`.
    pub base_fee: Decimal,
    /// Fee payable after any discount.
    pub fee: Decimal,
    /// Whether the registered vehicle discount was applied.
    pub discount_applied: bool,
    /// One step per billing rule, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes the fee for a stay from `entry` to `exit`.
///
/// # Arguments
///
/// * `entry` - When the vehicle arrived
/// * `exit` - When the vehicle is leaving
/// * `plate` - The vehicle's plate, checked against `registry`
/// * `registry` - Plates entitled to the 50% discount
/// * `hourly_rate` - Charge per billed hour
///
/// # Returns
///
/// Returns a `FeeResult`, or `InvalidInterval` if `exit` is earlier than
/// `entry`. Equal times are allowed and bill the one hour minimum.
///
/// # Examples
///
/// ```
/// use parking_engine::billing::{Registry, compute_fee};
/// use rust_decimal::Decimal;
///
/// let registry = Registry::from_iter(["1111"]);
/// let entry = "0900".parse().unwrap();
/// let exit = "1001".parse().unwrap();
///
/// let result = compute_fee(entry, exit, "2222", &registry, Decimal::new(10000, 0)).unwrap();
/// assert_eq!(result.billed_hours, 2);
/// assert_eq!(result.fee, Decimal::new(20000, 0));
/// assert!(!result.discount_applied);
/// ```
pub fn compute_fee(
    entry: Timestamp,
    exit: Timestamp,
    plate: &str,
    registry: &Registry,
    hourly_rate: Decimal,
) -> EngineResult<FeeResult> {
    let mut audit_steps = Vec::with_capacity(4);

    let elapsed_minutes = entry.difference(&exit)?;
    audit_steps.push(AuditStep {
        step_number: 1,
        rule_id: "elapsed_time".to_string(),
        rule_name: "Elapsed Time".to_string(),
        input: serde_json::json!({
            "entry_time": entry.to_string(),
            "exit_time": exit.to_string()
        }),
        output: serde_json::json!({
            "elapsed_minutes": elapsed_minutes
        }),
        reasoning: format!(
            "{} - {} = {} minutes",
            exit.total_minutes(),
            entry.total_minutes(),
            elapsed_minutes
        ),
    });

    let hours = calculate_billed_hours(elapsed_minutes, 2);
    audit_steps.push(hours.audit_step);

    let base_fee = Decimal::from(hours.billed_hours) * hourly_rate;
    audit_steps.push(AuditStep {
        step_number: 3,
        rule_id: "base_fee".to_string(),
        rule_name: "Base Fee".to_string(),
        input: serde_json::json!({
            "billed_hours": hours.billed_hours,
            "hourly_rate": hourly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_fee": base_fee.normalize().to_string()
        }),
        reasoning: format!(
            "{} hour(s) x {} = {}",
            hours.billed_hours,
            hourly_rate.normalize(),
            base_fee.normalize()
        ),
    });

    let discount = apply_registry_discount(base_fee, plate, registry, 4);
    audit_steps.push(discount.audit_step);

    Ok(FeeResult {
        elapsed_minutes,
        billed_hours: hours.billed_hours,
        hourly_rate,
        base_fee,
        fee: discount.fee,
        discount_applied: discount.discount_applied,
        audit_steps,
    })
}
