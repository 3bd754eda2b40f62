//! Departure receipt models for the Parking Engine.
//!
//! This module contains the [`DepartureReceipt`] issued when a vehicle leaves,
//! and the [`AuditStep`] records that explain how its fee was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SlotRef, Timestamp};

/// A single step in a fee calculation.
///
/// Each step captures the input, output, and reasoning for one billing rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The record handed to a driver on departure.
///
/// # Example
///
/// ```
/// use parking_engine::models::{DepartureReceipt, SlotRef, Timestamp};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let receipt = DepartureReceipt {
///     receipt_id: Uuid::new_v4(),
///     issued_at: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     plate: "1111".to_string(),
///     slot: SlotRef::new(0, 0),
///     entry_time: "0900".parse().unwrap(),
///     exit_time: "1000".parse().unwrap(),
///     elapsed_minutes: 60,
///     billed_hours: 1,
///     hourly_rate: Decimal::new(10000, 0),
///     base_fee: Decimal::new(10000, 0),
///     fee: Decimal::new(5000, 0),
///     discount_applied: true,
///     audit_steps: vec![],
/// };
/// assert_eq!(receipt.fee, Decimal::new(5000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureReceipt {
    /// Unique identifier for this receipt.
    pub receipt_id: Uuid,
    /// When the receipt was issued.
    pub issued_at: DateTime<Utc>,
    /// The version of the engine that issued the receipt.
    pub engine_version: String,
    /// The departing vehicle's plate.
    pub plate: String,
    /// The slot the vehicle was released from.
    pub slot: SlotRef,
    /// When the vehicle entered.
    pub entry_time: Timestamp,
    /// When the vehicle left.
    pub exit_time: Timestamp,
    /// Minutes between entry and exit.
    pub elapsed_minutes: u32,
    /// Whole hours charged.
    pub billed_hours: u32,
    /// The hourly rate applied.
    pub hourly_rate: Decimal,
    /// Fee before any discount.
    pub base_fee: Decimal,
    /// Fee payable.
    pub fee: Decimal,
    /// Whether the registered-vehicle discount was applied.
    pub discount_applied: bool,
    /// How the fee was calculated.
    pub audit_steps: Vec<AuditStep>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_receipt() -> DepartureReceipt {
        DepartureReceipt {
            receipt_id: Uuid::new_v4(),
            issued_at: Utc::now(),
            engine_version: "0.1.0".to_string(),
            plate: "5151".to_string(),
            slot: SlotRef::new(2, 7),
            entry_time: Timestamp::new(9, 0).unwrap(),
            exit_time: Timestamp::new(10, 1).unwrap(),
            elapsed_minutes: 61,
            billed_hours: 2,
            hourly_rate: dec("10000"),
            base_fee: dec("20000"),
            fee: dec("10000"),
            discount_applied: true,
            audit_steps: vec![AuditStep {
                step_number: 1,
                rule_id: "billed_hours".to_string(),
                rule_name: "Billed Hours".to_string(),
                input: serde_json::json!({ "elapsed_minutes": 61 }),
                output: serde_json::json!({ "billed_hours": 2 }),
                reasoning: "61 minutes rounds up to 2 hours".to_string(),
            }],
        }
    }

    #[test]
    fn test_receipt_serializes_money_as_strings() {
        let receipt = create_sample_receipt();
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["fee"], "10000");
        assert_eq!(json["base_fee"], "20000");
        assert_eq!(json["entry_time"], "0900");
        assert_eq!(json["exit_time"], "1001");
        assert_eq!(json["slot"]["floor"], 2);
        assert_eq!(json["slot"]["index"], 7);
    }

    #[test]
    fn test_receipt_round_trips_through_json() {
        let receipt = create_sample_receipt();
        let json = serde_json::to_string(&receipt).unwrap();
        let parsed: DepartureReceipt = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, receipt);
    }

    #[test]
    fn test_audit_step_fields_are_accessible() {
        let receipt = create_sample_receipt();
        let step = &receipt.audit_steps[0];

        assert_eq!(step.rule_id, "billed_hours");
        assert_eq!(step.output["billed_hours"], 2);
    }
}
