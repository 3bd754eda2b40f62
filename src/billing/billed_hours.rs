//! Billed hours calculation.
//!
//! Parking is charged per started hour: any fraction of an hour, including
//! a zero-length stay, is charged as a full hour.

use crate::models::AuditStep;

/// Minutes in one billed hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Smallest number of hours ever charged.
pub const MINIMUM_BILLED_HOURS: u32 = 1;

/// The result of converting a stay into billed hours.
#[derive(Debug, Clone)]
pub struct BilledHoursResult {
    /// Whole hours charged.
    pub billed_hours: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Converts elapsed minutes into whole billed hours.
///
/// # Examples
///
/// ```
/// use parking_engine::billing::billed_hours;
///
/// assert_eq!(billed_hours(0), 1);
/// assert_eq!(billed_hours(30), 1);
/// assert_eq!(billed_hours(60), 1);
/// assert_eq!(billed_hours(61), 2);
/// ```
pub fn billed_hours(elapsed_minutes: u32) -> u32 {
    elapsed_minutes
        .div_ceil(MINUTES_PER_HOUR)
        .max(MINIMUM_BILLED_HOURS)
}

/// Calculates billed hours and records an audit step for them.
pub fn calculate_billed_hours(elapsed_minutes: u32, step_number: u32) -> BilledHoursResult {
    let hours = billed_hours(elapsed_minutes);

    let reasoning = if elapsed_minutes % MINUTES_PER_HOUR == 0 && elapsed_minutes > 0 {
        format!("{} minutes is exactly {} hour(s)", elapsed_minutes, hours)
    } else {
        format!(
            "{} minutes rounded up to {} hour(s) (minimum {})",
            elapsed_minutes, hours, MINIMUM_BILLED_HOURS
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "billed_hours".to_string(),
        rule_name: "Billed Hours".to_string(),
        input: serde_json::json!({
            "elapsed_minutes": elapsed_minutes
        }),
        output: serde_json::json!({
            "billed_hours": hours
        }),
        reasoning,
    };

    BilledHoursResult {
        billed_hours: hours,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// BH-001: zero elapsed minutes bills one hour
    #[test]
    fn test_zero_minutes_bills_one_hour() {
        assert_eq!(billed_hours(0), 1);
    }

    /// BH-002: part hour rounds up
    #[test]
    fn test_thirty_minutes_bills_one_hour() {
        assert_eq!(billed_hours(30), 1);
        assert_eq!(billed_hours(1), 1);
    }

    /// BH-003: exact hour is not rounded up
    #[test]
    fn test_exact_hours_are_not_rounded() {
        assert_eq!(billed_hours(60), 1);
        assert_eq!(billed_hours(120), 2);
    }

    /// BH-004: one minute over starts a new hour
    #[test]
    fn test_one_minute_over_bills_next_hour() {
        assert_eq!(billed_hours(61), 2);
        assert_eq!(billed_hours(121), 3);
    }

    #[test]
    fn test_full_day() {
        assert_eq!(billed_hours(1440), 24);
    }

    #[test]
    fn test_audit_step_records_input_and_output() {
        let result = calculate_billed_hours(61, 2);

        assert_eq!(result.billed_hours, 2);
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "billed_hours");
        assert_eq!(result.audit_step.input["elapsed_minutes"], 61);
        assert_eq!(result.audit_step.output["billed_hours"], 2);
        assert!(result.audit_step.reasoning.contains("rounded up"));
    }

    #[test]
    fn test_audit_reasoning_for_exact_hour() {
        let result = calculate_billed_hours(60, 1);

        assert!(result.audit_step.reasoning.contains("exactly 1 hour"));
    }
}
