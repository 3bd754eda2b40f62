//! Billing logic for the Parking Engine.
//!
//! This module converts a stay into a fee: elapsed time between entry and
//! exit, rounding up to whole billed hours, the flat hourly rate, and the
//! discount for registered vehicles.

mod billed_hours;
mod discount;
mod fee;

pub use billed_hours::{
    BilledHoursResult, MINIMUM_BILLED_HOURS, MINUTES_PER_HOUR, billed_hours,
    calculate_billed_hours,
};
pub use discount::{
    DiscountResult, FEE_DECIMAL_PLACES, Registry, apply_registry_discount,
    registry_discount_multiplier,
};
pub use fee::{FeeResult, compute_fee};
