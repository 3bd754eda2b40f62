//! Parking session: one grid, one registry, one hourly rate.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::billing::{Registry, compute_fee};
use crate::config::FacilityConfig;
use crate::error::{EngineError, EngineResult};
use crate::grid::Grid;
use crate::models::{DepartureReceipt, SlotRef, Timestamp};

use super::command::{Command, Outcome, Placement};

/// Owns the state of one parking facility and executes commands against it.
///
/// Every mutating method takes `&mut self`, so a recommendation and the
/// assignment that follows it cannot interleave with another caller.
/// Callers sharing a session across threads must put the whole session
/// behind one lock.
///
/// # Example
///
/// ```
/// use parking_engine::session::{Command, Outcome, ParkingSession, Placement};
/// use rust_decimal::Decimal;
///
/// let mut session = ParkingSession::default();
///
/// session.execute(Command::Park {
///     plate: "1111".to_string(),
///     time: "0900".parse().unwrap(),
///     placement: Placement::Recommended,
/// })?;
///
/// let outcome = session.execute(Command::Depart {
///     plate: "1111".to_string(),
///     time: "1000".parse().unwrap(),
/// })?;
///
/// match outcome {
///     Outcome::Departed(receipt) => assert_eq!(receipt.fee, Decimal::new(5000, 0)),
///     other => panic!("unexpected outcome: {:?}", other),
/// }
/// # Ok::<(), parking_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ParkingSession {
    grid: Grid,
    registry: Registry,
    hourly_rate: Decimal,
}

impl Default for ParkingSession {
    fn default() -> Self {
        Self::from_validated(FacilityConfig::default())
    }
}

impl ParkingSession {
    /// Creates a session with an empty grid sized from the configuration.
    ///
    /// Returns `InvalidConfig` if either dimension is zero or the hourly
    /// rate is not positive.
    pub fn new(config: FacilityConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: FacilityConfig) -> Self {
        Self {
            grid: Grid::new(config.floors, config.slots_per_floor),
            registry: config.registered_plates,
            hourly_rate: config.hourly_rate,
        }
    }

    /// Returns the occupancy grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the discount registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Executes a command.
    ///
    /// Errors are logged and returned unchanged; the session is left as it
    /// was before the command.
    pub fn execute(&mut self, command: Command) -> EngineResult<Outcome> {
        let result = match command {
            Command::Park {
                plate,
                time,
                placement,
            } => self.park(&plate, time, placement),
            Command::Depart { plate, time } => self.depart(&plate, time).map(Outcome::Departed),
        };

        if let Err(err) = &result {
            warn!(error = %err, "Command rejected");
        }
        result
    }

    /// Parks a vehicle at the recommended or the requested slot.
    ///
    /// # Returns
    ///
    /// Returns `Outcome::Parked`, or an error if:
    /// - The grid has no free slot (`Full`, recommended placement only)
    /// - The requested slot is outside the grid (`OutOfRange`)
    /// - The requested slot is taken (`AlreadyOccupied`)
    /// - The plate is already parked (`AlreadyParked`)
    pub fn park(
        &mut self,
        plate: &str,
        time: Timestamp,
        placement: Placement,
    ) -> EngineResult<Outcome> {
        let (slot, recommended) = match placement {
            Placement::Recommended => (self.grid.recommend()?, true),
            Placement::Slot { floor, index } => (SlotRef::new(floor, index), false),
        };

        self.grid.assign(plate, time, slot.floor, slot.index)?;

        info!(
            plate = %plate,
            floor = slot.floor,
            index = slot.index,
            recommended,
            entry_time = %time,
            "Vehicle parked"
        );

        Ok(Outcome::Parked { slot, recommended })
    }

    /// Bills a parked vehicle and frees its slot.
    ///
    /// The fee is computed before the slot is released, so a rejected exit
    /// time leaves the vehicle parked.
    ///
    /// # Returns
    ///
    /// Returns a `DepartureReceipt`, or an error if:
    /// - The plate is not parked (`NotFound`)
    /// - `time` is earlier than the recorded entry (`InvalidInterval`)
    pub fn depart(&mut self, plate: &str, time: Timestamp) -> EngineResult<DepartureReceipt> {
        let slot = self.grid.locate(plate)?;
        let entry_time = self
            .grid
            .slot(slot.floor, slot.index)?
            .occupant()
            .map(|v| v.entry_time)
            .ok_or_else(|| EngineError::NotFound {
                plate: plate.to_string(),
            })?;

        let fee = compute_fee(entry_time, time, plate, &self.registry, self.hourly_rate)?;
        self.grid.release(slot.floor, slot.index)?;

        let receipt = DepartureReceipt {
            receipt_id: Uuid::new_v4(),
            issued_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            plate: plate.to_string(),
            slot,
            entry_time,
            exit_time: time,
            elapsed_minutes: fee.elapsed_minutes,
            billed_hours: fee.billed_hours,
            hourly_rate: fee.hourly_rate,
            base_fee: fee.base_fee,
            fee: fee.fee,
            discount_applied: fee.discount_applied,
            audit_steps: fee.audit_steps,
        };

        info!(
            receipt_id = %receipt.receipt_id,
            plate = %plate,
            floor = slot.floor,
            index = slot.index,
            billed_hours = receipt.billed_hours,
            fee = %receipt.fee,
            discount_applied = receipt.discount_applied,
            "Vehicle departed"
        );

        Ok(receipt)
    }
}
