//! Occupancy grid functionality.
//!
//! This module provides the [`Grid`] type, which owns every slot in the
//! facility and implements the recommend, assign, release and locate
//! operations.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Slot, SlotRef, SlotState, Timestamp, VehicleRecord};

/// Number of floors in a default facility.
pub const DEFAULT_FLOORS: usize = 3;

/// Number of slots per floor in a default facility.
pub const DEFAULT_SLOTS_PER_FLOOR: usize = 10;

/// The floor/slot matrix of one parking facility.
///
/// Dimensions are fixed at construction and every floor has the same width.
/// Scans always run floor by floor in ascending order and, within a floor,
/// slot by slot in ascending order.
///
/// # Examples
///
/// ```
/// use parking_engine::grid::Grid;
/// use parking_engine::models::SlotRef;
///
/// let mut grid = Grid::default();
/// let slot = grid.recommend().unwrap();
/// assert_eq!(slot, SlotRef::new(0, 0));
///
/// grid.assign("1234", "0930".parse().unwrap(), slot.floor, slot.index).unwrap();
/// assert_eq!(grid.locate("1234").unwrap(), slot);
/// assert_eq!(grid.recommend().unwrap(), SlotRef::new(0, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    floors: Vec<Vec<Slot>>,
    width: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_FLOORS, DEFAULT_SLOTS_PER_FLOOR)
    }
}

impl Grid {
    /// Creates a grid of `depth` floors with `width` free slots each.
    pub fn new(depth: usize, width: usize) -> Self {
        Self {
            floors: vec![vec![Slot::default(); width]; depth],
            width,
        }
    }

    /// Returns the number of floors.
    pub fn depth(&self) -> usize {
        self.floors.len()
    }

    /// Returns the number of slots on each floor.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the total number of slots.
    pub fn capacity(&self) -> usize {
        self.depth() * self.width
    }

    /// Returns the number of occupied slots.
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Returns the number of free slots.
    pub fn free_count(&self) -> usize {
        self.capacity() - self.occupied_count()
    }

    /// Returns true when no slot is free.
    pub fn is_full(&self) -> bool {
        self.recommend().is_err()
    }

    /// Read-only view of the floors, for rendering by the caller.
    pub fn floors(&self) -> &[Vec<Slot>] {
        &self.floors
    }

    /// Returns the slot at the given coordinates.
    pub fn slot(&self, floor: usize, index: usize) -> EngineResult<&Slot> {
        self.check_bounds(floor, index)?;
        Ok(&self.floors[floor][index])
    }

    /// Returns the occupancy state of the slot at the given coordinates.
    pub fn state(&self, floor: usize, index: usize) -> EngineResult<SlotState> {
        self.slot(floor, index).map(Slot::state)
    }

    /// Iterates over every occupied slot in scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (SlotRef, &VehicleRecord)> + '_ {
        self.iter_slots()
            .filter_map(|(slot_ref, slot)| slot.occupant().map(|v| (slot_ref, v)))
    }

    /// Finds the first free slot.
    ///
    /// Floors are scanned lowest first and slots lowest index first, so the
    /// result is deterministic. The grid is not modified and nothing about
    /// the recommendation is remembered; pass the returned coordinates to
    /// [`Grid::assign`] explicitly.
    ///
    /// # Returns
    ///
    /// Returns the coordinates of the first free slot, or `Full` if every
    /// slot is occupied.
    pub fn recommend(&self) -> EngineResult<SlotRef> {
        self.iter_slots()
            .find(|(_, slot)| slot.is_free())
            .map(|(slot_ref, _)| slot_ref)
            .ok_or(EngineError::Full)
    }

    /// Parks a vehicle in the given slot.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` once the slot holds a new [`VehicleRecord`], or an
    /// error if:
    /// - The coordinates fall outside the grid (`OutOfRange`)
    /// - The slot already holds a vehicle (`AlreadyOccupied`)
    /// - The plate is parked in another slot (`AlreadyParked`)
    ///
    /// The grid is unchanged when an error is returned.
    pub fn assign(
        &mut self,
        plate: impl Into<String>,
        entry_time: Timestamp,
        floor: usize,
        index: usize,
    ) -> EngineResult<()> {
        let plate = plate.into();
        self.check_bounds(floor, index)?;

        if !self.floors[floor][index].is_free() {
            return Err(EngineError::AlreadyOccupied { floor, index });
        }

        if let Ok(existing) = self.locate(&plate) {
            return Err(EngineError::AlreadyParked {
                plate,
                floor: existing.floor,
                index: existing.index,
            });
        }

        debug!(plate = %plate, floor, index, entry_time = %entry_time, "Slot occupied");
        self.floors[floor][index].occupy(VehicleRecord::new(plate, entry_time));
        Ok(())
    }

    /// Frees the given slot.
    ///
    /// Releasing a slot that is already free succeeds and returns `None`.
    /// Otherwise the removed [`VehicleRecord`] is returned.
    ///
    /// # Returns
    ///
    /// Returns `OutOfRange` if the coordinates fall outside the grid.
    pub fn release(&mut self, floor: usize, index: usize) -> EngineResult<Option<VehicleRecord>> {
        self.check_bounds(floor, index)?;

        let released = self.floors[floor][index].vacate();
        match &released {
            Some(record) => debug!(plate = %record.plate, floor, index, "Slot released"),
            None => debug!(floor, index, "Release of a free slot ignored"),
        }
        Ok(released)
    }

    /// Finds the slot holding the given plate.
    ///
    /// Uses the same scan order as [`Grid::recommend`].
    ///
    /// # Returns
    ///
    /// Returns the slot coordinates, or `NotFound` if the plate is not parked.
    pub fn locate(&self, plate: &str) -> EngineResult<SlotRef> {
        self.iter_slots()
            .find(|(_, slot)| slot.holds(plate))
            .map(|(slot_ref, _)| slot_ref)
            .ok_or_else(|| EngineError::NotFound {
                plate: plate.to_string(),
            })
    }

    fn iter_slots(&self) -> impl Iterator<Item = (SlotRef, &Slot)> + '_ {
        self.floors.iter().enumerate().flat_map(|(floor, slots)| {
            slots
                .iter()
                .enumerate()
                .map(move |(index, slot)| (SlotRef::new(floor, index), slot))
        })
    }

    fn check_bounds(&self, floor: usize, index: usize) -> EngineResult<()> {
        if floor >= self.depth() || index >= self.width {
            return Err(EngineError::OutOfRange {
                floor,
                index,
                depth: self.depth(),
                width: self.width,
            });
        }
        Ok(())
    }
}
