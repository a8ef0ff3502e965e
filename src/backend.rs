use crate::types::Timeslot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reservation {
    Reserved,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    Freed,
    NotFound,
}

/// Operations the HTTP layer needs from a store of reserved timeslots.
///
/// Each call is atomic with respect to the others. None of them can fail;
/// the outcome enums are exhaustive.
pub trait TimeslotBackend: Clone + Send + Sync + 'static {
    /// True iff no reserved timeslot overlaps `timeslot`.
    fn is_available(&self, timeslot: &Timeslot) -> bool;
    /// Reserves `timeslot` unless it overlaps an existing reservation.
    fn reserve(&self, timeslot: Timeslot) -> Reservation;
    /// Removes the reservation with exactly the same start and duration.
    fn free(&self, timeslot: &Timeslot) -> Release;
}
