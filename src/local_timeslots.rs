use crate::{
    backend::{Release, Reservation, TimeslotBackend},
    types::{Timeslot, TimeslotKey},
};
use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};
use tracing::debug;

/// In-memory timeline of reservations, shared by every connection.
///
/// The map never holds two overlapping timeslots. That holds only because
/// `reserve` checks and inserts under one write guard; the map itself knows
/// nothing about overlap.
#[derive(Debug, Clone, Default)]
pub struct LocalTimeslots {
    timeslots: Arc<RwLock<HashMap<TimeslotKey, Timeslot>>>,
}

impl LocalTimeslots {
    // Nothing panics while a guard is held, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TimeslotKey, Timeslot>> {
        self.timeslots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TimeslotKey, Timeslot>> {
        self.timeslots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn is_free(timeslots: &HashMap<TimeslotKey, Timeslot>, timeslot: &Timeslot) -> bool {
        !timeslots
            .values()
            .any(|reserved| timeslot.overlaps(reserved))
    }

    /// Current reservations ordered by key.
    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<Timeslot> {
        let mut timeslots: Vec<Timeslot> = self.read().values().copied().collect();
        timeslots.sort_unstable_by_key(Timeslot::key);
        timeslots
    }
}

impl TimeslotBackend for LocalTimeslots {
    fn is_available(&self, timeslot: &Timeslot) -> bool {
        Self::is_free(&self.read(), timeslot)
    }

    fn reserve(&self, timeslot: Timeslot) -> Reservation {
        let key = timeslot.key();
        let mut timeslots = self.write();
        if !Self::is_free(&timeslots, &timeslot) {
            debug!(?key, "Timeslot overlaps an existing reservation");
            return Reservation::Unavailable;
        }
        timeslots.insert(key, timeslot);
        debug!(?key, "Timeslot reserved");
        Reservation::Reserved
    }

    fn free(&self, timeslot: &Timeslot) -> Release {
        let key = timeslot.key();
        if self.write().remove(&key).is_none() {
            debug!(?key, "No reservation with this exact start and duration");
            return Release::NotFound;
        }
        debug!(?key, "Timeslot freed");
        Release::Freed
    }
}
