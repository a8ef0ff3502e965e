use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use crate::{
    backend::{Release, Reservation, TimeslotBackend},
    types::Timeslot,
};

pub struct MockTimeslotBackendInner {
    pub success: AtomicBool,
    pub panic: AtomicBool,
    pub calls_to_is_available: AtomicU64,
    pub calls_to_reserve: AtomicU64,
    pub calls_to_free: AtomicU64,
    pub last_timeslot: Mutex<Option<Timeslot>>,
}

#[derive(Clone)]
pub struct MockTimeslotBackend(pub Arc<MockTimeslotBackendInner>);

impl MockTimeslotBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            panic: AtomicBool::new(false),
            calls_to_is_available: AtomicU64::default(),
            calls_to_reserve: AtomicU64::default(),
            calls_to_free: AtomicU64::default(),
            last_timeslot: Mutex::default(),
        }
    }
}

impl MockTimeslotBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockTimeslotBackendInner::new()))
    }

    fn record(&self, timeslot: &Timeslot) -> bool {
        *self.0.last_timeslot.lock().unwrap() = Some(*timeslot);
        if self.0.panic.load(Ordering::SeqCst) {
            panic!("Supposed to panic");
        }
        self.0.success.load(Ordering::SeqCst)
    }
}

impl TimeslotBackend for MockTimeslotBackend {
    fn is_available(&self, timeslot: &Timeslot) -> bool {
        self.0.calls_to_is_available.fetch_add(1, Ordering::SeqCst);
        self.record(timeslot)
    }

    fn reserve(&self, timeslot: Timeslot) -> Reservation {
        self.0.calls_to_reserve.fetch_add(1, Ordering::SeqCst);
        match self.record(&timeslot) {
            true => Reservation::Reserved,
            false => Reservation::Unavailable,
        }
    }

    fn free(&self, timeslot: &Timeslot) -> Release {
        self.0.calls_to_free.fetch_add(1, Ordering::SeqCst);
        match self.record(timeslot) {
            true => Release::Freed,
            false => Release::NotFound,
        }
    }
}
