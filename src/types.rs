use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Identity of a reservation. Two timeslots with the same start and duration
/// address the same entry, even though overlapping timeslots with a different
/// start or duration are distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeslotKey {
    pub start_timestamp: i64,
    pub duration: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeslotError {
    #[error("duration must not be negative, got {0}")]
    NegativeDuration(i64),
    #[error("start_timestamp {0} is out of range")]
    StartOutOfRange(i64),
    #[error("timeslot starting at {start_timestamp} with duration {duration} ends out of range")]
    EndOutOfRange { start_timestamp: i64, duration: i64 },
}

/// A span on the timeline with second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeslot {
    start: DateTime<Utc>,
    duration: Duration,
}

impl Timeslot {
    /// Builds a timeslot from unix seconds, rejecting anything the store
    /// can't reason about (negative spans, instants chrono can't represent).
    pub fn from_unix(start_timestamp: i64, duration: i64) -> Result<Self, TimeslotError> {
        if duration < 0 {
            return Err(TimeslotError::NegativeDuration(duration));
        }
        let start = DateTime::from_timestamp(start_timestamp, 0)
            .ok_or(TimeslotError::StartOutOfRange(start_timestamp))?;
        let end_out_of_range = || TimeslotError::EndOutOfRange {
            start_timestamp,
            duration,
        };
        let duration = Duration::try_seconds(duration).ok_or_else(end_out_of_range)?;
        start
            .checked_add_signed(duration)
            .ok_or_else(end_out_of_range)?;
        Ok(Self { start, duration })
    }

    pub fn end(&self) -> DateTime<Utc> {
        // Range-checked in `from_unix`.
        self.start + self.duration
    }

    pub fn key(&self) -> TimeslotKey {
        TimeslotKey {
            start_timestamp: self.start.timestamp(),
            duration: self.duration.num_seconds(),
        }
    }

    /// Whether both timeslots share at least one instant. Both boundaries are
    /// closed, so a timeslot ending exactly when another starts conflicts with
    /// it, and containment in either direction counts as overlap.
    pub fn overlaps(&self, other: &Timeslot) -> bool {
        self.start <= other.end() && other.start <= self.end()
    }
}
