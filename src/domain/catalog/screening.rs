//! Screening value object.
//!
//! A screening is one scheduled showing of a movie: a point in time plus
//! the theater it plays in. Screenings are plain values with structural
//! equality; the (time, theater) pair is the whole identity.

use crate::domain::foundation::{TheaterId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scheduled showing of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screening {
    /// When the showing starts.
    time: Timestamp,

    /// Where the showing plays.
    theater: TheaterId,
}

impl Screening {
    /// Creates a screening at the given time and theater.
    ///
    /// There is nothing to validate; any instant and any theater make a
    /// well-formed screening.
    pub fn new(time: Timestamp, theater: TheaterId) -> Self {
        Self { time, theater }
    }

    /// Returns when the screening starts.
    pub fn time(&self) -> Timestamp {
        self.time
    }

    /// Returns the theater the screening plays in.
    pub fn theater(&self) -> &TheaterId {
        &self.theater
    }

    /// Returns true if this screening starts strictly after `reference`.
    ///
    /// A screening starting at exactly `reference` is not upcoming.
    pub fn is_upcoming(&self, reference: Timestamp) -> bool {
        self.time.is_after(&reference)
    }

    /// Returns true if this screening falls on the given UTC calendar day,
    /// regardless of time-of-day.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.time.calendar_date() == date
    }

    /// Returns true if both the time and the theater match exactly.
    ///
    /// This is the cancellation key: a screening matching only one of the
    /// two fields does not match.
    pub fn matches(&self, time: Timestamp, theater: &TheaterId) -> bool {
        self.time == time && &self.theater == theater
    }
}
