//! Movie aggregate entity.
//!
//! A movie owns its screening schedule. Screenings are attached in the
//! order they are added and the movie answers schedule queries over them.
//!
//! # Ownership
//!
//! The movie exclusively owns its screenings; they are plain values and
//! are never shared across movies.

use crate::domain::catalog::Screening;
use crate::domain::foundation::{DomainError, TheaterId, Timestamp, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Movie aggregate - a film plus its screening schedule.
///
/// # Invariants
///
/// - `title` is non-empty
/// - `duration_minutes` is at least 1
/// - `screenings` preserves insertion order; duplicates are allowed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Film title.
    title: String,

    /// Running time in minutes.
    duration_minutes: u32,

    /// Scheduled screenings, in the order they were added.
    screenings: Vec<Screening>,
}

impl Movie {
    /// Creates a movie with an empty screening schedule.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is empty or whitespace
    /// - `OutOfRange` if the duration is zero
    pub fn new(title: impl Into<String>, duration_minutes: u32) -> Result<Self, DomainError> {
        let title = title.into();
        Self::validate_title(&title)?;
        Self::validate_duration(duration_minutes)?;

        Ok(Self {
            title,
            duration_minutes,
            screenings: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the film title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the running time in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the schedule as an immutable view, in insertion order.
    pub fn screenings(&self) -> &[Screening] {
        &self.screenings
    }

    /// Returns the number of scheduled screenings.
    pub fn screening_count(&self) -> usize {
        self.screenings.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a screening to the end of the schedule.
    ///
    /// No uniqueness check; adding the same showing twice schedules it
    /// twice.
    pub fn add_screening(&mut self, screening: Screening) {
        self.screenings.push(screening);
    }

    /// Cancels every screening at exactly this time and theater.
    ///
    /// Screenings matching only one of the two fields are kept, and the
    /// relative order of the remaining schedule is preserved. Returns the
    /// number of screenings removed; cancelling a showing that was never
    /// scheduled is a no-op returning 0, never an error.
    pub fn cancel_screening(&mut self, time: Timestamp, theater: &TheaterId) -> usize {
        let before = self.screenings.len();
        self.screenings.retain(|s| !s.matches(time, theater));
        before - self.screenings.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the screenings starting strictly after `current_time`, in
    /// schedule order.
    ///
    /// A screening starting at exactly `current_time` is excluded.
    pub fn upcoming_screenings(&self, current_time: Timestamp) -> Vec<Screening> {
        self.screenings
            .iter()
            .filter(|s| s.is_upcoming(current_time))
            .cloned()
            .collect()
    }

    /// Returns the screenings on the given UTC calendar day, in schedule
    /// order, regardless of time-of-day.
    pub fn screenings_on(&self, date: NaiveDate) -> Vec<Screening> {
        self.screenings
            .iter()
            .filter(|s| s.is_on(date))
            .cloned()
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_title(title: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(())
    }

    fn validate_duration(duration_minutes: u32) -> Result<(), ValidationError> {
        if duration_minutes == 0 {
            return Err(ValidationError::out_of_range("duration_minutes", 1, 0));
        }
        Ok(())
    }
}
