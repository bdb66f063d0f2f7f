//! Catalog module - movies and their screening schedules.
//!
//! # Module Organization
//!
//! - `movie` - Movie aggregate owning an ordered screening schedule
//! - `screening` - Screening value object (time + theater)

mod movie;
mod screening;

pub use movie::Movie;
pub use screening::Screening;
