//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `catalog` - Movies and their screening schedules

pub mod catalog;
pub mod foundation;
