//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error types that form the vocabulary
//! of the scheduling domain.

mod errors;
mod theater;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use theater::TheaterId;
pub use timestamp::Timestamp;
