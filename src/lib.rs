//! Marquee - Movie Screening Catalog
//!
//! This crate models a minimal cinema scheduling domain: a `Movie` owns an
//! ordered collection of `Screening`s and answers schedule queries over them
//! (upcoming showings, showings on a given day, cancellation).

pub mod domain;
