//! urica-core
//!
//! Pure domain types for the URICA assessment system. No I/O and no scoring
//! arithmetic — this is the shared vocabulary between the scoring crate and
//! whatever surface administers the questionnaire.

pub mod models;
