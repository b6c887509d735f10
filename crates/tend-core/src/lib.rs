//! tend-core
//!
//! Pure domain types shared by the attention engine and the guided review.
//! No I/O: snapshots arrive fully materialized from the caller.

pub mod clock;
pub mod error;
pub mod models;
