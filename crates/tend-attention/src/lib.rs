//! tend-attention
//!
//! The consultant attention engine behind the morning review. Pure,
//! synchronous computation over snapshots the caller has already fetched:
//! no I/O, no persisted state, and "now" always comes from a
//! [`ReviewClock`](tend_core::clock::ReviewClock).

pub mod actions;
pub mod caseload;
pub mod error;
pub mod level;
pub mod score;
pub mod signal;
pub mod trend;
