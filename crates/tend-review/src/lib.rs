//! tend-review
//!
//! The guided review: a practitioner walks the clients that need them
//! most, one at a time, acting on each, and gets a short report at the end.

pub mod error;
pub mod events;
pub mod executor;
pub mod session;
