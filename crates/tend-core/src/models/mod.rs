pub mod action;
pub mod care_plan;
pub mod client;
pub mod command;
pub mod device;
pub mod journal;
pub mod message;
pub mod schedule;
