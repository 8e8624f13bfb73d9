//! Data models for the site backend.
//!
//! Field names serialize in camelCase to match the JSON files the front end reads.

mod message;
mod site;
mod stats;

pub use message::*;
pub use site::*;
pub use stats::*;
