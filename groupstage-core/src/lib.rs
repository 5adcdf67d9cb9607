//! GROUPSTAGE Core - Round-robin group scheduling
//!
//! This crate provides the circle-method scheduler for group stages:
//! - Group configuration derived once from a competitor count
//! - Per-round pairings with a fixed anchor seat and a rotating bye
//! - Per-competitor opponent walks that skip the full round table
//!
//! Competitors are plain indices into the caller's ordered list; result
//! tracking, seeding and presentation belong to the caller.

pub mod group;
mod rotation;

// Re-exports for convenient access
pub use group::{Competitor, Group, GroupError, Match};
