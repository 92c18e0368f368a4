//! Scan data structures and queries
//!
//! This module contains the types produced by a scan:
//!
//! - `report`: aggregated tallies for the end-of-scan summary
//! - `status`: per-repository state inspection

pub mod report;
pub mod status;
