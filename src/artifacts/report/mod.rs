//! End-of-scan reporting
//!
//! - `summary`: tallies repositories by state for the closing report

pub mod summary;
