//! Command implementations
//!
//! The scanner exposes a single user-facing operation:
//!
//! - `check`: scan a directory tree and report the status of every git
//!   repository found in it

pub mod check;
