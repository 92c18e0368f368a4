//! Repository status inspection
//!
//! This module answers the single question the scanner asks of every
//! discovered repository: is it clean, does it carry unstaged changes, or is
//! it ahead of its upstream?
//!
//! ## Components
//!
//! - `inspector`: libgit2-backed status queries
//! - `repo_state`: the state taxonomy and its colored rendering
//! - `status_info`: the per-repository report line

pub mod inspector;
pub mod repo_state;
pub mod status_info;
