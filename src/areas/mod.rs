//! Core scan components
//!
//! This module contains the fundamental building blocks of a scan:
//!
//! - `ignore`: the `.check_ignore` exclusion list
//! - `scanner`: high-level scan coordination and output
//! - `workspace`: working directory traversal and repository discovery

pub(crate) mod ignore;
pub mod scanner;
pub(crate) mod workspace;
