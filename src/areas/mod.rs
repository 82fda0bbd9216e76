//! Core repository components
//!
//! - `git`: the version-control seam and its git-binary implementation
//! - `repository`: the working copy being backfilled and its output writer
//! - `workspace`: file system writes inside the working copy

pub mod git;
pub mod repository;
pub(crate) mod workspace;
