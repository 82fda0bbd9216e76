//! Backdated commit generation for a git working copy.
//!
//! - `areas`: working copy, file writes and the git collaborator
//! - `artifacts`: categories, templates, schedules and policies
//! - `commands`: the operations a run is made of

pub mod areas;
pub mod artifacts;
pub mod commands;
