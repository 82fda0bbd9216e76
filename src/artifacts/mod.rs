//! Backfill data types and policies
//!
//! - `category`: Commit categories and their file/content templates
//! - `content`: Random change generation from the category table
//! - `schedule`: Which days get commits and at what time of day
//! - `pacing`: The fixed pause between commit attempts
//! - `policy`: Bounded and year backfill presets
//! - `remote`: Push target and branch name validation

pub mod category;
pub mod content;
pub mod pacing;
pub mod policy;
pub mod remote;
pub mod schedule;
