//! Backfill command implementations
//!
//! Each module adds one operation to `Repository`:
//!
//! - `commit`: generate, write, stage and commit a single backdated change
//! - `backfill`: the per-day commit loop driven by a `BackfillPolicy`
//! - `push`: the one push attempt after the loop
//! - `session`: prompts, confirmation and the overall run
//! - `prompt`: line-based interactive input

pub mod backfill;
pub mod commit;
pub mod prompt;
pub mod push;
pub mod session;
