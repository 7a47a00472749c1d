//! Clone URL resolution and the git handoff
//!
//! [`expand`] and [`target_dir`] are pure string transformations; [`ClonePlan`]
//! ties them to the configured source root and replaces the process with git.

mod expand;
mod plan;
mod target;

pub use expand::expand;
pub use plan::ClonePlan;
pub use target::target_dir;
