//! git-get core - Clone URL expansion and target directory resolution
//!
//! This crate turns a repository reference such as `org/repo` into an
//! absolute clone URL, derives a stable destination directory under the
//! source root from that URL, and hands the clone off to `git`.

pub mod clone;
pub mod config;
pub mod error;
pub mod paths;

pub use clone::{expand, target_dir, ClonePlan};
pub use config::{CloneConfig, Config, Overrides};
pub use error::{Error, Result};
pub use paths::{expand_home, find_executable};
