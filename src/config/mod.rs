//! Leave policy configuration.
//!
//! This module provides the validated [`LeavePolicy`] (tenure ladder,
//! milestone grant and projection limits), a built-in statutory default,
//! and functionality to load a policy from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/lsa_art38").unwrap();
//! println!("Loaded policy: {}", loader.policy().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    LeavePolicy, MilestoneConfig, PolicyFile, PolicyMetadata, ProjectionConfig, Tier, TierQuota,
};
