//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading leave
//! policies from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LeavePolicy, PolicyFile};

/// Loads and provides access to a leave policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/lsa_art38/
/// └── policy.yaml   # Metadata, tier ladder, milestone and projection limits
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/lsa_art38").unwrap();
/// println!("Loaded policy: {}", loader.policy().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: LeavePolicy,
}

impl PolicyLoader {
    /// Loads the policy from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, is not valid YAML, is
    /// missing a required field, or describes an inconsistent policy.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join("policy.yaml");
        let file = Self::load_yaml::<PolicyFile>(&policy_path)?;
        let policy = LeavePolicy::try_from(file)?;

        tracing::info!(
            path = %policy_path.display(),
            code = %policy.metadata().code,
            tiers = policy.ladder().tiers().len(),
            "Loaded leave policy"
        );

        Ok(Self { policy })
    }

    /// Wraps the built-in statutory policy.
    pub fn statutory() -> Self {
        Self {
            policy: LeavePolicy::statutory(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> LeavePolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/lsa_art38"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "leave-engine-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = PolicyLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().metadata().code, "LSA-ART38");
    }

    #[test]
    fn test_shipped_policy_matches_statutory_default() {
        let loader = PolicyLoader::load(config_path()).unwrap();
        assert_eq!(loader.policy(), &LeavePolicy::statutory());
    }

    #[test]
    fn test_loaded_ladder_quota_lookup() {
        let policy = PolicyLoader::load(config_path()).unwrap().into_policy();
        assert_eq!(policy.ladder().quota_for(Decimal::from(2)), 10);
        assert_eq!(policy.ladder().quota_for(Decimal::from(12)), 18);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = PolicyLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join("policy.yaml"), "policy: [unclosed").unwrap();

        let result = PolicyLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_inconsistent_ladder_returns_invalid_policy() {
        let dir = scratch_dir("unordered");
        fs::write(
            dir.join("policy.yaml"),
            r#"
policy:
  code: BAD
  name: Unordered
  version: "1"
  source_url: https://example.com
tiers:
  - min_years: 0
    quota: { type: fixed, days: 7 }
  - min_years: 5
    quota: { type: fixed, days: 15 }
  - min_years: 3
    quota: { type: fixed, days: 14 }
"#,
        )
        .unwrap();

        let result = PolicyLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::InvalidPolicy { .. })));

        fs::remove_dir_all(dir).unwrap();
    }
}
