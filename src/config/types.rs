//! Configuration types for leave policies.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files, and the validated [`LeavePolicy`]
//! the engine computes against.

use serde::{Deserialize, Serialize};

use crate::calculation::TierLadder;
use crate::error::{EngineError, EngineResult};

/// Metadata about the leave policy.
///
/// Contains identifying information about the statute or company policy
/// the ladder is taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// A short policy code (e.g., "LSA-ART38").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// URL to the official policy documentation.
    pub source_url: String,
}

/// How a tier row turns tenure into a number of leave days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TierQuota {
    /// A flat number of days for the whole band.
    Fixed {
        /// Days granted anywhere in the band.
        days: u32,
    },
    /// Days grow with each full year above the band's lower bound.
    Progressive {
        /// Days granted at exactly the lower bound.
        base_days: u32,
        /// Days added per full year above the lower bound.
        per_year: u32,
        /// Upper limit on the quota.
        cap: u32,
    },
}

/// One row of the tenure ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Inclusive lower bound of the band, in full years of tenure.
    pub min_years: u32,
    /// The quota rule for the band.
    pub quota: TierQuota,
}

/// The six-month milestone grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneConfig {
    /// Months of tenure after which the grant fires.
    pub after_months: u32,
    /// Days granted at the milestone.
    pub days: u32,
    /// Length of the display window starting at the milestone date.
    pub window_months: u32,
}

impl Default for MilestoneConfig {
    fn default() -> Self {
        Self {
            after_months: 6,
            days: 3,
            window_months: 6,
        }
    }
}

/// Limits on how far ahead annual grants are projected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Horizon used when a request does not specify one.
    pub default_years: u32,
    /// Largest horizon a request may ask for.
    pub max_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            default_years: 5,
            max_years: 50,
        }
    }
}

/// Policy file structure as it appears in `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Policy metadata.
    pub policy: PolicyMetadata,
    /// The tenure ladder, lowest band first.
    pub tiers: Vec<Tier>,
    /// Milestone grant settings.
    #[serde(default)]
    pub milestone: MilestoneConfig,
    /// Projection limits.
    #[serde(default)]
    pub projection: ProjectionConfig,
}

/// A validated leave policy.
///
/// Holds everything the projector needs: the tier ladder, the milestone
/// rule and the projection limits. Construction validates the parts, so a
/// `LeavePolicy` in hand is always internally consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeavePolicy {
    metadata: PolicyMetadata,
    tiers: TierLadder,
    milestone: MilestoneConfig,
    projection: ProjectionConfig,
}

impl LeavePolicy {
    /// Creates a new policy from its component parts.
    ///
    /// Returns `InvalidPolicy` if the ladder, milestone or projection limits
    /// are inconsistent.
    pub fn new(
        metadata: PolicyMetadata,
        tiers: Vec<Tier>,
        milestone: MilestoneConfig,
        projection: ProjectionConfig,
    ) -> EngineResult<Self> {
        let tiers = TierLadder::new(tiers)?;

        if milestone.after_months == 0 {
            return Err(EngineError::InvalidPolicy {
                message: "milestone after_months must be at least 1".to_string(),
            });
        }

        if projection.max_years == 0 {
            return Err(EngineError::InvalidPolicy {
                message: "projection max_years must be at least 1".to_string(),
            });
        }

        if projection.default_years == 0 || projection.default_years > projection.max_years {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "projection default_years {} must be between 1 and max_years {}",
                    projection.default_years, projection.max_years
                ),
            });
        }

        Ok(Self {
            metadata,
            tiers,
            milestone,
            projection,
        })
    }

    /// Returns the built-in statutory policy.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::config::LeavePolicy;
    /// use rust_decimal::Decimal;
    ///
    /// let policy = LeavePolicy::statutory();
    /// assert_eq!(policy.ladder().quota_for(Decimal::from(3)), 14);
    /// assert_eq!(policy.milestone().days, 3);
    /// ```
    pub fn statutory() -> Self {
        Self {
            metadata: PolicyMetadata {
                code: "LSA-ART38".to_string(),
                name: "Labor Standards Act Article 38 (calendar-year settlement)".to_string(),
                version: "2017-01-01".to_string(),
                source_url: "https://law.moj.gov.tw/LawClass/LawAll.aspx?pcode=N0030001"
                    .to_string(),
            },
            tiers: TierLadder::statutory(),
            milestone: MilestoneConfig::default(),
            projection: ProjectionConfig::default(),
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the tenure ladder.
    pub fn ladder(&self) -> &TierLadder {
        &self.tiers
    }

    /// Returns the milestone grant settings.
    pub fn milestone(&self) -> &MilestoneConfig {
        &self.milestone
    }

    /// Returns the projection limits.
    pub fn projection(&self) -> &ProjectionConfig {
        &self.projection
    }

    /// Checks a requested horizon against the projection limits.
    pub fn validate_horizon(&self, years: u32) -> EngineResult<u32> {
        if years == 0 || years > self.projection.max_years {
            return Err(EngineError::InvalidProjectionHorizon {
                years,
                max: self.projection.max_years,
            });
        }
        Ok(years)
    }
}

impl TryFrom<PolicyFile> for LeavePolicy {
    type Error = EngineError;

    fn try_from(file: PolicyFile) -> EngineResult<Self> {
        Self::new(file.policy, file.tiers, file.milestone, file.projection)
    }
}
