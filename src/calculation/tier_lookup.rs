//! Tenure ladder lookup.
//!
//! This module maps full years of service to an annual leave quota using an
//! ordered table of `(min_years, quota)` rows. The statutory ladder is:
//!
//! | tenure (years) | quota |
//! |---|---|
//! | [0, 1) | 7 |
//! | [1, 2) | 7 |
//! | [2, 3) | 10 |
//! | [3, 5) | 14 |
//! | [5, 10) | 15 |
//! | [10, ∞) | min(30, 16 + floor(t) − 10) |

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::config::{Tier, TierQuota};
use crate::error::{EngineError, EngineResult};

/// The statutory ladder. Both 7-day rows are kept.
pub const STATUTORY_TIERS: [Tier; 6] = [
    Tier {
        min_years: 0,
        quota: TierQuota::Fixed { days: 7 },
    },
    Tier {
        min_years: 1,
        quota: TierQuota::Fixed { days: 7 },
    },
    Tier {
        min_years: 2,
        quota: TierQuota::Fixed { days: 10 },
    },
    Tier {
        min_years: 3,
        quota: TierQuota::Fixed { days: 14 },
    },
    Tier {
        min_years: 5,
        quota: TierQuota::Fixed { days: 15 },
    },
    Tier {
        min_years: 10,
        quota: TierQuota::Progressive {
            base_days: 16,
            per_year: 1,
            cap: 30,
        },
    },
];

/// A validated tenure ladder.
///
/// Rows are ascending by `min_years` and the first row starts at zero, so
/// every non-negative tenure matches exactly one band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TierLadder {
    tiers: Vec<Tier>,
}

impl TierLadder {
    /// Builds a ladder, rejecting an empty table, a first row above zero,
    /// rows out of order, and progressive rows capped below their base.
    pub fn new(tiers: Vec<Tier>) -> EngineResult<Self> {
        let first = tiers.first().ok_or_else(|| EngineError::InvalidPolicy {
            message: "tier ladder is empty".to_string(),
        })?;

        if first.min_years != 0 {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "first tier must start at 0 years, found {}",
                    first.min_years
                ),
            });
        }

        if let Some(pair) = tiers.windows(2).find(|w| w[1].min_years <= w[0].min_years) {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "tier min_years must be strictly ascending ({} follows {})",
                    pair[1].min_years, pair[0].min_years
                ),
            });
        }

        for tier in &tiers {
            if let TierQuota::Progressive { base_days, cap, .. } = tier.quota {
                if cap < base_days {
                    return Err(EngineError::InvalidPolicy {
                        message: format!(
                            "progressive tier at {} years has cap {} below base {}",
                            tier.min_years, cap, base_days
                        ),
                    });
                }
            }
        }

        Ok(Self { tiers })
    }

    /// The statutory ladder.
    pub fn statutory() -> Self {
        Self {
            tiers: STATUTORY_TIERS.to_vec(),
        }
    }

    /// Returns the rows, lowest band first.
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Returns the annual quota for a tenure in years.
    ///
    /// The last row whose lower bound is at or below the floored tenure
    /// applies. Negative tenure is treated as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::calculation::TierLadder;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let ladder = TierLadder::statutory();
    /// assert_eq!(ladder.quota_for(Decimal::ZERO), 7);
    /// assert_eq!(ladder.quota_for(Decimal::from_str("2.99").unwrap()), 10);
    /// assert_eq!(ladder.quota_for(Decimal::from(24)), 30);
    /// ```
    pub fn quota_for(&self, years_served: Decimal) -> u32 {
        let full_years = years_served
            .max(Decimal::ZERO)
            .floor()
            .to_u32()
            .unwrap_or(u32::MAX);

        // Unreachable for a validated ladder, which always has a row at zero.
        let Some(tier) = self.tiers.iter().rfind(|t| t.min_years <= full_years) else {
            return 0;
        };

        match tier.quota {
            TierQuota::Fixed { days } => days,
            TierQuota::Progressive {
                base_days,
                per_year,
                cap,
            } => {
                let extra = (full_years - tier.min_years).saturating_mul(per_year);
                base_days.saturating_add(extra).min(cap)
            }
        }
    }
}
