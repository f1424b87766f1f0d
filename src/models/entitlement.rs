//! Entitlement record model.
//!
//! This module defines the [`EntitlementRecord`] produced for every grant
//! event, and the [`GrantKind`] that tells the grant types apart.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display format for dates in labels and usage windows.
pub const DISPLAY_DATE_FORMAT: &str = "%Y/%m/%d";

/// The basis a grant was issued on.
///
/// # Example
///
/// ```
/// use leave_engine::models::GrantKind;
///
/// let kind = GrantKind::Proportional;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"proportional\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantKind {
    /// The fixed grant on reaching six months of tenure.
    Milestone,
    /// A January 1st grant settling the partial onboarding year.
    Proportional,
    /// A January 1st grant settling a full calendar year of service.
    FullYear,
}

/// One grant event.
///
/// Records are produced fresh by the projector and never modified
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementRecord {
    /// The calendar year in which the grant is issued.
    pub year: i32,
    /// First day of the nominal usage window.
    pub period_start: NaiveDate,
    /// Last day of the nominal usage window.
    pub period_end: NaiveDate,
    /// Days granted. Integral except for the proportional grant, which is
    /// rounded to two decimal places.
    pub days: Decimal,
    /// Human-readable basis of the grant.
    pub source: String,
    /// Human-readable formula trace.
    pub calculation_details: String,
    /// The grant type.
    pub kind: GrantKind,
    /// The calendar year whose service this grant settles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_year: Option<i32>,
    /// Length of the settlement year (365 or 366).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_in_settlement_year: Option<u32>,
}

impl EntitlementRecord {
    /// Returns true for the six-month milestone grant.
    pub fn is_milestone(&self) -> bool {
        self.kind == GrantKind::Milestone
    }

    /// Formats the usage window for display.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::models::{EntitlementRecord, GrantKind};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EntitlementRecord {
    ///     year: 2025,
    ///     period_start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    ///     period_end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    ///     days: Decimal::from(7),
    ///     source: "2025 grant (settled from 2024 service)".to_string(),
    ///     calculation_details: String::new(),
    ///     kind: GrantKind::FullYear,
    ///     settlement_year: Some(2024),
    ///     days_in_settlement_year: Some(366),
    /// };
    /// assert_eq!(record.display_period(), "2025/01/01 ~ 2025/12/31");
    /// ```
    pub fn display_period(&self) -> String {
        format!(
            "{} ~ {}",
            self.period_start.format(DISPLAY_DATE_FORMAT),
            self.period_end.format(DISPLAY_DATE_FORMAT)
        )
    }
}
