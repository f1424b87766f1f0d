//! Calculation result model.
//!
//! This module contains the [`CalculationResult`] type that captures all
//! outputs of one entitlement calculation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntitlementRecord;

/// The complete result of an entitlement calculation.
///
/// Holds only values derived from the request, so two calculations with
/// the same inputs compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The employee's name, copied from the request.
    pub employee_name: String,
    /// The first day of employment.
    pub onboard_date: NaiveDate,
    /// The date six months of tenure are reached.
    pub six_month_date: NaiveDate,
    /// Days granted at the six-month milestone.
    pub six_month_entitlement: u32,
    /// Every grant, milestone included, ascending by year.
    pub calendar_year_entitlements: Vec<EntitlementRecord>,
}

impl CalculationResult {
    /// Returns the milestone grant, if present.
    pub fn milestone(&self) -> Option<&EntitlementRecord> {
        self.calendar_year_entitlements
            .iter()
            .find(|r| r.is_milestone())
    }

    /// Returns the January 1st grants in year order.
    pub fn annual_grants(&self) -> impl Iterator<Item = &EntitlementRecord> {
        self.calendar_year_entitlements
            .iter()
            .filter(|r| !r.is_milestone())
    }
}
