//! Six-month milestone grant.
//!
//! Reaching six months of tenure earns a fixed statutory grant that sits
//! outside the annual ladder and fires exactly once per employee.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::MilestoneConfig;
use crate::error::EngineResult;
use crate::models::{DISPLAY_DATE_FORMAT, EntitlementRecord, GrantKind};

use super::date_arithmetic::{add_months, year_of};

/// Label carried by every milestone record.
pub const MILESTONE_SOURCE: &str = "Statutory six-month grant";

/// Builds the milestone record for an onboarding date.
///
/// The usage window runs from the milestone date for `window_months`; it is
/// for display only and feeds no other calculation.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::six_month_milestone;
/// use leave_engine::config::MilestoneConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let onboard = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let record = six_month_milestone(onboard, &MilestoneConfig::default()).unwrap();
/// assert_eq!(record.period_start, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
/// assert_eq!(record.days, Decimal::from(3));
/// ```
pub fn six_month_milestone(
    onboard_date: NaiveDate,
    config: &MilestoneConfig,
) -> EngineResult<EntitlementRecord> {
    let milestone_date = add_months(onboard_date, config.after_months)?;
    let window_end = add_months(milestone_date, config.window_months)?;

    Ok(EntitlementRecord {
        year: year_of(milestone_date),
        period_start: milestone_date,
        period_end: window_end,
        days: Decimal::from(config.days),
        source: MILESTONE_SOURCE.to_string(),
        calculation_details: format!(
            "{} months of service reached on {}; statutory grant of {} days",
            config.after_months,
            milestone_date.format(DISPLAY_DATE_FORMAT),
            config.days
        ),
        kind: GrantKind::Milestone,
        settlement_year: None,
        days_in_settlement_year: None,
    })
}
