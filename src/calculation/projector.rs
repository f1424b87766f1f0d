//! Calendar-year entitlement projection.
//!
//! Each January 1st grant settles the service of the previous calendar
//! year. The rate for a settlement year is fixed by tenure at its January
//! 1st; the onboarding year is prorated by the days actually employed, and
//! every later year grants the flat quota.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, EntitlementRecord, GrantKind, LeaveRequest};

use super::date_arithmetic::{
    add_months, day_count, days_in_year, end_of_year, start_of_year, year_of,
};
use super::milestone::six_month_milestone;
use super::tier_lookup::TierLadder;

/// Divisor turning a day count into years of tenure. Leap years are not
/// accounted for.
pub const TENURE_DAYS_PER_YEAR: i64 = 365;

/// Decimal places kept on a proportional grant.
pub const PROPORTIONAL_DECIMAL_PLACES: u32 = 2;

/// Builds the January 1st grant issued in `grant_year`.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::{TierLadder, annual_grant};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let onboard = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let ladder = TierLadder::statutory();
///
/// // 275 of 366 days employed in 2024 at the 7-day rate.
/// let first = annual_grant(onboard, 2025, &ladder).unwrap();
/// assert_eq!(first.days, Decimal::from_str("5.26").unwrap());
///
/// let second = annual_grant(onboard, 2026, &ladder).unwrap();
/// assert_eq!(second.days, Decimal::from(7));
/// ```
pub fn annual_grant(
    onboard_date: NaiveDate,
    grant_year: i32,
    ladder: &TierLadder,
) -> EngineResult<EntitlementRecord> {
    let calc_year = grant_year
        .checked_sub(1)
        .ok_or_else(|| EngineError::DateOutOfRange {
            message: format!("settlement year before {}", grant_year),
        })?;
    let jan1_calc_year = start_of_year(calc_year)?;
    let days_in_calc_year = days_in_year(calc_year);

    let tenure_at_start = (Decimal::from(day_count(jan1_calc_year, onboard_date))
        / Decimal::from(TENURE_DAYS_PER_YEAR))
    .max(Decimal::ZERO);
    let years_served = tenure_at_start.floor();
    let quota = ladder.quota_for(years_served);

    let source = format!("{} grant (settled from {} service)", grant_year, calc_year);

    let (days, kind, calculation_details) = if calc_year == year_of(onboard_date) {
        let days_missed = day_count(onboard_date, jan1_calc_year);
        let days_worked = (i64::from(days_in_calc_year) - days_missed).max(0);

        let days = (Decimal::from(quota) * Decimal::from(days_worked)
            / Decimal::from(days_in_calc_year))
        .round_dp_with_strategy(
            PROPORTIONAL_DECIMAL_PLACES,
            RoundingStrategy::MidpointAwayFromZero,
        );

        let details = format!(
            "[{}: employed {} days] / {} x {} days ({}-year tier)",
            calc_year, days_worked, days_in_calc_year, quota, years_served
        );
        (days, GrantKind::Proportional, details)
    } else {
        let details = format!(
            "[{}: employed all year] {}-year tier at January 1st ({} days)",
            calc_year, years_served, quota
        );
        (Decimal::from(quota), GrantKind::FullYear, details)
    };

    debug!(
        grant_year,
        calc_year,
        years_served = %years_served,
        quota,
        days = %days,
        "Projected annual grant"
    );

    Ok(EntitlementRecord {
        year: grant_year,
        period_start: start_of_year(grant_year)?,
        period_end: end_of_year(grant_year)?,
        days,
        source,
        calculation_details,
        kind,
        settlement_year: Some(calc_year),
        days_in_settlement_year: Some(days_in_calc_year),
    })
}

/// Projects the milestone grant plus `years_to_project` January 1st grants.
///
/// The first grant is issued the January after onboarding. The result is
/// ordered by `year`; when the milestone falls in the same year as the
/// first January grant, the milestone comes first.
///
/// Returns `InvalidProjectionHorizon` when `years_to_project` is zero or
/// above the policy maximum.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::project_entitlements;
/// use leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
///
/// let onboard = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let records = project_entitlements(onboard, 5, &LeavePolicy::statutory()).unwrap();
///
/// assert_eq!(records.len(), 6);
/// assert!(records[0].is_milestone());
/// assert_eq!(records[5].year, 2029);
/// ```
pub fn project_entitlements(
    onboard_date: NaiveDate,
    years_to_project: u32,
    policy: &LeavePolicy,
) -> EngineResult<Vec<EntitlementRecord>> {
    let years_to_project = policy.validate_horizon(years_to_project)?;
    let first_grant_year = year_of(onboard_date) + 1;

    let mut records = Vec::with_capacity(years_to_project as usize + 1);
    records.push(six_month_milestone(onboard_date, policy.milestone())?);

    for offset in 0..years_to_project {
        let grant_year = i32::try_from(offset)
            .ok()
            .and_then(|o| first_grant_year.checked_add(o))
            .ok_or_else(|| EngineError::DateOutOfRange {
                message: format!("grant year {} years after {}", offset, first_grant_year),
            })?;
        records.push(annual_grant(onboard_date, grant_year, policy.ladder())?);
    }

    records.sort_by_key(|r| r.year);
    Ok(records)
}

/// Runs a full calculation for one request.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_entitlements;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::LeaveRequest;
/// use chrono::NaiveDate;
///
/// let request = LeaveRequest::new("Employee A", NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
/// let result = calculate_entitlements(&request, &LeavePolicy::statutory()).unwrap();
///
/// assert_eq!(result.six_month_date, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
/// assert_eq!(result.six_month_entitlement, 3);
/// ```
pub fn calculate_entitlements(
    request: &LeaveRequest,
    policy: &LeavePolicy,
) -> EngineResult<CalculationResult> {
    let records = project_entitlements(request.onboard_date, request.years_to_project, policy)?;
    let six_month_date = add_months(request.onboard_date, policy.milestone().after_months)?;

    Ok(CalculationResult {
        employee_name: request.employee_name.clone(),
        onboard_date: request.onboard_date,
        six_month_date,
        six_month_entitlement: policy.milestone().days,
        calendar_year_entitlements: records,
    })
}
