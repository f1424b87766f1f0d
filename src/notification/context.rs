//! Notification context extracted from a calculation result.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, DISPLAY_DATE_FORMAT, GrantKind};

/// One grant as presented to a drafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrantSummary {
    /// Year the grant is issued.
    pub year: i32,
    /// Days granted.
    pub days: Decimal,
    /// Grant type.
    pub kind: GrantKind,
    /// Human-readable basis of the grant.
    pub source: String,
    /// Formula trace.
    pub detail: String,
}

/// Everything a drafter may use, with dates already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationContext {
    /// The employee's name.
    pub employee: String,
    /// Onboarding date, `YYYY/MM/DD`.
    pub onboard: String,
    /// Six-month milestone date, `YYYY/MM/DD`.
    pub six_month_date: String,
    /// All grants in result order.
    pub entitlements: Vec<GrantSummary>,
}

impl NotificationContext {
    /// Extracts the drafting context from a result.
    pub fn from_result(result: &CalculationResult) -> Self {
        Self {
            employee: result.employee_name.clone(),
            onboard: result.onboard_date.format(DISPLAY_DATE_FORMAT).to_string(),
            six_month_date: result.six_month_date.format(DISPLAY_DATE_FORMAT).to_string(),
            entitlements: result
                .calendar_year_entitlements
                .iter()
                .map(|r| GrantSummary {
                    year: r.year,
                    days: r.days,
                    kind: r.kind,
                    source: r.source.clone(),
                    detail: r.calculation_details.clone(),
                })
                .collect(),
        }
    }

    /// Serializes the context as the JSON payload handed to a model-backed
    /// drafter.
    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(|e| EngineError::NotificationFailed {
            message: format!("failed to serialize context: {}", e),
        })
    }
}
