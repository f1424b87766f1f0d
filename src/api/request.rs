//! Request types for the leave entitlement API.
//!
//! This module defines the JSON request structure shared by the
//! `/entitlements` endpoints.

use serde::{Deserialize, Serialize};

use crate::calculation::parse_onboard_date;
use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::LeaveRequest;

/// Request body for the `/entitlements` endpoints.
///
/// The onboarding date stays a string until validation so that a bad date
/// is reported as `INVALID_DATE` rather than as malformed JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// The employee's name, passed through untouched.
    #[serde(default)]
    pub employee_name: String,
    /// The first day of employment, `YYYY-MM-DD`.
    pub onboard_date: String,
    /// Number of January 1st grants to project; the policy default if absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_to_project: Option<u32>,
}

impl EntitlementRequest {
    /// Validates the request into a domain [`LeaveRequest`].
    ///
    /// The horizon is checked later by the projector against the same policy.
    pub fn into_leave_request(self, policy: &LeavePolicy) -> EngineResult<LeaveRequest> {
        let onboard_date = parse_onboard_date(&self.onboard_date)?;
        Ok(LeaveRequest {
            employee_name: self.employee_name,
            onboard_date,
            years_to_project: self
                .years_to_project
                .unwrap_or(policy.projection().default_years),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use chrono::NaiveDate;

    #[test]
    fn test_deserialize_entitlement_request() {
        let json = r#"{
            "employee_name": "Employee A",
            "onboard_date": "2024-04-01",
            "years_to_project": 8
        }"#;

        let request: EntitlementRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_name, "Employee A");
        assert_eq!(request.onboard_date, "2024-04-01");
        assert_eq!(request.years_to_project, Some(8));
    }

    #[test]
    fn test_conversion_applies_policy_default_horizon() {
        let request: EntitlementRequest =
            serde_json::from_str(r#"{"onboard_date": "2024-04-01"}"#).unwrap();

        let leave = request
            .into_leave_request(&LeavePolicy::statutory())
            .unwrap();
        assert_eq!(leave.employee_name, "");
        assert_eq!(leave.onboard_date, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(leave.years_to_project, 5);
    }

    #[test]
    fn test_conversion_rejects_bad_date() {
        let request = EntitlementRequest {
            employee_name: "A".to_string(),
            onboard_date: "2024-02-30".to_string(),
            years_to_project: None,
        };

        let result = request.into_leave_request(&LeavePolicy::statutory());
        assert!(matches!(result, Err(EngineError::InvalidDate { .. })));
    }
}
