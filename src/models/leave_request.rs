//! Leave calculation request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Horizon used when the caller does not ask for one.
pub const DEFAULT_YEARS_TO_PROJECT: u32 = 5;

/// The inputs to one entitlement calculation.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveRequest;
/// use chrono::NaiveDate;
///
/// let request = LeaveRequest::new("Employee A", NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
/// assert_eq!(request.years_to_project, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee's name. Passed through to the result untouched.
    pub employee_name: String,
    /// The first day of employment.
    pub onboard_date: NaiveDate,
    /// Number of January 1st grants to project.
    #[serde(default = "default_years_to_project")]
    pub years_to_project: u32,
}

fn default_years_to_project() -> u32 {
    DEFAULT_YEARS_TO_PROJECT
}

impl LeaveRequest {
    /// Creates a request with the default horizon.
    pub fn new(employee_name: impl Into<String>, onboard_date: NaiveDate) -> Self {
        Self {
            employee_name: employee_name.into(),
            onboard_date,
            years_to_project: DEFAULT_YEARS_TO_PROJECT,
        }
    }

    /// Returns a copy of the request with a different horizon.
    pub fn with_years_to_project(self, years_to_project: u32) -> Self {
        Self {
            years_to_project,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_uses_default_horizon() {
        let json = r#"{"employee_name": "A", "onboard_date": "2024-04-01"}"#;
        let request: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.years_to_project, DEFAULT_YEARS_TO_PROJECT);
        assert_eq!(
            request.onboard_date,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
        );
    }

    #[test]
    fn test_with_years_to_project() {
        let request = LeaveRequest::new("A", NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
            .with_years_to_project(12);
        assert_eq!(request.years_to_project, 12);
        assert_eq!(request.employee_name, "A");
    }
}
