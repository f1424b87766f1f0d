//! Notification drafters and the fallback boundary.

use std::fmt::Write;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, GrantKind};

use super::context::NotificationContext;

/// Returned in place of a draft when the drafter fails.
pub const FALLBACK_MESSAGE: &str =
    "The leave notification service is temporarily unavailable. Please try again later.";

/// Turns a calculation into a human-readable notice for the employee.
///
/// Implementations may call out to external services and may fail; callers
/// go through [`draft_or_fallback`] so a failure never touches the
/// calculation itself.
pub trait NotificationDrafter: Send + Sync {
    /// Drafts a notice from the context.
    fn draft(&self, context: &NotificationContext) -> EngineResult<String>;
}

/// A deterministic drafter that fills a fixed template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateDrafter;

impl NotificationDrafter for TemplateDrafter {
    fn draft(&self, context: &NotificationContext) -> EngineResult<String> {
        let mut text = String::new();
        render_template(&mut text, context).map_err(|e| EngineError::NotificationFailed {
            message: e.to_string(),
        })?;
        Ok(text)
    }
}

fn render_template(out: &mut String, context: &NotificationContext) -> std::fmt::Result {
    writeln!(out, "Dear {},", context.employee)?;
    writeln!(out)?;
    writeln!(
        out,
        "This notice summarises your annual leave under the calendar-year system. \
         You joined on {}. Leave granted each January 1st is based on your service \
         in the previous calendar year.",
        context.onboard
    )?;
    writeln!(out)?;

    if let Some(milestone) = context
        .entitlements
        .iter()
        .find(|g| g.kind == GrantKind::Milestone)
    {
        writeln!(
            out,
            "Six-month grant: {} days on {}.",
            milestone.days.normalize(),
            context.six_month_date
        )?;
        writeln!(out)?;
    }

    writeln!(out, "January 1st grants:")?;
    for grant in context
        .entitlements
        .iter()
        .filter(|g| g.kind != GrantKind::Milestone)
    {
        writeln!(
            out,
            "- {}: {} days, {} ({})",
            grant.year,
            grant.days.normalize(),
            grant.source,
            grant.detail
        )?;
    }
    writeln!(out)?;
    write!(out, "Please contact HR with any questions.")
}

/// The outcome of a drafting attempt.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DraftOutcome {
    /// The drafted notice, or the fallback text.
    pub message: String,
    /// False when the fallback text was used.
    pub drafted: bool,
}

/// Drafts a notice, substituting [`FALLBACK_MESSAGE`] on any failure.
///
/// An empty draft counts as a failure.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::calculate_entitlements;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::LeaveRequest;
/// use leave_engine::notification::{TemplateDrafter, draft_or_fallback};
/// use chrono::NaiveDate;
///
/// let request = LeaveRequest::new("Employee A", NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
/// let result = calculate_entitlements(&request, &LeavePolicy::statutory()).unwrap();
///
/// let outcome = draft_or_fallback(&TemplateDrafter, &result);
/// assert!(outcome.drafted);
/// assert!(outcome.message.starts_with("Dear Employee A,"));
/// ```
pub fn draft_or_fallback(
    drafter: &dyn NotificationDrafter,
    result: &CalculationResult,
) -> DraftOutcome {
    let context = NotificationContext::from_result(result);

    match drafter.draft(&context) {
        Ok(message) if !message.trim().is_empty() => DraftOutcome {
            message,
            drafted: true,
        },
        Ok(_) => {
            warn!(employee = %result.employee_name, "Drafter returned an empty notice");
            DraftOutcome {
                message: FALLBACK_MESSAGE.to_string(),
                drafted: false,
            }
        }
        Err(err) => {
            warn!(employee = %result.employee_name, error = %err, "Notification drafting failed");
            DraftOutcome {
                message: FALLBACK_MESSAGE.to_string(),
                drafted: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_entitlements;
    use crate::config::LeavePolicy;
    use crate::models::LeaveRequest;
    use chrono::NaiveDate;

    struct FailingDrafter;

    impl NotificationDrafter for FailingDrafter {
        fn draft(&self, _context: &NotificationContext) -> EngineResult<String> {
            Err(EngineError::NotificationFailed {
                message: "upstream unavailable".to_string(),
            })
        }
    }

    struct BlankDrafter;

    impl NotificationDrafter for BlankDrafter {
        fn draft(&self, _context: &NotificationContext) -> EngineResult<String> {
            Ok("  \n".to_string())
        }
    }

    fn create_result() -> CalculationResult {
        let request = LeaveRequest::new(
            "Employee A",
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        )
        .with_years_to_project(3);
        calculate_entitlements(&request, &LeavePolicy::statutory()).unwrap()
    }

    #[test]
    fn test_template_lists_milestone_and_annual_grants() {
        let outcome = draft_or_fallback(&TemplateDrafter, &create_result());

        assert!(outcome.drafted);
        assert!(outcome.message.contains("You joined on 2024/04/01."));
        assert!(outcome.message.contains("Six-month grant: 3 days on 2024/10/01."));
        assert!(outcome.message.contains("- 2025: 5.26 days, 2025 grant (settled from 2024 service)"));
        assert!(outcome.message.contains("- 2027: 7 days"));
        assert!(outcome.message.ends_with("Please contact HR with any questions."));
    }

    #[test]
    fn test_failure_returns_fallback() {
        let outcome = draft_or_fallback(&FailingDrafter, &create_result());
        assert!(!outcome.drafted);
        assert_eq!(outcome.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_blank_draft_returns_fallback() {
        let outcome = draft_or_fallback(&BlankDrafter, &create_result());
        assert!(!outcome.drafted);
        assert_eq!(outcome.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn test_failure_leaves_result_untouched() {
        let result = create_result();
        let before = result.clone();
        let _ = draft_or_fallback(&FailingDrafter, &result);
        assert_eq!(result, before);
    }
}
