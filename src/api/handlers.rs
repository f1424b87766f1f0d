//! HTTP request handlers for the leave entitlement API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_entitlements;
use crate::error::EngineResult;
use crate::models::CalculationResult;
use crate::notification::draft_or_fallback;

use super::request::EntitlementRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, NotificationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlements", post(entitlements_handler))
        .route("/entitlements/notification", post(notification_handler))
        .route("/policy", get(policy_handler))
        .with_state(state)
}

/// Handler for POST /entitlements.
///
/// Accepts an onboarding date and horizon and returns the projected grants.
async fn entitlements_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match run_calculation(&state, request, correlation_id) {
        Ok(result) => json_response(CalculationResponse::new(correlation_id, result)),
        Err(err) => engine_error_response(err.into(), correlation_id),
    }
}

/// Handler for POST /entitlements/notification.
///
/// Runs the same calculation, then drafts an employee notice. A drafting
/// failure still returns 200 with the fallback text.
async fn notification_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing notification request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = match run_calculation(&state, request, correlation_id) {
        Ok(result) => result,
        Err(err) => return engine_error_response(err.into(), correlation_id),
    };

    let notification = draft_or_fallback(state.drafter(), &result);
    info!(
        correlation_id = %correlation_id,
        drafted = notification.drafted,
        "Notification prepared"
    );

    json_response(NotificationResponse {
        calculation: CalculationResponse::new(correlation_id, result),
        notification,
    })
}

/// Handler for GET /policy.
async fn policy_handler(State(state): State<AppState>) -> Response {
    json_response(state.policy().clone())
}

/// Validates the request and runs the engine.
fn run_calculation(
    state: &AppState,
    request: EntitlementRequest,
    correlation_id: Uuid,
) -> EngineResult<CalculationResult> {
    let policy = state.policy();
    let leave_request = request.into_leave_request(policy)?;

    let start_time = Instant::now();
    let result = calculate_entitlements(&leave_request, policy)?;
    info!(
        correlation_id = %correlation_id,
        onboard_date = %result.onboard_date,
        grants = result.calendar_year_entitlements.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    Ok(result)
}

fn json_response<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(api_error: ApiErrorResponse, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %api_error.error.code,
        error = %api_error.error.message,
        "Calculation failed"
    );
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeavePolicy;
    use crate::error::EngineError;
    use crate::notification::{FALLBACK_MESSAGE, NotificationContext, NotificationDrafter};
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FailingDrafter;

    impl NotificationDrafter for FailingDrafter {
        fn draft(&self, _context: &NotificationContext) -> EngineResult<String> {
            Err(EngineError::NotificationFailed {
                message: "quota exceeded".to_string(),
            })
        }
    }

    fn create_test_state() -> AppState {
        AppState::new(LeavePolicy::statutory())
    }

    async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_valid_request_returns_200() {
        let router = create_router(create_test_state());
        let (status, json) = post_json(
            router,
            "/entitlements",
            r#"{"employee_name": "Employee A", "onboard_date": "2024-04-01"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["engine_version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["result"]["employee_name"], "Employee A");
        assert_eq!(json["result"]["six_month_date"], "2024-10-01");
        assert_eq!(
            json["result"]["calendar_year_entitlements"]
                .as_array()
                .unwrap()
                .len(),
            6
        );
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let (status, json) = post_json(router, "/entitlements", "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_onboard_date_returns_validation_error() {
        let router = create_router(create_test_state());
        let (status, json) =
            post_json(router, "/entitlements", r#"{"employee_name": "A"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("onboard_date"));
    }

    #[tokio::test]
    async fn test_failing_drafter_returns_fallback() {
        let state =
            AppState::with_drafter(LeavePolicy::statutory(), Arc::new(FailingDrafter));
        let router = create_router(state);
        let (status, json) = post_json(
            router,
            "/entitlements/notification",
            r#"{"employee_name": "A", "onboard_date": "2024-04-01", "years_to_project": 2}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["notification"]["drafted"], false);
        assert_eq!(json["notification"]["message"], FALLBACK_MESSAGE);
        assert_eq!(
            json["result"]["calendar_year_entitlements"][1]["days"],
            "5.26"
        );
    }
}
