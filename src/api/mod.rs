//! HTTP API module for the leave entitlement engine.
//!
//! This module provides the REST API endpoints for projecting entitlements,
//! drafting employee notices, and inspecting the active policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EntitlementRequest;
pub use response::{
    ApiError, ApiErrorResponse, CalculationResponse, ENGINE_VERSION, NotificationResponse,
};
pub use state::AppState;
