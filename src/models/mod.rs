//! Core data models for the leave entitlement engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod entitlement;
mod leave_request;

pub use calculation_result::CalculationResult;
pub use entitlement::{DISPLAY_DATE_FORMAT, EntitlementRecord, GrantKind};
pub use leave_request::{DEFAULT_YEARS_TO_PROJECT, LeaveRequest};
