//! Calculation logic for the leave entitlement engine.
//!
//! This module contains the calendar primitives, the tenure ladder lookup,
//! the six-month milestone grant, and the projector that combines them into
//! a sequence of January 1st grants settled on the previous year's service.

mod date_arithmetic;
mod milestone;
mod projector;
mod tier_lookup;

pub use date_arithmetic::{
    ONBOARD_DATE_FORMAT, add_months, day_count, days_in_year, end_of_year, parse_onboard_date,
    start_of_year, year_of,
};
pub use milestone::{MILESTONE_SOURCE, six_month_milestone};
pub use projector::{
    PROPORTIONAL_DECIMAL_PLACES, TENURE_DAYS_PER_YEAR, annual_grant, calculate_entitlements,
    project_entitlements,
};
pub use tier_lookup::{STATUTORY_TIERS, TierLadder};
