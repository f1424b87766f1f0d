//! Calendar-Year Leave Entitlement Engine
//!
//! This crate computes statutory annual leave grants under calendar-year
//! settlement: a fixed grant at six months of tenure, and a grant every
//! January 1st sized by service in the previous calendar year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod notification;
