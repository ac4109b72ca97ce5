//! Operator console for the HRMS Lite backend.
//!
//! The console keeps one controller per page (employees, attendance,
//! dashboard) and serves their state as JSON. All data lives in the
//! backend; the controllers only hold what was last fetched.

pub mod api;
pub mod client;
pub mod config;
pub mod docs;
pub mod model;
pub mod routes;
pub mod view;

pub use api::Console;
pub use client::{ApiClient, ApiError, ApiResult, HrmsApi};
pub use config::Config;
