//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for computing the monthly
//! payslip, vacation and thirteenth salary, exporting the payslip as CSV,
//! and persisting the form snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
