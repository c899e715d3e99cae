//! Payroll engine for Brazilian monthly payslips
//!
//! This crate computes the monthly salary (overtime, night premium, training
//! bonus, weekly rest, INSS and IRRF), vacation pay and the thirteenth
//! salary, with a rule-by-rule audit trail, a printable report, CSV export
//! and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod report;
pub mod snapshot;
