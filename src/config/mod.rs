//! Configuration loading for the payroll calculator.
//!
//! This module loads calculator metadata and form defaults (workload
//! options, default premiums, snapshot storage key) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use folha_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/folha").unwrap();
//! println!("Loaded: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalculatorConfig, CalculatorMetadata, PayrollDefaults, WorkloadOption};
