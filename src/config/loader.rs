//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the calculator
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::DsrBasePolicy;

use super::types::{CalculatorConfig, CalculatorMetadata, PayrollDefaults, WorkloadOption};

/// Loads and provides access to the calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/folha/
/// ├── calculator.yaml  # Name, jurisdiction, fiscal year, version
/// └── defaults.yaml    # Workload options and form defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use folha_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/folha")?;
/// println!("Loaded: {}", loader.metadata().name);
/// # Ok::<(), folha_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns [`EngineError::ConfigNotFound`] when a file is missing and
    /// [`EngineError::ConfigParseError`] when a file is not valid YAML for
    /// its type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<CalculatorMetadata>(&path.join("calculator.yaml"))?;
        let defaults = Self::load_yaml::<PayrollDefaults>(&path.join("defaults.yaml"))?;

        if defaults.workload_options.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: path.join("defaults.yaml").display().to_string(),
                message: "workload_options must not be empty".to_string(),
            });
        }

        Ok(Self {
            config: CalculatorConfig { metadata, defaults },
        })
    }

    /// Returns the built-in configuration, identical to the shipped YAML
    /// files, without touching the filesystem.
    pub fn builtin() -> Self {
        let workload = |hours: i64, label: &str| WorkloadOption {
            divisor: Decimal::from(hours),
            label: label.to_string(),
        };

        Self {
            config: CalculatorConfig {
                metadata: CalculatorMetadata {
                    name: "Calculadora de Folha de Pagamento".to_string(),
                    jurisdiction: "BR".to_string(),
                    fiscal_year: 2025,
                    version: "2025-05-01".to_string(),
                },
                defaults: PayrollDefaults {
                    workload_options: vec![
                        workload(220, "220 horas (44h semanais)"),
                        workload(200, "200 horas (40h semanais)"),
                        workload(180, "180 horas (36h semanais)"),
                        workload(240, "240 horas (48h semanais)"),
                    ],
                    workload_divisor: Decimal::from(220),
                    overtime_percentage: Decimal::from(75),
                    night_shift_percentage: Decimal::from(20),
                    vacation_days: Decimal::from(30),
                    months_worked: Decimal::from(12),
                    dsr_policy: DsrBasePolicy::IncludeBonus,
                    storage_key: "folha-calculadora-v1".to_string(),
                },
            },
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the calculator metadata.
    pub fn metadata(&self) -> &CalculatorMetadata {
        &self.config.metadata
    }

    /// Returns the form defaults.
    pub fn defaults(&self) -> &PayrollDefaults {
        &self.config.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/folha"
    }

    #[test]
    fn test_load_config_successfully() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
    }

    #[test]
    fn test_loaded_config_matches_builtin() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), ConfigLoader::builtin().config());
    }

    #[test]
    fn test_metadata_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.metadata().jurisdiction, "BR");
        assert_eq!(loader.metadata().fiscal_year, 2025);
    }

    #[test]
    fn test_defaults_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let defaults = loader.defaults();

        assert_eq!(defaults.workload_options.len(), 4);
        assert_eq!(defaults.workload_divisor, Decimal::from(220));
        assert_eq!(defaults.overtime_percentage, Decimal::from(75));
        assert_eq!(defaults.night_shift_percentage, Decimal::from(20));
        assert_eq!(defaults.workload_label(Decimal::from(200)), "200 horas (40h semanais)");
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("calculator.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("folha-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("calculator.yaml"), "name: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("calculator.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
