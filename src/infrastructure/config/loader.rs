use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::config::EngineConfig;
use crate::domain::models::ControlsError;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error("Invalid convergence defaults: {0}")]
    InvalidConvergence(#[from] ControlsError),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .heft/config.yaml (project config)
    /// 3. .heft/local.yaml (project local overrides, optional)
    /// 4. Environment variables (HEFT_* prefix, `__` separates nested keys)
    pub fn load() -> Result<EngineConfig> {
        let config: EngineConfig = Self::base()
            .merge(Yaml::file(".heft/config.yaml"))
            .merge(Yaml::file(".heft/local.yaml"))
            .merge(Env::prefixed("HEFT_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<EngineConfig> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file {} does not exist", path.display());
        }

        let config: EngineConfig = Self::base()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("HEFT_").split("__"))
            .extract()
            .context(format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn base() -> Figment {
        Figment::new().merge(Serialized::defaults(EngineConfig::default()))
    }

    /// Validate configuration after loading
    pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        config.convergence.validate()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MassUnit;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.mass_unit, MassUnit::Kilogram);
        assert!(!config.parallel_calculators);
        assert_eq!(config.convergence.max_iterations, 50);
        assert_eq!(config.logging.level, "info");
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
mass_unit: pound
parallel_calculators: true
convergence:
  tolerance: 1.0e-8
  relaxation_factor: 0.7
logging:
  level: debug
  format: json
";

        let config: EngineConfig = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.mass_unit, MassUnit::Pound);
        assert!(config.parallel_calculators);
        assert!((config.convergence.tolerance - 1.0e-8).abs() < f64::EPSILON);
        assert!((config.convergence.relaxation_factor - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.convergence.max_iterations, 50);
        assert_eq!(config.logging.format, "json");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = EngineConfig::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "invalid"),
            other => panic!("Expected InvalidLogLevel error, got {other}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = EngineConfig::default();
        config.logging.format = "xml".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogFormat(format) => assert_eq!(format, "xml"),
            other => panic!("Expected InvalidLogFormat error, got {other}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_rotation() {
        let mut config = EngineConfig::default();
        config.logging.rotation = "weekly".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogRotation(rotation) => assert_eq!(rotation, "weekly"),
            other => panic!("Expected InvalidLogRotation error, got {other}"),
        }
    }

    #[test]
    fn test_validate_invalid_convergence_defaults() {
        let mut config = EngineConfig::default();
        config.convergence.max_iterations = 0;

        assert!(matches!(
            ConfigLoader::validate(&config).unwrap_err(),
            ConfigError::InvalidConvergence(ControlsError::InvalidMaxIterations(0))
        ));
    }

    #[test]
    fn test_hierarchical_merging() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut base_file = NamedTempFile::new().unwrap();
        writeln!(
            base_file,
            "mass_unit: pound\nconvergence:\n  tolerance: 1.0e-5\n  max_iterations: 20"
        )
        .unwrap();
        base_file.flush().unwrap();

        let mut override_file = NamedTempFile::new().unwrap();
        writeln!(override_file, "convergence:\n  max_iterations: 80").unwrap();
        override_file.flush().unwrap();

        let config: EngineConfig = ConfigLoader::base()
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.convergence.max_iterations, 80, "Override should win");
        assert!(
            (config.convergence.tolerance - 1.0e-5).abs() < f64::EPSILON,
            "Base value should persist when not overridden"
        );
        assert_eq!(config.mass_unit, MassUnit::Pound);
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = ConfigLoader::load_from_file("/nonexistent/heft.yaml").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
