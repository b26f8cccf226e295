//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> Result<ValidationResult, ConfigError> {
        let mut result = ValidationResult::default();

        Self::validate_model(config, &mut result);
        Self::validate_logging(config, &mut result);

        Ok(result)
    }

    fn validate_model(config: &Config, result: &mut ValidationResult) {
        if config.model.cores.is_empty() {
            result.add_warning(ValidationWarning::new(
                "model.cores",
                "No cores configured, models will only be created on demand",
            ));
        }

        let mut seen = HashSet::new();
        for (i, key) in config.model.cores.iter().enumerate() {
            if key.is_empty() {
                result.add_error(ValidationError::new(
                    format!("model.cores[{}]", i),
                    "Core key cannot be empty",
                ));
            } else if !seen.insert(key.as_str()) {
                result.add_error(ValidationError::new(
                    format!("model.cores[{}]", i),
                    format!("Core key '{}' is listed more than once", key),
                ));
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();

        // Directives such as "mvcore_core=debug,info" are left to the filter parser
        if level.contains('=') || level.contains(',') {
            return;
        }

        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            result.add_error(ValidationError::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
