use super::*;

#[test]
fn test_validate_default_config() {
    let config = Config::default();
    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_validate_empty_core_key() {
    let mut config = Config::default();
    config.model.cores = vec!["main".to_string(), String::new()];

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "model.cores[1]"));
}

#[test]
fn test_validate_duplicate_core_key() {
    let mut config = Config::default();
    config.model.cores = vec!["ui".to_string(), "data".to_string(), "ui".to_string()];

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].path, "model.cores[2]");
    assert!(result.errors[0].message.contains("ui"));
}

#[test]
fn test_validate_no_cores_warning() {
    let mut config = Config::default();
    config.model.cores.clear();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
    assert!(result.warnings.iter().any(|w| w.path == "model.cores"));
}

#[test]
fn test_validate_unknown_log_level() {
    let mut config = Config::default();
    config.logging.level = "verbose".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(!result.is_valid());
    assert!(result.errors.iter().any(|e| e.path == "logging.level"));
}

#[test]
fn test_validate_log_level_case_insensitive() {
    let mut config = Config::default();
    config.logging.level = "DEBUG".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_validate_log_directive_accepted() {
    let mut config = Config::default();
    config.logging.level = "mvcore_core=debug,info".to_string();

    let result = ConfigValidator::validate(&config).unwrap();
    assert!(result.is_valid());
}

#[test]
fn test_validation_result_helpers() {
    let mut result = ValidationResult::default();
    assert!(result.is_valid());

    result.add_warning(ValidationWarning::new("a", "warn"));
    assert!(result.is_valid());

    result.add_error(ValidationError::new("b", "err"));
    assert!(!result.is_valid());
}
