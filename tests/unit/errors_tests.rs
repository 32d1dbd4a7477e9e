/*!
 * Tests for error types
 */

use celcheck::errors::{AppError, ConfigError};

/// Test error messages
#[test]
fn test_errors_display_shouldIncludeContext() {
    let parse = ConfigError::Parse {
        path: "conf.json".to_string(),
        message: "expected value".to_string(),
    };
    assert_eq!(
        parse.to_string(),
        "Failed to parse config file conf.json: expected value"
    );

    let zero = AppError::from(ConfigError::ZeroLimit("top_issues"));
    assert_eq!(
        zero.to_string(),
        "Config error: Configuration value 'top_issues' must be greater than zero"
    );
}

/// Test conversions from library errors
#[test]
fn test_errors_from_shouldPickMatchingVariant() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    assert!(matches!(AppError::from(io), AppError::File(_)));

    let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(AppError::from(json), AppError::Serialization(_)));

    let other = anyhow::anyhow!("boom");
    let error = AppError::from(other);
    assert!(matches!(error, AppError::Unknown(_)));
    assert_eq!(error.to_string(), "Unknown error: boom");
}
