use typeaware_core::errors::*;

#[test]
fn invalid_pattern_carries_category_and_pattern() {
    let err = TypeAwareError::InvalidPattern {
        category: "spam".into(),
        pattern: "(unclosed".into(),
        reason: "unclosed group".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("spam"));
    assert!(msg.contains("(unclosed"));
}

#[test]
fn invalid_weight_carries_value() {
    let err = TypeAwareError::InvalidWeight {
        category: "hate".into(),
        weight: 1.7,
    };
    assert!(err.to_string().contains("1.7"));
}

#[test]
fn storage_error_converts_into_top_level() {
    let err: TypeAwareError = StorageError::Backend {
        message: "quota exceeded".into(),
    }
    .into();
    assert!(matches!(err, TypeAwareError::StorageError(_)));
    assert!(err.to_string().contains("quota exceeded"));
}

#[test]
fn config_error_converts_into_top_level() {
    let err: TypeAwareError = ConfigError::InvalidValue {
        field: "max_reports".into(),
        reason: "zero".into(),
    }
    .into();
    assert!(matches!(err, TypeAwareError::ConfigError(_)));
    assert!(err.to_string().contains("max_reports"));
}

#[test]
fn serde_json_error_converts_into_top_level() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: TypeAwareError = json_err.into();
    assert!(matches!(err, TypeAwareError::SerializationError(_)));
}
