use typeaware_core::config::*;
use typeaware_core::ScanMode;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = TypeAwareConfig::from_toml("").unwrap();

    // Detection defaults
    assert_eq!(config.detection.min_text_length, 3);
    assert_eq!(config.detection.sentiment_score_threshold, -0.5);
    assert_eq!(config.detection.sentiment_magnitude_threshold, 0.6);
    assert_eq!(config.detection.caps_ratio_threshold, 0.7);
    assert_eq!(config.detection.caps_min_length, 10);
    assert_eq!(config.detection.repeat_run_length, 5);
    assert_eq!(config.detection.twitter_weight, 0.7);
    assert_eq!(config.detection.youtube_weight, 0.5);
    assert_eq!(config.detection.reddit_weight, 0.6);
    assert_eq!(config.detection.max_suggestions, 3);
    assert_eq!(config.detection.input_min_length, 10);
    assert_eq!(config.detection.scan_mode, ScanMode::Raw);

    // Retention defaults
    assert_eq!(config.retention.max_detections, 50);
    assert_eq!(config.retention.max_reports, 100);
    assert_eq!(config.retention.max_age_days, 7);
    assert_eq!(config.retention.detection_content_limit, 200);
    assert_eq!(config.retention.report_content_limit, 500);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[detection]
caps_ratio_threshold = 0.8
scan_mode = "both"

[retention]
max_reports = 10
"#;
    let config = TypeAwareConfig::from_toml(toml).unwrap();
    assert_eq!(config.detection.caps_ratio_threshold, 0.8);
    assert_eq!(config.detection.scan_mode, ScanMode::Both);
    // Non-overridden fields keep defaults
    assert_eq!(config.detection.caps_min_length, 10);
    assert_eq!(config.retention.max_reports, 10);
    assert_eq!(config.retention.max_detections, 50);
}

#[test]
fn config_serde_roundtrip() {
    let config = TypeAwareConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = TypeAwareConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.detection.high_threshold,
        config.detection.high_threshold
    );
    assert_eq!(
        roundtripped.retention.max_age_days,
        config.retention.max_age_days
    );
}

#[test]
fn config_rejects_malformed_toml() {
    let err = TypeAwareConfig::from_toml("[detection\ncaps = ").unwrap_err();
    assert!(err.to_string().contains("parse"));
}

#[test]
fn config_rejects_weight_outside_unit_interval() {
    let err = TypeAwareConfig::from_toml("[detection]\ntwitter_weight = 1.5").unwrap_err();
    assert!(err.to_string().contains("twitter_weight"));
}

#[test]
fn config_rejects_inverted_severity_thresholds() {
    let toml = r#"
[detection]
medium_threshold = 0.9
high_threshold = 0.8
"#;
    assert!(TypeAwareConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_zero_capacity_logs() {
    assert!(TypeAwareConfig::from_toml("[retention]\nmax_detections = 0").is_err());
}

#[test]
fn heuristic_gate_defaults_to_fallback_and_parses_always() {
    assert_eq!(
        DetectionConfig::default().generic_heuristics,
        HeuristicGate::Fallback
    );
    let config =
        TypeAwareConfig::from_toml("[detection]\ngeneric_heuristics = \"always\"").unwrap();
    assert_eq!(config.detection.generic_heuristics, HeuristicGate::Always);
}

#[test]
fn config_rejects_suggestion_limit_above_cap() {
    let err = TypeAwareConfig::from_toml("[detection]\nmax_suggestions = 10").unwrap_err();
    assert!(err.to_string().contains("max_suggestions"));
    assert!(TypeAwareConfig::from_toml("[detection]\nmax_suggestions = 2").is_ok());
}

#[test]
fn config_rejects_unbounded_retention_age() {
    let err = TypeAwareConfig::from_toml("[retention]\nmax_age_days = 200000000").unwrap_err();
    assert!(err.to_string().contains("max_age_days"));
}
