use super::*;

#[test]
fn defaults_match_the_classic_scene() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.wave_count, 8);
    assert_eq!(cfg.cloud_count, 6);
    assert_eq!(cfg.seagull_count, 3);
    assert_eq!(cfg.cloud_size_px, Span::new(50.0, 150.0));
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg = SceneConfig::from_json(r#"{ "cloud_count": 10, "seed": 42 }"#).unwrap();
    assert_eq!(cfg.cloud_count, 10);
    assert_eq!(cfg.wave_count, 8);
    assert_eq!(cfg.seed, Some(42));
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SceneConfig::from_json(r#"{ "clouds": 3 }"#).unwrap_err();
    assert!(matches!(err, SunsetError::Serde(_)));
}

#[test]
fn inverted_span_is_invalid() {
    let err = SceneConfig::from_json(r#"{ "cloud_size_px": { "min": 90, "max": 10 } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("cloud_size_px"));
}

#[test]
fn zero_durations_are_invalid() {
    let cfg = SceneConfig {
        sun_pulse_secs: 0.0,
        ..SceneConfig::default()
    };
    assert!(cfg.validate().is_err());

    let cfg = SceneConfig {
        cloud_drift_secs: Span::new(0.0, 10.0),
        ..SceneConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn missing_file_reports_path() {
    let err = SceneConfig::from_path(Path::new("definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, SunsetError::Other(_)));
    assert!(format!("{err:#}").contains("here.json"));
}
