use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SunsetError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SunsetError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        SunsetError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(SunsetError::render("x").to_string().contains("render error:"));
    assert!(
        SunsetError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SunsetError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: SunsetError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, SunsetError::Serde(_)));
}
