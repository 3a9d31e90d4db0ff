use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GridError::invalid_dimension("x")
            .to_string()
            .contains("invalid dimension:")
    );
    assert!(
        GridError::out_of_bounds("x")
            .to_string()
            .contains("out of bounds:")
    );
    assert!(GridError::overlap("x").to_string().contains("overlap:"));
    assert!(
        GridError::config("x")
            .to_string()
            .contains("config error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GridError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
