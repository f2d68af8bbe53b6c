use super::*;

#[test]
fn invalid_hosted_config_degrades_to_local() {
    let dir = std::env::temp_dir().join("ballondor-backend-select-test.json");
    let (mode, _) = select(Err(BackendError::PlaceholderKey), &dir);
    assert_eq!(mode, BackendMode::Local);
}

#[test]
fn valid_hosted_config_selects_hosted() {
    let config = BackendConfig::validate(Some("https://abc.supabase.co"), Some("anon")).unwrap();
    let hosted = HostedTopStore::new(config);
    let (mode, _) = select(hosted, Path::new("unused.json"));
    assert_eq!(mode, BackendMode::Hosted);
}

#[test]
fn mode_serializes_lowercase() {
    assert_eq!(serde_json::to_value(BackendMode::Hosted).unwrap(), "hosted");
    assert_eq!(serde_json::to_value(BackendMode::Local).unwrap(), "local");
}
