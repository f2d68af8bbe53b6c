use super::*;

#[test]
fn valid_config_is_accepted() {
    let cfg = BackendConfig::validate(Some("https://abc.supabase.co"), Some("eyJhbGciOi.key")).unwrap();
    assert_eq!(cfg.url.host_str(), Some("abc.supabase.co"));
    assert_eq!(cfg.anon_key, "eyJhbGciOi.key");
}

#[test]
fn missing_values_are_not_configured() {
    assert!(matches!(
        BackendConfig::validate(None, Some("k")),
        Err(BackendError::NotConfigured(URL_VAR))
    ));
    assert!(matches!(
        BackendConfig::validate(Some("https://abc.supabase.co"), Some("  ")),
        Err(BackendError::NotConfigured(ANON_KEY_VAR))
    ));
}

#[test]
fn bad_urls_are_rejected() {
    for url in ["not a url", "ftp://abc.supabase.co", "your-project-url"] {
        assert!(
            matches!(BackendConfig::validate(Some(url), Some("k")), Err(BackendError::InvalidUrl(_))),
            "{url} should be rejected"
        );
    }
}

#[test]
fn placeholder_keys_are_rejected() {
    let result = BackendConfig::validate(Some("https://abc.supabase.co"), Some("YOUR-ANON-KEY"));
    assert!(matches!(result, Err(BackendError::PlaceholderKey)));
}
