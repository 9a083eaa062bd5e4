use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with all required env vars populated with valid values.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("STACKSENT_STACKEXCHANGE_KEY", "se-test-key");
    m.insert("STACKSENT_ALCHEMY_KEY", "alchemy-test-key");
    m
}

#[test]
fn builds_config_with_defaults() {
    let env = full_env();
    let config = build_app_config(lookup_from_map(&env)).expect("config should build");

    assert_eq!(config.stackexchange_key, "se-test-key");
    assert_eq!(config.alchemy_key, "alchemy-test-key");
    assert_eq!(
        config.stackexchange_base_url,
        "https://api.stackexchange.com/2.2/"
    );
    assert_eq!(config.alchemy_base_url, "http://access.alchemyapi.com/");
    assert_eq!(config.site, "stackoverflow");
    assert_eq!(config.http_timeout_secs, 30);
    assert_eq!(config.enrich_concurrency, 10);
}

#[test]
fn missing_stackexchange_key_is_an_error() {
    let mut env = full_env();
    env.remove("STACKSENT_STACKEXCHANGE_KEY");

    let err = build_app_config(lookup_from_map(&env)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingEnvVar(ref var) if var == "STACKSENT_STACKEXCHANGE_KEY"
    ));
}

#[test]
fn missing_alchemy_key_is_an_error() {
    let mut env = full_env();
    env.remove("STACKSENT_ALCHEMY_KEY");

    let err = build_app_config(lookup_from_map(&env)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingEnvVar(ref var) if var == "STACKSENT_ALCHEMY_KEY"
    ));
}

#[test]
fn overrides_are_honoured() {
    let mut env = full_env();
    env.insert("STACKSENT_STACKEXCHANGE_BASE_URL", "http://127.0.0.1:9000/");
    env.insert("STACKSENT_ALCHEMY_BASE_URL", "http://127.0.0.1:9001/");
    env.insert("STACKSENT_SITE", "serverfault");
    env.insert("STACKSENT_HTTP_TIMEOUT_SECS", "5");
    env.insert("STACKSENT_ENRICH_CONCURRENCY", "3");

    let config = build_app_config(lookup_from_map(&env)).expect("config should build");
    assert_eq!(config.stackexchange_base_url, "http://127.0.0.1:9000/");
    assert_eq!(config.alchemy_base_url, "http://127.0.0.1:9001/");
    assert_eq!(config.site, "serverfault");
    assert_eq!(config.http_timeout_secs, 5);
    assert_eq!(config.enrich_concurrency, 3);
}

#[test]
fn invalid_timeout_is_an_error() {
    let mut env = full_env();
    env.insert("STACKSENT_HTTP_TIMEOUT_SECS", "soon");

    let err = build_app_config(lookup_from_map(&env)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidEnvVar { ref var, .. } if var == "STACKSENT_HTTP_TIMEOUT_SECS"
    ));
}

#[test]
fn invalid_concurrency_is_an_error() {
    let mut env = full_env();
    env.insert("STACKSENT_ENRICH_CONCURRENCY", "-2");

    let err = build_app_config(lookup_from_map(&env)).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidEnvVar { ref var, .. } if var == "STACKSENT_ENRICH_CONCURRENCY"
    ));
}

#[test]
fn debug_output_redacts_keys() {
    let env = full_env();
    let config = build_app_config(lookup_from_map(&env)).expect("config should build");

    let debug = format!("{config:?}");
    assert!(!debug.contains("se-test-key"));
    assert!(!debug.contains("alchemy-test-key"));
    assert!(debug.contains("[redacted]"));
}
