use std::collections::HashMap;

use tend_lambda::config::{DEFAULT_MAX_CASELOAD, ServiceConfig};

fn config_from(pairs: &[(&str, &str)]) -> eyre::Result<ServiceConfig> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServiceConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_unset() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.time_zone_name, "UTC");
    assert_eq!(config.max_caseload, DEFAULT_MAX_CASELOAD);
    assert!(config.allowed_origin.is_none());
}

#[test]
fn max_caseload_is_parsed() {
    let config = config_from(&[("TEND_MAX_CASELOAD", "250")]).unwrap();
    assert_eq!(config.max_caseload, 250);
}

#[test]
fn bad_max_caseload_fails() {
    assert!(config_from(&[("TEND_MAX_CASELOAD", "lots")]).is_err());
    assert!(config_from(&[("TEND_MAX_CASELOAD", "0")]).is_err());
}

#[test]
fn unknown_time_zone_fails() {
    let err = config_from(&[("TEND_TIME_ZONE", "Mars/Olympus_Mons")]).unwrap_err();
    assert!(err.to_string().contains("TEND_TIME_ZONE"), "{err}");
}

#[test]
fn wildcard_origin_allows_any() {
    let config = config_from(&[("TEND_ALLOWED_ORIGIN", "*")]).unwrap();
    assert!(config.allowed_origin.is_none());

    let config = config_from(&[("TEND_ALLOWED_ORIGIN", "https://app.tend.example")]).unwrap();
    assert_eq!(
        config.allowed_origin.unwrap().to_str().unwrap(),
        "https://app.tend.example"
    );
}
