use gnomix_domain::constants::{API_PREFIX, DEFAULT_CONFIG_PATH, DOCS_PATH, ENV_PREFIX};

#[test]
fn docs_live_under_the_api_prefix() {
    assert_eq!(API_PREFIX, "/api");
    assert!(DOCS_PATH.starts_with(API_PREFIX));
}

#[test]
fn config_locations_are_stable() {
    assert_eq!(ENV_PREFIX, "GNOMIX");
    assert_eq!(DEFAULT_CONFIG_PATH, "config/server.toml");
}
