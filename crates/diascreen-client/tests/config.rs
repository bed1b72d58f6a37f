use std::fs;

use serde_json::json;

use diascreen_client::config::{
    self, CURRENT_VERSION, ClientConfig, EndpointSource, load_config_from, resolve_endpoint_with,
    save_config_to,
};
use diascreen_remote::ApiEndpoint;

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let endpoint = ApiEndpoint::parse("http://10.0.0.5:5000").unwrap();
    let path = save_config_to(dir.path(), &ClientConfig::new(&endpoint)).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.api_url, "http://10.0.0.5:5000/");
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[cfg(unix)]
#[test]
fn saved_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let endpoint = ApiEndpoint::parse("localhost:5000").unwrap();
    let path = save_config_to(dir.path(), &ClientConfig::new(&endpoint)).unwrap();
    let mode = fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn save_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let endpoint = ApiEndpoint::parse("localhost:5000").unwrap();
    let mut cfg = ClientConfig::new(&endpoint);
    cfg.config_version = 0;
    let path = save_config_to(dir.path(), &cfg).unwrap();
    assert_eq!(load_config_from(&path).unwrap().config_version, CURRENT_VERSION);
}

#[test]
fn v0_server_field_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, json!({ "server": "192.168.1.20:5000" }).to_string()).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.api_url, "http://192.168.1.20:5000");
    assert_eq!(
        loaded.endpoint().unwrap().as_str(),
        "http://192.168.1.20:5000/"
    );
}

#[test]
fn v0_without_address_is_an_error() {
    let err = config::migrate(json!({}), 0).unwrap_err();
    assert!(err.to_string().contains("no server address"));
}

#[test]
fn newer_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        json!({
            "config_version": CURRENT_VERSION + 1,
            "api_url": "http://localhost:5000",
            "created_at": "2026-01-01T00:00:00Z"
        })
        .to_string(),
    )
    .unwrap();

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn environment_wins_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let file_endpoint = ApiEndpoint::parse("http://file.example:5000").unwrap();
    let path = save_config_to(dir.path(), &ClientConfig::new(&file_endpoint)).unwrap();

    let (endpoint, source) = resolve_endpoint_with(Some("https://env.example"), &path).unwrap();
    assert_eq!(source, EndpointSource::Environment);
    assert_eq!(endpoint.as_str(), "https://env.example/");
}

#[test]
fn blank_environment_falls_back_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let file_endpoint = ApiEndpoint::parse("http://file.example:5000").unwrap();
    let path = save_config_to(dir.path(), &ClientConfig::new(&file_endpoint)).unwrap();

    let (endpoint, source) = resolve_endpoint_with(Some("  "), &path).unwrap();
    assert_eq!(source, EndpointSource::ConfigFile);
    assert_eq!(endpoint, file_endpoint);
}

#[test]
fn nothing_configured_explains_how_to_fix() {
    let dir = tempfile::tempdir().unwrap();
    let err = resolve_endpoint_with(None, &dir.path().join("config.json")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("DIASCREEN_API_URL"));
    assert!(message.contains("diascreen configure"));
}

#[test]
fn invalid_environment_value_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = resolve_endpoint_with(Some("ftp://example.com"), &dir.path().join("config.json"));
    assert!(result.is_err());
}
