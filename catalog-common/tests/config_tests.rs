//! Configuration resolution against the real process environment
//!
//! Uses serial_test: tests here set and clear `PORT`, so they must not run in
//! parallel with each other.

use catalog_common::config::{ConfigOverrides, ServiceConfig, ServiceDefaults};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::TempDir;

const API_DEFAULTS: ServiceDefaults = ServiceDefaults {
    service_name: "api",
    port: 3000,
    route_prefix: "/api/courses",
};

fn overrides_with_config(dir: &TempDir, content: &str) -> ConfigOverrides {
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    ConfigOverrides {
        config_file: Some(path),
        ..Default::default()
    }
}

#[test]
#[serial]
fn test_port_env_var_used_when_no_cli_port() {
    let dir = TempDir::new().unwrap();
    env::set_var("PORT", "8123");

    let config =
        ServiceConfig::resolve(&API_DEFAULTS, overrides_with_config(&dir, "port = 9000\n")).unwrap();
    assert_eq!(config.port, 8123);

    env::remove_var("PORT");
}

#[test]
#[serial]
fn test_file_then_default_without_port_env() {
    env::remove_var("PORT");
    let dir = TempDir::new().unwrap();

    let config = ServiceConfig::resolve(
        &API_DEFAULTS,
        overrides_with_config(&dir, "[services.api]\nport = 9001\n"),
    )
    .unwrap();
    assert_eq!(config.port, 9001);
    assert_eq!(config.route_prefix, "/api/courses");

    let config = ServiceConfig::resolve(&API_DEFAULTS, overrides_with_config(&dir, "")).unwrap();
    assert_eq!(config.port, 3000);
}

#[test]
#[serial]
fn test_database_path_from_file() {
    env::remove_var("PORT");
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("data").join("catalog.db");
    let content = format!("database = {:?}\n", db.display().to_string());

    let config = ServiceConfig::resolve(&API_DEFAULTS, overrides_with_config(&dir, &content)).unwrap();
    assert_eq!(config.database_path, db);
}
