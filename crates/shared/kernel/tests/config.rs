use gnomix_kernel::config::{ConfigError, load_config};
use gnomix_kernel::domain::config::ApiConfig;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
#[serial]
fn loads_values_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8081
static_dir = "dist/public"

[logging]
level = "debug"
"#,
    )?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.server.port, 8081);
    assert_eq!(cfg.server.static_dir.as_deref(), Some(std::path::Path::new("dist/public")));
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.content.seed.is_none());
    Ok(())
}

#[test]
#[serial]
fn json_files_are_supported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.json");
    fs::write(&path, r#"{ "content": { "seed": "seed.json" }, "logging": { "json": true } }"#)?;

    let cfg: ApiConfig = load_config(Some(&path))?;
    assert_eq!(cfg.content.seed.as_deref(), Some(std::path::Path::new("seed.json")));
    assert!(cfg.logging.json);
    assert_eq!(cfg.server.port, 5000);
    Ok(())
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let result: Result<ApiConfig, ConfigError> = load_config(Some(dir.path().join("absent.toml")));
    assert!(matches!(result, Err(ConfigError::Config { context: Some(_), .. })));
}

#[test]
#[serial]
fn default_file_is_optional() {
    let cfg: ApiConfig = load_config(None::<&str>).expect("defaults without a file");
    assert_eq!(cfg.logging.max_files, 10);
}

const CONFIG_UNDER_TEST: &str = "CONFIG_UNDER_TEST_PATH";

/// Runs in a child process that carries the overrides, so the parent's environment stays
/// untouched.
#[test]
#[ignore = "spawned by environment_overrides_file_values"]
fn environment_overrides_child() {
    let Some(path) = std::env::var_os(CONFIG_UNDER_TEST) else {
        return;
    };

    let cfg: ApiConfig = load_config(Some(path)).expect("config with env overrides");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.static_dir.as_deref(), Some(std::path::Path::new("dist/public")));
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.max_files, 3);
}

#[test]
#[serial]
fn environment_overrides_file_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        r#"
[server]
port = 8081

[logging]
level = "warn"
max_files = 3
"#,
    )?;

    let output = std::process::Command::new(std::env::current_exe()?)
        .args(["--exact", "environment_overrides_child", "--ignored", "--test-threads=1"])
        .env(CONFIG_UNDER_TEST, &path)
        .env("GNOMIX__SERVER__PORT", "8080")
        .env("GNOMIX__SERVER__STATIC_DIR", "dist/public")
        .env("GNOMIX__LOGGING__LEVEL", "debug")
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "child failed:\n{stdout}");
    assert!(stdout.contains("1 passed"), "child did not run:\n{stdout}");
    Ok(())
}
