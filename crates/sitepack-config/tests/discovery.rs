//! Tests for config discovery, layering and per-mode profiles.

use sitepack_config::{BuildMode, ConfigDiscovery, ConfigSource, StaticMapping};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
#[serial]
fn toml_overrides_defaults() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("sitepack.toml"),
        r#"
routes = ["/", "/pricing"]
template = "web/index.html"

[output]
dir = "dist"

[[static_mappings]]
from = "assets"
to = "dist/assets"
"#,
    )
    .expect("write config");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");

    assert_eq!(config.routes, vec!["/", "/pricing"]);
    assert_eq!(config.template, PathBuf::from("web/index.html"));
    assert_eq!(config.output.dir, PathBuf::from("dist"));
    assert_eq!(config.output.public_path, "/");
    assert_eq!(
        config.static_mappings,
        vec![StaticMapping::new("assets", "dist/assets")]
    );
}

#[test]
#[serial]
fn package_json_field_is_loaded() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{
            "name": "shop",
            "version": "1.0.0",
            "sitepack": {
                "prerender": { "app_root_id": "root" }
            }
        }"#,
    )
    .expect("write package.json");

    let discovery = ConfigDiscovery::new(dir.path());
    assert!(matches!(discovery.find(), Some(ConfigSource::PackageJson(_))));

    let config = discovery.load().expect("load");
    assert_eq!(config.prerender.app_root_id, "root");
    assert_eq!(config.prerender.render_event, "render-event");
}

#[test]
#[serial]
fn env_overrides_file() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("sitepack.toml"),
        r#"
[upload]
host = "ftp.internal"
"#,
    )
    .expect("write config");

    unsafe {
        std::env::set_var("SITEPACK_UPLOAD__HOST", "ftp.example.com");
    }
    let result = ConfigDiscovery::new(dir.path()).load();
    unsafe {
        std::env::remove_var("SITEPACK_UPLOAD__HOST");
    }

    let config = result.expect("load");
    assert_eq!(config.upload.host.as_deref(), Some("ftp.example.com"));
}

#[test]
#[serial]
fn profile_for_mode_is_applied() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("sitepack.toml"),
        r#"
[dev_server]
port = 3000

[profiles.development.dev_server]
port = 9000
compress = false

[profiles.upload.upload]
host = "ftp.example.com"
"#,
    )
    .expect("write config");

    let discovery = ConfigDiscovery::new(dir.path());

    let dev = discovery
        .load_for_mode(BuildMode::Development)
        .expect("development");
    assert_eq!(dev.dev_server.port, 9000);
    assert!(!dev.dev_server.compress);
    assert!(dev.upload.host.is_none());

    let upload = discovery.load_for_mode(BuildMode::Upload).expect("upload");
    assert_eq!(upload.dev_server.port, 3000);
    assert_eq!(upload.upload.host.as_deref(), Some("ftp.example.com"));
}

#[test]
#[serial]
fn invalid_toml_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("sitepack.toml"), "routes = [").expect("write config");

    let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
    assert!(err.to_string().contains("configuration"));
}
