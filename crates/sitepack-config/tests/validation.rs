//! Filesystem validation against a project fixture.

use sitepack_config::{validate_fs, BuildMode, ConfigError, PackageInfo, SiteConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("static")).unwrap();
    fs::write(root.join("src/app.js"), "import './app.scss';\n").unwrap();
    fs::write(
        root.join("src/index.html"),
        "<html><body><div id=\"app\"></div></body></html>",
    )
    .unwrap();
    fs::write(root.join("vendor-manifest.json"), r#"{"name":"vendor","content":{}}"#).unwrap();
    fs::write(root.join("static/vendor.dll.js"), "var vendor;").unwrap();
}

fn package() -> PackageInfo {
    PackageInfo::new("shop", "1.0.0")
}

#[test]
fn complete_project_passes() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());

    for mode in [BuildMode::Development, BuildMode::Production] {
        validate_fs(&SiteConfig::default(), &package(), mode, dir.path()).unwrap();
    }
}

#[test]
fn missing_manifest_is_fatal() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());
    fs::remove_file(dir.path().join("vendor-manifest.json")).unwrap();

    let err = validate_fs(&SiteConfig::default(), &package(), BuildMode::Production, dir.path())
        .unwrap_err();
    assert!(matches!(err, ConfigError::ManifestNotFound { .. }));
    assert!(err.is_missing_input());
}

#[test]
fn missing_template_is_fatal() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());
    fs::remove_file(dir.path().join("src/index.html")).unwrap();

    let err = validate_fs(&SiteConfig::default(), &package(), BuildMode::Production, dir.path())
        .unwrap_err();
    assert!(matches!(err, ConfigError::TemplateNotFound { .. }));
}

#[test]
fn missing_entry_is_fatal() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());
    fs::remove_file(dir.path().join("src/app.js")).unwrap();

    let err = validate_fs(&SiteConfig::default(), &package(), BuildMode::Development, dir.path())
        .unwrap_err();
    assert!(matches!(err, ConfigError::EntryNotFound { .. }));
}

#[test]
fn vendor_script_only_required_in_development() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());
    fs::remove_file(dir.path().join("static/vendor.dll.js")).unwrap();

    validate_fs(&SiteConfig::default(), &package(), BuildMode::Production, dir.path()).unwrap();

    let err = validate_fs(&SiteConfig::default(), &package(), BuildMode::Development, dir.path())
        .unwrap_err();
    assert!(matches!(err, ConfigError::VendorScriptNotFound { .. }));
}
