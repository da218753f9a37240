use conantools::config::Settings;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn defaults_apply_for_an_empty_settings_file() {
  let temp = tempdir().unwrap();
  let path = temp.path().join("settings.json");
  fs::write(&path, "{}").unwrap();

  let settings = Settings::load(Some(&path)).unwrap();

  assert_eq!(settings.conan, PathBuf::from("conan"));
  assert_eq!(settings.build_option, "missing");
  assert_eq!(settings.build_type, "Release");
  assert_eq!(settings.build_prefix, "build");
  assert!(settings.generator.is_none());
  assert!(settings.profile.is_none());
}

#[test]
fn file_values_override_defaults() {
  let temp = tempdir().unwrap();
  let path = temp.path().join("settings.json");
  fs::write(
    &path,
    r#"{
      "conan": "/opt/conan/bin/conan",
      "generator": "CMakeDeps",
      "build_type": "Debug"
    }"#,
  )
  .unwrap();

  let settings = Settings::load(Some(&path)).unwrap();

  assert_eq!(settings.conan, PathBuf::from("/opt/conan/bin/conan"));
  assert_eq!(settings.generator.as_deref(), Some("CMakeDeps"));
  assert_eq!(settings.build_type, "Debug");
  // untouched keys keep their defaults
  assert_eq!(settings.build_option, "missing");
  assert_eq!(settings.build_prefix, "build");
}

#[test]
fn missing_explicit_settings_file_is_an_error() {
  let temp = tempdir().unwrap();
  let path = temp.path().join("no-such-settings.json");

  assert!(Settings::load(Some(&path)).is_err());
}
