use crate::error::ConfigError;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Settings file searched for in the working directory and its parents when
/// no explicit path is given.
pub const SETTINGS_FILE: &str = "conantools.json";

/// String-valued configuration for an install run.
///
/// Resolved in layers, later ones winning: built-in defaults, then the JSON
/// settings file, then `CONANTOOLS_*` environment variables (e.g.
/// `CONANTOOLS_BUILD_TYPE=Debug`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  /// Path to the conan executable.
  pub conan: PathBuf,

  /// Conan generator, e.g. "CMakeDeps". Skipped when unset.
  pub generator: Option<String>,

  /// Which packages to build from source.
  pub build_option: String,

  /// Value for the `build_type` setting.
  pub build_type: String,

  /// Output folder name, joined onto the workspace root.
  pub build_prefix: String,

  /// Host profile. Skipped when unset.
  pub profile: Option<String>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      conan: PathBuf::from("conan"),
      generator: None,
      build_option: "missing".to_string(),
      build_type: "Release".to_string(),
      build_prefix: "build".to_string(),
      profile: None,
    }
  }
}

impl Settings {
  /// Loads settings, layering file and environment over the defaults.
  ///
  /// An explicit `path` must exist; the implicit [`SETTINGS_FILE`] lookup
  /// tolerates absence, like an editor whose settings were never written.
  pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
    let figment = Figment::from(Serialized::defaults(Settings::default()));

    let figment = match path {
      Some(path) => figment.merge(Json::file_exact(path)),
      None => figment.merge(Json::file(SETTINGS_FILE)),
    };

    let settings = figment.merge(Env::prefixed("CONANTOOLS_")).extract()?;
    Ok(settings)
  }
}
