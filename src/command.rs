// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::fmt::Display;
use std::path::PathBuf;

/// One element of the argument list, kept unrendered until [`InstallCommand::command`]
/// so path parts can be normalized in one place.
#[derive(Debug, Clone)]
enum Part {
  Path(PathBuf),
  Text(String),
}

impl Part {
  fn render(&self) -> String {
    match self {
      // Forward slashes regardless of the host separator convention.
      Part::Path(path) => path.to_string_lossy().replace('\\', "/"),
      Part::Text(text) => text.clone(),
    }
  }
}

/// Fluent builder for a `conan install` command line.
///
/// Accumulates arguments in call order and never validates flag values;
/// conan itself is the arbiter of what a valid combination is. Setters are
/// no-ops when given an empty value, so unset editor settings can be passed
/// straight through.
///
/// ```
/// use conantools::command::InstallCommand;
///
/// let argv = InstallCommand::new("conan", "/proj")
///   .build_option("missing")
///   .setting("build_type", "Release")
///   .command();
/// assert_eq!(argv[..3], ["conan", "install", "/proj"]);
/// ```
#[derive(Debug, Clone)]
pub struct InstallCommand {
  parts: Vec<Part>,
}

impl InstallCommand {
  /// Seeds the argument list with `<executable> install <conanfile_dir>`.
  pub fn new(executable: impl Into<PathBuf>, conanfile_dir: impl Into<PathBuf>) -> Self {
    Self {
      parts: vec![
        Part::Path(executable.into()),
        Part::Text("install".to_string()),
        Part::Path(conanfile_dir.into()),
      ],
    }
  }

  /// Specify which packages to build from source (`--build <value>`).
  ///
  /// Possible values: `*` to force building everything from source, `never`
  /// to disallow source builds entirely, `missing` to build only packages
  /// without a binary, `cascade` to build anything depending on a
  /// from-source package, or an fnmatch pattern selecting packages by
  /// reference (`~pattern` excludes, `missing:pattern` combines with the
  /// missing policy). Repeating `--build` is allowed by conan.
  pub fn build_option(mut self, build: impl Into<String>) -> Self {
    let build = build.into();
    if !build.is_empty() {
      self.parts.push(Part::Text("--build".to_string()));
      self.parts.push(Part::Text(build));
    }
    self
  }

  /// Apply the given profile to the host machine (`--profile <value>`).
  pub fn profile(mut self, profile: impl Into<String>) -> Self {
    let profile = profile.into();
    if !profile.is_empty() {
      self.parts.push(Part::Text("--profile".to_string()));
      self.parts.push(Part::Text(profile));
    }
    self
  }

  /// Build generator (`--generator <value>`).
  pub fn generator(mut self, generator: impl Into<String>) -> Self {
    let generator = generator.into();
    if !generator.is_empty() {
      self.parts.push(Part::Text("--generator".to_string()));
      self.parts.push(Part::Text(generator));
    }
    self
  }

  /// The root output folder for generated and build files
  /// (`--output-folder <path>`).
  pub fn output_folder(mut self, path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    if !path.as_os_str().is_empty() {
      self.parts.push(Part::Text("--output-folder".to_string()));
      self.parts.push(Part::Path(path));
    }
    self
  }

  /// A single setting override (`-s <key>=<value>`), e.g. `build_type=Release`.
  pub fn setting(mut self, key: impl Into<String>, value: impl Display) -> Self {
    self.parts.push(Part::Text("-s".to_string()));
    self.parts.push(Part::Text(format!("{}={}", key.into(), value)));
    self
  }

  /// Settings overriding the build-machine defaults, one `-s <key>=<value>`
  /// pair per entry, in iteration order. Callers needing a deterministic
  /// order should pass an ordered collection.
  pub fn settings<K, V>(mut self, settings: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<String>,
    V: Display,
  {
    for (key, value) in settings {
      self = self.setting(key, value);
    }
    self
  }

  /// A single package option (`-o <key>=<value>`), e.g. `pkg/*:with_qt=True`.
  pub fn option(mut self, key: impl Into<String>, value: impl Display) -> Self {
    self.parts.push(Part::Text("-o".to_string()));
    self.parts.push(Part::Text(format!("{}={}", key.into(), value)));
    self
  }

  /// Package options, one `-o <key>=<value>` pair per entry, in iteration
  /// order.
  pub fn options<K, V>(mut self, options: impl IntoIterator<Item = (K, V)>) -> Self
  where
    K: Into<String>,
    V: Display,
  {
    for (key, value) in options {
      self = self.option(key, value);
    }
    self
  }

  /// Materializes the accumulated arguments as a flat list of strings, with
  /// path parts rendered in forward-slash form.
  pub fn command(&self) -> Vec<String> {
    self.parts.iter().map(Part::render).collect()
  }
}
