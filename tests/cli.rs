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
use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
  use std::os::unix::fs::PermissionsExt;

  fs::write(path, body).unwrap();
  let mut perms = fs::metadata(path).unwrap().permissions();
  perms.set_mode(0o755);
  fs::set_permissions(path, perms).unwrap();
}

#[test]
fn install_without_a_conanfile_reports_not_found() {
  let temp = tempdir().unwrap();

  let mut cmd = Command::new(cargo::cargo_bin!("conantools"));
  cmd
    .arg("install")
    .arg(temp.path())
    .env_remove("CONANTOOLS_SETTINGS_FILE")
    .env("CLICOLOR", "0");

  cmd
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unable to find"));
}

#[cfg(unix)]
#[test]
fn install_streams_fake_conan_output_and_arguments() {
  // Setup: a workspace with a conanfile, a fake conan that echoes its argv,
  // and a settings file pointing at it.
  let temp = tempdir().unwrap();
  let workspace = temp.path().join("proj");
  fs::create_dir_all(&workspace).unwrap();
  fs::write(workspace.join("conanfile.txt"), "[requires]\n").unwrap();

  let fake_conan = temp.path().join("fake-conan.sh");
  write_script(
    &fake_conan,
    "#!/bin/sh\necho \"argv: $*\"\necho progress 1>&2\nexit 0\n",
  );

  let settings_file = temp.path().join("settings.json");
  let settings = serde_json::json!({ "conan": fake_conan });
  fs::write(&settings_file, serde_json::to_string(&settings).unwrap()).unwrap();

  let mut cmd = Command::new(cargo::cargo_bin!("conantools"));
  cmd
    .arg("install")
    .arg(&workspace)
    .arg("--settings-file")
    .arg(&settings_file)
    .arg("--generator")
    .arg("CMakeDeps")
    .arg("-s")
    .arg("arch=x86_64")
    .env("CONANTOOLS_BUILD_TYPE", "Debug")
    .env("CLICOLOR", "0");

  cmd
    .assert()
    .success()
    .stdout(predicate::str::contains("argv: install"))
    .stdout(predicate::str::contains("--build missing"))
    .stdout(predicate::str::contains("--generator CMakeDeps"))
    .stdout(predicate::str::contains("-s build_type=Debug"))
    .stdout(predicate::str::contains("-s arch=x86_64"))
    .stdout(predicate::str::contains("--output-folder"))
    .stdout(predicate::str::contains("progress"));
}

#[cfg(unix)]
#[test]
fn nonzero_conan_exit_code_is_propagated() {
  let temp = tempdir().unwrap();
  let workspace = temp.path().join("proj");
  fs::create_dir_all(&workspace).unwrap();
  fs::write(workspace.join("conanfile.py"), "").unwrap();

  let fake_conan = temp.path().join("fake-conan.sh");
  write_script(&fake_conan, "#!/bin/sh\necho resolving\nexit 3\n");

  let settings_file = temp.path().join("settings.json");
  let settings = serde_json::json!({ "conan": fake_conan });
  fs::write(&settings_file, serde_json::to_string(&settings).unwrap()).unwrap();

  let mut cmd = Command::new(cargo::cargo_bin!("conantools"));
  cmd
    .arg("install")
    .arg(&workspace)
    .arg("--settings-file")
    .arg(&settings_file)
    .env("CLICOLOR", "0");

  // the child's output stays visible even on failure
  cmd
    .assert()
    .failure()
    .code(3)
    .stdout(predicate::str::contains("resolving"));
}

#[test]
fn missing_conan_binary_is_a_launch_failure() {
  let temp = tempdir().unwrap();
  let workspace = temp.path().join("proj");
  fs::create_dir_all(&workspace).unwrap();
  fs::write(workspace.join("conanfile.txt"), "[requires]\n").unwrap();

  let settings_file = temp.path().join("settings.json");
  fs::write(
    &settings_file,
    r#"{ "conan": "/no/such/conan-binary" }"#,
  )
  .unwrap();

  let mut cmd = Command::new(cargo::cargo_bin!("conantools"));
  cmd
    .arg("install")
    .arg(&workspace)
    .arg("--settings-file")
    .arg(&settings_file)
    .env("CLICOLOR", "0");

  cmd
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to launch"));
}
