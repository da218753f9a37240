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
use Commands::Install;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use conantools::cli::Cli;
use conantools::cli::Commands;
use conantools::cli::InstallArgs;
use conantools::command::InstallCommand;
use conantools::config::Settings;
use conantools::logging::setup_tracing;
use conantools::process::StreamWriter;
use conantools::process::exec_childprocess;
use conantools::workspace::find_workspace;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Stdout-backed sink; the CLI's stand-in for an editor output panel.
struct Console;

impl StreamWriter for Console {
  fn write(&mut self, line: &str) -> usize {
    print!("{line}");
    let _ = std::io::stdout().flush();
    line.chars().count()
  }
}

fn main() -> Result<()> {
  let _guard = setup_tracing()?;

  let Cli { command } = Cli::parse();

  match command {
    Install(args) => {
      let code = run_install(args)?;
      if code != 0 {
        tracing::error!(code, "conan install failed");
        std::process::exit(code);
      }
    }
  }

  Ok(())
}

fn run_install(args: InstallArgs) -> Result<i32> {
  let workspace = resolve_workspace(&args.path)?;
  let settings = Settings::load(args.settings_file.as_deref())?;
  tracing::info!(workspace = %workspace.display(), "Installing dependencies");

  let command = InstallCommand::new(&settings.conan, &workspace)
    .build_option(args.build.unwrap_or(settings.build_option))
    .generator(args.generator.or(settings.generator).unwrap_or_default())
    .setting("build_type", &settings.build_type)
    .settings(args.settings)
    .options(args.options)
    .profile(args.profile.or(settings.profile).unwrap_or_default())
    .output_folder(workspace.join(&settings.build_prefix));

  let mut console = Console;
  let code = exec_childprocess(command.command(), &mut console, Some(&workspace), None)?;
  Ok(code)
}

/// Resolves the workspace root from a file or directory inside it, using the
/// path's ancestor chain as the candidate folders.
fn resolve_workspace(path: &Path) -> Result<PathBuf> {
  let path = path
    .canonicalize()
    .with_context(|| format!("Cannot resolve path: {}", path.display()))?;

  let start = if path.is_dir() {
    path.as_path()
  } else {
    path.parent().unwrap_or(&path)
  };

  let folders: Vec<PathBuf> = start.ancestors().map(PathBuf::from).collect();
  Ok(find_workspace(&path, &folders)?)
}
