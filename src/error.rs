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
use thiserror::Error;

/// Top-level error enum for the conantools library.
#[derive(Error, Debug)]
pub enum ConantoolsError {
  #[error("Process execution failed")]
  Exec(#[from] ExecError),

  #[error("Configuration error")]
  Config(#[from] ConfigError),

  #[error("Workspace discovery failed")]
  Workspace(#[from] WorkspaceError),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

/// Errors related to child-process execution (src/process.rs).
///
/// A launch failure is distinct from a nonzero exit code: in the former no
/// process ever existed, in the latter the exit code is returned as a value.
#[derive(Error, Debug)]
pub enum ExecError {
  #[error("Empty command line")]
  EmptyCommand,

  #[error("Unclosed quote in command line: {0}")]
  UnclosedQuote(String),

  #[error("Failed to launch '{command}'")]
  Launch {
    command: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to open output pipe")]
  Pipe(#[source] std::io::Error),

  #[error("Failed to read child output")]
  ReadOutput(#[source] std::io::Error),

  #[error("Failed to wait for child process")]
  Wait(#[source] std::io::Error),
}

/// Errors related to workspace discovery (src/workspace.rs).
#[derive(Error, Debug)]
pub enum WorkspaceError {
  #[error("Unable to find 'conanfile.py' or 'conanfile.txt' in any workspace folder")]
  ManifestNotFound,
}

/// Errors related to settings resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to load settings")]
  Load(#[from] figment::Error),
}
