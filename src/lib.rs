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

//! # Conantools
//!
//! `conantools` builds `conan install` command lines and runs them as child
//! processes, streaming their merged output line-by-line into any sink, be
//! it a console, a log file, or an editor output panel. It implements no
//! dependency resolution of its own; conan does all the real work.
//!
//! This crate contains the main library logic for the `conantools` CLI, but
//! its core modules (`command`, `process`) could be used independently by an
//! editor integration.
//!
//! ## Core Modules
//!
//! * [`command`]: The fluent [`command::InstallCommand`] builder that
//!   accumulates the argument list for an install run.
//! * [`process`]: The [`process::exec_childprocess`] runner which spawns the
//!   external tool and forwards merged stdout/stderr to a
//!   [`process::StreamWriter`], plus shell-word splitting and joining.
//! * [`workspace`]: Locates the workspace root by scanning candidate folders
//!   for a conanfile.
//! * [`config`]: Loads the string-valued [`config::Settings`] with layered
//!   defaults.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod process;
pub mod workspace;
