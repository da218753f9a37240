use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Run conan installs and stream their output")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Install dependencies for the workspace containing PATH.
  Install(InstallArgs),
}

#[derive(Debug, Args)]
pub struct InstallArgs {
  /// A file or directory inside the workspace.
  #[arg(default_value = ".")]
  pub path: PathBuf,

  /// Settings file to read instead of searching for conantools.json.
  #[arg(long, env = "CONANTOOLS_SETTINGS_FILE")]
  pub settings_file: Option<PathBuf>,

  /// Override which packages to build from source (e.g. "missing").
  #[arg(long)]
  pub build: Option<String>,

  /// Override the conan generator.
  #[arg(long)]
  pub generator: Option<String>,

  /// Override the host profile.
  #[arg(long)]
  pub profile: Option<String>,

  /// Extra setting, forwarded as `-s KEY=VALUE`. Repeatable.
  #[arg(short = 's', long = "setting", value_name = "KEY=VALUE", value_parser = parse_key_value)]
  pub settings: Vec<(String, String)>,

  /// Extra package option, forwarded as `-o KEY=VALUE`. Repeatable.
  #[arg(short = 'o', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_value)]
  pub options: Vec<(String, String)>,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
  match s.split_once('=') {
    Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
    _ => Err(format!("expected KEY=VALUE, got '{s}'")),
  }
}
