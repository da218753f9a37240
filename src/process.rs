use crate::error::ExecError;
use std::collections::HashMap;
use std::io::BufRead;
use std::io::BufReader;
use std::io::pipe;
use std::path::Path;
use std::process::Command;
use std::process::Stdio;

/// Stream writer interface.
///
/// Accepts one line of text and returns the number of characters accepted.
/// The return value is advisory; [`exec_childprocess`] ignores it.
pub trait StreamWriter {
  fn write(&mut self, line: &str) -> usize;
}

/// In-memory sink, collecting one entry per line.
impl StreamWriter for Vec<String> {
  fn write(&mut self, line: &str) -> usize {
    self.push(line.to_string());
    line.chars().count()
  }
}

/// A command to execute: either a ready argument list, or a single
/// shell-style string that still needs word splitting.
#[derive(Debug, Clone)]
pub enum Cmdline {
  Args(Vec<String>),
  Line(String),
}

impl From<Vec<String>> for Cmdline {
  fn from(args: Vec<String>) -> Self {
    Cmdline::Args(args)
  }
}

impl From<&str> for Cmdline {
  fn from(line: &str) -> Self {
    Cmdline::Line(line.to_string())
  }
}

impl From<String> for Cmdline {
  fn from(line: String) -> Self {
    Cmdline::Line(line)
  }
}

impl Cmdline {
  fn into_argv(self) -> Result<Vec<String>, ExecError> {
    match self {
      Cmdline::Args(args) => Ok(args),
      Cmdline::Line(line) => split_words(&line),
    }
  }
}

/// Splits a command line into words using POSIX shell-word rules.
///
/// Single quotes protect everything, double quotes allow `\"`, `\\`, `\$`
/// and `` \` `` escapes, a bare backslash escapes the next character. The
/// splitter never invokes a shell; it only tokenizes.
pub fn split_words(line: &str) -> Result<Vec<String>, ExecError> {
  let mut words = Vec::new();
  let mut current = String::new();
  let mut in_word = false;
  let mut chars = line.chars();

  while let Some(ch) = chars.next() {
    match ch {
      c if c.is_whitespace() => {
        if in_word {
          words.push(std::mem::take(&mut current));
          in_word = false;
        }
      }
      '\'' => {
        in_word = true;
        loop {
          match chars.next() {
            Some('\'') => break,
            Some(c) => current.push(c),
            None => return Err(ExecError::UnclosedQuote(line.to_string())),
          }
        }
      }
      '"' => {
        in_word = true;
        loop {
          match chars.next() {
            Some('"') => break,
            Some('\\') => match chars.next() {
              Some(c @ ('"' | '\\' | '$' | '`')) => current.push(c),
              Some(c) => {
                current.push('\\');
                current.push(c);
              }
              None => return Err(ExecError::UnclosedQuote(line.to_string())),
            },
            Some(c) => current.push(c),
            None => return Err(ExecError::UnclosedQuote(line.to_string())),
          }
        }
      }
      '\\' => match chars.next() {
        // backslash-newline is a line continuation
        Some('\n') => {}
        Some(c) => {
          in_word = true;
          current.push(c);
        }
        None => {
          in_word = true;
          current.push('\\');
        }
      },
      c => {
        in_word = true;
        current.push(c);
      }
    }
  }

  if in_word {
    words.push(current);
  }
  Ok(words)
}

/// Renders an argument list as a single shell-safe string, for logging.
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
  words
    .iter()
    .map(|word| quote_word(word.as_ref()))
    .collect::<Vec<_>>()
    .join(" ")
}

fn quote_word(word: &str) -> String {
  fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
      || matches!(c, '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-' | '_')
  }

  if !word.is_empty() && word.chars().all(is_safe) {
    return word.to_string();
  }
  // Single-quoted, closing and reopening around embedded single quotes.
  format!("'{}'", word.replace('\'', "'\\''"))
}

/// Runs a child process and streams its merged stdout/stderr to `writer`,
/// one line at a time, returning the exit code once the stream is drained.
///
/// Blocks the calling thread for the lifetime of the child. Callers that
/// must stay responsive (an editor panel, say) run this on their own thread
/// and marshal writer calls back themselves.
///
/// `cwd` is applied only when it names an existing directory; otherwise the
/// child inherits the current one. `env` entries are overlaid on top of the
/// inherited environment, winning on key collisions.
///
/// A child that terminated without an exit code (killed by a signal) yields
/// `-1`. Failure to start the process at all surfaces as
/// [`ExecError::Launch`], never as an exit code.
pub fn exec_childprocess<C, W>(
  command: C,
  writer: &mut W,
  cwd: Option<&Path>,
  env: Option<&HashMap<String, String>>,
) -> Result<i32, ExecError>
where
  C: Into<Cmdline>,
  W: StreamWriter + ?Sized,
{
  let argv = command.into().into_argv()?;
  let Some((program, args)) = argv.split_first() else {
    return Err(ExecError::EmptyCommand);
  };

  tracing::info!(command = %join_words(&argv), "Spawning child process");

  // One pipe, write end shared by stdout and stderr, so the two streams
  // interleave at the fd level exactly as the child produced them.
  let (pipe_reader, pipe_writer) = pipe().map_err(ExecError::Pipe)?;
  let stderr_writer = pipe_writer.try_clone().map_err(ExecError::Pipe)?;

  let mut cmd = Command::new(program);
  cmd
    .args(args)
    .stdin(Stdio::null())
    .stdout(pipe_writer)
    .stderr(stderr_writer);

  if let Some(dir) = cwd {
    if dir.is_dir() {
      cmd.current_dir(dir);
    }
  }

  if let Some(env) = env {
    cmd.envs(env);
  }

  #[cfg(windows)]
  {
    use std::os::windows::process::CommandExt;
    // Suppress the console window a GUI host would otherwise flash up.
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;
    cmd.creation_flags(CREATE_NO_WINDOW);
  }

  let mut child = cmd.spawn().map_err(|source| ExecError::Launch {
    command: program.clone(),
    source,
  })?;

  // Drop our copies of the write end, or the read loop never sees EOF.
  drop(cmd);

  let mut reader = BufReader::new(pipe_reader);
  let mut buf = Vec::new();
  loop {
    buf.clear();
    let n = reader
      .read_until(b'\n', &mut buf)
      .map_err(ExecError::ReadOutput)?;
    if n == 0 {
      break;
    }

    let text = String::from_utf8_lossy(&buf);
    let line = text.strip_suffix('\n').unwrap_or(&text);
    let line = line.strip_suffix('\r').unwrap_or(line);
    writer.write(&format!("{line}\n"));
  }

  // End-of-stream means the child closed its output; the wait only collects
  // the status.
  let status = child.wait().map_err(ExecError::Wait)?;
  Ok(status.code().unwrap_or(-1))
}
