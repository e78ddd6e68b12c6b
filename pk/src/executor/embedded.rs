//! Embedded strategy - drive a fuzzy finder through a long-lived client
//!
//! The client is created once by [`crate::Picker`] and reused for every
//! prompt. [`FzfClient`] locates `fzf` a single time and then runs it with a
//! shell-quoted option string.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NO_ERROR_MESSAGE, PickerError};

use super::run_with_input;

/// Something that can show a list and hand back what the user picked
pub trait FinderClient: Send + Sync {
    /// Show `entries` with the given (shell-quoted) finder options
    ///
    /// An empty result means the user aborted.
    fn prompt(&self, entries: &[String], options: &str) -> Result<Vec<String>, PickerError>;
}

/// fzf exit code when nothing matched the query
const FZF_NO_MATCH: i32 = 1;

/// fzf exit code when the user pressed ESC or CTRL-C
const FZF_INTERRUPTED: i32 = 130;

/// Client for a locally installed `fzf`
#[derive(Debug, Clone)]
pub struct FzfClient {
    executable: PathBuf,
}

impl FzfClient {
    pub const EXECUTABLE: &'static str = "fzf";

    /// Locate `fzf` on `PATH`
    pub fn new() -> Result<Self, PickerError> {
        Self::locate(Self::EXECUTABLE)
    }

    /// Locate a fzf-compatible finder by name on `PATH`
    pub fn locate(name: &str) -> Result<Self, PickerError> {
        debug!(%name, "FzfClient::locate: called");
        let executable = which::which(name)
            .map_err(|e| PickerError::ClientUnavailable(format!("cannot find '{}' in your PATH: {}", name, e)))?;
        debug!(executable = %executable.display(), "FzfClient::locate: found");
        Ok(Self { executable })
    }

    /// Use an explicit finder binary
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl FinderClient for FzfClient {
    fn prompt(&self, entries: &[String], options: &str) -> Result<Vec<String>, PickerError> {
        debug!(entries = entries.len(), %options, "FzfClient::prompt: called");
        let executable = self.executable.to_string_lossy();
        let program = shlex::try_quote(&executable).map_err(|e| PickerError::Quote(e.to_string()))?;
        let script = format!("{} {}", program, options);

        let output = run_with_input("sh", &["-c".to_string(), script], entries.join("\n"))?;

        match output.status.code() {
            Some(0) => Ok(String::from_utf8_lossy(&output.stdout)
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()),
            Some(FZF_NO_MATCH) | Some(FZF_INTERRUPTED) => {
                debug!("FzfClient::prompt: aborted");
                Ok(Vec::new())
            }
            code => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr = match stderr.trim() {
                    "" => NO_ERROR_MESSAGE.to_string(),
                    s => s.to_string(),
                };
                Err(PickerError::ExitStatus {
                    code: code.unwrap_or(-1),
                    stderr,
                })
            }
        }
    }
}

/// Finder options: the preset args followed by the `"{title}> "` prompt, each token quoted
pub fn build_options(args: &[String], title: &str) -> Result<String, PickerError> {
    let prompt = format!("{}> ", title);
    shlex::try_join(args.iter().map(String::as_str).chain(std::iter::once(prompt.as_str())))
        .map_err(|e| PickerError::Quote(e.to_string()))
}

/// Ask the client and keep the first selected entry
pub fn run_embedded(
    client: &dyn FinderClient,
    entries: &[String],
    title: &str,
    args: &[String],
) -> Result<Option<String>, PickerError> {
    let options = build_options(args, title)?;
    let selected = client.prompt(entries, &options)?;
    debug!(selected = selected.len(), "run_embedded: client returned");
    Ok(selected.into_iter().next())
}
