//! Shell strategy - run a selector binary and read the choice from stdout

use tracing::debug;

use crate::error::{NO_ERROR_MESSAGE, PickerError};
use crate::preset::PresetConfig;
use crate::template::render_args;

use super::run_with_input;

/// Parameters of one shell selector run, borrowed from a preset
#[derive(Debug, Clone, Copy)]
pub struct ShellInvocation<'a> {
    pub command: &'a str,
    pub args: &'a [String],
    pub success_exit_codes: &'a [i32],
    pub ignore_exit_codes: &'a [i32],
    pub entry_separator: &'a str,
}

impl<'a> ShellInvocation<'a> {
    /// Take the shell fields of a preset; a missing command becomes empty
    pub fn from_preset(preset: &'a PresetConfig) -> Self {
        Self {
            command: preset.command.as_deref().unwrap_or_default(),
            args: &preset.args,
            success_exit_codes: &preset.success_exit_codes,
            ignore_exit_codes: &preset.ignore_exit_codes,
            entry_separator: &preset.entry_separator,
        }
    }
}

/// Text written to the selector's stdin
pub fn join_entries(entries: &[String], separator: &str) -> String {
    entries.join(separator)
}

/// Run the selector and classify its exit code
///
/// Returns the trimmed stdout on a success code, `None` on an ignore code or
/// an empty selection, and an error for anything else.
pub fn run_shell(entries: &[String], title: &str, invocation: &ShellInvocation<'_>) -> Result<Option<String>, PickerError> {
    debug!(command = %invocation.command, entries = entries.len(), "run_shell: called");
    let command = invocation.command.trim();
    if command.is_empty() {
        return Err(PickerError::InvalidArgument(format!(
            "Given 'command' parameter is empty or whitespace only: '{}'",
            invocation.command
        )));
    }

    let args = render_args(invocation.args, title);
    let input = join_entries(entries, invocation.entry_separator);

    let output = match run_with_input(command, &args, input) {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(%command, "run_shell: executable not found");
            return Err(PickerError::ExecutableNotFound {
                command: command.to_string(),
                source: e,
            });
        }
        Err(e) => {
            debug!(%command, %e, "run_shell: launch failed");
            return Err(PickerError::Launch {
                command: command.to_string(),
                args: args.join(" "),
                message: e.to_string(),
            });
        }
    };

    // Killed by a signal: no code
    let code = output.status.code().unwrap_or(-1);

    if invocation.success_exit_codes.contains(&code) {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let selected = stdout.trim();
        debug!(code, selected_len = selected.len(), "run_shell: success exit code");
        return Ok((!selected.is_empty()).then(|| selected.to_string()));
    }

    if invocation.ignore_exit_codes.contains(&code) {
        debug!(code, "run_shell: ignored exit code, treating as cancel");
        return Ok(None);
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = match stderr.trim() {
        "" => NO_ERROR_MESSAGE.to_string(),
        s => s.to_string(),
    };
    debug!(code, "run_shell: unexpected exit code");
    Err(PickerError::ExitStatus { code, stderr })
}
