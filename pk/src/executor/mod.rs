//! Strategy executors
//!
//! - [`embedded`] - in-process finder client (fzf driven through a client object)
//! - [`shell`] - any selector binary reading entries on stdin

pub mod embedded;
pub mod shell;

pub use embedded::{FinderClient, FzfClient, build_options, run_embedded};
pub use shell::{ShellInvocation, join_entries, run_shell};

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};
use std::thread;

use tracing::debug;

/// Spawn `command`, feed `input` on stdin and collect everything it prints
///
/// Stdin is written from a separate thread so a selector that prints while it
/// is still reading cannot block on a full pipe. A selector that exits without
/// draining stdin is fine.
pub(crate) fn run_with_input(command: &str, args: &[String], input: String) -> io::Result<Output> {
    debug!(%command, ?args, input_len = input.len(), "run_with_input: spawning");
    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    let stdin = child.stdin.take();
    let writer = thread::spawn(move || -> io::Result<()> {
        if let Some(mut stdin) = stdin {
            match stdin.write_all(input.as_bytes()) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    debug!("run_with_input: selector closed stdin early");
                }
                other => other?,
            }
        }
        Ok(())
    });

    let output = child.wait_with_output()?;
    match writer.join() {
        Ok(result) => result?,
        Err(_) => return Err(io::Error::other("stdin writer thread panicked")),
    }

    debug!(status = ?output.status, "run_with_input: selector exited");
    Ok(output)
}
