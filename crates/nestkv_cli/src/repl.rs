//! The read loop.

use crate::error::{CliError, CliResult};
use nestkv_core::{Reply, Session};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, info};

/// What a finished run went through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read, including the end command.
    pub lines: usize,
    /// Lines that produced an error.
    pub errors: usize,
    /// Whether the run stopped at the end command rather than end of input.
    pub ended_by_command: bool,
}

/// Opens the script at `path`, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> CliResult<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Script {
                path: path.display().to_string(),
                source,
            })?;
            info!("Reading commands from {:?}", path);
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Feeds every line of `input` to `session`, writing replies and errors to
/// `output`.
///
/// Stops at the session's end command or at end of input. Command errors
/// are printed and do not stop the loop. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD, so a bad line is handled like any other line.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> CliResult<RunSummary> {
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        summary.lines += 1;

        match session.execute_line(line) {
            Ok(Reply::Silent) => {}
            Ok(Reply::Output(text)) => writeln!(output, "{text}")?,
            Ok(Reply::End) => {
                summary.ended_by_command = true;
                break;
            }
            Err(err) => {
                debug!(line = %line, error = ?err, "command failed");
                summary.errors += 1;
                writeln!(output, "{err}")?;
            }
        }
    }

    output.flush()?;
    Ok(summary)
}
