//! Interactive read-eval-print loop

use super::parser::{evaluate, Response};
use crate::catalog::Catalog;
use crate::error::AvailResult;
use log::{debug, info};
use std::io::{BufRead, Write};

/// Prompt printed once before the first command is read
pub const PROMPT: &str =
    "Enter commands like: Availability(H1, 20240404, SGL) or blank line to exit.";

/// Counters for one interactive session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub answered: usize,
    pub failed: usize,
    pub unknown: usize,
}

impl SessionStats {
    pub(crate) fn record(&mut self, response: &Response) {
        match response {
            Response::Available(_) => self.answered += 1,
            Response::Failed(_) => self.failed += 1,
            Response::Unknown => self.unknown += 1,
        }
    }
}

/// Read one line, replacing invalid UTF-8 instead of failing
///
/// Returns `None` at end of input. The line terminator is stripped.
pub(crate) fn read_line_lossy<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Run commands from `input` until a blank line or end of input
///
/// Every command produces exactly one line on `output`. Query failures are
/// printed and the loop carries on.
pub fn run_session<R: BufRead, W: Write>(
    catalog: &Catalog,
    mut input: R,
    mut output: W,
) -> AvailResult<SessionStats> {
    let mut stats = SessionStats::default();

    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    while let Some(line) = read_line_lossy(&mut input)? {
        if line.trim().is_empty() {
            debug!("Blank line, ending session");
            break;
        }

        let response = evaluate(catalog, &line);
        if let Response::Failed(ref e) = response {
            debug!("{:?} failed: {:?}", line, e);
        }
        stats.record(&response);

        writeln!(output, "{}", response)?;
        output.flush()?;
    }

    info!(
        "Session ended: {} answered, {} failed, {} unknown",
        stats.answered, stats.failed, stats.unknown
    );

    Ok(stats)
}
