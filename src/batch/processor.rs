//! Batch processor for command scripts
//!
//! Evaluates every non-blank line of a script file against the catalog and
//! writes one response per line, in input order. Queries only read the
//! catalog, so lines may be evaluated on a worker pool.

use crate::catalog::Catalog;
use crate::command::{evaluate, read_line_lossy, Response, SessionStats};
use crate::error::{AvailError, AvailResult};
use log::{debug, info};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Process a command script, writing responses to `output`
///
/// # Arguments
///
/// * `catalog` - Loaded hotels and bookings
/// * `path` - Script file, one command per line
/// * `threads` - Worker threads; `0` or `1` evaluates on the calling thread
/// * `output` - Destination for the response lines
pub fn process_script_file<W: Write>(
    catalog: &Catalog,
    path: &Path,
    threads: usize,
    mut output: W,
) -> AvailResult<SessionStats> {
    info!("Reading command script: {:?}", path);
    let lines = read_script(path)?;
    info!("Found {} commands in script", lines.len());

    let responses = evaluate_lines(catalog, &lines, threads)?;

    let mut stats = SessionStats::default();
    for (line, response) in lines.iter().zip(&responses) {
        if let Response::Failed(e) = response {
            debug!("{:?} failed: {:?}", line, e);
        }
        stats.record(response);
        writeln!(output, "{}", response)?;
    }
    output.flush()?;

    info!(
        "Script done: {} answered, {} failed, {} unknown",
        stats.answered, stats.failed, stats.unknown
    );

    Ok(stats)
}

/// Read the non-blank lines of a script
fn read_script(path: &Path) -> AvailResult<Vec<String>> {
    let mut reader = BufReader::new(File::open(path)?);

    let mut lines = Vec::new();
    while let Some(line) = read_line_lossy(&mut reader)? {
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    Ok(lines)
}

fn evaluate_lines(
    catalog: &Catalog,
    lines: &[String],
    threads: usize,
) -> AvailResult<Vec<Response>> {
    if threads <= 1 {
        return Ok(lines.iter().map(|l| evaluate(catalog, l)).collect());
    }

    debug!("Evaluating on {} worker threads", threads);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| AvailError::ThreadPool(e.to_string()))?;

    Ok(pool.install(|| lines.par_iter().map(|l| evaluate(catalog, l)).collect()))
}
