//! hotel-avail: Hotel Room Availability Command Line Interface
//!
//! Loads hotel and booking JSON files, then answers
//! `Availability(hotelId, dateRange, roomType)` commands from stdin or a script.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use hotel_avail::{process_script_file, run_session, Catalog};
use log::{debug, info};
use std::io::{self, BufRead};
use std::path::PathBuf;

const USAGE: &str = "Usage: hotel-avail --hotels hotels.json --bookings bookings.json";

/// Hotel Room Availability CLI
///
/// Answers room availability queries against hotel and booking JSON files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    /// JSON file with the hotel catalog
    #[arg(long, value_name = "FILE")]
    hotels: PathBuf,

    /// JSON file with the booking list
    #[arg(long, value_name = "FILE")]
    bookings: PathBuf,

    /// Evaluate commands from this file instead of reading stdin
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Number of worker threads for script evaluation
    #[arg(short = 'j', long, default_value_t = 1, value_name = "N")]
    threads: usize,

    /// Enable verbose logging (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Exit on startup errors without waiting for a key press
    #[arg(long, default_value_t = false)]
    no_pause: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                e.exit();
            }
            eprintln!("{}", e);
            println!("{}", USAGE);
            if !no_pause_requested() {
                wait_for_keypress();
            }
            std::process::exit(e.exit_code());
        }
    };

    // Logs go to stderr; stdout carries only prompts and responses
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(&args) {
        println!("Error: {:#}", e);
        if !args.no_pause {
            wait_for_keypress();
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    info!("hotel-avail v{}", env!("CARGO_PKG_VERSION"));
    debug!("Hotels: {:?}", args.hotels);
    debug!("Bookings: {:?}", args.bookings);
    debug!("Threads: {}", args.threads);

    if !args.hotels.exists() || !args.bookings.exists() {
        anyhow::bail!(
            "One or both JSON files not found ({:?}, {:?})",
            args.hotels,
            args.bookings
        );
    }

    let catalog = Catalog::load(&args.hotels, &args.bookings).context("Failed to load catalog")?;

    match &args.script {
        Some(script) => {
            if !script.exists() {
                anyhow::bail!("Script file not found: {:?}", script);
            }
            process_script_file(&catalog, script, args.threads, io::stdout().lock())
                .with_context(|| format!("Failed to process script {:?}", script))?;
        }
        None => {
            run_session(&catalog, io::stdin().lock(), io::stdout().lock())
                .context("Interactive session failed")?;
        }
    }

    Ok(())
}

/// Recover `--no-pause` from a command line that failed full parsing
fn no_pause_requested() -> bool {
    Args::command()
        .ignore_errors(true)
        .try_get_matches()
        .ok()
        .and_then(|m| m.get_one::<bool>("no_pause").copied())
        .unwrap_or(false)
}

fn wait_for_keypress() {
    println!("Press any key to exit.");
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
