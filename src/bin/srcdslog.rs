// src/bin/srcdslog.rs

//! Read srcds log lines from a file (or stdin), parse them into events,
//! and print one JSON document per event to stdout. Per-line parse errors
//! go to stderr and never stop the stream.
//!
//! ```text
//! srcdslog server.log
//! cat server.log | srcdslog
//! srcdslog server.log 2>/dev/null > events.ndjson
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use ::anyhow::{Context, Result};
use ::clap::Parser;

use ::srcdslog::common::FPath;
use ::srcdslog::data::event::to_json;
use ::srcdslog::readers::accumulator::LogProcessor;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Parse srcds (CS2) server logs into structured JSON events"
)]
struct CliArgs {
    /// Path to a log file; read stdin when absent
    path: Option<FPath>,
}

fn run(reader: Box<dyn BufRead>) -> Result<()> {
    let mut processor = LogProcessor::new();
    let mut errors: usize = 0;
    for line in reader.lines() {
        let line: String = line.context("failed reading input")?;
        match processor.process_line(&line) {
            Ok(Some(event)) => println!("{}", to_json(&event)),
            Ok(None) => {}
            Err(err) => {
                errors += 1;
                eprintln!("ERROR: {}", err);
            }
        }
    }
    if processor.is_accumulating() {
        errors += 1;
        eprintln!("ERROR: incomplete statistics block at end of input");
    }
    if errors != 0 {
        eprintln!("{} line(s) could not be parsed", errors);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let reader: Box<dyn BufRead> = match args.path {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("failed to open {:?}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    run(reader)
}
