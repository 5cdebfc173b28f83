// ABOUTME: CLI binary for the text density scorer.
// ABOUTME: Loads the model, reads stdin, and prints one JSON object (result or error).

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use notes_density::{analyze_reader, logging, DensityError, ErrorReport, ModelLocator};
use serde::Serialize;

/// Score the share of nouns, proper nouns, numbers and verbs in text read from stdin.
#[derive(Parser, Debug)]
#[command(name = "density-score", version)]
#[command(about = "Read text from stdin and print its lexical density as JSON")]
#[command(after_help = "Set DENSITY_MODEL to use a model file outside the default locations.")]
struct Args {}

/// Write `value` as one JSON line.
fn emit_to<W: Write, T: Serialize>(mut out: W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    emit_to(io::stdout().lock(), value)
}

fn fail(err: &DensityError) -> ExitCode {
    tracing::debug!(error = %err, "density scoring failed");
    if let Err(e) = emit(&ErrorReport::from(err)) {
        eprintln!("error: {}", e);
    }
    ExitCode::from(1)
}

fn main() -> ExitCode {
    let _args = Args::parse();
    logging::init();

    // The model must be available before any input is consumed.
    let tagger = match ModelLocator::from_env().load() {
        Ok(tagger) => tagger,
        Err(err) => return fail(&err),
    };

    let result = match analyze_reader(&tagger, io::stdin().lock()) {
        Ok(result) => result,
        Err(err) => return fail(&err),
    };

    match emit(&result) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
