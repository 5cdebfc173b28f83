// ABOUTME: CLI binary for the Markdown hierarchy fixer.
// ABOUTME: Fixes each given file in order, skipping missing paths and stopping on other I/O errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use notes_hierarchy::{fix_file, logging, FixError};

/// Indent content that follows list items so it nests under them.
#[derive(Parser, Debug)]
#[command(name = "fix-hierarchy", version)]
#[command(about = "Re-indent Markdown content under list items, rewriting files in place")]
struct Args {
    /// Markdown files to fix
    #[arg()]
    paths: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    if args.paths.is_empty() {
        eprintln!("usage: fix-hierarchy <FILE>...");
        return ExitCode::from(1);
    }

    for path in &args.paths {
        match fix_file(path) {
            Ok(_) => println!("completed: {}", path.display()),
            Err(FixError::NotFound(missing)) => {
                eprintln!("error: file not found: {}", missing.display());
            }
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::from(1);
            }
        }
    }

    ExitCode::SUCCESS
}
