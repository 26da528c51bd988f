use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use scanner::{errors::errors::Diagnostics, format_error, lexer::lexer::Scanner};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the scanner binary.
#[derive(Parser, Debug)]
#[command(name = "scanner", version, about = "Tokenize a source file and print its tokens")]
struct Args {
    /// Source file to scan. Reads standard input when omitted or `-`.
    file: Option<PathBuf>,

    /// Do not print tokens, only diagnostics.
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// Matches the conventional EX_DATAERR exit status.
const EXIT_LEXICAL_ERROR: i32 = 65;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let (source, file_name) = read_source(args.file.as_ref())?;

    let start = Instant::now();
    let mut diagnostics = Diagnostics::new();
    let tokens = Scanner::new(&source, &mut diagnostics).scan_tokens();

    info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    if !args.quiet {
        for token in &tokens {
            println!("{}", token.debug());
        }
    }

    if diagnostics.had_error() {
        for error in diagnostics.errors() {
            eprint!("{}", format_error(error, &source, &file_name));
        }
        process::exit(EXIT_LEXICAL_ERROR);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(file: Option<&PathBuf>) -> Result<(String, String)> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            let source = read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((source, path.display().to_string()))
        }
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read standard input")?;
            Ok((source, String::from("<stdin>")))
        }
    }
}
