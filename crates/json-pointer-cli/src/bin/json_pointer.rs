//! `json-pointer`: read or deep-set a JSON Pointer (RFC 6901) in a document.
//!
//! Usage:
//!   json-pointer get '<pointer>' [--generation N]
//!   json-pointer set '<pointer>' '<value>'
//!
//! The document is read from stdin unless `--file` is given.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use json_pointer_cli::{lookup_pointer, parse_value_arg, set_pointer, OutputStyle};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "json-pointer")]
#[command(about = "Read or deep-set values in a JSON document by JSON Pointer.", long_about = None)]
#[command(version)]
struct Cli {
    /// Read the document from a file instead of stdin.
    #[arg(long, short, global = true)]
    file: Option<PathBuf>,

    /// Print single-line JSON.
    #[arg(long, global = true, env = "JSON_POINTER_COMPACT")]
    compact: bool,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value at a pointer.
    Get {
        pointer: String,

        /// Print an ancestor instead: 1 for the parent container, and so on.
        #[arg(long, short, default_value_t = 0)]
        generation: usize,
    },
    /// Write a value at a pointer, creating missing objects and arrays.
    Set {
        pointer: String,

        /// JSON text; anything that does not parse is taken as a string.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_document(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let style = if cli.compact {
        OutputStyle::Compact
    } else {
        OutputStyle::Pretty
    };
    let doc = read_document(cli.file.as_ref())?;
    debug!(bytes = doc.len(), "document read");

    let output = match &cli.command {
        Command::Get {
            pointer,
            generation,
        } => lookup_pointer(doc.trim(), pointer, *generation, style)?,
        Command::Set { pointer, value } => {
            set_pointer(&doc, pointer, parse_value_arg(value), style)?
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
