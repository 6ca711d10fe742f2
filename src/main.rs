//! `sniffz` - decompress anything.
//!
//! Writes the decoded content of each input to standard output, in order.
//! Gzip, zstd and bzip2 input is detected from its first bytes and
//! decompressed; anything else is copied through unchanged.
//!
//! ```bash
//! sniffz access.log.gz access.log.1.zst access.log.2 | grep ' 500 '
//! curl -s https://example.com/dump | sniffz > dump.sql
//! sniffz --detect backups/*
//! ```
//!
//! Logging goes to standard error and follows `RUST_LOG` when set.

mod error;

use crate::error::{ErrorKind, Result};
use clap::{ArgAction, Parser};
use exn::ResultExt;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const STDIN: &str = "-";

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Print the detected format of each input instead of decoding it
    #[arg(short, long)]
    detect: bool,
    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Inputs to decode; reads standard input when omitted or `-`
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("sniffz: {err:?}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<()> {
    let files = match args.files.as_slice() {
        [] => vec![PathBuf::from(STDIN)],
        files => files.to_vec(),
    };
    let mut output = BufWriter::new(io::stdout().lock());
    for path in &files {
        let reader = sniffz_decode::reader(open(path)?).or_raise(|| ErrorKind::Decode(path.clone()))?;
        if args.detect {
            writeln!(output, "{}: {}", path.display(), reader.format()).or_raise(|| ErrorKind::Write)?;
            continue;
        }
        let size = reader.copy_into(&mut output).or_raise(|| ErrorKind::Decode(path.clone()))?;
        tracing::debug!(path = %path.display(), size, "decoded");
    }
    output.flush().or_raise(|| ErrorKind::Write)
}

fn open(path: &Path) -> Result<Box<dyn Read>> {
    if path.as_os_str() == STDIN {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).or_raise(|| ErrorKind::Open(path.to_path_buf()))?;
    Ok(Box::new(file))
}
