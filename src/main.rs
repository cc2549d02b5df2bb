use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use charpool_reader::Character;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Dump an XCOM 2 character pool file as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Character pool file to read
    #[arg(default_value = "test.bin")]
    input: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let pool = match charpool_reader::decode_file(&args.input) {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("ERROR: Failed to read character pool {}", args.input.display());
            eprintln!("  {}", e);
            process::exit(1);
        }
    };

    if let Some(count) = pool.declared_count()
        && count as usize != pool.len()
    {
        eprintln!(
            "WARNING: header declares {} characters, decoded {}",
            count,
            pool.len()
        );
    }

    if let Err(e) = write_json(pool.characters(), args.output.as_ref(), args.pretty) {
        eprintln!("ERROR: Failed to write output");
        eprintln!("  {}", e);
        process::exit(1);
    }
}

fn write_json(characters: &[Character], output: Option<&PathBuf>, pretty: bool) -> io::Result<()> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, characters)?;
    } else {
        serde_json::to_writer(&mut writer, characters)?;
    }
    writer.flush()
}
