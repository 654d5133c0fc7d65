//! Mirfak control ROM generator CLI.
//!
//! Invoked by the RTL build with the destination of the ROM image. It performs:
//! 1. **Generation:** Builds and validates the decode table.
//! 2. **Output:** Writes the artifact, reads it back, and renames it into place.
//!
//! Any failure exits with status 1 and leaves a previous artifact in place.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mirfak_ucontrol::{GeneratorConfig, generate};

#[derive(Parser, Debug)]
#[command(
    name = "ucontrolgen",
    version,
    about = "Generate the Mirfak decoder control ROM",
    long_about = "Writes the 128-entry control ROM image read by the decoder's memory initializer.\n\nExample:\n  ucontrolgen build/ucontrol.mem"
)]
struct Cli {
    /// Destination of the ROM image.
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    println!("[MIRFAK] Generating {}", cli.output.display());
    if let Err(e) = generate(&cli.output, &GeneratorConfig::default()) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
    println!("[MIRFAK] Generation DONE");
}
