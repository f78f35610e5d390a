use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use nesium_fixture::{DEFAULT_OUTPUT_PATH, generate_to};

/// iNES fixture generator
#[derive(Parser, Debug)]
#[command(name = "nesium-fixture")]
#[command(about = "Writes the minimal NROM test cartridge image", long_about = None)]
struct Args {
    /// Destination file; its directory must already exist
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    generate_to(&args.output)?;
    Ok(())
}
