//! dukasdec entry point

use anyhow::Result;
use clap::Parser;
use dukas_config::DecoderConfig;
use dukas_decoder::decode_files;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "dukasdec", author, version, about = "Decode Dukascopy tick files to tab-separated text")]
struct Args {
    /// Tick files to decode, in order
    #[arg(value_name = "TICK_FILE", required = true)]
    files: Vec<PathBuf>,

    /// Emit every tick instead of only quote changes
    #[arg(short, long)]
    all_ticks: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries decoded ticks only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<usize> {
    let mut config = DecoderConfig::load(args.config.as_deref())?;
    if args.all_ticks {
        config.emit_all_ticks = true;
    }

    info!(files = args.files.len(), "Starting dukasdec");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let failures = decode_files(&args.files, &config, &mut out);
    out.flush()?;

    Ok(failures)
}
