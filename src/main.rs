//! Résumé Timeline - Main Entry Point
//!
//! Loads a résumé data file, computes its layout and prints it.
//! The actual implementation is in the `resume_timeline` library.

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use resume_timeline::formatting::{format_details, format_layout};
use resume_timeline::{LayoutConfig, Storage, layout_resume};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Layout geometry as JSON
    Json,
    /// Readable layout report followed by the details section
    Text,
}

/// Résumé Timeline - lay out a résumé as a vertical timeline with skill bars
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the résumé data file (data.json)
    file: PathBuf,

    /// Layout configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels, overrides the config file
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height in pixels, overrides the config file
    #[arg(long)]
    height: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    }
    .with_canvas(args.width, args.height);

    let data = Storage::new(&args.file).load()?;
    let layout = layout_resume(&data, &config)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&layout)?),
        OutputFormat::Text => {
            print!("{}", format_layout(&layout));
            println!();
            print!("{}", format_details(&data));
        }
    }
    Ok(())
}
