mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hueprobe", about = "Detect the dominant color of a photo")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture an image file and report its color
    Sample(commands::sample::SampleArgs),
    /// Decode a base64 single-pixel payload into a color
    Decode(commands::decode::DecodeArgs),
    /// Capture, inspect and retake photos from a prompt
    Interactive(commands::interactive::InteractiveArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Sample(args) => commands::sample::run(args),
        Commands::Decode(args) => commands::decode::run(args),
        Commands::Interactive(args) => commands::interactive::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
