use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use hueprobe_core::provider::{CaptureOptions, FileCapture, ImageResizer};
use hueprobe_core::sampler::ColorSampler;
use hueprobe_core::session::CaptureSession;
use indicatif::{ProgressBar, ProgressStyle};

use super::{load_config, FilterArg};
use crate::summary::{print_result, print_settings};

#[derive(Args)]
pub struct SampleArgs {
    /// Image file to capture
    pub file: PathBuf,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Resampling filter used to reduce the image to one pixel
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// Capture quality (0.0-1.0); below 1.0 the capture is re-encoded as JPEG
    #[arg(long)]
    pub quality: Option<f32>,

    /// Print only the color string
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: &SampleArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(filter) = args.filter {
        config.sampler.filter = filter.into();
    }
    if let Some(quality) = args.quality {
        config.capture.quality = quality;
    }

    let provider = FileCapture::new(&args.file);
    let sampler = ColorSampler::new(ImageResizer::new(config.sampler.filter));
    let mut session = CaptureSession::with_config(&config.session);
    let options = CaptureOptions::with_quality(config.capture.quality);

    if args.quiet {
        let color = pollster::block_on(session.capture_from(&provider, options, &sampler))?;
        match color {
            Some(color) => println!("{color}"),
            None => println!("none"),
        }
        return Ok(());
    }

    print_settings(&config);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
    pb.set_message(format!("Sampling {}", args.file.display()));
    pb.enable_steady_tick(Duration::from_millis(80));

    let outcome = pollster::block_on(session.capture_from(&provider, options, &sampler));
    pb.finish_and_clear();

    let color = outcome?;
    print_result(color, session.failure());
    println!();

    Ok(())
}
