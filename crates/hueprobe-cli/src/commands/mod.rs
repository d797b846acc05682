pub mod config;
pub mod decode;
pub mod interactive;
pub mod sample;

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use hueprobe_core::config::{HueprobeConfig, ResizeFilter};
use tracing::debug;

#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterArg> for ResizeFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Nearest => ResizeFilter::Nearest,
            FilterArg::Triangle => ResizeFilter::Triangle,
            FilterArg::CatmullRom => ResizeFilter::CatmullRom,
            FilterArg::Gaussian => ResizeFilter::Gaussian,
            FilterArg::Lanczos3 => ResizeFilter::Lanczos3,
        }
    }
}

/// Load a TOML config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<HueprobeConfig> {
    let Some(path) = path else {
        return Ok(HueprobeConfig::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: HueprobeConfig = toml::from_str(&contents).context("Invalid hueprobe config")?;
    debug!(path = %path.display(), "Loaded config");
    Ok(config)
}
