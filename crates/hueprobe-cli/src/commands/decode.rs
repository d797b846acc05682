use anyhow::Result;
use clap::Args;
use hueprobe_core::pixel::{EncodedPayload, ReducedPixelPayload};
use hueprobe_core::sampler::sample_payload;

#[derive(Args)]
pub struct DecodeArgs {
    /// Base64 payload holding the pixel's raw RGBA bytes
    pub payload: String,
}

pub fn run(args: &DecodeArgs) -> Result<()> {
    let reduced = ReducedPixelPayload {
        width: 1,
        height: 1,
        payload: Some(EncodedPayload::Base64(args.payload.clone())),
    };
    let color = sample_payload(&reduced)?;
    println!("{color}");
    Ok(())
}
