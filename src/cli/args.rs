use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logoprep", version, about = "logoprep CLI")]
pub struct CliArgs {
    /// Source image file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output PNG filename
    #[arg(short, long)]
    pub output: PathBuf,

    /// Square canvas edge in pixels; the image is downscaled to fit, never
    /// upscaled
    #[arg(long, default_value_t = 120)]
    pub size: u32,

    /// Near-black cutoff: pixels with all three color channels below this
    /// value become fully transparent
    #[arg(long, default_value_t = 30)]
    pub threshold: u8,

    /// Write a JSON metadata sidecar next to the output PNG
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
