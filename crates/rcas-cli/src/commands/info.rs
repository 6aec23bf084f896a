use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rcas_core::io::image_io::image_info;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = image_info(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    println!("File:        {}", info.filename.display());
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!("Bit depth:   {}", info.bit_depth);
    println!("Color type:  {}", info.color_type);
    println!(
        "Alpha:       {}",
        if info.color_type.has_alpha() { "yes" } else { "no" }
    );

    let pixels = info.width as f64 * info.height as f64;
    println!("Pixels:      {:.2} MP", pixels / 1_000_000.0);

    Ok(())
}
