use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use spekit_core::io::spe::SpeReader;

#[derive(Args)]
pub struct InfoArgs {
    /// Input SPE file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let reader = SpeReader::open(&args.file)?;
    let info = reader.source_info(&args.file);

    println!("File:         {}", info.filename.display());
    println!("Frames:       {}", info.total_frames);
    println!("Dimensions:   {}x{}", info.width, info.height);
    println!("Pixel type:   {}", info.pixel_type);
    println!("Exposure:     {} s", info.exposure_sec);
    println!("Detector T:   {:.1} °C", info.detector_temperature);
    println!("Header ver.:  {:.1}", info.header_version);

    if let Some(ref date) = info.date {
        println!("Date:         {}", date);
    }

    let frame_bytes = reader.frame_bytes();
    let total_mb = (frame_bytes * info.total_frames) as f64 / (1024.0 * 1024.0);
    println!("Data size:    {:.1} MB", total_mb);

    Ok(())
}
