use std::path::PathBuf;

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::MultiProgress;
use spekit_core::config::AppConfig;

use super::extract::extract_tree;
use super::snr::measure_directory;
use crate::summary::print_batch_summary;

pub fn run(config: &AppConfig, progress: &MultiProgress) -> Result<()> {
    println!(
        "{}",
        style(format!(
            "Processing .{} files and saving frames in .{} format...",
            config.extraction.recording_extension, config.extraction.output_extension
        ))
        .cyan()
        .bold()
    );
    let input = prompt_existing_dir(&format!(
        "Please enter the path with your files in the .{} format",
        config.extraction.recording_extension
    ))?;
    let output = prompt_existing_dir(&format!(
        "Please select the path where the frames in .{} format are saved",
        config.extraction.output_extension
    ))?;
    let summary = extract_tree(&input, &output, config, progress)?;
    print_batch_summary(&summary);

    println!(
        "{}",
        style("Calculating Signal-to-Noise Ratio (SNR)...").cyan().bold()
    );
    loop {
        let dir = prompt_existing_dir(&format!(
            "Please provide the path with the frames in .{} format for SNR calculation",
            config.snr.image_extension
        ))?;
        measure_directory(&dir, config, true)?;

        let again = Confirm::new()
            .with_prompt("Do you want to calculate SNR for another directory?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// Prompt until the answer names an existing directory.
fn prompt_existing_dir(prompt: &str) -> Result<PathBuf> {
    loop {
        let answer: String = Input::new().with_prompt(prompt).interact_text()?;
        let path = PathBuf::from(answer.trim());
        if path.is_dir() {
            return Ok(path);
        }
        println!(
            "{}",
            style("The specified path does not exist. Please try again.").yellow()
        );
    }
}
