use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use dcmgray::cli::Args;
use dcmgray::{dicom, image};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args = Args::parse();

    if args.files.is_empty() {
        let _ = Args::command().print_help();
        println!();
        return;
    }

    if args.output.is_some() && args.files.len() > 1 {
        eprintln!("Error: --output is only valid with a single input file");
        std::process::exit(2);
    }

    let multiple_files = args.files.len() > 1;
    let mut any_failed = false;

    for (idx, file_path) in args.files.iter().enumerate() {
        if multiple_files {
            println!("{}", file_path.display());
        }

        if let Err(e) = process_file(file_path, &args) {
            println!("Error: {e}");
            any_failed = true;
        }

        if multiple_files && idx < args.files.len() - 1 {
            println!();
        }
    }

    if any_failed {
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Convert a single DICOM file
fn process_file(file_path: &Path, args: &Args) -> Result<()> {
    // Stage 1: read the raw buffer
    let raw = std::fs::read(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

    // Stage 2: parse the dataset (separate from rendering so the summary can
    // be printed even when downstream stages are skipped)
    let dataset = dicom::parse_dataset(&raw)?;

    if args.verbose {
        println!("{dataset}");
    }

    // Stage 3: windowing, inversion, PNG encoding
    let normalized = image::render_dataset(&dataset)?;

    // Stage 4: deliver
    if args.base64 {
        println!("{}", normalized.png_base64);
        return Ok(());
    }

    let output = match &args.output {
        Some(path) => path.clone(),
        None => default_output_path(file_path)?,
    };
    normalized
        .image
        .save(&output)
        .with_context(|| format!("Failed to write PNG: {}", output.display()))?;

    if args.verbose {
        println!("wrote {}", output.display());
    }

    Ok(())
}

/// Replace the input extension with `.png`, refusing to overwrite the input
fn default_output_path(file_path: &Path) -> Result<PathBuf> {
    let output = file_path.with_extension("png");
    if output == file_path {
        bail!(
            "refusing to overwrite input file {}; use --output",
            file_path.display()
        );
    }
    Ok(output)
}
